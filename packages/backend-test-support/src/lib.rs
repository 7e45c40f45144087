//! Test support utilities for the Triunfo backend.
//!
//! Shared by the backend's integration tests: logging bootstrap, problem
//! details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
