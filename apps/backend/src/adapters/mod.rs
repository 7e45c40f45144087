//! Directory adapters: an in-process store and a client for the managed
//! REST backend.

pub mod memory;
pub mod rest;

pub use memory::{MemoryGames, MemoryPlayers};
pub use rest::RestDirectory;
