//! Domain layer: pure scoring logic, no I/O.

pub mod entry;
pub mod rules;
pub mod scoresheet;
pub mod scoring;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_labels;
#[cfg(test)]
mod tests_props_totals;
#[cfg(test)]
mod tests_scoresheet;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use entry::{Entry, EntryField};
pub use rules::{generate_round_labels, round_count_for_peak, MAX_PEAK, MIN_PLAYERS};
pub use scoresheet::{RowView, Scoresheet};
pub use scoring::{compute_totals, leaders, parse_lenient};
