//! End-of-game evaluation.

pub mod runs;

pub use runs::{longest_runs, LongestRuns};
