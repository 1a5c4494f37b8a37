//! Derived read-only views over the task collection
//!
//! Provides the filtered/searched list and completion statistics.

mod filter;
mod stats;

pub use filter::{FILTER_ALL, TaskFilter, filter_tasks};
pub use stats::{StatsPanel, TaskStats};
