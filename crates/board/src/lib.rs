//! Task board core for Taskboard
//!
//! Holds the client-side task collection, keeps it consistent with the
//! remote store through a `TaskTransport`, and derives the filtered list
//! and statistics views from it.

pub mod confirm;
pub mod controller;
pub mod state;
pub mod views;

pub use confirm::{AlwaysConfirm, Confirm};
pub use controller::{DeleteOutcome, TaskController, failure_message};
pub use state::BoardState;
pub use views::{FILTER_ALL, StatsPanel, TaskFilter, TaskStats, filter_tasks};
