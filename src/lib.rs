//! Priority-based task scheduling on an array-backed binary max-heap.
//!
//! The core of this crate is [`PriorityQueue`], a max-heap over [`Task`]
//! records supporting insert, extract-max, and in-place priority updates.
//! [`Scheduler`] drains the queue into an execution order, and the
//! [`sorting`] and [`benchmark`] modules provide the comparison sorts
//! (heapsort, mergesort, quicksort) and the empirical harness used to
//! cross-check the heap mechanics.

pub mod benchmark;
mod config;
pub mod logging;
mod models;
pub mod queue;
pub mod scheduler;
pub mod sorting;

pub use config::SchedulerConfig;
pub use models::Task;
pub use queue::{PriorityQueue, QueueError};
pub use scheduler::Scheduler;
pub use sorting::{heapsort, mergesort, quicksort};
