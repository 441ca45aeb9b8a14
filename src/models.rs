//! Core data types for the scheduling system.

use std::fmt;

use chrono::NaiveDate;

/// A schedulable unit of work.
///
/// The queue orders tasks by `priority` alone. `arrival_time` and `deadline`
/// are carried for reporting and never consulted by the ordering logic.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    /// Caller-supplied identifier. The queue does not require uniqueness.
    pub id: String,
    /// Scheduling priority. Higher values run first. While the task is
    /// queued this must only change through the queue's key operations.
    pub priority: i32,
    /// When the task arrived, in days since schedule start.
    pub arrival_time: f64,
    /// Optional due date.
    pub deadline: Option<NaiveDate>,
}

impl Task {
    /// Create a task with no arrival offset and no deadline.
    pub fn new(id: impl Into<String>, priority: i32) -> Self {
        Self {
            id: id.into(),
            priority,
            arrival_time: 0.0,
            deadline: None,
        }
    }

    /// Set the arrival offset in days.
    pub fn with_arrival_time(mut self, arrival_time: f64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Set the due date.
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task(id={:?}, priority={})", self.id, self.priority)
    }
}
