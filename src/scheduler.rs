//! Priority scheduler draining the max-heap queue into an execution order.
//!
//! Replaces direct queue access for driver code: tasks go in via
//! [`Scheduler::submit`], come out highest-priority-first via
//! [`Scheduler::run_next`] / [`Scheduler::run_to_completion`], and executed
//! ids are tracked for reporting.

use rustc_hash::FxHashSet;

use crate::config::SchedulerConfig;
use crate::models::Task;
use crate::queue::PriorityQueue;
use crate::{log_debug, log_decisions};

/// Single-threaded priority scheduler backed by a [`PriorityQueue`].
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: PriorityQueue,
    completed: FxHashSet<String>,
    config: SchedulerConfig,
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new(config: SchedulerConfig) -> Self {
        let mut queue = PriorityQueue::new();
        queue.set_verbosity(config.verbosity);
        Self {
            queue,
            completed: FxHashSet::default(),
            config,
        }
    }

    /// The underlying queue.
    pub fn queue(&self) -> &PriorityQueue {
        &self.queue
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Ids of tasks that have been executed.
    pub fn completed_ids(&self) -> &FxHashSet<String> {
        &self.completed
    }

    /// Queue a task for execution.
    pub fn submit(&mut self, task: Task) {
        log_decisions!(self.config.verbosity, "submit {}", task);
        self.queue.insert(task);
        log_debug!(
            self.config.verbosity,
            "queue after submit: {:?}",
            self.priorities()
        );
    }

    /// Change the priority of a queued task, found by id.
    ///
    /// Resolves the task's current heap index (sift swaps move tasks, so
    /// indices are not stable) and routes to the queue's increase or
    /// decrease operation. Returns false when no queued task has this id.
    pub fn reprioritize(&mut self, id: &str, new_priority: i32) -> bool {
        let Some(index) = self.queue.position_of(id) else {
            return false;
        };
        log_decisions!(
            self.config.verbosity,
            "reprioritize {:?} -> {}",
            id,
            new_priority
        );
        let result = if new_priority >= self.queue.as_slice()[index].priority {
            self.queue.increase_key(index, new_priority)
        } else {
            self.queue.decrease_key(index, new_priority)
        };
        debug_assert!(result.is_ok());
        result.is_ok()
    }

    /// Execute (extract) the highest-priority task, or `None` when idle.
    pub fn run_next(&mut self) -> Option<Task> {
        let task = self.queue.extract_max()?;
        log_decisions!(self.config.verbosity, "execute {}", task);
        log_debug!(
            self.config.verbosity,
            "queue after execute: {:?}",
            self.priorities()
        );
        self.completed.insert(task.id.clone());
        Some(task)
    }

    /// Drain the queue, returning tasks in non-increasing priority order.
    pub fn run_to_completion(&mut self) -> Vec<Task> {
        let mut order = Vec::with_capacity(self.queue.len());
        while let Some(task) = self.run_next() {
            order.push(task);
        }
        order
    }

    fn priorities(&self) -> Vec<i32> {
        self.queue.as_slice().iter().map(|t| t.priority).collect()
    }
}
