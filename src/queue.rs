//! Array-backed binary max-heap priority queue over [`Task`]s.
//!
//! The backing store is a `Vec<Task>` holding a complete binary tree in the
//! standard index mapping: the parent of index `i` is at `(i - 1) / 2`, its
//! children at `2i + 1` and `2i + 2`. Invariant: every parent's priority is
//! >= each child's, so index 0 holds a maximum whenever the queue is
//! non-empty.
//!
//! Equal priorities are not ordered further: the queue is not stable, and
//! the relative order of equal-priority tasks may change across operations.

use thiserror::Error;

use crate::log_sift;
use crate::models::Task;

/// Errors from index-addressed queue operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("index {index} out of bounds for queue of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

/// Max-heap priority queue of [`Task`]s.
///
/// Sift operations relocate tasks by swapping, so an index obtained earlier
/// may no longer point at the same task; use [`PriorityQueue::position_of`]
/// to resolve a task's current index before a key operation.
#[derive(Clone, Debug, Default)]
pub struct PriorityQueue {
    heap: Vec<Task>,
    verbosity: u8,
}

impl PriorityQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            verbosity: 0,
        }
    }

    /// Create an empty queue with room for `capacity` tasks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            verbosity: 0,
        }
    }

    /// Set the logging verbosity (see [`crate::logging`]). At the SIFT
    /// level every swap made by the sift loops is logged.
    pub fn set_verbosity(&mut self, verbosity: u8) {
        self.verbosity = verbosity;
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The highest-priority task without removing it.
    pub fn peek(&self) -> Option<&Task> {
        self.heap.first()
    }

    /// Read-only view of the backing store in heap order.
    pub fn as_slice(&self) -> &[Task] {
        &self.heap
    }

    /// Current index of the first task with the given id, if queued.
    ///
    /// Linear scan; the heap is ordered by priority, not id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.heap.iter().position(|task| task.id == id)
    }

    /// Insert a task. O(log n).
    pub fn insert(&mut self, task: Task) {
        self.heap.push(task);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the highest-priority task, or `None` when empty.
    ///
    /// An empty queue is an expected terminal condition, not an error.
    /// O(log n).
    pub fn extract_max(&mut self) -> Option<Task> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(last);
        }
        let max = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(0);
        Some(max)
    }

    /// Raise the priority of the task at `index` and restore the heap.
    ///
    /// A `new_priority` below the current value is silently ignored; use
    /// [`PriorityQueue::decrease_key`] for the other direction. O(log n).
    pub fn increase_key(&mut self, index: usize, new_priority: i32) -> Result<(), QueueError> {
        self.check_index(index)?;
        if new_priority < self.heap[index].priority {
            return Ok(());
        }
        self.heap[index].priority = new_priority;
        self.sift_up(index);
        Ok(())
    }

    /// Lower the priority of the task at `index` and restore the heap.
    ///
    /// A `new_priority` above the current value is silently ignored; use
    /// [`PriorityQueue::increase_key`] for the other direction. O(log n).
    pub fn decrease_key(&mut self, index: usize, new_priority: i32) -> Result<(), QueueError> {
        self.check_index(index)?;
        if new_priority > self.heap[index].priority {
            return Ok(());
        }
        self.heap[index].priority = new_priority;
        self.sift_down(index);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), QueueError> {
        if index >= self.heap.len() {
            return Err(QueueError::IndexOutOfBounds {
                index,
                len: self.heap.len(),
            });
        }
        Ok(())
    }

    /// Move the task at `i` toward the root while it outranks its parent.
    fn sift_up(&mut self, mut i: usize) {
        while i != 0 && self.heap[parent(i)].priority < self.heap[i].priority {
            log_sift!(
                self.verbosity,
                "sift up: {} ({}) <-> {} ({})",
                i,
                self.heap[i].priority,
                parent(i),
                self.heap[parent(i)].priority,
            );
            self.heap.swap(i, parent(i));
            i = parent(i);
        }
    }

    /// Move the task at `i` toward the leaves while a child outranks it.
    ///
    /// Iterative: terminates when the task outranks both children or has
    /// none, after at most tree-height swaps.
    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let mut largest = i;
            let l = left(i);
            let r = right(i);
            if l < len && self.heap[l].priority > self.heap[largest].priority {
                largest = l;
            }
            if r < len && self.heap[r].priority > self.heap[largest].priority {
                largest = r;
            }
            if largest == i {
                return;
            }
            log_sift!(
                self.verbosity,
                "sift down: {} ({}) <-> {} ({})",
                i,
                self.heap[i].priority,
                largest,
                self.heap[largest].priority,
            );
            self.heap.swap(i, largest);
            i = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::heapsort;

    fn assert_heap_invariant(queue: &PriorityQueue) {
        let heap = queue.as_slice();
        for i in 0..heap.len() {
            for child in [left(i), right(i)] {
                if child < heap.len() {
                    assert!(
                        heap[i].priority >= heap[child].priority,
                        "heap property violated at parent {} / child {}: {} < {}",
                        i,
                        child,
                        heap[i].priority,
                        heap[child].priority,
                    );
                }
            }
        }
    }

    fn queue_from(priorities: &[i32]) -> PriorityQueue {
        let mut queue = PriorityQueue::new();
        for (n, &priority) in priorities.iter().enumerate() {
            queue.insert(Task::new((n + 1).to_string(), priority));
            assert_heap_invariant(&queue);
        }
        queue
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = PriorityQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.extract_max(), None);
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_single_task() {
        let mut queue = PriorityQueue::new();
        queue.insert(Task::new("only", 42));
        assert!(!queue.is_empty());
        let task = queue.extract_max().unwrap();
        assert_eq!(task.id, "only");
        assert_eq!(task.priority, 42);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_demo_execution_order() {
        // The demo driver scenario: priorities [3, 10, 5, 8] drain as
        // 10, 8, 5, 3 with ids "2", "4", "3", "1".
        let mut queue = queue_from(&[3, 10, 5, 8]);
        let mut order = Vec::new();
        while let Some(task) = queue.extract_max() {
            assert_heap_invariant(&queue);
            order.push((task.id, task.priority));
        }
        assert_eq!(
            order,
            vec![
                ("2".to_string(), 10),
                ("4".to_string(), 8),
                ("3".to_string(), 5),
                ("1".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_size_conservation() {
        let mut queue = PriorityQueue::new();
        for (n, priority) in [5, 1, 9, 9, 0].into_iter().enumerate() {
            queue.insert(Task::new(n.to_string(), priority));
            assert_eq!(queue.len(), n + 1);
        }
        for remaining in (0..5).rev() {
            assert!(queue.extract_max().is_some());
            assert_eq!(queue.len(), remaining);
        }
        assert_eq!(queue.extract_max(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_peek_is_max() {
        let queue = queue_from(&[4, 17, 2, 17, 8]);
        assert_eq!(queue.peek().unwrap().priority, 17);
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn test_extraction_order_non_increasing() {
        let mut queue = queue_from(&[12, -3, 7, 7, 0, 99, 4, -3, 55, 12]);
        let mut previous = i32::MAX;
        while let Some(task) = queue.extract_max() {
            assert_heap_invariant(&queue);
            assert!(task.priority <= previous);
            previous = task.priority;
        }
    }

    #[test]
    fn test_round_trip_matches_heapsort() {
        let priorities = [31, -8, 0, 12, 12, 99, 7, -8, 45, 3, 3, 61];
        let mut queue = queue_from(&priorities);

        let mut expected = priorities.to_vec();
        heapsort(&mut expected);
        expected.reverse();

        let mut drained = Vec::new();
        while let Some(task) = queue.extract_max() {
            drained.push(task.priority);
        }
        assert_eq!(drained, expected);
    }

    #[test]
    fn test_increase_key_sifts_up() {
        let mut queue = queue_from(&[3, 10, 5, 8]);
        let index = queue.position_of("1").unwrap();
        queue.increase_key(index, 20).unwrap();
        assert_heap_invariant(&queue);
        assert_eq!(queue.peek().unwrap().id, "1");
        assert_eq!(queue.peek().unwrap().priority, 20);
    }

    #[test]
    fn test_increase_key_equal_priority_is_allowed() {
        let mut queue = queue_from(&[3, 10, 5, 8]);
        let index = queue.position_of("3").unwrap();
        queue.increase_key(index, 5).unwrap();
        assert_heap_invariant(&queue);
        assert_eq!(queue.as_slice()[queue.position_of("3").unwrap()].priority, 5);
    }

    #[test]
    fn test_increase_key_wrong_direction_is_noop() {
        let mut queue = queue_from(&[3, 10, 5, 8]);
        let before = queue.as_slice().to_vec();
        let index = queue.position_of("2").unwrap();
        queue.increase_key(index, 1).unwrap();
        assert_eq!(queue.as_slice(), &before[..]);
    }

    #[test]
    fn test_decrease_key_sifts_down() {
        let mut queue = queue_from(&[3, 10, 5, 8]);
        let index = queue.position_of("2").unwrap();
        queue.decrease_key(index, 1).unwrap();
        assert_heap_invariant(&queue);
        assert_eq!(queue.peek().unwrap().id, "4");
        let moved = queue.position_of("2").unwrap();
        assert_eq!(queue.as_slice()[moved].priority, 1);
    }

    #[test]
    fn test_decrease_key_wrong_direction_is_noop() {
        let mut queue = queue_from(&[3, 10, 5, 8]);
        let before = queue.as_slice().to_vec();
        let index = queue.position_of("1").unwrap();
        queue.decrease_key(index, 99).unwrap();
        assert_eq!(queue.as_slice(), &before[..]);
    }

    #[test]
    fn test_key_operations_out_of_bounds() {
        let mut queue = queue_from(&[3, 10]);
        assert_eq!(
            queue.increase_key(2, 50),
            Err(QueueError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(
            queue.decrease_key(7, 0),
            Err(QueueError::IndexOutOfBounds { index: 7, len: 2 })
        );
        let mut empty = PriorityQueue::new();
        assert_eq!(
            empty.increase_key(0, 1),
            Err(QueueError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_equal_priorities_all_extracted() {
        // Ties are unstable by design; only the multiset is guaranteed.
        let mut queue = queue_from(&[7, 7, 7, 7]);
        let mut ids: Vec<String> = Vec::new();
        while let Some(task) = queue.extract_max() {
            assert_eq!(task.priority, 7);
            ids.push(task.id);
        }
        ids.sort();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_position_of() {
        let queue = queue_from(&[3, 10, 5]);
        for id in ["1", "2", "3"] {
            let index = queue.position_of(id).unwrap();
            assert_eq!(queue.as_slice()[index].id, id);
        }
        assert_eq!(queue.position_of("missing"), None);
    }

    #[test]
    fn test_sift_logging_compiles() {
        // Verify the sift paths log without panicking at full verbosity
        let mut queue = PriorityQueue::new();
        queue.set_verbosity(crate::logging::VERBOSITY_SIFT);
        for (n, priority) in [3, 10, 5, 8].into_iter().enumerate() {
            queue.insert(Task::new((n + 1).to_string(), priority));
        }
        queue.decrease_key(0, 1).unwrap();
        while queue.extract_max().is_some() {}
        assert!(queue.is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_accepted() {
        let mut queue = PriorityQueue::new();
        queue.insert(Task::new("dup", 1));
        queue.insert(Task::new("dup", 2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.extract_max().unwrap().priority, 2);
        assert_eq!(queue.extract_max().unwrap().priority, 1);
    }
}
