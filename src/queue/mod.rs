/*!
 * Ready Queue
 * Bounded FIFO of worker ids awaiting a time quantum
 */

use crate::core::{SchedulerError, SimResult, WorkerId};
use std::collections::VecDeque;

/// Bounded FIFO queue of runnable worker ids
///
/// Owned exclusively by the scheduling thread, so no interior locking.
/// Capacity is fixed at construction and must be at least the worker count;
/// an enqueue on a full queue is rejected rather than overwriting.
#[derive(Debug)]
pub struct ReadyQueue {
    items: VecDeque<WorkerId>,
    capacity: usize,
}

impl ReadyQueue {
    /// Create a queue with fixed capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an id at the tail
    ///
    /// Fails with `QueueFull` when the queue is at capacity. The caller
    /// decides whether that is fatal; under correct sizing it cannot happen.
    pub fn enqueue(&mut self, id: WorkerId) -> SimResult<()> {
        if self.is_full() {
            return Err(SchedulerError::QueueFull(id));
        }
        // A worker is queued, running, or terminal - never two of these at once
        debug_assert!(
            !self.items.contains(&id),
            "worker {id} enqueued while already queued"
        );
        self.items.push_back(id);
        Ok(())
    }

    /// Remove and return the id at the head
    pub fn dequeue(&mut self) -> SimResult<WorkerId> {
        self.items.pop_front().ok_or(SchedulerError::QueueEmpty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fifo_order() {
        let mut queue = ReadyQueue::with_capacity(4);

        queue.enqueue(3).unwrap();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();

        assert_eq!(queue.dequeue().unwrap(), 3);
        assert_eq!(queue.dequeue().unwrap(), 1);
        assert_eq!(queue.dequeue().unwrap(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_enqueue_full_rejected() {
        let mut queue = ReadyQueue::with_capacity(2);

        queue.enqueue(0).unwrap();
        queue.enqueue(1).unwrap();
        assert!(queue.is_full());

        assert_eq!(queue.enqueue(2), Err(SchedulerError::QueueFull(2)));

        // The rejection is a no-op: contents are untouched
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue().unwrap(), 0);
    }

    #[test]
    fn test_dequeue_empty_fails() {
        let mut queue = ReadyQueue::with_capacity(2);
        assert_eq!(queue.dequeue(), Err(SchedulerError::QueueEmpty));
    }

    #[test]
    fn test_requeue_at_tail() {
        let mut queue = ReadyQueue::with_capacity(3);

        queue.enqueue(0).unwrap();
        queue.enqueue(1).unwrap();

        let id = queue.dequeue().unwrap();
        assert_eq!(id, 0);
        queue.enqueue(id).unwrap();

        // Re-entering lands behind every other ready worker
        assert_eq!(queue.dequeue().unwrap(), 1);
        assert_eq!(queue.dequeue().unwrap(), 0);
    }

    #[test]
    fn test_capacity_accessors() {
        let mut queue = ReadyQueue::with_capacity(8);
        assert_eq!(queue.capacity(), 8);
        assert_eq!(queue.len(), 0);
        assert!(!queue.is_full());

        queue.enqueue(7).unwrap();
        assert_eq!(queue.len(), 1);
    }
}
