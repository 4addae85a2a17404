/*!
 * Ready Queue Tests
 * FIFO ordering and capacity behavior, including a property check
 */

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rr_sim::{ReadyQueue, SchedulerError};

#[test]
fn test_serves_in_arrival_order() {
    let mut queue = ReadyQueue::with_capacity(5);
    for id in [4, 0, 3, 1, 2] {
        queue.enqueue(id).unwrap();
    }

    let mut served = Vec::new();
    while !queue.is_empty() {
        served.push(queue.dequeue().unwrap());
    }
    assert_eq!(served, vec![4, 0, 3, 1, 2]);
}

#[test]
fn test_overflow_is_rejected_not_overwritten() {
    let mut queue = ReadyQueue::with_capacity(1);
    queue.enqueue(0).unwrap();

    assert_eq!(queue.enqueue(1), Err(SchedulerError::QueueFull(1)));
    assert_eq!(queue.dequeue().unwrap(), 0);
    assert_eq!(queue.dequeue(), Err(SchedulerError::QueueEmpty));
}

#[test]
fn test_interleaved_requeue_keeps_fifo() {
    let mut queue = ReadyQueue::with_capacity(3);
    queue.enqueue(0).unwrap();
    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();

    // Two full rotations
    for _ in 0..2 {
        for expected in 0..3 {
            let id = queue.dequeue().unwrap();
            assert_eq!(id, expected);
            queue.enqueue(id).unwrap();
        }
    }
}

proptest! {
    /// Whatever unique ids go in, they come out in the same order
    #[test]
    fn prop_fifo_ordering(ids in proptest::collection::hash_set(0u32..1000, 0..64)) {
        let ids: Vec<u32> = ids.into_iter().collect();
        let mut queue = ReadyQueue::with_capacity(ids.len());

        for id in &ids {
            queue.enqueue(*id).unwrap();
        }
        prop_assert!(queue.is_full() || ids.is_empty());

        let mut out = Vec::with_capacity(ids.len());
        while !queue.is_empty() {
            out.push(queue.dequeue().unwrap());
        }
        prop_assert_eq!(out, ids);
    }

    /// A queue of capacity c accepts exactly c ids
    #[test]
    fn prop_capacity_bound(capacity in 0usize..32, extra in 1u32..8) {
        let mut queue = ReadyQueue::with_capacity(capacity);

        for id in 0..capacity as u32 {
            prop_assert!(queue.enqueue(id).is_ok());
        }
        for id in 0..extra {
            prop_assert_eq!(
                queue.enqueue(capacity as u32 + id),
                Err(SchedulerError::QueueFull(capacity as u32 + id))
            );
        }
        prop_assert_eq!(queue.len(), capacity);
    }
}
