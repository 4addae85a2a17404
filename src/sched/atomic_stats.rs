/*!
 * Lock-Free Scheduler Statistics
 * Atomic counters updated from the dispatch loop without contention
 */

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Atomic counters for the scheduling loop
///
/// Cache-line aligned; all updates use relaxed ordering and snapshots need
/// no synchronization.
#[repr(C, align(64))]
#[derive(Debug)]
pub struct AtomicSimStats {
    dispatches: AtomicU64,
    requeues: AtomicU64,
    completions: AtomicU64,
    capacity_drops: AtomicU64,
    quantum: parking_lot::RwLock<Duration>,
}

impl AtomicSimStats {
    pub fn new(quantum: Duration) -> Self {
        Self {
            dispatches: AtomicU64::new(0),
            requeues: AtomicU64::new(0),
            completions: AtomicU64::new(0),
            capacity_drops: AtomicU64::new(0),
            quantum: parking_lot::RwLock::new(quantum),
        }
    }

    /// Increment dispatch count; called once per scheduling round
    #[inline(always)]
    pub fn inc_dispatches(&self) {
        self.dispatches.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment requeue count; called when a running worker re-enters the queue
    #[inline(always)]
    pub fn inc_requeues(&self) {
        self.requeues.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment completion count; called when a terminal status is first observed
    #[inline(always)]
    pub fn inc_completions(&self) {
        self.completions.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment capacity-drop count; the worker involved is lost from scheduling
    #[inline(always)]
    pub fn inc_capacity_drops(&self) {
        self.capacity_drops.fetch_add(1, Ordering::Relaxed);
    }

    /// Consistent-enough snapshot for reporting
    pub fn snapshot(&self) -> SimStats {
        SimStats {
            dispatches: self.dispatches.load(Ordering::Relaxed),
            requeues: self.requeues.load(Ordering::Relaxed),
            completions: self.completions.load(Ordering::Relaxed),
            capacity_drops: self.capacity_drops.load(Ordering::Relaxed),
            quantum_micros: self.quantum.read().as_micros() as u64,
        }
    }
}

/// Point-in-time view of the scheduler counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    pub dispatches: u64,
    pub requeues: u64,
    pub completions: u64,
    pub capacity_drops: u64,
    pub quantum_micros: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counters_accumulate() {
        let stats = AtomicSimStats::new(Duration::from_millis(10));

        stats.inc_dispatches();
        stats.inc_dispatches();
        stats.inc_requeues();
        stats.inc_completions();

        let snap = stats.snapshot();
        assert_eq!(snap.dispatches, 2);
        assert_eq!(snap.requeues, 1);
        assert_eq!(snap.completions, 1);
        assert_eq!(snap.capacity_drops, 0);
        assert_eq!(snap.quantum_micros, 10_000);
    }
}
