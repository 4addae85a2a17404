/*!
 * Worker Record
 * Per-worker bookkeeping: handle ownership, timestamps, terminal state
 */

use crate::core::WorkerId;
use crate::metrics::TimingSnapshot;
use crate::worker::{WorkerControl, WorkerStatus};
use log::{debug, warn};
use std::time::Instant;

/// One worker's scheduling record, keyed by its stable id
///
/// Owns the worker handle for the handle's whole lifetime. `first_run_at` is
/// set exactly once, on the first dispatch; the state transitions out of
/// `StillRunning` exactly once and terminal states are absorbing.
pub struct WorkerRecord<W: WorkerControl> {
    pub id: WorkerId,
    pub handle: W,
    pub created_at: Instant,
    pub first_run_at: Option<Instant>,
    pub completed_at: Option<Instant>,
    pub state: WorkerStatus,
}

impl<W: WorkerControl> WorkerRecord<W> {
    pub fn new(id: WorkerId, handle: W) -> Self {
        Self {
            id,
            handle,
            created_at: Instant::now(),
            first_run_at: None,
            completed_at: None,
            state: WorkerStatus::StillRunning,
        }
    }

    /// Record the first dispatch timestamp; later calls are ignored
    pub fn mark_first_run(&mut self, at: Instant) {
        if self.first_run_at.is_none() {
            self.first_run_at = Some(at);
            debug!("worker {} first dispatch", self.id);
        }
    }

    /// Transition into a terminal state; a second transition is ignored
    pub fn mark_terminal(&mut self, status: WorkerStatus, at: Instant) {
        if self.is_terminal() {
            warn!(
                "worker {} already terminal ({:?}), ignoring {:?}",
                self.id, self.state, status
            );
            return;
        }
        debug_assert!(status.is_terminal(), "mark_terminal with StillRunning");
        self.completed_at = Some(at);
        self.state = status;
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Copy of the timing fields for metrics aggregation
    pub fn timing(&self) -> TimingSnapshot {
        TimingSnapshot {
            id: self.id,
            created_at: self.created_at,
            first_run_at: self.first_run_at,
            completed_at: self.completed_at,
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::MockWorkerControl;
    use std::time::Duration;

    fn record() -> WorkerRecord<MockWorkerControl> {
        WorkerRecord::new(7, MockWorkerControl::new())
    }

    #[test]
    fn test_first_run_set_once() {
        let mut rec = record();
        let t1 = Instant::now();
        let t2 = t1 + Duration::from_millis(10);

        rec.mark_first_run(t1);
        rec.mark_first_run(t2);

        assert_eq!(rec.first_run_at, Some(t1));
    }

    #[test]
    fn test_terminal_is_absorbing() {
        let mut rec = record();
        let t = Instant::now();

        rec.mark_terminal(WorkerStatus::ExitedNormally(0), t);
        rec.mark_terminal(
            WorkerStatus::ExitedAbnormally("late".into()),
            t + Duration::from_millis(1),
        );

        assert_eq!(rec.state, WorkerStatus::ExitedNormally(0));
        assert_eq!(rec.completed_at, Some(t));
    }

    #[test]
    fn test_new_record_not_terminal() {
        let rec = record();
        assert!(!rec.is_terminal());
        assert!(rec.first_run_at.is_none());
        assert!(rec.completed_at.is_none());
    }
}
