/*!
 * Metrics Recorder
 * Per-worker response and turnaround latency, aggregated after reaping
 */

use crate::core::{MetricsError, WorkerId};
use crate::sched::SimStats;
use crate::worker::WorkerStatus;
use log::debug;
use std::time::Instant;

mod report;

pub use report::{SimReport, WorkerMetrics};

/// Copy of one worker's timing fields, decoupled from its handle
#[derive(Debug, Clone)]
pub struct TimingSnapshot {
    pub id: WorkerId,
    pub created_at: Instant,
    pub first_run_at: Option<Instant>,
    pub completed_at: Option<Instant>,
    pub state: WorkerStatus,
}

/// Records the dispatch sequence and derives aggregate timing metrics
///
/// Aggregation refuses to run while any worker is non-terminal: a worker
/// that never completed must never be averaged in with a garbage time.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    dispatch_log: Vec<WorkerId>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one dequeued id to the dispatch sequence
    pub fn record_dispatch(&mut self, id: WorkerId) {
        self.dispatch_log.push(id);
    }

    pub fn dispatch_log(&self) -> &[WorkerId] {
        &self.dispatch_log
    }

    /// Compute per-worker rows and arithmetic means
    ///
    /// `response = first_run_at - created_at`,
    /// `turnaround = completed_at - created_at`. An empty population yields
    /// the "no workers" report with `None` means rather than dividing by zero.
    pub fn aggregate(
        &self,
        timings: &[TimingSnapshot],
        stats: SimStats,
    ) -> Result<SimReport, MetricsError> {
        let pending: Vec<WorkerId> = timings
            .iter()
            .filter(|t| !t.state.is_terminal())
            .map(|t| t.id)
            .collect();
        if !pending.is_empty() {
            return Err(MetricsError::IncompleteRun { pending });
        }

        let mut workers = Vec::with_capacity(timings.len());
        for t in timings {
            // A terminal worker was dispatched at least once, so both
            // timestamps are present
            debug_assert!(t.first_run_at.is_some() && t.completed_at.is_some());
            let first_run = t.first_run_at.unwrap_or(t.created_at);
            let completed = t.completed_at.unwrap_or(first_run);

            let row = WorkerMetrics {
                id: t.id,
                response_micros: first_run.duration_since(t.created_at).as_micros() as u64,
                turnaround_micros: completed.duration_since(t.created_at).as_micros() as u64,
                dispatches: self.dispatch_log.iter().filter(|d| **d == t.id).count() as u64,
                outcome: t.state.clone(),
            };
            debug!(
                "worker {}: response {}us, turnaround {}us, {} dispatches",
                row.id, row.response_micros, row.turnaround_micros, row.dispatches
            );
            workers.push(row);
        }

        let count = workers.len() as u64;
        let (mean_response_micros, mean_turnaround_micros) = if count == 0 {
            (None, None)
        } else {
            (
                Some(workers.iter().map(|w| w.response_micros).sum::<u64>() / count),
                Some(workers.iter().map(|w| w.turnaround_micros).sum::<u64>() / count),
            )
        };

        Ok(SimReport {
            workers,
            mean_response_micros,
            mean_turnaround_micros,
            dispatch_log: self.dispatch_log.clone(),
            stats,
        })
    }
}
