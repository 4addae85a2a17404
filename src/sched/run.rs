/*!
 * Scheduling Loop
 * Priming, draining, reaping, and reporting phases
 */

use super::{Phase, SchedulerCore};
use crate::core::{SchedulerError, SimResult};
use crate::metrics::SimReport;
use crate::worker::{WorkerControl, WorkerStatus};
use log::{debug, error, info, warn};
use std::thread;
use std::time::Instant;

impl<W: WorkerControl> SchedulerCore<W> {
    /// Run the simulation to completion and return the timing report
    pub fn run(&mut self) -> SimResult<SimReport> {
        self.prime();
        self.drain()?;
        self.reap()?;
        self.report()
    }

    /// Fill the ready queue in creation order
    ///
    /// A capacity rejection is logged and absorbed: that worker is
    /// permanently lost from scheduling, preserving the original drop
    /// behavior rather than silently growing the queue.
    fn prime(&mut self) {
        self.set_phase(Phase::Priming);
        for id in self.ids.clone() {
            match self.queue.enqueue(id) {
                Ok(()) => debug!("worker {} queued", id),
                Err(e) => {
                    error!("worker {} lost from scheduling: {}", id, e);
                    self.stats.inc_capacity_drops();
                }
            }
        }
    }

    /// Serve the queue one quantum at a time until it empties
    fn drain(&mut self) -> SimResult<()> {
        self.set_phase(Phase::Draining);
        while !self.queue.is_empty() {
            self.dispatch_one()?;
        }
        Ok(())
    }

    /// One scheduling round: dequeue, resume, sleep, suspend-or-complete
    fn dispatch_one(&mut self) -> SimResult<()> {
        let id = self.queue.dequeue()?;
        let mut record = self
            .records
            .get_mut(&id)
            .ok_or(SchedulerError::InvalidHandle(id))?;

        record.mark_first_run(Instant::now());
        self.recorder.record_dispatch(id);
        self.stats.inc_dispatches();

        debug!("dispatching worker {} for {:?}", id, self.config.quantum);
        record.handle.resume();
        thread::sleep(self.config.quantum);

        match record.handle.poll_status()? {
            WorkerStatus::StillRunning => {
                // Still owns the CPU until the suspend lands; the slack is
                // bounded by the payload's polling granularity
                record.handle.suspend();
                self.stats.inc_requeues();
                debug!("worker {} preempted, re-entering at tail", id);
                if let Err(e) = self.queue.enqueue(id) {
                    error!("worker {} lost from scheduling: {}", id, e);
                    self.stats.inc_capacity_drops();
                }
            }
            status => {
                // Exited workers receive no suspend call
                record.mark_terminal(status.clone(), Instant::now());
                self.stats.inc_completions();
                info!("worker {} completed: {:?}", id, status);
            }
        }
        drop(record);

        // Simulated context-switch cost; charged to no worker
        if !self.config.switch_delay.is_zero() && !self.queue.is_empty() {
            thread::sleep(self.config.switch_delay);
        }
        Ok(())
    }

    /// Join every terminal worker's execution context
    ///
    /// Workers lost to a capacity drop never became terminal; they are
    /// skipped here and surface as an aggregation error in reporting.
    fn reap(&mut self) -> SimResult<()> {
        self.set_phase(Phase::Reaping);
        for id in self.ids.clone() {
            let mut record = self
                .records
                .get_mut(&id)
                .ok_or(SchedulerError::InvalidHandle(id))?;
            if record.is_terminal() {
                record.handle.reap()?;
                debug!("worker {} reaped", id);
            } else {
                warn!("worker {} never reached a terminal state, skipping reap", id);
            }
        }
        Ok(())
    }

    /// Aggregate per-worker timings into the final report
    fn report(&mut self) -> SimResult<SimReport> {
        self.set_phase(Phase::Reporting);

        let mut timings = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            let record = self
                .records
                .get(id)
                .ok_or(SchedulerError::InvalidHandle(*id))?;
            timings.push(record.timing());
        }

        let report = self.recorder.aggregate(&timings, self.stats.snapshot())?;
        info!(
            "run complete: {} workers, {} dispatches",
            report.workers.len(),
            report.stats.dispatches
        );
        Ok(report)
    }
}
