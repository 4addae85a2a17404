/*!
 * Thread-Backed Worker
 * Realizes the worker control surface over one OS thread and a run gate
 */

use super::gate::RunGate;
use super::handle::{WorkerControl, WorkerStatus};
use crate::core::{SchedulerError, SimResult, WorkerId};
use log::{debug, warn};
use parking_lot::RwLock;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// One simulated process backed by an OS thread
///
/// The thread is created gated: it blocks on an unpermitted `RunGate` before
/// touching the payload, so not a single unit of work can run until the
/// scheduler's first `resume()`. The payload's outcome is published once into
/// a shared cell that `poll_status` reads without blocking.
pub struct ThreadWorker {
    id: WorkerId,
    gate: Arc<RunGate>,
    outcome: Arc<RwLock<Option<WorkerStatus>>>,
    thread: Option<JoinHandle<()>>,
}

impl ThreadWorker {
    /// Spawn a worker in the suspended state
    ///
    /// The payload receives the gate and is expected to call
    /// `gate.wait_permitted()` between units of work; polling granularity is
    /// the payload's choice. Spawn failure is fatal to the whole run.
    pub fn spawn<F>(id: WorkerId, payload: F) -> SimResult<Self>
    where
        F: FnOnce(&RunGate) + Send + 'static,
    {
        let gate = Arc::new(RunGate::new());
        let outcome: Arc<RwLock<Option<WorkerStatus>>> = Arc::new(RwLock::new(None));

        let worker_gate = Arc::clone(&gate);
        let worker_outcome = Arc::clone(&outcome);

        let thread = thread::Builder::new()
            .name(format!("worker-{id}"))
            .spawn(move || {
                // Suspend-on-entry: no payload unit runs before the first permit
                worker_gate.wait_permitted();

                let result = panic::catch_unwind(AssertUnwindSafe(|| payload(&worker_gate)));
                let status = match result {
                    Ok(()) => WorkerStatus::ExitedNormally(0),
                    // Deref past the Box so downcasting sees the payload itself
                    Err(cause) => WorkerStatus::ExitedAbnormally(panic_message(cause.as_ref())),
                };

                debug!("worker {} finished: {:?}", id, status);
                *worker_outcome.write() = Some(status);
            })
            .map_err(|e| SchedulerError::SpawnFailed {
                id,
                reason: e.to_string(),
            })?;

        debug!("worker {} spawned suspended", id);

        Ok(Self {
            id,
            gate,
            outcome,
            thread: Some(thread),
        })
    }
}

impl WorkerControl for ThreadWorker {
    fn id(&self) -> WorkerId {
        self.id
    }

    fn resume(&self) {
        self.gate.permit();
    }

    fn suspend(&self) {
        self.gate.revoke();
    }

    fn poll_status(&self) -> SimResult<WorkerStatus> {
        if self.thread.is_none() {
            return Err(SchedulerError::InvalidHandle(self.id));
        }
        Ok(self
            .outcome
            .read()
            .clone()
            .unwrap_or(WorkerStatus::StillRunning))
    }

    fn reap(&mut self) -> SimResult<()> {
        let thread = self
            .thread
            .take()
            .ok_or(SchedulerError::InvalidHandle(self.id))?;

        // The outcome was published before the thread returned, so this join
        // cannot block on the gate
        thread.join().map_err(|_| {
            warn!("worker {} thread terminated without publishing an outcome", self.id);
            SchedulerError::InvalidHandle(self.id)
        })
    }
}

/// Best-effort extraction of a panic payload message
fn panic_message(cause: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = cause.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = cause.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
