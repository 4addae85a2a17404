/*!
 * Worker Control Trait
 * Capability set the scheduler needs from any worker realization
 */

use crate::core::{SimResult, WorkerId};
use serde::{Deserialize, Serialize};

/// Observed status of a worker, also its recorded terminal state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum WorkerStatus {
    /// Worker has not finished its payload
    StillRunning,
    /// Payload returned; carries the exit code
    ExitedNormally(i32),
    /// Payload aborted; carries the cause
    ExitedAbnormally(String),
}

impl WorkerStatus {
    /// Terminal states are absorbing; `StillRunning` is the only non-terminal one
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WorkerStatus::StillRunning)
    }
}

/// Control surface over one simulated process
///
/// Polymorphic over how the worker is realized: the scheduler only needs to
/// resume, suspend, poll, and finally reap. Resume and suspend are idempotent
/// signals; polling is non-blocking and called once per scheduling round.
#[cfg_attr(test, mockall::automock)]
pub trait WorkerControl: Send {
    /// Identity of the worker this handle controls
    fn id(&self) -> WorkerId;

    /// Signal the worker to continue running; idempotent if already running
    fn resume(&self);

    /// Signal the worker to pause at its next permission check; idempotent
    fn suspend(&self);

    /// Non-blocking status check
    ///
    /// Fails with `InvalidHandle` after the worker has been reaped - that is
    /// a bookkeeping bug, not a recoverable runtime condition.
    fn poll_status(&self) -> SimResult<WorkerStatus>;

    /// Release the worker's execution context; valid exactly once, after the
    /// worker is terminal
    fn reap(&mut self) -> SimResult<()>;
}
