/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::WorkerId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("invalid arguments: {0}")]
    #[diagnostic(
        code(config::invalid_arguments),
        help("Usage: scheduler <num_workers> <quantum_ms> [verbose]")
    )]
    InvalidArguments(String),

    #[error("worker count {requested} outside supported range 1..={max}")]
    #[diagnostic(
        code(config::worker_count_out_of_range),
        help("Choose a worker count between 1 and the configured maximum.")
    )]
    WorkerCountOutOfRange { requested: u64, max: u32 },

    #[error("ready queue full, cannot enqueue worker {0}")]
    #[diagnostic(
        code(queue::full),
        help("Queue capacity must be at least the worker count; a rejected worker is lost from scheduling.")
    )]
    QueueFull(WorkerId),

    #[error("ready queue empty, cannot dequeue")]
    #[diagnostic(
        code(queue::empty),
        help("Check is_empty() before dequeue; an empty queue terminates the scheduling loop.")
    )]
    QueueEmpty,

    #[error("failed to spawn worker {id}: {reason}")]
    #[diagnostic(
        code(worker::spawn_failed),
        help("Worker creation exhausted a system resource. The whole run is aborted.")
    )]
    SpawnFailed { id: WorkerId, reason: String },

    #[error("worker {0} handle is no longer valid")]
    #[diagnostic(
        code(worker::invalid_handle),
        help("A handle was polled or reaped twice, or a stale id reached the scheduler. This is an internal invariant violation.")
    )]
    InvalidHandle(WorkerId),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Metrics(#[from] MetricsError),
}

/// Metrics aggregation errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MetricsError {
    #[error("cannot aggregate: workers {pending:?} never reached a terminal state")]
    #[diagnostic(
        code(metrics::incomplete_run),
        help("Every worker must be terminal before aggregation. A worker lost to a queue capacity drop never completes.")
    )]
    IncompleteRun { pending: Vec<WorkerId> },
}
