/*!
 * Round-Robin Scheduling Simulator
 * Preemptive time-slicing over gated CPU-bound workers, with per-worker
 * response and turnaround metrics
 */

pub mod core;
pub mod metrics;
pub mod monitoring;
pub mod queue;
pub mod sched;
pub mod worker;

// Re-exports
pub use crate::core::limits;
pub use crate::core::{MetricsError, SchedulerError, SimResult, WorkerId};
pub use metrics::{MetricsRecorder, SimReport, TimingSnapshot, WorkerMetrics};
pub use monitoring::init_tracing;
pub use queue::ReadyQueue;
pub use sched::{Phase, SchedulerCore, SimConfig, SimStats};
pub use worker::{busy_work, RunGate, ThreadWorker, WorkerControl, WorkerStatus};
