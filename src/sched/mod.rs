/*!
 * Scheduler Core
 * Round-robin dispatch loop over gated workers with timing bookkeeping
 */

use crate::core::limits::{
    DEFAULT_PAYLOAD_UNITS, DEFAULT_PAYLOAD_UNIT_COST, DEFAULT_QUANTUM, DEFAULT_SWITCH_DELAY,
    MAX_WORKERS,
};
use crate::core::{SchedulerError, SimResult, WorkerId};
use crate::metrics::MetricsRecorder;
use crate::queue::ReadyQueue;
use crate::worker::{busy_work, ThreadWorker, WorkerControl};
use ahash::RandomState;
use dashmap::DashMap;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

mod atomic_stats;
mod record;
mod run;

pub use atomic_stats::{AtomicSimStats, SimStats};
pub use record::WorkerRecord;

/// Global state of the scheduling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Spawn all workers suspended and fill the ready queue
    Priming,
    /// Serve the queue one quantum at a time until it empties
    Draining,
    /// Join every terminal worker; the barrier before metrics
    Reaping,
    /// Aggregate and emit timing metrics
    Reporting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Priming => "priming",
            Phase::Draining => "draining",
            Phase::Reaping => "reaping",
            Phase::Reporting => "reporting",
        };
        f.write_str(name)
    }
}

/// Simulation configuration
///
/// One quantum and one switch-over delay shared by all workers. The queue
/// capacity defaults to the worker count; setting it lower exercises the
/// documented capacity-drop path.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub workers: u32,
    pub quantum: Duration,
    /// Bookkeeping cost charged between dispatches, never inside a quantum
    pub switch_delay: Duration,
    pub queue_capacity: Option<usize>,
    pub payload_units: u32,
    pub payload_unit_cost: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            quantum: DEFAULT_QUANTUM,
            switch_delay: DEFAULT_SWITCH_DELAY,
            queue_capacity: None,
            payload_units: DEFAULT_PAYLOAD_UNITS,
            payload_unit_cost: DEFAULT_PAYLOAD_UNIT_COST,
        }
    }
}

impl SimConfig {
    /// Reject configurations the simulator cannot honor
    ///
    /// Zero workers is accepted here as a degenerate run; the CLI applies
    /// its own stricter lower bound.
    pub fn validate(&self) -> SimResult<()> {
        if self.workers > MAX_WORKERS {
            return Err(SchedulerError::WorkerCountOutOfRange {
                requested: self.workers as u64,
                max: MAX_WORKERS,
            });
        }
        Ok(())
    }
}

/// Round-robin scheduler over a fixed worker population
///
/// Drives all timing decisions from one thread: dequeue, resume, sleep one
/// quantum, suspend-or-complete, repeat. Workers live on their own execution
/// contexts and only read their gates.
pub struct SchedulerCore<W: WorkerControl> {
    config: SimConfig,
    queue: ReadyQueue,
    records: DashMap<WorkerId, WorkerRecord<W>, RandomState>,
    /// Creation order; drives priming, reaping, and report ordering
    ids: Vec<WorkerId>,
    recorder: MetricsRecorder,
    stats: Arc<AtomicSimStats>,
    phase: Phase,
}

impl SchedulerCore<ThreadWorker> {
    /// Spawn `config.workers` thread-backed workers, all suspended
    ///
    /// Any spawn failure aborts the whole run; no partial simulation.
    pub fn launch(config: SimConfig) -> SimResult<Self> {
        config.validate()?;

        let mut workers = Vec::with_capacity(config.workers as usize);
        for id in 0..config.workers {
            let payload = busy_work(config.payload_units, config.payload_unit_cost);
            workers.push(ThreadWorker::spawn(id, payload)?);
        }

        Ok(Self::with_workers(config, workers))
    }
}

impl<W: WorkerControl> SchedulerCore<W> {
    /// Build a scheduler over already-created workers
    ///
    /// The handles define the population and its priming order;
    /// `config.workers` is only consulted by `launch`.
    pub fn with_workers(config: SimConfig, workers: Vec<W>) -> Self {
        let capacity = config.queue_capacity.unwrap_or(workers.len());
        let records = DashMap::with_capacity_and_hasher(workers.len(), RandomState::new());
        let mut ids = Vec::with_capacity(workers.len());

        for handle in workers {
            let id = handle.id();
            ids.push(id);
            records.insert(id, WorkerRecord::new(id, handle));
        }

        info!(
            "scheduler created: {} workers, quantum {:?}, queue capacity {}",
            ids.len(),
            config.quantum,
            capacity
        );

        let stats = Arc::new(AtomicSimStats::new(config.quantum));
        Self {
            queue: ReadyQueue::with_capacity(capacity),
            records,
            ids,
            recorder: MetricsRecorder::new(),
            stats,
            phase: Phase::Priming,
            config,
        }
    }

    /// Lock-free stats snapshot
    pub fn stats(&self) -> SimStats {
        self.stats.snapshot()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Sequence of dequeued ids, in dispatch order
    pub fn dispatch_log(&self) -> &[WorkerId] {
        self.recorder.dispatch_log()
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        info!("entering {} phase", phase);
    }
}
