/*!
 * Worker Abstraction
 * Lifecycle control and status polling over one simulated process
 */

mod gate;
mod handle;
mod payload;
mod thread;

pub use gate::RunGate;
pub use handle::{WorkerControl, WorkerStatus};
pub use payload::busy_work;
pub use thread::ThreadWorker;

#[cfg(test)]
pub use handle::MockWorkerControl;
