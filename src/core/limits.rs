/*!
 * Simulation Limits and Constants
 *
 * Centralized location for all simulator-wide limits and defaults.
 */

use std::time::Duration;

/// Maximum number of workers a single run may create
/// Each worker owns one OS thread, so this bounds thread-pool pressure
pub const MAX_WORKERS: u32 = 1000;

/// Default time quantum granted per dispatch
pub const DEFAULT_QUANTUM: Duration = Duration::from_millis(50);

/// Default switch-over delay charged between dispatches
/// Zero by default: the simulated context-switch cost is opt-in
pub const DEFAULT_SWITCH_DELAY: Duration = Duration::ZERO;

/// Default number of CPU-bound work units per worker payload
pub const DEFAULT_PAYLOAD_UNITS: u32 = 5;

/// Default wall-clock cost of one payload work unit
/// Sized below the default quantum so a unit finishes within one slice
pub const DEFAULT_PAYLOAD_UNIT_COST: Duration = Duration::from_millis(20);

/// Sleep between permission polls while a worker is suspended
/// Bounds the resume latency a worker observes after `permit()`
pub const GATE_POLL_INTERVAL: Duration = Duration::from_micros(200);
