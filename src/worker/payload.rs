/*!
 * Worker Payload
 * CPU-bound busy loop split into gate-checked units
 */

use super::gate::RunGate;
use std::time::{Duration, Instant};

/// Build a CPU-bound payload of `units` spin-loop units of roughly
/// `unit_cost` each
///
/// The gate is checked between units, so the preemption slack is at most one
/// unit: a worker asked to suspend finishes the unit it is in, then blocks
/// until the next quantum. A unit sized near or above the quantum coarsens
/// preemption accordingly.
pub fn busy_work(units: u32, unit_cost: Duration) -> impl FnOnce(&RunGate) + Send + 'static {
    move |gate: &RunGate| {
        for _ in 0..units {
            gate.wait_permitted();

            let start = Instant::now();
            while start.elapsed() < unit_cost {
                std::hint::spin_loop();
            }
        }
    }
}
