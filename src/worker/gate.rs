/*!
 * Run Gate
 * Per-worker permission flag: the scheduler writes, the worker reads
 */

use crate::core::limits::GATE_POLL_INTERVAL;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Single-writer/single-reader permission flag for one worker
///
/// The scheduling thread is the only writer; the worker only reads. A worker
/// may finish the unit it is in before it observes `revoke()` - that slack is
/// bounded by the payload's own polling granularity.
#[derive(Debug, Default)]
pub struct RunGate {
    permitted: AtomicBool,
}

impl RunGate {
    /// Create a gate in the not-permitted state
    pub fn new() -> Self {
        Self {
            permitted: AtomicBool::new(false),
        }
    }

    /// Allow the worker to run; idempotent
    pub fn permit(&self) {
        self.permitted.store(true, Ordering::Release);
    }

    /// Ask the worker to pause at its next check; idempotent
    pub fn revoke(&self) {
        self.permitted.store(false, Ordering::Release);
    }

    /// The predicate a payload polls: "am I permitted to run right now"
    pub fn may_run(&self) -> bool {
        self.permitted.load(Ordering::Acquire)
    }

    /// Block the calling worker until permitted
    ///
    /// Sleeps between polls so a suspended worker does not burn its CPU
    /// while another worker holds the quantum.
    pub fn wait_permitted(&self) {
        while !self.may_run() {
            thread::sleep(GATE_POLL_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_closed() {
        let gate = RunGate::new();
        assert!(!gate.may_run());
    }

    #[test]
    fn test_permit_revoke() {
        let gate = RunGate::new();

        gate.permit();
        assert!(gate.may_run());

        gate.revoke();
        assert!(!gate.may_run());
    }

    #[test]
    fn test_idempotent_transitions() {
        let gate = RunGate::new();

        gate.permit();
        gate.permit();
        assert!(gate.may_run());

        gate.revoke();
        gate.revoke();
        assert!(!gate.may_run());
    }
}
