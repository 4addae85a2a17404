/*!
 * Simulation Report
 * Final per-worker rows and aggregate means
 */

use crate::core::WorkerId;
use crate::sched::SimStats;
use crate::worker::WorkerStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One worker's derived metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerMetrics {
    pub id: WorkerId,
    /// Elapsed time from creation to first dispatch
    pub response_micros: u64,
    /// Elapsed time from creation to terminal completion
    pub turnaround_micros: u64,
    pub dispatches: u64,
    pub outcome: WorkerStatus,
}

/// Full simulation report, printable or JSON-serializable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimReport {
    pub workers: Vec<WorkerMetrics>,
    pub mean_response_micros: Option<u64>,
    pub mean_turnaround_micros: Option<u64>,
    pub dispatch_log: Vec<WorkerId>,
    pub stats: SimStats,
}

fn millis(micros: u64) -> f64 {
    micros as f64 / 1000.0
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "round-robin simulation report")?;
        writeln!(
            f,
            "  quantum: {:.2}ms  dispatches: {}  requeues: {}  completions: {}",
            millis(self.stats.quantum_micros),
            self.stats.dispatches,
            self.stats.requeues,
            self.stats.completions,
        )?;

        if self.workers.is_empty() {
            return writeln!(f, "  no workers completed; no metrics to report");
        }

        writeln!(
            f,
            "  {:>6}  {:>10}  {:>12}  {:>14}  outcome",
            "worker", "dispatches", "response", "turnaround"
        )?;
        for w in &self.workers {
            let outcome = match &w.outcome {
                WorkerStatus::StillRunning => "running".to_string(),
                WorkerStatus::ExitedNormally(code) => format!("exited({code})"),
                WorkerStatus::ExitedAbnormally(cause) => format!("aborted({cause})"),
            };
            writeln!(
                f,
                "  {:>6}  {:>10}  {:>10.2}ms  {:>12.2}ms  {}",
                w.id,
                w.dispatches,
                millis(w.response_micros),
                millis(w.turnaround_micros),
                outcome
            )?;
        }

        if let (Some(resp), Some(turn)) = (self.mean_response_micros, self.mean_turnaround_micros)
        {
            writeln!(
                f,
                "  mean response: {:.2}ms  mean turnaround: {:.2}ms",
                millis(resp),
                millis(turn)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(workers: Vec<WorkerMetrics>) -> SimReport {
        SimReport {
            mean_response_micros: workers.first().map(|w| w.response_micros),
            mean_turnaround_micros: workers.first().map(|w| w.turnaround_micros),
            dispatch_log: workers.iter().map(|w| w.id).collect(),
            workers,
            stats: SimStats {
                dispatches: 1,
                requeues: 0,
                completions: 1,
                capacity_drops: 0,
                quantum_micros: 50_000,
            },
        }
    }

    #[test]
    fn test_display_empty() {
        let text = report(Vec::new()).to_string();
        assert!(text.contains("no workers completed"));
    }

    #[test]
    fn test_display_rows_and_means() {
        let text = report(vec![WorkerMetrics {
            id: 0,
            response_micros: 1_500,
            turnaround_micros: 52_000,
            dispatches: 1,
            outcome: WorkerStatus::ExitedNormally(0),
        }])
        .to_string();

        assert!(text.contains("exited(0)"));
        assert!(text.contains("mean response: 1.50ms"));
        assert!(text.contains("mean turnaround: 52.00ms"));
    }

    #[test]
    fn test_json_round_trip() {
        let json = serde_json::to_string(&report(Vec::new())).unwrap();
        let parsed: SimReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report(Vec::new()));
    }
}
