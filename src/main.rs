/*!
 * Scheduler Binary - Main Entry Point
 *
 * CLI surface: scheduler <num_workers> <quantum_ms> [verbose]
 */

use miette::IntoDiagnostic;
use rr_sim::{init_tracing, limits, SchedulerCore, SchedulerError, SimConfig, SimResult};
use std::time::Duration;
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    workers: u32,
    quantum: Duration,
    verbose: bool,
}

fn parse_args(args: &[String]) -> SimResult<CliArgs> {
    if args.len() < 2 || args.len() > 3 {
        return Err(SchedulerError::InvalidArguments(format!(
            "expected 2 or 3 arguments, got {}",
            args.len()
        )));
    }

    let workers: u64 = args[0].parse().map_err(|_| {
        SchedulerError::InvalidArguments(format!("num_workers '{}' is not a number", args[0]))
    })?;
    if workers == 0 || workers > limits::MAX_WORKERS as u64 {
        return Err(SchedulerError::WorkerCountOutOfRange {
            requested: workers,
            max: limits::MAX_WORKERS,
        });
    }

    let quantum_ms: u64 = args[1].parse().map_err(|_| {
        SchedulerError::InvalidArguments(format!("quantum_ms '{}' is not a number", args[1]))
    })?;

    let verbose = match args.get(2).map(String::as_str) {
        None => false,
        Some("verbose") => true,
        Some(other) => {
            return Err(SchedulerError::InvalidArguments(format!(
                "unrecognized flag '{other}'"
            )))
        }
    };

    Ok(CliArgs {
        workers: workers as u32,
        quantum: Duration::from_millis(quantum_ms),
        verbose,
    })
}

fn main() -> miette::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    init_tracing(cli.verbose);
    info!(
        workers = cli.workers,
        quantum_ms = cli.quantum.as_millis() as u64,
        "round-robin simulation starting"
    );

    let config = SimConfig {
        workers: cli.workers,
        quantum: cli.quantum,
        ..SimConfig::default()
    };

    let mut core = SchedulerCore::launch(config)?;
    let report = core.run()?;

    let as_json = std::env::var("SCHED_REPORT_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);
    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).into_diagnostic()?
        );
    } else {
        print!("{report}");
    }

    Ok(())
}
