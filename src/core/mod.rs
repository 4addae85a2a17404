/*!
 * Core Module
 * Shared types, errors, and limits used across the simulator
 */

pub mod errors;
pub mod limits;
pub mod types;

pub use errors::{MetricsError, SchedulerError};
pub use types::{SimResult, WorkerId};
