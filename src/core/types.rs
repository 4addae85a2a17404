/*!
 * Core Types
 * Common types used across the simulator
 */

/// Worker identifier, assigned densely from 0 at creation and never reused
pub type WorkerId = u32;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SchedulerError>;
