//! Structured logging for Affiliate Hub tools.
//!
//! This crate provides:
//! - `CorrelationId` - Identifier tying together the log lines of one invocation
//! - `StructuredLogger` - JSON or human-readable log lines on stderr

mod correlation;
mod logging;

pub use correlation::*;
pub use logging::*;
