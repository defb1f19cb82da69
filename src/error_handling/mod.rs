//! Error handling and drop statistics.
//!
//! This module provides:
//! - The [`Unavailable`] sentinel returned by every upstream call
//! - Error categorization for transport, fixture and decode failures
//! - Initialization errors
//! - Per-lookup drop statistics
//!
//! Upstream misbehavior never crosses a component boundary as a panic or an
//! `anyhow` error; it is normalized to `Unavailable` at the call site and the
//! caller decides whether it is fatal.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_io_error, categorize_json_error, categorize_reqwest_error};
pub use stats::DropStats;
pub use types::{DropReason, InitializationError, Unavailable};
