//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (upstream endpoints, thresholds, limits)
//! - The library `Config` struct
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, HistoryArgs, LookupArgs, ServeArgs, UpstreamArgs};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
