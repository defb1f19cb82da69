//! Configuration types.
//!
//! This module defines the library configuration and the enums shared between
//! the library and the command-line interface.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_ANALYTICS_BASE_URL, DEFAULT_PARSES_ZONE, DEFAULT_RANKING_BASE_URL,
    DEFAULT_USER_AGENT, MIN_KEYSTONE_LEVEL, MIN_SUMMARY_DURATION_MS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format of the `lookup` subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One text table per dungeon
    Table,
    /// The full lookup result as pretty-printed JSON
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Passed to [`crate::Aggregator::new`] once; every lookup performed by that
/// aggregator uses the same upstream settings and acceptance thresholds.
///
/// # Examples
///
/// ```no_run
/// use keystone_lookup::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     analytics_api_key: Some("secret".to_string()),
///     fixtures_dir: Some(PathBuf::from("fixtures/demo")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Base URL of the ranking provider
    pub ranking_base_url: String,

    /// Base URL of the analytics provider
    pub analytics_base_url: String,

    /// API key for the analytics provider
    pub analytics_api_key: Option<String>,

    /// Per-request timeout in seconds (no timeout when unset)
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Read upstream responses from this directory instead of the network
    pub fixtures_dir: Option<PathBuf>,

    /// Minimum keystone level (inclusive) for a run to be reported
    pub min_keystone_level: u32,

    /// Minimum summary duration in milliseconds (inclusive)
    pub min_summary_duration_ms: u64,

    /// Analytics provider zone for the run index
    pub parses_zone: u32,
}

impl Config {
    /// Per-request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            ranking_base_url: DEFAULT_RANKING_BASE_URL.to_string(),
            analytics_base_url: DEFAULT_ANALYTICS_BASE_URL.to_string(),
            analytics_api_key: None,
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fixtures_dir: None,
            min_keystone_level: MIN_KEYSTONE_LEVEL,
            min_summary_duration_ms: MIN_SUMMARY_DURATION_MS,
            parses_zone: DEFAULT_PARSES_ZONE,
        }
    }
}
