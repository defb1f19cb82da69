//! Error type definitions.
//!
//! This module defines the upstream failure sentinel, initialization errors,
//! and the reasons a run reference can be dropped from a lookup.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Why an upstream call produced no value.
///
/// Every outbound call returns `Result<T, Unavailable>`; callers decide
/// whether the failure is fatal (profile) or just drops an entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// Connection, DNS, timeout or I/O failure before a status was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    /// The body could not be decoded into the expected shape.
    #[error("malformed response body: {0}")]
    Malformed(String),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured upstream base URL does not parse.
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrlError { url: String, reason: String },

    /// The fixture directory does not exist.
    #[error("Fixture directory not found: {0}")]
    FixtureRootError(String),
}

/// Reasons a run reference contributes no row to the lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum DropReason {
    /// Fight list of the report could not be fetched
    ReportUnavailable,
    /// The report has no fight with the referenced id
    FightNotFound,
    MissingKeystoneLevel,
    BelowMinimumLevel,
    MissingCompletionTime,
    /// Combat summary could not be fetched
    SummaryUnavailable,
    /// Summary covers less than the minimum duration (broken log)
    SummaryTooShort,
    /// The fight's dungeon is not in the registry
    UnknownDungeon,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::ReportUnavailable => "Report unavailable",
            DropReason::FightNotFound => "Fight not found in report",
            DropReason::MissingKeystoneLevel => "Missing keystone level",
            DropReason::BelowMinimumLevel => "Keystone level below minimum",
            DropReason::MissingCompletionTime => "Missing completion time",
            DropReason::SummaryUnavailable => "Summary unavailable",
            DropReason::SummaryTooShort => "Summary shorter than minimum duration",
            DropReason::UnknownDungeon => "Unknown dungeon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_unavailable_messages() {
        assert_eq!(
            Unavailable::Status(503).to_string(),
            "upstream returned HTTP 503"
        );
        assert!(Unavailable::Malformed("eof".into())
            .to_string()
            .contains("eof"));
    }

    #[test]
    fn test_every_drop_reason_has_a_description() {
        for reason in DropReason::iter() {
            assert!(!reason.as_str().is_empty());
            assert_eq!(reason.to_string(), reason.as_str());
        }
    }
}
