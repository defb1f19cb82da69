//! Upstream data sources.
//!
//! Both providers are reached through [`Upstream`], which either performs a
//! single live HTTP GET or reads a recorded response from a fixture directory.
//! Either way the caller gets `Result<T, Unavailable>`: a non-2xx status,
//! a transport failure and an undecodable body are distinguishable but never
//! propagate further than the component that made the call.

mod fixture;
mod http;

use serde::de::DeserializeOwned;

use crate::error_handling::{categorize_json_error, Unavailable};
use crate::models::{Metric, PlayerIdentity};

pub use fixture::FixtureUpstream;
pub use http::HttpUpstream;

/// One of the outbound calls the pipeline makes.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    /// Ranking provider profile with mythic+ scores
    Profile(&'a PlayerIdentity),
    /// Analytics provider run index of a character
    CharacterParses {
        identity: &'a PlayerIdentity,
        metric: Metric,
        zone: u32,
    },
    /// Fight list of a report
    ReportFights { report_id: &'a str },
    /// Combat summary of a report's time window
    FightSummary {
        report_id: &'a str,
        start: i64,
        end: i64,
    },
}

impl Endpoint<'_> {
    /// Short description for log lines. Never contains credentials.
    pub fn describe(&self) -> String {
        match self {
            Endpoint::Profile(identity) => format!("profile of {identity}"),
            Endpoint::CharacterParses {
                identity, metric, ..
            } => format!("{} run index of {identity}", metric.as_str()),
            Endpoint::ReportFights { report_id } => format!("fights of report {report_id}"),
            Endpoint::FightSummary {
                report_id,
                start,
                end,
            } => format!("summary of report {report_id} [{start}..{end}]"),
        }
    }
}

/// Source of upstream responses.
#[derive(Debug)]
pub enum Upstream {
    Http(HttpUpstream),
    Fixtures(FixtureUpstream),
}

impl Upstream {
    /// Fetches and decodes one endpoint. Single attempt, no retry.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint<'_>) -> Result<T, Unavailable> {
        let body = match self {
            Upstream::Http(http) => http.get(endpoint).await,
            Upstream::Fixtures(fixtures) => fixtures.read(endpoint).await,
        };
        let body = body.inspect_err(|e| {
            log::debug!("{} unavailable: {e}", endpoint.describe());
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            log::debug!("{} is malformed: {e}", endpoint.describe());
            categorize_json_error(&e)
        })
    }
}
