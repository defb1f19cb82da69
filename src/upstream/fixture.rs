//! Offline upstream backed by recorded JSON responses.
//!
//! Layout under the fixture root:
//!
//! ```text
//! profile/{region}/{realm}/{character}.json
//! parses/{region}/{realm}/{character}.json
//! fights/{report}.json
//! summary/{report}-{start}-{end}.json
//! ```
//!
//! Realm and character are lowercased. Characters outside `[A-Za-z0-9_-]` are
//! replaced with `_` so no endpoint can address a file outside the root.

use std::path::PathBuf;

use super::Endpoint;
use crate::error_handling::{categorize_io_error, Unavailable};

#[derive(Debug, Clone)]
pub struct FixtureUpstream {
    root: PathBuf,
}

impl FixtureUpstream {
    pub fn new(root: PathBuf) -> Self {
        FixtureUpstream { root }
    }

    /// File that holds the recorded response of an endpoint.
    pub fn path_for(&self, endpoint: &Endpoint<'_>) -> PathBuf {
        match endpoint {
            Endpoint::Profile(identity) => self
                .root
                .join("profile")
                .join(identity.region.as_str())
                .join(component(&identity.realm.to_lowercase()))
                .join(format!("{}.json", component(&identity.character.to_lowercase()))),
            Endpoint::CharacterParses { identity, .. } => self
                .root
                .join("parses")
                .join(identity.region.as_str())
                .join(component(&identity.realm.to_lowercase()))
                .join(format!("{}.json", component(&identity.character.to_lowercase()))),
            Endpoint::ReportFights { report_id } => self
                .root
                .join("fights")
                .join(format!("{}.json", component(report_id))),
            Endpoint::FightSummary {
                report_id,
                start,
                end,
            } => self
                .root
                .join("summary")
                .join(format!("{}-{start}-{end}.json", component(report_id))),
        }
    }

    pub(super) async fn read(&self, endpoint: &Endpoint<'_>) -> Result<Vec<u8>, Unavailable> {
        let path = self.path_for(endpoint);
        log::debug!("Reading fixture {}", path.display());
        tokio::fs::read(&path)
            .await
            .map_err(|e| categorize_io_error(&e))
    }
}

fn component(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
