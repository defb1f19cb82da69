//! Run index fetcher.

use crate::error_handling::Unavailable;
use crate::models::{PlayerIdentity, RawRunReference, Role};
use crate::upstream::{Endpoint, Upstream};

/// Fetches the character's ranked runs for a zone.
///
/// The role picks the ranking metric (healers by hps, everyone else by dps).
/// The body must be a JSON array; entries that do not carry the fields a run
/// reference needs are skipped individually.
pub async fn fetch_run_index(
    upstream: &Upstream,
    identity: &PlayerIdentity,
    role: Role,
    zone: u32,
) -> Result<Vec<RawRunReference>, Unavailable> {
    let entries: Vec<serde_json::Value> = upstream
        .fetch(&Endpoint::CharacterParses {
            identity,
            metric: role.metric(),
            zone,
        })
        .await?;
    Ok(parse_entries(entries))
}

fn parse_entries(entries: Vec<serde_json::Value>) -> Vec<RawRunReference> {
    let total = entries.len();
    let runs: Vec<RawRunReference> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(run) => Some(run),
            Err(e) => {
                log::debug!("Skipping malformed run index entry: {e}");
                None
            }
        })
        .collect();
    if runs.len() < total {
        log::debug!("Kept {} of {} run index entries", runs.len(), total);
    }
    runs
}
