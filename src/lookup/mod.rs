//! Lookup orchestration.
//!
//! [`Aggregator::lookup`] runs the whole pipeline for one character:
//!
//! 1. fetch the ranking profile (the only fatal step)
//! 2. fetch the run index for the profile's role (failure = no runs)
//! 3. group and order the run index per registry dungeon
//! 4. resolve every reference: fight detail, then combat summary
//! 5. assemble per-dungeon results in normalized order
//!
//! Step 4 fans out over all dungeons and all references at once and waits
//! for every branch to settle; a failing branch only removes its own row.

mod resolve;

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, info, warn};

use crate::config::Config;
use crate::dungeons::DungeonRegistry;
use crate::error_handling::{DropStats, InitializationError, Unavailable};
use crate::fetch::{fetch_profile, fetch_run_index};
use crate::initialization::init_upstream;
use crate::models::{DungeonResults, LookupResult, PlayerIdentity};
use crate::normalize::normalize_run_index;
use crate::upstream::Upstream;

/// Acceptance thresholds and upstream parameters of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupSettings {
    pub min_keystone_level: u32,
    pub min_summary_duration_ms: u64,
    pub parses_zone: u32,
}

impl From<&Config> for LookupSettings {
    fn from(config: &Config) -> Self {
        LookupSettings {
            min_keystone_level: config.min_keystone_level,
            min_summary_duration_ms: config.min_summary_duration_ms,
            parses_zone: config.parses_zone,
        }
    }
}

/// Everything a lookup observed, for callers that need more than the result.
#[derive(Debug)]
pub struct LookupOutcome {
    /// `None` exactly when the profile could not be fetched
    pub result: Option<LookupResult>,
    pub profile_error: Option<Unavailable>,
    /// Set when the run index was unavailable and treated as empty
    pub run_index_error: Option<Unavailable>,
    pub drops: DropStats,
}

/// Merges ranking and analytics data for a character.
///
/// Holds no per-request state: lookups may run concurrently on one instance.
#[derive(Debug, Clone)]
pub struct Aggregator {
    upstream: Arc<Upstream>,
    registry: Arc<DungeonRegistry>,
    settings: LookupSettings,
}

impl Aggregator {
    /// Builds an aggregator with the default dungeon registry and the
    /// upstream selected by `config` (live or fixtures).
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::with_upstream(
            init_upstream(config)?,
            DungeonRegistry::shared(),
            LookupSettings::from(config),
        ))
    }

    pub fn with_upstream(
        upstream: Arc<Upstream>,
        registry: Arc<DungeonRegistry>,
        settings: LookupSettings,
    ) -> Self {
        Aggregator {
            upstream,
            registry,
            settings,
        }
    }

    pub fn registry(&self) -> &Arc<DungeonRegistry> {
        &self.registry
    }

    pub fn settings(&self) -> LookupSettings {
        self.settings
    }

    /// Looks up a character; `None` when the ranking profile is unavailable.
    pub async fn lookup(&self, identity: &PlayerIdentity) -> Option<LookupResult> {
        self.lookup_detailed(identity).await.result
    }

    /// Like [`Aggregator::lookup`], but also reports why things were missing.
    pub async fn lookup_detailed(&self, identity: &PlayerIdentity) -> LookupOutcome {
        let drops = DropStats::new();

        let profile = match fetch_profile(&self.upstream, identity).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Profile of {identity} unavailable: {e}");
                return LookupOutcome {
                    result: None,
                    profile_error: Some(e),
                    run_index_error: None,
                    drops,
                };
            }
        };
        debug!(
            "{identity}: {} {} ({:?})",
            profile.active_spec_name, profile.class, profile.active_spec_role
        );

        let (runs, run_index_error) = match fetch_run_index(
            &self.upstream,
            identity,
            profile.active_spec_role,
            self.settings.parses_zone,
        )
        .await
        {
            Ok(runs) => (runs, None),
            Err(e) => {
                info!("Run index of {identity} unavailable, continuing without runs: {e}");
                (Vec::new(), Some(e))
            }
        };

        let groups = normalize_run_index(&self.registry, &runs);
        let match_name = identity.match_name();

        let per_dungeon_results: Vec<DungeonResults> = join_all(
            groups
                .iter()
                .map(|group| self.resolve_dungeon(group, &match_name, &drops)),
        )
        .await;

        let result = LookupResult {
            profile,
            per_dungeon_results,
        };
        info!(
            "{identity}: {} run(s) across {} dungeon(s)",
            result.total_runs(),
            result
                .per_dungeon_results
                .iter()
                .filter(|d| !d.runs.is_empty())
                .count()
        );
        drops.log_summary(&identity.to_string());

        LookupOutcome {
            result: Some(result),
            profile_error: None,
            run_index_error,
            drops,
        }
    }
}
