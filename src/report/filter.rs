//! Display filters, applied to a finished lookup result.

use crate::models::{DungeonResults, LookupResult, RunResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFilter {
    pub min_level: u32,
    pub timed_only: bool,
}

impl DisplayFilter {
    pub fn accepts(&self, run: &RunResult) -> bool {
        run.key_level >= self.min_level && (!self.timed_only || run.in_time_tier.is_timed())
    }

    /// Returns a copy of `result` without the rejected runs.
    ///
    /// Dungeons stay in place even when all their runs are filtered out.
    pub fn apply(&self, result: &LookupResult) -> LookupResult {
        LookupResult {
            profile: result.profile.clone(),
            per_dungeon_results: result
                .per_dungeon_results
                .iter()
                .map(|dungeon| DungeonResults {
                    dungeon_id: dungeon.dungeon_id,
                    runs: dungeon
                        .runs
                        .iter()
                        .filter(|run| self.accepts(run))
                        .cloned()
                        .collect(),
                })
                .collect(),
        }
    }
}

impl Default for DisplayFilter {
    fn default() -> Self {
        DisplayFilter {
            min_level: crate::config::MIN_KEYSTONE_LEVEL,
            timed_only: false,
        }
    }
}
