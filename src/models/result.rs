//! Lookup output.

use serde::{Serialize, Serializer};

use super::profile::ProfileSummary;

/// How far under the dungeon timer a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InTimeTier {
    /// Over time
    Depleted,
    PlusOne,
    PlusTwo,
    /// Fastest bracket
    PlusThree,
}

impl InTimeTier {
    pub fn as_u8(&self) -> u8 {
        match self {
            InTimeTier::Depleted => 0,
            InTimeTier::PlusOne => 1,
            InTimeTier::PlusTwo => 2,
            InTimeTier::PlusThree => 3,
        }
    }

    pub fn is_timed(&self) -> bool {
        *self != InTimeTier::Depleted
    }
}

impl Serialize for InTimeTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// One rendered row: a resolved, accepted run of the character.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub dps: u64,
    pub hps: u64,
    pub deaths: usize,
    pub key_level: u32,
    pub report_id: String,
    pub fight_id: u32,
    pub affixes: Vec<u32>,
    pub in_time_tier: InTimeTier,
    /// Run start, milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Runs of one dungeon, in normalized order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DungeonResults {
    pub dungeon_id: u32,
    pub runs: Vec<RunResult>,
}

/// Everything a lookup produces: the profile plus one entry per registry dungeon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    #[serde(flatten)]
    pub profile: ProfileSummary,
    pub per_dungeon_results: Vec<DungeonResults>,
}

impl LookupResult {
    /// `false` when no dungeon has a single run ("no logs found").
    pub fn has_runs(&self) -> bool {
        self.per_dungeon_results.iter().any(|d| !d.runs.is_empty())
    }

    pub fn total_runs(&self) -> usize {
        self.per_dungeon_results.iter().map(|d| d.runs.len()).sum()
    }
}
