//! Analytics provider payloads.
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! upstream bodies is ignored by serde.

use serde::{Deserialize, Serialize};

/// One ranked attempt from the character's run index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRunReference {
    #[serde(rename = "encounterID")]
    pub encounter_id: u32,
    #[serde(rename = "reportID")]
    pub report_id: String,
    #[serde(rename = "fightID")]
    pub fight_id: u32,
    /// Keystone level for dungeon zones
    #[serde(rename = "ilvlKeyOrPatch", default)]
    pub keystone_level: f64,
    #[serde(rename = "startTime", default)]
    pub start_time: i64,
}

/// The pointer kept for a run after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRunReference {
    pub report_id: String,
    pub fight_id: u32,
    pub start_time: i64,
}

impl From<RawRunReference> for NormalizedRunReference {
    fn from(raw: RawRunReference) -> Self {
        NormalizedRunReference {
            report_id: raw.report_id,
            fight_id: raw.fight_id,
            start_time: raw.start_time,
        }
    }
}

/// Fight list of a report.
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub fights: Vec<Fight>,
}

/// A single fight of a report, as returned by the analytics provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fight {
    pub id: u32,
    pub boss: u32,
    pub start_time: i64,
    pub end_time: i64,
    #[serde(rename = "keystoneLevel")]
    pub keystone_level: Option<u32>,
    #[serde(rename = "completionTime")]
    pub completion_time: Option<u64>,
    #[serde(default)]
    pub affixes: Option<Vec<u32>>,
}

/// A fight that passed the acceptance rules and can be summarized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightDetail {
    pub fight_id: u32,
    /// Encounter identifier of the dungeon
    pub boss: u32,
    pub completion_time_ms: u64,
    pub keystone_level: u32,
    pub affixes: Vec<u32>,
    pub start_time: i64,
    pub end_time: i64,
}

/// Combat summary table for a fight's time window.
#[derive(Debug, Clone, Deserialize)]
pub struct CombatSummary {
    /// Tracked duration in milliseconds
    #[serde(rename = "totalTime")]
    pub total_time: u64,
    #[serde(rename = "damageDone", default)]
    pub damage_done: Vec<SummaryEntry>,
    #[serde(rename = "healingDone", default)]
    pub healing_done: Vec<SummaryEntry>,
    #[serde(rename = "deathEvents", default)]
    pub death_events: Vec<DeathEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryEntry {
    pub name: String,
    #[serde(default)]
    pub total: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeathEvent {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_run_reference_from_parses_entry() {
        let entry = serde_json::json!({
            "encounterID": 12291,
            "encounterName": "De Other Side",
            "class": "Druid",
            "spec": "Restoration",
            "rank": 120,
            "outOf": 5000,
            "duration": 1822000,
            "startTime": 1612345678000i64,
            "reportID": "aBcD1234",
            "fightID": 7,
            "percentile": 97.5,
            "ilvlKeyOrPatch": 18,
            "total": 15432.1,
            "estimated": false
        });
        let raw: RawRunReference = serde_json::from_value(entry).unwrap();
        assert_eq!(raw.encounter_id, 12291);
        assert_eq!(raw.keystone_level, 18.0);

        let normalized = NormalizedRunReference::from(raw);
        assert_eq!(normalized.report_id, "aBcD1234");
        assert_eq!(normalized.fight_id, 7);
        assert_eq!(normalized.start_time, 1612345678000);
    }

    #[test]
    fn test_report_without_fights_is_empty() {
        let report: Report = serde_json::from_str("{}").unwrap();
        assert!(report.fights.is_empty());
    }

    #[test]
    fn test_fight_optional_fields() {
        let trash = serde_json::json!({
            "id": 3, "boss": 0, "start_time": 0, "end_time": 1000, "name": "Trash"
        });
        let fight: Fight = serde_json::from_value(trash).unwrap();
        assert_eq!(fight.keystone_level, None);
        assert_eq!(fight.completion_time, None);
        assert_eq!(fight.affixes, None);
    }

    #[test]
    fn test_summary_lists_default_to_empty() {
        let summary: CombatSummary =
            serde_json::from_value(serde_json::json!({ "totalTime": 1800000 })).unwrap();
        assert_eq!(summary.total_time, 1_800_000);
        assert!(summary.damage_done.is_empty());
        assert!(summary.death_events.is_empty());
    }
}
