//! Ranking profile of a character.

use serde::{Deserialize, Serialize};

/// Role of the character's active specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Tank,
    Dps,
    Healer,
}

impl Role {
    /// Ranking metric used for the analytics run index.
    ///
    /// Healers are ranked by healing, everybody else by damage.
    pub fn metric(&self) -> Metric {
        match self {
            Role::Healer => Metric::Hps,
            Role::Tank | Role::Dps => Metric::Dps,
        }
    }
}

/// Ranking metric accepted by the analytics provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Dps,
    Hps,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Dps => "dps",
            Metric::Hps => "hps",
        }
    }
}

/// Mythic+ scores, overall, per role and per specialization slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub all: f64,
    pub dps: f64,
    pub healer: f64,
    pub tank: f64,
    pub per_spec: [f64; 4],
}

/// The part of the ranking profile a lookup keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub race: String,
    pub class: String,
    pub active_spec_name: String,
    pub active_spec_role: Role,
    pub thumbnail_url: String,
    pub scores: Scores,
}

/// Profile body as returned by the ranking provider.
#[derive(Debug, Deserialize)]
pub(crate) struct RankingProfile {
    race: String,
    class: String,
    active_spec_name: String,
    active_spec_role: Role,
    #[serde(default)]
    thumbnail_url: String,
    #[serde(default)]
    mythic_plus_scores: RankingScores,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RankingScores {
    all: f64,
    dps: f64,
    healer: f64,
    tank: f64,
    spec_0: f64,
    spec_1: f64,
    spec_2: f64,
    spec_3: f64,
}

impl From<RankingProfile> for ProfileSummary {
    fn from(raw: RankingProfile) -> Self {
        let s = raw.mythic_plus_scores;
        ProfileSummary {
            race: raw.race,
            class: raw.class,
            active_spec_name: raw.active_spec_name,
            active_spec_role: raw.active_spec_role,
            thumbnail_url: raw.thumbnail_url,
            scores: Scores {
                all: s.all,
                dps: s.dps,
                healer: s.healer,
                tank: s.tank,
                per_spec: [s.spec_0, s.spec_1, s.spec_2, s.spec_3],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_selects_metric() {
        assert_eq!(Role::Healer.metric(), Metric::Hps);
        assert_eq!(Role::Dps.metric(), Metric::Dps);
        assert_eq!(Role::Tank.metric(), Metric::Dps);
        assert_eq!(Metric::Hps.as_str(), "hps");
    }

    #[test]
    fn test_ranking_profile_conversion() {
        let body = serde_json::json!({
            "name": "Dyrael",
            "race": "Night Elf",
            "class": "Druid",
            "active_spec_name": "Restoration",
            "active_spec_role": "HEALER",
            "gender": "female",
            "thumbnail_url": "https://render.example/avatar.jpg",
            "mythic_plus_scores": {
                "all": 2450.5, "dps": 1200.0, "healer": 2450.5, "tank": 0.0,
                "spec_0": 0.0, "spec_1": 1200.0, "spec_2": 0.0, "spec_3": 2450.5
            }
        });
        let raw: RankingProfile = serde_json::from_value(body).unwrap();
        let profile = ProfileSummary::from(raw);

        assert_eq!(profile.class, "Druid");
        assert_eq!(profile.active_spec_role, Role::Healer);
        assert_eq!(profile.scores.all, 2450.5);
        assert_eq!(profile.scores.per_spec, [0.0, 1200.0, 0.0, 2450.5]);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let body = serde_json::json!({
            "race": "Human", "class": "Priest",
            "active_spec_name": "Discipline", "active_spec_role": "SUPPORT"
        });
        assert!(serde_json::from_value::<RankingProfile>(body).is_err());
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = ProfileSummary {
            race: "Orc".into(),
            class: "Warrior".into(),
            active_spec_name: "Protection".into(),
            active_spec_role: Role::Tank,
            thumbnail_url: String::new(),
            scores: Scores::default(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["activeSpecRole"], "TANK");
        assert_eq!(value["scores"]["perSpec"].as_array().unwrap().len(), 4);
    }
}
