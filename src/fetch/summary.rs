//! Performance summarizer.

use crate::error_handling::{DropReason, Unavailable};
use crate::models::{CombatSummary, FightDetail, SummaryEntry};
use crate::upstream::{Endpoint, Upstream};

/// Per-run metrics derived from a combat summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceMetrics {
    pub dps: u64,
    pub hps: u64,
    pub deaths: usize,
}

/// Fetches the combat summary for the fight's time window.
pub async fn fetch_summary(
    upstream: &Upstream,
    report_id: &str,
    fight: &FightDetail,
) -> Result<CombatSummary, Unavailable> {
    upstream
        .fetch(&Endpoint::FightSummary {
            report_id,
            start: fight.start_time,
            end: fight.end_time,
        })
        .await
}

/// Derives dps, hps and deaths of one player from a summary.
///
/// `match_name` must already be lowercased. Totals are divided by the
/// summary's tracked duration in seconds and rounded; a player without a
/// damage or healing entry scores 0. Summaries shorter than
/// `min_duration_ms` are rejected as broken logs.
pub fn summarize(
    summary: &CombatSummary,
    match_name: &str,
    min_duration_ms: u64,
) -> Result<PerformanceMetrics, DropReason> {
    if summary.total_time == 0 || summary.total_time < min_duration_ms {
        return Err(DropReason::SummaryTooShort);
    }

    let seconds = summary.total_time as f64 / 1000.0;
    let per_second = |entries: &[SummaryEntry]| -> u64 {
        let total = entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == match_name)
            .map(|entry| entry.total)
            .unwrap_or(0.0);
        (total / seconds).round().max(0.0) as u64
    };

    let deaths = summary
        .death_events
        .iter()
        .filter(|event| event.name.to_lowercase() == match_name)
        .count();

    Ok(PerformanceMetrics {
        dps: per_second(&summary.damage_done),
        hps: per_second(&summary.healing_done),
        deaths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_SUMMARY_DURATION_MS;
    use serde_json::json;

    fn summary(value: serde_json::Value) -> CombatSummary {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_dps_rounding() {
        let s = summary(json!({
            "totalTime": 300_000,
            "damageDone": [{"name": "Dyrael", "total": 1_500_000.0}],
            "healingDone": [{"name": "Dyrael", "total": 1_000_150.0}],
            "deathEvents": []
        }));
        let metrics = summarize(&s, "dyrael", MIN_SUMMARY_DURATION_MS).unwrap();
        assert_eq!(metrics.dps, 5000);
        // 3333.83 rounds up
        assert_eq!(metrics.hps, 3334);
    }

    #[test]
    fn test_two_hundred_second_fight() {
        // Duration check disabled to exercise the arithmetic in isolation
        let s = summary(json!({
            "totalTime": 200_000,
            "damageDone": [{"name": "dyrael", "total": 1_000_000.0}]
        }));
        let metrics = summarize(&s, "dyrael", 0).unwrap();
        assert_eq!(metrics.dps, 5000);
        assert_eq!(metrics.hps, 0);
    }

    #[test]
    fn test_absent_player_scores_zero() {
        let s = summary(json!({
            "totalTime": 1_800_000,
            "damageDone": [{"name": "Someone", "total": 9_000_000.0}],
            "healingDone": []
        }));
        let metrics = summarize(&s, "dyrael", MIN_SUMMARY_DURATION_MS).unwrap();
        assert_eq!(metrics, PerformanceMetrics { dps: 0, hps: 0, deaths: 0 });
    }

    #[test]
    fn test_deaths_match_case_insensitively() {
        let s = summary(json!({
            "totalTime": 1_800_000,
            "deathEvents": [
                {"name": "DYRAEL"}, {"name": "Other"}, {"name": "dyrael"}, {"name": "Dyraell"}
            ]
        }));
        let metrics = summarize(&s, "dyrael", MIN_SUMMARY_DURATION_MS).unwrap();
        assert_eq!(metrics.deaths, 2);
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let s = summary(json!({
            "totalTime": 1_000_000,
            "damageDone": [
                {"name": "Dyrael", "total": 2_000_000.0},
                {"name": "dyrael", "total": 9_000_000.0}
            ]
        }));
        assert_eq!(summarize(&s, "dyrael", 0).unwrap().dps, 2000);
    }

    #[test]
    fn test_duration_boundary() {
        let short = summary(json!({"totalTime": 299_999}));
        assert_eq!(
            summarize(&short, "dyrael", MIN_SUMMARY_DURATION_MS),
            Err(DropReason::SummaryTooShort)
        );

        let exact = summary(json!({"totalTime": 300_000}));
        assert!(summarize(&exact, "dyrael", MIN_SUMMARY_DURATION_MS).is_ok());
    }

    #[test]
    fn test_zero_duration_is_rejected_even_without_minimum() {
        let empty = summary(json!({"totalTime": 0}));
        assert_eq!(
            summarize(&empty, "dyrael", 0),
            Err(DropReason::SummaryTooShort)
        );
    }
}
