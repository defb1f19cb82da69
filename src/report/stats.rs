//! Per-dungeon statistics shown above each table.

use crate::models::RunResult;

/// Aggregates over the (filtered) runs of one dungeon.
///
/// Averages only consider timed runs; depleted keys are counted in
/// `runs` and lower `in_time_percent` but do not drag the averages down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DungeonStats {
    pub runs: usize,
    pub timed: usize,
    pub in_time_percent: u32,
    pub avg_dps: u64,
    pub avg_hps: u64,
    pub avg_deaths: u64,
}

impl DungeonStats {
    pub fn from_runs(runs: &[RunResult]) -> Self {
        let timed: Vec<&RunResult> = runs.iter().filter(|r| r.in_time_tier.is_timed()).collect();
        if runs.is_empty() {
            return DungeonStats::default();
        }

        let in_time_percent = ((timed.len() as f64 / runs.len() as f64) * 100.0).round() as u32;
        let average = |value: fn(&RunResult) -> f64| -> u64 {
            if timed.is_empty() {
                return 0;
            }
            let sum: f64 = timed.iter().map(|r| value(r)).sum();
            (sum / timed.len() as f64).round() as u64
        };

        DungeonStats {
            runs: runs.len(),
            timed: timed.len(),
            in_time_percent,
            avg_dps: average(|r| r.dps as f64),
            avg_hps: average(|r| r.hps as f64),
            avg_deaths: average(|r| r.deaths as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InTimeTier;

    fn run(tier: InTimeTier, dps: u64, deaths: usize) -> RunResult {
        RunResult {
            dps,
            hps: 100,
            deaths,
            key_level: 16,
            report_id: "r".into(),
            fight_id: 1,
            affixes: vec![],
            in_time_tier: tier,
            timestamp: 0,
        }
    }

    #[test]
    fn test_no_runs() {
        assert_eq!(DungeonStats::from_runs(&[]), DungeonStats::default());
    }

    #[test]
    fn test_averages_ignore_depleted_runs() {
        let runs = vec![
            run(InTimeTier::PlusTwo, 4000, 1),
            run(InTimeTier::PlusOne, 5000, 2),
            run(InTimeTier::Depleted, 100, 9),
        ];
        let stats = DungeonStats::from_runs(&runs);
        assert_eq!(stats.runs, 3);
        assert_eq!(stats.timed, 2);
        assert_eq!(stats.in_time_percent, 67);
        assert_eq!(stats.avg_dps, 4500);
        assert_eq!(stats.avg_hps, 100);
        // 1.5 rounds away from zero
        assert_eq!(stats.avg_deaths, 2);
    }

    #[test]
    fn test_only_depleted_runs() {
        let stats = DungeonStats::from_runs(&[run(InTimeTier::Depleted, 3000, 4)]);
        assert_eq!(stats.in_time_percent, 0);
        assert_eq!(stats.avg_dps, 0);
        assert_eq!(stats.avg_deaths, 0);
    }
}
