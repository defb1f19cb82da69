//! Plain-text table rendering for the `lookup` subcommand.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use colored::Colorize;

use super::stats::DungeonStats;
use crate::config::ANALYTICS_REPORT_VIEWER_URL;
use crate::dungeons::{affix_label, DungeonRegistry};
use crate::models::{InTimeTier, LookupResult, PlayerIdentity, RunResult};

/// Shown instead of the tables when no dungeon has a run left to display.
pub const NO_LOGS_MESSAGE: &str = "No logs found";

/// Link to the damage-done pane of a fight in the public report viewer.
pub fn log_link(report_id: &str, fight_id: u32) -> String {
    format!("{ANALYTICS_REPORT_VIEWER_URL}/{report_id}#fight={fight_id}&type=damage-done")
}

/// `+1`, `+2`, `+3`, or `depleted`.
pub fn chest_label(tier: InTimeTier) -> String {
    if tier.is_timed() {
        format!("+{}", tier.as_u8())
    } else {
        "depleted".to_string()
    }
}

/// UTC calendar date of a run start time in epoch milliseconds.
pub fn run_date(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn deaths_cell(deaths: usize, color: bool) -> String {
    let cell = format!("{deaths:>6}");
    if !color {
        return cell;
    }
    match deaths {
        0 => cell.green().to_string(),
        1 | 2 => cell.yellow().to_string(),
        _ => cell.red().to_string(),
    }
}

fn run_row(run: &RunResult, color: bool) -> String {
    let affixes = run
        .affixes
        .iter()
        .map(|id| affix_label(*id))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "  {:>5}  {:<10}  {:<42}  {:<8}  {:>7}  {:>7}  {}  {}",
        run.key_level,
        run_date(run.timestamp),
        affixes,
        chest_label(run.in_time_tier),
        run.dps,
        run.hps,
        deaths_cell(run.deaths, color),
        log_link(&run.report_id, run.fight_id),
    )
}

/// Renders the profile header and one table per dungeon with runs.
///
/// `result` is rendered as given; display filters are applied beforehand.
pub fn render_table(
    identity: &PlayerIdentity,
    result: &LookupResult,
    registry: &DungeonRegistry,
    color: bool,
) -> String {
    let mut out = String::new();
    let profile = &result.profile;

    let title = identity.display_name();
    let title = if color {
        title.bold().to_string()
    } else {
        title
    };
    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "{} {} {}, ranked by {}, score {:.1}",
        profile.race,
        profile.active_spec_name,
        profile.class,
        profile.active_spec_role.metric().as_str(),
        profile.scores.all
    );

    if !result.has_runs() {
        let _ = writeln!(out, "\n{NO_LOGS_MESSAGE}");
        return out;
    }

    for dungeon in result.per_dungeon_results.iter().filter(|d| !d.runs.is_empty()) {
        let name = registry
            .get(dungeon.dungeon_id)
            .map(|d| format!("{} ({})", d.name, d.slug))
            .unwrap_or_else(|| dungeon.dungeon_id.to_string());
        let stats = DungeonStats::from_runs(&dungeon.runs);

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}  runs: {}  in time: {}%  avg dps: {}  avg hps: {}  avg deaths: {}",
            if color { name.bold().to_string() } else { name },
            stats.runs,
            stats.in_time_percent,
            stats.avg_dps,
            stats.avg_hps,
            stats.avg_deaths
        );
        let _ = writeln!(
            out,
            "  {:>5}  {:<10}  {:<42}  {:<8}  {:>7}  {:>7}  {:>6}  {}",
            "Level", "Date", "Affixes", "Chest", "DPS", "HPS", "Deaths", "Log"
        );
        for run in &dungeon.runs {
            let _ = writeln!(out, "{}", run_row(run, color));
        }
    }

    out
}
