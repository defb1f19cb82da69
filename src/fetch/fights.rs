//! Fight detail resolver.

use crate::error_handling::{DropReason, Unavailable};
use crate::models::{FightDetail, Report};
use crate::upstream::{Endpoint, Upstream};

/// Fetches the fight list of a report.
pub async fn fetch_report(upstream: &Upstream, report_id: &str) -> Result<Report, Unavailable> {
    upstream
        .fetch(&Endpoint::ReportFights { report_id })
        .await
}

/// Locates a fight in a report and applies the acceptance rules.
///
/// A fight is rejected when it is missing, has no (or a zero) keystone level,
/// is below `min_keystone_level`, or has no (or a zero) completion time.
pub fn accept_fight(
    report: &Report,
    fight_id: u32,
    min_keystone_level: u32,
) -> Result<FightDetail, DropReason> {
    let fight = report
        .fights
        .iter()
        .find(|fight| fight.id == fight_id)
        .ok_or(DropReason::FightNotFound)?;

    let keystone_level = match fight.keystone_level {
        None | Some(0) => return Err(DropReason::MissingKeystoneLevel),
        Some(level) if level < min_keystone_level => return Err(DropReason::BelowMinimumLevel),
        Some(level) => level,
    };

    let completion_time_ms = match fight.completion_time {
        None | Some(0) => return Err(DropReason::MissingCompletionTime),
        Some(time) => time,
    };

    Ok(FightDetail {
        fight_id: fight.id,
        boss: fight.boss,
        completion_time_ms,
        keystone_level,
        affixes: fight.affixes.clone().unwrap_or_default(),
        start_time: fight.start_time,
        end_time: fight.end_time,
    })
}
