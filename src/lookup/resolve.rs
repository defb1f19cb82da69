//! Per-reference resolution chain: fight detail, then combat summary.

use futures::future::join_all;

use super::Aggregator;
use crate::error_handling::{DropReason, DropStats};
use crate::fetch::{accept_fight, fetch_report, fetch_summary, summarize};
use crate::models::{DungeonResults, NormalizedRunReference, RunResult};
use crate::normalize::DungeonReferences;

impl Aggregator {
    /// Resolves all references of a dungeon concurrently, keeping their order.
    pub(super) async fn resolve_dungeon(
        &self,
        group: &DungeonReferences,
        match_name: &str,
        drops: &DropStats,
    ) -> DungeonResults {
        let resolved = join_all(
            group
                .references
                .iter()
                .map(|reference| self.resolve_reference(reference, match_name, drops)),
        )
        .await;

        DungeonResults {
            dungeon_id: group.dungeon_id,
            runs: resolved.into_iter().flatten().collect(),
        }
    }

    async fn resolve_reference(
        &self,
        reference: &NormalizedRunReference,
        match_name: &str,
        drops: &DropStats,
    ) -> Option<RunResult> {
        match self.try_resolve(reference, match_name).await {
            Ok(run) => Some(run),
            Err(reason) => {
                log::debug!(
                    "Dropping report {} fight {}: {reason}",
                    reference.report_id,
                    reference.fight_id
                );
                drops.record(reason);
                None
            }
        }
    }

    async fn try_resolve(
        &self,
        reference: &NormalizedRunReference,
        match_name: &str,
    ) -> Result<RunResult, DropReason> {
        let report = fetch_report(&self.upstream, &reference.report_id)
            .await
            .map_err(|_| DropReason::ReportUnavailable)?;

        let fight = accept_fight(
            &report,
            reference.fight_id,
            self.settings.min_keystone_level,
        )?;

        let in_time_tier = self
            .registry
            .classify(fight.boss, fight.completion_time_ms)
            .ok_or(DropReason::UnknownDungeon)?;

        let summary = fetch_summary(&self.upstream, &reference.report_id, &fight)
            .await
            .map_err(|_| DropReason::SummaryUnavailable)?;

        let metrics = summarize(
            &summary,
            match_name,
            self.settings.min_summary_duration_ms,
        )?;

        Ok(RunResult {
            dps: metrics.dps,
            hps: metrics.hps,
            deaths: metrics.deaths,
            key_level: fight.keystone_level,
            report_id: reference.report_id.clone(),
            fight_id: fight.fight_id,
            affixes: fight.affixes,
            in_time_tier,
            timestamp: reference.start_time,
        })
    }
}
