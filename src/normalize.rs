//! Run index normalization.
//!
//! Groups the raw run index by dungeon, in registry order, and reduces every
//! entry to the `(report, fight, start time)` pointer the resolver needs.

use std::cmp::Ordering;

use crate::dungeons::DungeonRegistry;
use crate::models::{NormalizedRunReference, RawRunReference};

/// Run references of one dungeon, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonReferences {
    pub dungeon_id: u32,
    pub references: Vec<NormalizedRunReference>,
}

/// Ordering of runs within a dungeon: highest keystone level first, and
/// among equal levels the most recent start time first.
pub fn run_order(a: &RawRunReference, b: &RawRunReference) -> Ordering {
    b.keystone_level
        .total_cmp(&a.keystone_level)
        .then_with(|| b.start_time.cmp(&a.start_time))
}

/// Produces one entry per registry dungeon, including dungeons without runs.
///
/// Runs whose encounter is not in the registry are discarded.
pub fn normalize_run_index(
    registry: &DungeonRegistry,
    runs: &[RawRunReference],
) -> Vec<DungeonReferences> {
    registry
        .iter()
        .map(|dungeon| {
            let mut matching: Vec<&RawRunReference> = runs
                .iter()
                .filter(|run| run.encounter_id == dungeon.id)
                .collect();
            // Full ties go to the later run index entry
            matching.reverse();
            matching.sort_by(|a, b| run_order(a, b));

            log::debug!(
                "{} ({}): {} run reference(s)",
                dungeon.name,
                dungeon.id,
                matching.len()
            );

            DungeonReferences {
                dungeon_id: dungeon.id,
                references: matching
                    .into_iter()
                    .cloned()
                    .map(NormalizedRunReference::from)
                    .collect(),
            }
        })
        .collect()
}
