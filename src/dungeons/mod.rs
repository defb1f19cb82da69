//! Dungeon registry and timer classification.
//!
//! The registry is built once and shared behind an `Arc`; nothing mutates it
//! after construction. Its order is the order dungeons appear in lookup
//! results.

mod affixes;

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{PLUS_THREE_NUMERATOR, PLUS_TWO_NUMERATOR, TIER_DENOMINATOR};
use crate::models::InTimeTier;

pub use affixes::{affix_label, affix_name};

/// Completion-time thresholds in milliseconds, `plus_one > plus_two > plus_three`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBudget {
    pub plus_one: u64,
    pub plus_two: u64,
    pub plus_three: u64,
}

impl TimeBudget {
    /// Derives the three tiers from the base timer: 100%, 80% and 60%.
    pub fn from_minutes(minutes: u64) -> Self {
        let timer = minutes * 60 * 1000;
        TimeBudget {
            plus_one: timer,
            plus_two: timer * PLUS_TWO_NUMERATOR / TIER_DENOMINATOR,
            plus_three: timer * PLUS_THREE_NUMERATOR / TIER_DENOMINATOR,
        }
    }

    /// Classifies a completion time against this budget (boundaries inclusive).
    pub fn classify(&self, completion_time_ms: u64) -> InTimeTier {
        if completion_time_ms <= self.plus_three {
            InTimeTier::PlusThree
        } else if completion_time_ms <= self.plus_two {
            InTimeTier::PlusTwo
        } else if completion_time_ms <= self.plus_one {
            InTimeTier::PlusOne
        } else {
            InTimeTier::Depleted
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonDefinition {
    /// Encounter identifier used by the analytics provider
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub budget: TimeBudget,
}

impl DungeonDefinition {
    pub fn new(id: u32, name: &str, slug: &str, timer_minutes: u64) -> Self {
        DungeonDefinition {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            budget: TimeBudget::from_minutes(timer_minutes),
        }
    }
}

/// Immutable table of known dungeons.
#[derive(Debug, Clone)]
pub struct DungeonRegistry {
    dungeons: Vec<DungeonDefinition>,
    index: HashMap<u32, usize>,
}

impl DungeonRegistry {
    pub fn new(dungeons: Vec<DungeonDefinition>) -> Self {
        let index = dungeons
            .iter()
            .enumerate()
            .map(|(position, dungeon)| (dungeon.id, position))
            .collect();
        DungeonRegistry { dungeons, index }
    }

    /// The Shadowlands season one dungeon pool.
    pub fn shadowlands() -> Self {
        Self::new(vec![
            DungeonDefinition::new(12284, "Sanguine Depths", "SD", 41),
            DungeonDefinition::new(12285, "Spires of Ascension", "SoA", 39),
            DungeonDefinition::new(12286, "The Necrotic Wake", "NW", 36),
            DungeonDefinition::new(12287, "Halls of Atonement", "HoA", 31),
            DungeonDefinition::new(12289, "Plaguefall", "PF", 38),
            DungeonDefinition::new(12290, "Mists of Tirna Scithe", "MoTS", 30),
            DungeonDefinition::new(12291, "De Other Side", "DOS", 43),
            DungeonDefinition::new(12293, "Theatre of Pain", "TOP", 37),
        ])
    }

    /// Shared handle to the default registry.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::shadowlands())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DungeonDefinition> {
        self.dungeons.iter()
    }

    pub fn len(&self) -> usize {
        self.dungeons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dungeons.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&DungeonDefinition> {
        self.index.get(&id).map(|&position| &self.dungeons[position])
    }

    /// Timer tier of a completion in the given dungeon, `None` for unknown dungeons.
    pub fn classify(&self, boss: u32, completion_time_ms: u64) -> Option<InTimeTier> {
        self.get(boss)
            .map(|dungeon| dungeon.budget.classify(completion_time_ms))
    }
}

impl Default for DungeonRegistry {
    fn default() -> Self {
        Self::shadowlands()
    }
}
