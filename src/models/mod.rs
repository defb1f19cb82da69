//! Data model shared by the pipeline, the presentation layer and the server.

mod analytics;
mod identity;
mod profile;
mod result;

pub use analytics::{
    CombatSummary, DeathEvent, Fight, FightDetail, NormalizedRunReference, RawRunReference, Report,
    SummaryEntry,
};
pub use identity::{PlayerIdentity, Region};
pub(crate) use profile::RankingProfile;
pub use profile::{Metric, ProfileSummary, Role, Scores};
pub use result::{DungeonResults, InTimeTier, LookupResult, RunResult};
