//! Presentation of lookup results for the command line.
//!
//! Nothing here feeds back into the lookup itself: filters and statistics
//! work on a finished [`LookupResult`].

mod filter;
mod stats;
mod table;

pub use filter::DisplayFilter;
pub use stats::DungeonStats;
pub use table::{chest_label, log_link, render_table, run_date, NO_LOGS_MESSAGE};

use crate::models::LookupResult;

/// Pretty-printed JSON of the result, in the wire shape of the HTTP endpoint.
pub fn render_json(result: &LookupResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
