//! Upstream fetchers of the lookup pipeline.
//!
//! One function per outbound call, plus the pure acceptance and
//! summarization rules applied to what those calls return:
//! - [`fetch_profile`]: ranking profile (fatal when unavailable)
//! - [`fetch_run_index`]: ranked runs of the character
//! - [`fetch_report`] / [`accept_fight`]: fight detail of one run
//! - [`fetch_summary`] / [`summarize`]: dps, hps and deaths of one run

mod fights;
mod profile;
mod run_index;
mod summary;

pub use fights::{accept_fight, fetch_report};
pub use profile::fetch_profile;
pub use run_index::fetch_run_index;
pub use summary::{fetch_summary, summarize, PerformanceMetrics};
