//! keystone_lookup library: mythic+ run lookup for a single character
//!
//! This library merges a character's ranking profile (raider.io) with the
//! ranked runs, fight details and combat summaries of the analytics provider
//! (warcraftlogs) into a per-dungeon list of runs, each classified against
//! the dungeon's timer.
//!
//! # Example
//!
//! ```no_run
//! use keystone_lookup::{Aggregator, Config, PlayerIdentity, Region};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     analytics_api_key: std::env::var("WARCRAFTLOGS_API_KEY").ok(),
//!     ..Default::default()
//! };
//! let aggregator = Aggregator::new(&config)?;
//!
//! let identity = PlayerIdentity::new(Region::Eu, "blackmoore", "Dyrael");
//! match aggregator.lookup(&identity).await {
//!     Some(result) => println!("{} runs", result.total_runs()),
//!     None => println!("profile unavailable"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod dungeons;
pub mod error_handling;
pub mod fetch;
pub mod history;
pub mod initialization;
pub mod lookup;
pub mod models;
pub mod normalize;
pub mod report;
pub mod server;
pub mod upstream;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dungeons::{DungeonDefinition, DungeonRegistry, TimeBudget};
pub use error_handling::{DropReason, DropStats, InitializationError, Unavailable};
pub use lookup::{Aggregator, LookupOutcome, LookupSettings};
pub use models::{
    DungeonResults, InTimeTier, LookupResult, PlayerIdentity, ProfileSummary, Region, Role,
    RunResult,
};
