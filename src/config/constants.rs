//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: upstream
//! endpoints, acceptance thresholds for resolved runs, and presentation limits.

/// Base URL of the ranking provider (raider.io API v1)
pub const DEFAULT_RANKING_BASE_URL: &str = "https://raider.io/api/v1";

/// Base URL of the analytics provider (warcraftlogs API v1)
pub const DEFAULT_ANALYTICS_BASE_URL: &str = "https://www.warcraftlogs.com/v1";

/// Public report viewer, used to build log links in the table output
pub const ANALYTICS_REPORT_VIEWER_URL: &str = "https://www.warcraftlogs.com/reports";

/// Environment variable holding the analytics provider API key
pub const ANALYTICS_API_KEY_ENV: &str = "WARCRAFTLOGS_API_KEY";

/// Field set requested from the ranking provider's profile endpoint
pub const PROFILE_FIELDS: &str = "mythic_plus_scores";

/// Zone identifier of the dungeon season in the analytics provider
pub const DEFAULT_PARSES_ZONE: u32 = 25;

// Run acceptance
/// Minimum keystone level (inclusive) for a fight to produce a run result
pub const MIN_KEYSTONE_LEVEL: u32 = 15;
/// Minimum tracked summary duration in milliseconds (inclusive).
/// Shorter summaries are broken or partial logs.
pub const MIN_SUMMARY_DURATION_MS: u64 = 5 * 60 * 1000;

// Timer tiers, as fractions of the base timer
/// +2 threshold: 80% of the base timer
pub const PLUS_TWO_NUMERATOR: u64 = 4;
/// +3 threshold: 60% of the base timer
pub const PLUS_THREE_NUMERATOR: u64 = 3;
/// Shared denominator for the tier fractions
pub const TIER_DENOMINATOR: u64 = 5;

// HTTP endpoint
/// Default `Expires` window for lookup responses, in seconds
pub const DEFAULT_CACHE_SECONDS: u64 = 180;
/// Default port for the `serve` subcommand
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// Search history
/// Maximum number of remembered lookups
pub const HISTORY_CAPACITY: usize = 10;
/// Default search history file
pub const DEFAULT_HISTORY_FILE: &str = ".keystone_lookup_history.json";

/// Default User-Agent string for upstream requests.
pub const DEFAULT_USER_AGENT: &str = concat!("keystone_lookup/", env!("CARGO_PKG_VERSION"));
