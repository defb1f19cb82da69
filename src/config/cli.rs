//! Command-line options.
//!
//! These types are parsed by `clap` in the binary and converted into the
//! library [`Config`]. They live in the library so the parsing rules can be
//! tested without spawning the binary.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    ANALYTICS_API_KEY_ENV, DEFAULT_ANALYTICS_BASE_URL, DEFAULT_CACHE_SECONDS,
    DEFAULT_HISTORY_FILE, DEFAULT_RANKING_BASE_URL, DEFAULT_SERVER_PORT, DEFAULT_USER_AGENT,
    MIN_KEYSTONE_LEVEL,
};
use crate::config::types::{Config, LogFormat, LogLevel, OutputFormat};
use crate::models::{PlayerIdentity, Region};

/// Top-level command line.
///
/// ```bash
/// # Table of a character's best runs per dungeon
/// keystone_lookup lookup eu blackmoore Dyrael
///
/// # Offline, from recorded upstream responses
/// keystone_lookup --fixtures fixtures/demo lookup eu blackmoore Dyrael --output json
///
/// # HTTP endpoint
/// keystone_lookup serve --port 3000
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "keystone_lookup",
    version,
    about = "Shows a character's mythic+ runs per dungeon, merged from raider.io and warcraftlogs."
)]
pub struct Cli {
    #[command(flatten)]
    pub upstream: UpstreamArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct UpstreamArgs {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Ranking provider base URL
    #[arg(long, global = true, default_value = DEFAULT_RANKING_BASE_URL)]
    pub ranking_url: String,

    /// Analytics provider base URL
    #[arg(long, global = true, default_value = DEFAULT_ANALYTICS_BASE_URL)]
    pub analytics_url: String,

    /// Analytics provider API key
    #[arg(long, global = true, env = ANALYTICS_API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Serve upstream responses from a fixture directory instead of the network
    #[arg(long, global = true, value_parser)]
    pub fixtures: Option<PathBuf>,
}

impl UpstreamArgs {
    /// Builds the library configuration from the parsed options.
    pub fn to_config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            ranking_base_url: self.ranking_url.clone(),
            analytics_base_url: self.analytics_url.clone(),
            analytics_api_key: self.api_key.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            fixtures_dir: self.fixtures.clone(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a character and print its runs
    Lookup(LookupArgs),
    /// Serve lookups over HTTP
    Serve(ServeArgs),
    /// Show or edit the search history
    History(HistoryArgs),
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Region: eu|us|kr|tw|cn
    #[arg(value_enum, ignore_case = true)]
    pub region: Region,

    /// Realm name
    pub realm: String,

    /// Character name
    pub character: String,

    /// Output format: table|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Hide runs below this keystone level
    #[arg(long, default_value_t = MIN_KEYSTONE_LEVEL)]
    pub min_level: u32,

    /// Hide runs that were not completed in time
    #[arg(long)]
    pub timed_only: bool,

    /// Disable colored table output
    #[arg(long)]
    pub no_color: bool,

    /// Search history file
    #[arg(long, value_parser, default_value = DEFAULT_HISTORY_FILE)]
    pub history_file: PathBuf,

    /// Do not record this lookup in the search history
    #[arg(long)]
    pub no_history: bool,
}

impl LookupArgs {
    pub fn identity(&self) -> PlayerIdentity {
        PlayerIdentity::new(self.region, &self.realm, &self.character)
    }
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_SERVER_PORT)]
    pub port: u16,

    /// Seconds clients may cache a lookup response (0 disables the Expires header)
    #[arg(long, default_value_t = DEFAULT_CACHE_SECONDS)]
    pub cache_seconds: u64,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Search history file
    #[arg(long, value_parser, default_value = DEFAULT_HISTORY_FILE)]
    pub history_file: PathBuf,

    /// Remove the entry at this position (as listed, starting at 0)
    #[arg(long)]
    pub remove: Option<usize>,
}
