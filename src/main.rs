//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `keystone_lookup` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting and the search history
//!
//! All core functionality is implemented in the library crate.

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use keystone_lookup::config::{Cli, Command, HistoryArgs, LookupArgs, ServeArgs};
use keystone_lookup::history::SearchHistory;
use keystone_lookup::initialization::init_logger_with;
use keystone_lookup::report::{render_json, render_table, DisplayFilter};
use keystone_lookup::server::{start_server, ServerState};
use keystone_lookup::{Aggregator, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting WARCRAFTLOGS_API_KEY in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = cli.upstream.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match cli.command {
        Command::Lookup(args) => run_lookup(&config, args).await,
        Command::Serve(args) => run_serve(&config, args).await,
        Command::History(args) => run_history(args).await,
    };

    if let Err(e) = outcome {
        eprintln!("keystone_lookup error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run_lookup(config: &Config, args: LookupArgs) -> Result<()> {
    let aggregator = Aggregator::new(config).context("Failed to initialize upstream")?;
    let identity = args.identity();

    let outcome = aggregator.lookup_detailed(&identity).await;
    let Some(result) = outcome.result else {
        let reason = outcome
            .profile_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        anyhow::bail!("Could not find {}: {}", identity, reason);
    };

    let filter = DisplayFilter {
        min_level: args.min_level,
        timed_only: args.timed_only,
    };
    let shown = filter.apply(&result);

    match args.output {
        OutputFormat::Json => {
            println!("{}", render_json(&shown).context("Failed to encode result")?)
        }
        OutputFormat::Table => print!(
            "{}",
            render_table(&identity, &shown, aggregator.registry(), !args.no_color)
        ),
    }

    if !args.no_history {
        // History is a convenience; a broken file must not fail the lookup
        match SearchHistory::load(&args.history_file).await {
            Ok(mut history) => {
                history.record(&identity);
                if let Err(e) = history.save().await {
                    log::warn!("Failed to save search history: {}", e);
                }
            }
            Err(e) => log::warn!(
                "Failed to read search history {}: {}",
                args.history_file.display(),
                e
            ),
        }
    }

    Ok(())
}

async fn run_serve(config: &Config, args: ServeArgs) -> Result<()> {
    let aggregator = Aggregator::new(config).context("Failed to initialize upstream")?;
    let state = ServerState {
        aggregator: Arc::new(aggregator),
        cache_seconds: args.cache_seconds,
    };
    start_server(SocketAddr::new(args.bind, args.port), state).await
}

async fn run_history(args: HistoryArgs) -> Result<()> {
    let mut history = SearchHistory::load(&args.history_file)
        .await
        .with_context(|| format!("Failed to read {}", args.history_file.display()))?;

    if let Some(index) = args.remove {
        let removed = history
            .remove(index)
            .with_context(|| format!("No history entry at position {}", index))?;
        history.save().await.context("Failed to save search history")?;
        println!("Removed {}", removed.identity());
    }

    if history.is_empty() {
        println!("No previous searches");
    }
    for (i, entry) in history.entries().iter().enumerate() {
        println!("{:>2}  {}", i, entry.identity());
    }
    Ok(())
}
