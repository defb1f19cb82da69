//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - HTTP client
//! - Upstream data source (live or fixtures)
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::upstream::{FixtureUpstream, HttpUpstream, Upstream};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the upstream data source selected by the configuration.
///
/// A configured fixture directory replaces every live call; otherwise an HTTP
/// client is built for both providers.
///
/// # Errors
///
/// Returns an error if the fixture directory is missing, a base URL does not
/// parse, or the HTTP client cannot be built.
pub fn init_upstream(config: &Config) -> Result<Arc<Upstream>, InitializationError> {
    if let Some(root) = &config.fixtures_dir {
        if !root.is_dir() {
            return Err(InitializationError::FixtureRootError(
                root.display().to_string(),
            ));
        }
        log::info!("Using fixture data from {}", root.display());
        return Ok(Arc::new(Upstream::Fixtures(FixtureUpstream::new(
            root.clone(),
        ))));
    }

    let client = init_client(config)?;
    let http = HttpUpstream::new(
        client,
        &config.ranking_base_url,
        &config.analytics_base_url,
        config.analytics_api_key.clone(),
    )?;
    if config.analytics_api_key.is_none() {
        log::warn!("No analytics API key configured; run data requests will likely be rejected");
    }
    Ok(Arc::new(Upstream::Http(http)))
}
