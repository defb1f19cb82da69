//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client shared by every upstream call.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - A per-request timeout only when one is configured
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(Arc::new(builder.build()?))
}
