//! Lookup endpoint data structures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::lookup::Aggregator;

/// Shared state of the lookup server.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub aggregator: Arc<Aggregator>,
    /// Lifetime announced in the `Expires` header; 0 omits the header
    pub cache_seconds: u64,
}

/// Query string of `GET /api/lookup`.
///
/// Fields are optional so missing parameters reach the handler and get the
/// same error body as invalid ones.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub region: Option<String>,
    pub realm: Option<String>,
    pub character: Option<String>,
}

/// JSON body of every non-200 response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
