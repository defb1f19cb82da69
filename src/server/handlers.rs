//! Lookup endpoint handler.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Duration, Utc};

use super::types::{ErrorResponse, LookupQuery, ServerState};
use crate::models::{PlayerIdentity, Region};

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// `Expires` value `seconds` from now, in IMF-fixdate form.
pub fn expires_header(seconds: u64) -> Option<HeaderValue> {
    let seconds = i64::try_from(seconds).ok()?;
    let at = Utc::now().checked_add_signed(Duration::try_seconds(seconds)?)?;
    HeaderValue::from_str(&at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()).ok()
}

fn required(value: Option<String>, name: &str) -> Result<String, Response> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(bad_request(format!("missing parameter: {name}"))),
    }
}

/// Validates the query into a player identity.
pub fn identity_from_query(query: LookupQuery) -> Result<PlayerIdentity, Response> {
    let region = required(query.region, "region")?;
    let region = region
        .parse::<Region>()
        .map_err(|_| bad_request(format!("unknown region: {region}")))?;
    let realm = required(query.realm, "realm")?;
    let character = required(query.character, "character")?;
    Ok(PlayerIdentity::new(region, realm, character))
}

/// `GET /api/lookup?region=..&realm=..&character=..`
pub async fn lookup_handler(
    State(state): State<ServerState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    let identity = match identity_from_query(query) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    let outcome = state.aggregator.lookup_detailed(&identity).await;
    let Some(result) = outcome.result else {
        let reason = outcome
            .profile_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        return bad_request(format!("profile of {identity} unavailable: {reason}"));
    };

    let mut response = (StatusCode::OK, Json(result)).into_response();
    if state.cache_seconds > 0 {
        if let Some(expires) = expires_header(state.cache_seconds) {
            response.headers_mut().insert(header::EXPIRES, expires);
        }
    }
    response
}
