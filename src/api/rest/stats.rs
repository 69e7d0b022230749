//! Stat event endpoints

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::{ApiError, ApiResponse};
use crate::api::auth::AuthError;
use crate::api::state::AppState;
use crate::event_store::StatFilter;
use crate::validation::NewStat;

/// First value for `key` in the query string
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// GET /api/stats?player=&set= - List events in insertion order
///
/// Never fails: an unusable `set` value simply leaves the set filter off.
pub async fn list_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let filter = StatFilter::from_query(first_param(&params, "player"), first_param(&params, "set"));
    let events = state.store.list(&filter);

    tracing::debug!(?filter, count = events.len(), "Listed stats");
    Json(ApiResponse::new(events))
}

/// POST /api/stats - Record one event
///
/// The body is parsed as JSON whatever its content type.
pub async fn create_stat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if state.require_auth {
        if let Err(e) = check_authorization(&state, &headers) {
            tracing::debug!(error = %e, "Rejected unauthenticated create");
            return ApiError::unauthorized(e.to_string()).into_response();
        }
    }

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected malformed create body");
            return ApiError::invalid_json().into_response();
        }
    };

    let stat = match NewStat::from_json(&payload) {
        Ok(stat) => stat,
        Err(e) => {
            tracing::debug!(reason = %e, "Rejected create");
            return ApiError::bad_request(e.to_string()).into_response();
        }
    };

    let event = stat.into_event();
    state.store.append(event.clone());

    tracing::info!(
        id = %event.id,
        player = %event.player,
        kind = %event.kind,
        set = %event.set_number,
        "Recorded stat"
    );

    (StatusCode::CREATED, Json(ApiResponse::new(event))).into_response()
}

fn check_authorization(state: &AppState, headers: &HeaderMap) -> Result<(), AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    state.auth.validate_authorization(header).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_param_takes_first_value() {
        let params = vec![
            ("set".to_string(), "2".to_string()),
            ("player".to_string(), "Sam".to_string()),
            ("set".to_string(), "3".to_string()),
        ];
        assert_eq!(first_param(&params, "set"), Some("2"));
        assert_eq!(first_param(&params, "player"), Some("Sam"));
        assert_eq!(first_param(&params, "kind"), None);
    }
}
