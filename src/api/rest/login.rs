//! Sign-in endpoint

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::auth::AuthError;
use crate::api::state::AppState;

/// Request body for `POST /auth/token`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/token - Exchange credentials for an access token
pub async fn issue_token(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request: LoginRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => return ApiError::invalid_json().into_response(),
    };

    // bcrypt verification is CPU-bound; keep it off the async workers
    let auth = Arc::clone(&state.auth);
    let username = request.username.clone();
    let result = tokio::task::spawn_blocking(move || {
        let user = auth.authenticate(&request.username, &request.password)?;
        auth.issue_token(user)
    })
    .await;

    match result {
        Ok(Ok(token)) => {
            tracing::info!(username = %username, "Issued access token");
            Json(ApiResponse::new(token)).into_response()
        }
        Ok(Err(AuthError::InvalidCredentials)) => {
            tracing::info!(username = %username, "Failed sign-in");
            ApiError::unauthorized(AuthError::InvalidCredentials.to_string()).into_response()
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Failed to issue token");
            ApiError::internal("Failed to issue token").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Sign-in task failed");
            ApiError::internal("Failed to issue token").into_response()
        }
    }
}
