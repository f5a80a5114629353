use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // One error for unknown email and wrong password alike
    let identity = state
        .account_service
        .authenticate(&body.email, &body.password)
        .await
        .map_err(ApiError::from)?;

    let tokens = state
        .authenticator
        .issue_session(&identity.id.to_string(), identity.username.as_str())
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "Login successful".to_string(),
            access: tokens.access,
            refresh: tokens.refresh,
            username: identity.username.as_str().to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub access: String,
    pub refresh: String,
    pub username: String,
}
