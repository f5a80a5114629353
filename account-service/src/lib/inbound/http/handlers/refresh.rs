use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::UNAUTHORIZED_MESSAGE;
use crate::inbound::http::router::AppState;

pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> Result<ApiSuccess<RefreshResponseData>, ApiError> {
    // Expired, malformed, and wrong-class tokens all get the gate message
    let access = state.authenticator.refresh_access(&body.refresh).map_err(|e| {
        tracing::warn!(error = %e, "Refresh token rejected");
        ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
    })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RefreshResponseData { access },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshRequest {
    refresh: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshResponseData {
    pub access: String,
}
