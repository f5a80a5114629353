use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::AccountId;
use crate::domain::identity::models::Identity;
use crate::domain::identity::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<ApiSuccess<GetAccountResponseData>, ApiError> {
    let account_id =
        AccountId::from_string(&account_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .account_service
        .get_account(&account_id)
        .await
        .map_err(ApiError::from)
        .map(|ref identity| ApiSuccess::new(StatusCode::OK, identity.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetAccountResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

impl From<&Identity> for GetAccountResponseData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.as_str().to_string(),
            email: identity.email.as_str().to_string(),
            is_active: identity.is_active,
        }
    }
}
