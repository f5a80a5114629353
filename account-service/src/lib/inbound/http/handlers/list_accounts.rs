use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::Identity;
use crate::domain::identity::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AccountSummaryData>>, ApiError> {
    state
        .account_service
        .list_accounts()
        .await
        .map_err(ApiError::from)
        .map(|identities| {
            ApiSuccess::new(
                StatusCode::OK,
                identities.iter().map(AccountSummaryData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummaryData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

impl From<&Identity> for AccountSummaryData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.as_str().to_string(),
            email: identity.email.as_str().to_string(),
            is_active: identity.is_active,
        }
    }
}
