use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::identity::models::AccountId;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::UpdateAccountCommand;
use crate::domain::identity::models::Username;
use crate::identity::errors::IdentityError;
use crate::identity::ports::AccountServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for a partial account update (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}

impl UpdateAccountRequest {
    fn try_into_command(self) -> Result<UpdateAccountCommand, IdentityError> {
        let username = self.username.map(Username::new).transpose()?;

        let email = self.email.map(EmailAddress::new).transpose()?;

        // The password stays out of the plain-field set; the service hashes
        // it through the dedicated path
        Ok(UpdateAccountCommand {
            username,
            email,
            is_active: self.is_active,
            password: self.password,
        })
    }
}

/// Response body for account update
#[derive(Debug, Serialize, PartialEq)]
pub struct AccountResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

impl From<Identity> for AccountResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.as_str().to_string(),
            email: identity.email.as_str().to_string(),
            is_active: identity.is_active,
        }
    }
}

pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<ApiSuccess<AccountResponse>, ApiError> {
    let account_id = AccountId::from_string(&id).map_err(IdentityError::from)?;
    let command = req.try_into_command()?;

    state
        .account_service
        .update_account(&account_id, command)
        .await
        .map_err(ApiError::from)
        .map(|identity| ApiSuccess::new(StatusCode::OK, identity.into()))
}
