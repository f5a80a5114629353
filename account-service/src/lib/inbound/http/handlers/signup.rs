use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::check_password_length;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::SignupCommand;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::AccountServicePort;
use crate::identity::errors::ValidationError;
use crate::inbound::http::router::AppState;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    state
        .account_service
        .sign_up(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref identity| ApiSuccess::new(StatusCode::CREATED, identity.into()))
}

/// HTTP request body for signup (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl SignupRequest {
    /// Shape checks only; uniqueness and the password match/strength rules
    /// run in the service, in their documented order.
    fn try_into_command(self) -> Result<SignupCommand, ValidationError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        check_password_length(&self.password)?;

        Ok(SignupCommand::new(
            username,
            email,
            self.password,
            self.confirm_password,
        ))
    }
}

/// Public identity fields returned on creation; the hash never leaves the
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&Identity> for SignupResponseData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.as_str().to_string(),
            email: identity.email.as_str().to_string(),
        }
    }
}
