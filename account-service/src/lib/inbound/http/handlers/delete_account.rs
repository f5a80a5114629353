use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::identity::models::AccountId;
use crate::identity::errors::IdentityError;
use crate::identity::ports::AccountServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let account_id = AccountId::from_string(&id).map_err(IdentityError::from)?;

    state
        .account_service
        .delete_account(&account_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
