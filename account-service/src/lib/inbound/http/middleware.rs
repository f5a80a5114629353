use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::identity::models::AccountId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// The one message every gate failure returns, whatever the cause.
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing credentials";

/// Extension type carrying the resolved identity through a request
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account_id: AccountId,
    pub username: String,
}

/// Middleware that resolves a bearer access token to an account before any
/// handler body runs.
///
/// Missing header, malformed header, expired token, wrong token class, and
/// bad signature all produce the same response; the actual reason is only
/// logged.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(&req).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        unauthorized()
    })?;

    let claims = state.authenticator.validate_access(token).map_err(|e| {
        tracing::warn!(error = %e, "Access token rejected");
        unauthorized()
    })?;

    let account_id = AccountId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Malformed subject claim");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedAccount {
        account_id,
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<&str> {
    let value = req
        .headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    value.strip_prefix("Bearer ")
}

fn unauthorized() -> Response {
    ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()).into_response()
}
