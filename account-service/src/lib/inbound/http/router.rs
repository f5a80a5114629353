use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_account::delete_account;
use super::handlers::get_account::get_account;
use super::handlers::list_accounts::list_accounts;
use super::handlers::login::login;
use super::handlers::refresh::refresh;
use super::handlers::signup::sign_up;
use super::handlers::update_account::update_account;
use super::middleware::require_session;
use crate::domain::identity::service::AccountService;
use crate::outbound::repositories::SqliteIdentityRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<SqliteIdentityRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    account_service: Arc<AccountService<SqliteIdentityRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        account_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/signup", post(sign_up))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh));

    let protected_routes = Router::new()
        .route("/api/dashboard", get(list_accounts))
        .route("/api/dashboard/:account_id", get(get_account))
        .route("/api/dashboard/:account_id", patch(update_account))
        .route("/api/dashboard/:account_id", delete(delete_account))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
