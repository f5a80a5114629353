use std::str::FromStr;
use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::identity::service::AccountService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::SqliteIdentityRepository;
use auth::Authenticator;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The jwt section stays out of the log
    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    let connect_options =
        SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "sqlite",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.access_ttl_minutes,
        config.jwt.refresh_ttl_hours,
    ));
    let identity_repository = Arc::new(SqliteIdentityRepository::new(pool));
    let account_service = Arc::new(AccountService::new(identity_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(account_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
