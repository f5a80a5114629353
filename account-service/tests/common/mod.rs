use std::sync::Arc;

use account_service::domain::identity::service::AccountService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::SqliteIdentityRepository;
use auth::Authenticator;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_ttls(5, 24).await
    }

    /// Spawn with explicit token lifetimes, for expiry scenarios
    pub async fn spawn_with_ttls(access_ttl_minutes: i64, refresh_ttl_hours: i64) -> Self {
        let pool = test_pool().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let identity_repository = Arc::new(SqliteIdentityRepository::new(pool));
        let account_service = Arc::new(AccountService::new(identity_repository));
        let authenticator = Arc::new(Authenticator::new(
            TEST_JWT_SECRET,
            access_ttl_minutes,
            refresh_ttl_hours,
        ));

        let router = create_router(account_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}

/// Fresh in-memory database with migrations applied.
///
/// A single pooled connection keeps the in-memory database alive for the
/// lifetime of the test.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
