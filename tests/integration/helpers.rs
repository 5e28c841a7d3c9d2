//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use busdesk_api::app::{build_app, build_state};
use busdesk_auth::jwt::encoder::JwtEncoder;
use busdesk_cache::memory::MemoryCacheProvider;
use busdesk_cache::provider::CacheManager;
use busdesk_core::config::AppConfig;
use busdesk_core::config::app::ServerConfig;
use busdesk_core::config::auth::AuthConfig;
use busdesk_core::config::cache::CacheConfig;
use busdesk_core::config::database::DatabaseConfig;
use busdesk_core::config::logging::LoggingConfig;
use busdesk_database::store::MemoryPermissionStore;
use busdesk_entity::Role;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct handle on the in-memory permission store
    pub store: Arc<MemoryPermissionStore>,
    /// Token encoder sharing the app's secret
    encoder: JwtEncoder,
}

/// Response captured from a test request
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (Null if the body was not JSON)
    pub body: Value,
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 60,
        },
        cache: CacheConfig::default(),
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            jwt_access_ttl_minutes: 60,
        },
        logging: LoggingConfig::default(),
    }
}

impl TestApp {
    /// Create a test application over an in-memory store and cache.
    pub fn new() -> Self {
        let config = test_config();

        let store = Arc::new(MemoryPermissionStore::new());
        let provider = MemoryCacheProvider::new(&config.cache.memory, 300);
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));

        let encoder = JwtEncoder::new(&config.auth);

        let state = build_state(config, store.clone(), cache);
        let router = build_app(state);

        Self {
            router,
            store,
            encoder,
        }
    }

    /// Create a test application with one seeded row per (role, module).
    pub fn seeded() -> Self {
        let app = Self::new();
        app.store.seed_defaults();
        app
    }

    /// Mint an access token for the given role.
    pub fn token_for(&self, role: Role) -> String {
        let (token, _) = self
            .encoder
            .generate_access_token(Uuid::new_v4(), role, "test-user")
            .expect("Failed to mint token");
        token
    }

    /// Send a request through the router and capture the response.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}
