//! Application builder — wires state, router, and server lifecycle.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use busdesk_auth::jwt::decoder::JwtDecoder;
use busdesk_auth::rbac::PermissionChecker;
use busdesk_cache::provider::CacheManager;
use busdesk_core::config::AppConfig;
use busdesk_core::error::AppError;
use busdesk_database::repositories::permission::PermissionRepository;
use busdesk_database::store::PermissionStore;
use busdesk_service::permission::PermissionAdminService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from pre-constructed state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Builds the application state from configuration, a database pool,
/// and a cache manager.
pub fn build_state(
    config: AppConfig,
    store: Arc<dyn PermissionStore>,
    cache: Arc<CacheManager>,
) -> AppState {
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let checker = Arc::new(PermissionChecker::new(
        Arc::clone(&store),
        Arc::clone(&cache),
        config.cache.default_ttl_seconds,
    ));
    let permission_service = Arc::new(PermissionAdminService::new(
        Arc::clone(&store),
        Arc::clone(&checker),
    ));

    AppState {
        config: Arc::new(config),
        cache,
        store,
        jwt_decoder,
        checker,
        permission_service,
    }
}

/// Runs the BusDesk server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting BusDesk server...");

    tracing::info!(provider = %config.cache.provider, "Initializing cache");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    let store: Arc<dyn PermissionStore> = Arc::new(PermissionRepository::new(db_pool));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, store, cache);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("BusDesk server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("BusDesk server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
