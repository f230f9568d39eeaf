//! Server setup and initialization
//!
//! Provides the application builder, the session purge task, and the server
//! runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pha_common::{AppConfig, AppError, JwtService};
use pha_db::{create_pool, run_migrations, PgSessionRepository, PgUserRepository};
use pha_service::ServiceContext;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = apply_middleware(
        health_routes().merge(api),
        &config.cors,
        config.app.env.is_production(),
    );

    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = pha_db::DatabaseConfig::new(config.database.url.as_str()).with_connections(
        config.database.min_connections,
        config.database.max_connections,
    );
    let pool = create_pool(&db_config).await.map_err(AppError::internal)?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool).await.map_err(AppError::internal)?;
    }

    let service_context = ServiceContext::builder()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .session_repo(Arc::new(PgSessionRepository::new(pool.clone())))
        .jwt_service(Arc::new(JwtService::new(&config.jwt.secret)))
        .access_token_duration(config.jwt.access_token_duration())
        .refresh_token_duration(config.jwt.refresh_token_duration())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Spawn the periodic purge of expired sessions
///
/// Returns `None` when purging is disabled. The first purge runs immediately.
pub fn spawn_session_purge(state: &AppState) -> Option<JoinHandle<()>> {
    let period = state.config().session.purge_interval()?;
    let state = state.clone();

    info!(interval_secs = period.as_secs(), "Starting expired session purge task");

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Err(e) = state.auth_service().purge_expired_sessions().await {
                warn!(error = %e, "Expired session purge failed");
            }
        }
    }))
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", address);

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{}", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();

    let state = create_app_state(config).await?;
    let purge_task = spawn_session_purge(&state);

    let app = create_app(state)?;
    let result = run_server(app, &address).await;

    if let Some(task) = purge_task {
        task.abort();
    }
    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, starting graceful shutdown"),
        () = terminate => info!("Received SIGTERM, starting graceful shutdown"),
    }
}
