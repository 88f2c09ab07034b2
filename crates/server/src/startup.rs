use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, StoreBackend};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::recipe::{shared, InMemoryRecipeStore, SeaOrmRecipeStore};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Compose the configured store. For the database backend the returned
/// connection is the single process-wide handle; the caller closes it.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<(AppState, Option<DatabaseConnection>)> {
    let key_policy = cfg.store.effective_key_policy();
    match cfg.store.backend {
        StoreBackend::Memory => {
            info!(?key_policy, "using in-memory recipe store");
            Ok((AppState::new(shared(InMemoryRecipeStore::new()), key_policy), None))
        }
        StoreBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            info!(?key_policy, "using database recipe store");
            if !cfg.store.stores_display_name() {
                warn!("store.key_policy = slug on the database backend: the name column holds the slug and submitted display names are not kept");
            }
            let store = SeaOrmRecipeStore::new(db.clone());
            Ok((AppState::new(shared(store), key_policy), Some(db)))
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

async fn serve(cfg: &AppConfig, app: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, backend = ?cfg.store.backend, "starting recipe server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    common::env::load_dotenv();
    init_logging_from_env();

    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let (state, db) = build_state(&cfg).await?;

    let served = serve(&cfg, build_app(state)).await;

    // connection is released whether serving ended cleanly or not
    if let Some(db) = db {
        match db.close().await {
            Ok(()) => info!("database connection closed"),
            Err(e) => warn!(error = %e, "closing database connection failed"),
        }
    }
    served
}
