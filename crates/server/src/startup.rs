use std::{future::Future, sync::Arc};

use anyhow::Context;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::records::{RecordStore, SeaOrmRecordStore};

use crate::routes;
use crate::state::AppState;

/// The browser form is served from a different origin.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    serve(listener, &cfg.database, shutdown).await
}

/// Connect (with retry) and migrate the database, then serve the intake API on
/// `listener`. The connection pool is closed once the server has drained.
pub async fn serve<F>(listener: TcpListener, db_cfg: &DatabaseConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    common::metrics::init();

    let db = models::db::connect_with_retry(db_cfg).await?;
    migration::Migrator::up(&db, None)
        .await
        .context("running migrations")?;

    let store: Arc<dyn RecordStore> = Arc::new(SeaOrmRecordStore::new(db.clone()));
    let app = routes::build_router(AppState::new(store), build_cors());

    let addr = listener.local_addr()?;
    info!(service = "server", event = "listening", %addr, "intake server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    db.close().await.context("closing database pool")?;
    info!(service = "server", event = "db_closed", "database pool closed");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl_c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(service = "server", event = "shutdown_signal", "shutdown signal received");
}
