use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

/// Single connection attempt using the configured pool bounds and timeouts.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    Ok(db)
}

/// Connect at startup, retrying with linear backoff. Returns the last error once
/// `connect_retries` attempts are exhausted.
pub async fn connect_with_retry(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let attempts = cfg.connect_retries.max(1);
    let mut attempt = 1;
    loop {
        match connect_with_config(cfg).await {
            Ok(db) => {
                info!(event = "db_connected", attempt, "database connection established");
                return Ok(db);
            }
            Err(e) if attempt < attempts => {
                let delay = Duration::from_millis(cfg.retry_backoff_ms.saturating_mul(attempt as u64));
                warn!(event = "db_connect_retry", attempt, attempts, delay_ms = delay.as_millis() as u64, error = %e, "database connection failed; retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                return Err(e.context(format!("database unreachable after {attempts} attempts")));
            }
        }
    }
}
