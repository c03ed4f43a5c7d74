#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Migrated in-memory SQLite database, private to the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    // One pooled connection keeps the memory database alive until the test drops it.
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
