//! Migrator for the intake schema.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_client_record;
mod m20240101_000002_add_timestamp_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_client_record::Migration),
            Box::new(m20240101_000002_add_timestamp_index::Migration),
        ]
    }
}
