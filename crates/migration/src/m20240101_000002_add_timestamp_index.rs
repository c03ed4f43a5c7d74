//! Index backing the ordered full-table read.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_client_record_timestamp")
                    .table(ClientRecord::Table)
                    .col(ClientRecord::Timestamp)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_client_record_timestamp")
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ClientRecord { Table, Timestamp }
