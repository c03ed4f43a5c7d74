//! Create `client_record` table.
//!
//! Append-only; name/email/service are nullable since the server accepts partial submissions.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientRecord::Table)
                    .if_not_exists()
                    .col(uuid(ClientRecord::Id).primary_key())
                    .col(text_null(ClientRecord::Name))
                    .col(text_null(ClientRecord::Email))
                    .col(text_null(ClientRecord::Service))
                    .col(timestamp_with_time_zone(ClientRecord::Timestamp).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ClientRecord::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ClientRecord { Table, Id, Name, Email, Service, Timestamp }
