use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use super::{ClientRecord, NewClientRecord};

/// Append-only persistence for client records.
///
/// There is no update or delete; failures are surfaced immediately without retry.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a new record stamped with the current time and return it with its id.
    async fn create(&self, input: NewClientRecord) -> Result<ClientRecord, ServiceError>;
    /// All stored records, oldest first.
    async fn list_all(&self) -> Result<Vec<ClientRecord>, ServiceError>;
}

/// SeaORM-backed store implementation.
#[derive(Clone)]
pub struct SeaOrmRecordStore {
    pub db: DatabaseConnection,
}

impl SeaOrmRecordStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RecordStore for SeaOrmRecordStore {
    #[instrument(skip_all)]
    async fn create(&self, input: NewClientRecord) -> Result<ClientRecord, ServiceError> {
        let created = models::client_record::create(&self.db, input).await?;
        debug!(record_id = %created.id, "client_record_created");
        Ok(created)
    }

    #[instrument(skip_all)]
    async fn list_all(&self) -> Result<Vec<ClientRecord>, ServiceError> {
        let rows = models::client_record::list_all(&self.db).await?;
        debug!(count = rows.len(), "client_records_listed");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn submission(name: &str) -> NewClientRecord {
        NewClientRecord {
            name: Some(name.into()),
            email: Some(format!("{}@x.com", name.to_lowercase())),
            service: Some("consulting".into()),
        }
    }

    #[tokio::test]
    async fn create_then_list_contains_record_once() -> Result<(), anyhow::Error> {
        let store = SeaOrmRecordStore::new(get_db().await?);

        let created = store.create(submission("Ana")).await?;
        let all = store.list_all().await?;

        let matches: Vec<_> = all.iter().filter(|r| r.id == created.id).collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name.as_deref(), Some("Ana"));
        assert_eq!(matches[0].email.as_deref(), Some("ana@x.com"));
        assert_eq!(matches[0].service.as_deref(), Some("consulting"));
        Ok(())
    }

    #[tokio::test]
    async fn n_sequential_creates_yield_n_records() -> Result<(), anyhow::Error> {
        let store = SeaOrmRecordStore::new(get_db().await?);
        assert!(store.list_all().await?.is_empty());

        for i in 0..7 {
            store.create(submission(&format!("c{i}"))).await?;
        }
        assert_eq!(store.list_all().await?.len(), 7);
        Ok(())
    }

    #[tokio::test]
    async fn closed_connection_surfaces_storage_unavailable() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let store = SeaOrmRecordStore::new(db.clone());
        db.close().await?;

        let err = store.create(submission("Ana")).await.unwrap_err();
        assert!(matches!(err, ServiceError::StorageUnavailable(_)));
        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, ServiceError::StorageUnavailable(_)));
        Ok(())
    }
}
