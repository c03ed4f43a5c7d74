use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::client_record::{self, NewClientRecord};

/// Fresh migrated in-memory SQLite database. One pooled connection keeps the
/// memory database alive for the test's lifetime.
async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn input(name: &str, email: &str, service: &str) -> NewClientRecord {
    NewClientRecord {
        name: Some(name.into()),
        email: Some(email.into()),
        service: Some(service.into()),
    }
}

#[tokio::test]
async fn create_assigns_id_and_timestamp() -> Result<()> {
    let db = setup_test_db().await?;
    let before = chrono::Utc::now();

    let created = client_record::create(&db, input("Ana", "ana@x.com", "consulting")).await?;

    assert_eq!(created.name.as_deref(), Some("Ana"));
    assert_eq!(created.email.as_deref(), Some("ana@x.com"));
    assert_eq!(created.service.as_deref(), Some("consulting"));
    assert!(!created.id.is_nil());
    let drift = created.timestamp.with_timezone(&chrono::Utc) - before;
    assert!(drift.num_seconds().abs() < 5);

    let found = client_record::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.map(|m| m.id), Some(created.id));
    Ok(())
}

#[tokio::test]
async fn list_all_on_empty_store_is_empty() -> Result<()> {
    let db = setup_test_db().await?;
    let all = client_record::list_all(&db).await?;
    assert!(all.is_empty());
    Ok(())
}

#[tokio::test]
async fn sequential_creates_are_all_listed_in_timestamp_order() -> Result<()> {
    let db = setup_test_db().await?;
    for i in 0..5 {
        client_record::create(&db, input(&format!("client-{i}"), "c@x.com", "audit")).await?;
    }

    let all = client_record::list_all(&db).await?;
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    let names: Vec<_> = all.iter().filter_map(|m| m.name.as_deref()).collect();
    assert_eq!(names, vec!["client-0", "client-1", "client-2", "client-3", "client-4"]);

    let mut ids: Vec<_> = all.iter().map(|m| m.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
    Ok(())
}

#[tokio::test]
async fn missing_fields_are_stored_as_null() -> Result<()> {
    let db = setup_test_db().await?;
    let created = client_record::create(&db, NewClientRecord::default()).await?;
    assert!(created.name.is_none());
    assert!(created.email.is_none());
    assert!(created.service.is_none());
    assert_eq!(client_record::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[test]
fn json_shape_uses_underscore_id_and_omits_absent_fields() {
    let id = uuid::Uuid::new_v4();
    let ts = chrono::DateTime::parse_from_rfc3339("2024-05-01T10:00:00+00:00").unwrap();
    let m = client_record::Model {
        id,
        name: Some("Ana".into()),
        email: None,
        service: Some("consulting".into()),
        timestamp: ts,
    };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["_id"], id.to_string());
    assert_eq!(v["name"], "Ana");
    assert!(v.get("email").is_none());
    let rendered = v["timestamp"].as_str().unwrap();
    assert_eq!(chrono::DateTime::parse_from_rfc3339(rendered).unwrap(), ts);
}

#[test]
fn submission_fields_accept_scalars_as_text() {
    let parsed: NewClientRecord = serde_json::from_value(serde_json::json!({
        "name": "Ana",
        "email": null,
        "service": 5,
    }))
    .unwrap();
    assert_eq!(parsed.name.as_deref(), Some("Ana"));
    assert!(parsed.email.is_none());
    assert_eq!(parsed.service.as_deref(), Some("5"));

    let parsed: NewClientRecord =
        serde_json::from_value(serde_json::json!({"name": true, "service": 2.5})).unwrap();
    assert_eq!(parsed.name.as_deref(), Some("true"));
    assert_eq!(parsed.service.as_deref(), Some("2.5"));
    assert!(parsed.email.is_none());
}

#[test]
fn submission_fields_reject_nested_values() {
    let res = serde_json::from_value::<NewClientRecord>(serde_json::json!({"name": {"first": "Ana"}}));
    assert!(res.is_err());
    let res = serde_json::from_value::<NewClientRecord>(serde_json::json!({"service": ["a"]}));
    assert!(res.is_err());
}
