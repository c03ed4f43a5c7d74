use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// A submitted intake entry. Serializes as `{ _id, name, email, service, timestamp }`;
/// fields that were not submitted are omitted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub timestamp: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted from a submission. None of them is required; scalar
/// values are stored as their text form.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewClientRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub service: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

/// `null` maps to None; numbers and booleans to their string form.
/// Objects and arrays are rejected.
fn lenient_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Scalar>::deserialize(d)?;
    Ok(v.map(|s| match s {
        Scalar::Text(t) => t,
        Scalar::Int(n) => n.to_string(),
        Scalar::UInt(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

/// Insert a record stamped with the current time and return it as persisted.
pub async fn create<C>(db: &C, input: NewClientRecord) -> Result<Model, ModelError>
where
    C: ConnectionTrait,
{
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        email: Set(input.email),
        service: Set(input.service),
        timestamp: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

/// Every stored record, oldest first.
pub async fn list_all<C>(db: &C) -> Result<Vec<Model>, ModelError>
where
    C: ConnectionTrait,
{
    let rows = Entity::find()
        .order_by_asc(Column::Timestamp)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
