//! Amenity entity model.

use hbnb_core::entity::EntityKind;
use hbnb_core::error::CoreError;
use hbnb_core::payload;
use hbnb_core::types::{new_id, now, timestamp_format, DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use crate::entity::{Entity, PgQuery};

/// A row from the `amenities` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Amenity {
    pub id: DbId,
    pub name: String,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub updated_at: Timestamp,
}

impl Amenity {
    pub fn new(name: String) -> Self {
        let now = now();
        Self {
            id: new_id(),
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Amenity {
    const KIND: EntityKind = EntityKind::Amenity;
    const COLUMNS: &'static [&'static str] = &["id", "name", "created_at", "updated_at"];
    const IMMUTABLE: &'static [&'static str] = &["id", "created_at", "updated_at"];

    fn id(&self) -> DbId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    fn set_field(&mut self, key: &str, value: &Value) -> Result<bool, CoreError> {
        match key {
            "name" => self.name = payload::string(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id)
            .bind(&self.name)
            .bind(self.created_at)
            .bind(self.updated_at)
    }
}
