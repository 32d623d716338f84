//! City entity model. Cities belong to a state.

use hbnb_core::entity::EntityKind;
use hbnb_core::error::CoreError;
use hbnb_core::payload;
use hbnb_core::types::{new_id, now, timestamp_format, DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use crate::entity::{Entity, PgQuery};

/// A row from the `cities` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub state_id: DbId,
    pub name: String,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub updated_at: Timestamp,
}

impl City {
    pub fn new(state_id: DbId, name: String) -> Self {
        let now = now();
        Self {
            id: new_id(),
            state_id,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for City {
    const KIND: EntityKind = EntityKind::City;
    const COLUMNS: &'static [&'static str] =
        &["id", "state_id", "name", "created_at", "updated_at"];
    const IMMUTABLE: &'static [&'static str] = &["id", "state_id", "created_at", "updated_at"];
    const PARENT: Option<EntityKind> = Some(EntityKind::State);

    fn id(&self) -> DbId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    fn references(&self) -> Vec<(EntityKind, DbId)> {
        vec![(EntityKind::State, self.state_id)]
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
            .bind(self.state_id)
            .bind(&self.name)
            .bind(self.created_at)
            .bind(self.updated_at)
    }
}
