//! Review entity model. A review is written by a user about a place.

use hbnb_core::entity::EntityKind;
use hbnb_core::error::CoreError;
use hbnb_core::payload;
use hbnb_core::types::{new_id, now, timestamp_format, DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use crate::entity::{Entity, PgQuery};

/// A row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub place_id: DbId,
    pub user_id: DbId,
    pub text: String,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub updated_at: Timestamp,
}

impl Review {
    pub fn new(place_id: DbId, user_id: DbId, text: String) -> Self {
        let now = now();
        Self {
            id: new_id(),
            place_id,
            user_id,
            text,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Review {
    const KIND: EntityKind = EntityKind::Review;
    const COLUMNS: &'static [&'static str] =
        &["id", "place_id", "user_id", "text", "created_at", "updated_at"];
    const IMMUTABLE: &'static [&'static str] =
        &["id", "user_id", "place_id", "created_at", "updated_at"];
    const PARENT: Option<EntityKind> = Some(EntityKind::Place);

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
        vec![
            (EntityKind::Place, self.place_id),
            (EntityKind::User, self.user_id),
        ]
    }

    fn set_field(&mut self, key: &str, value: &Value) -> Result<bool, CoreError> {
        match key {
            "text" => self.text = payload::string(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id)
            .bind(self.place_id)
            .bind(self.user_id)
            .bind(&self.text)
            .bind(self.created_at)
            .bind(self.updated_at)
    }
}
