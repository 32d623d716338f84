//! State entity model.

use hbnb_core::entity::EntityKind;
use hbnb_core::error::CoreError;
use hbnb_core::payload;
use hbnb_core::types::{new_id, now, timestamp_format, DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use crate::entity::{Entity, PgQuery};

/// A row from the `states` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct State {
    pub id: DbId,
    pub name: String,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub updated_at: Timestamp,
}

impl State {
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

impl Entity for State {
    const KIND: EntityKind = EntityKind::State;
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

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn patch_ignores_immutable_and_unknown_keys() {
        let mut state = State::new("California".into());
        let original = state.clone();
        let body = json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "created_at": "1970-01-01T00:00:00.000000",
            "population": 39_000_000,
            "name": "Nevada",
        });
        state.apply_patch(body.as_object().unwrap()).unwrap();

        assert_eq!(state.name, "Nevada");
        assert_eq!(state.id, original.id);
        assert_eq!(state.created_at, original.created_at);
    }

    #[test]
    fn serializes_id_as_string_and_formatted_timestamps() {
        let state = State::new("California".into());
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["id"], state.id.to_string());
        assert_eq!(json["name"], "California");
        let created = json["created_at"].as_str().unwrap();
        assert_eq!(created.len(), "2017-09-28T21:05:54.119427".len());
        assert!(!created.ends_with('Z'));
    }
}
