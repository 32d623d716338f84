//! User entity model.

use hbnb_core::entity::EntityKind;
use hbnb_core::error::CoreError;
use hbnb_core::payload;
use hbnb_core::types::{new_id, now, timestamp_format, DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use crate::entity::{Entity, PgQuery};

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub updated_at: Timestamp,
}

impl User {
    pub fn new(email: String, password: String) -> Self {
        let now = now();
        Self {
            id: new_id(),
            email,
            password,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "email",
        "password",
        "first_name",
        "last_name",
        "created_at",
        "updated_at",
    ];
    // Email is fixed once the account exists.
    const IMMUTABLE: &'static [&'static str] = &["id", "email", "created_at", "updated_at"];

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
            "password" => self.password = payload::string(key, value)?,
            "first_name" => self.first_name = payload::optional_string(key, value)?,
            "last_name" => self.last_name = payload::optional_string(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id)
            .bind(&self.email)
            .bind(&self.password)
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(self.created_at)
            .bind(self.updated_at)
    }
}
