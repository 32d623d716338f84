//! Place entity model. A place is listed in a city by a user.

use hbnb_core::entity::EntityKind;
use hbnb_core::error::CoreError;
use hbnb_core::payload;
use hbnb_core::types::{new_id, now, timestamp_format, DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use crate::entity::{Entity, PgQuery};

/// A row from the `places` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub city_id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub number_rooms: i32,
    pub number_bathrooms: i32,
    pub max_guest: i32,
    pub price_by_night: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "timestamp_format::serialize")]
    pub updated_at: Timestamp,
}

impl Place {
    pub fn new(city_id: DbId, user_id: DbId, name: String) -> Self {
        let now = now();
        Self {
            id: new_id(),
            city_id,
            user_id,
            name,
            description: None,
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Place {
    const KIND: EntityKind = EntityKind::Place;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "city_id",
        "user_id",
        "name",
        "description",
        "number_rooms",
        "number_bathrooms",
        "max_guest",
        "price_by_night",
        "latitude",
        "longitude",
        "created_at",
        "updated_at",
    ];
    const IMMUTABLE: &'static [&'static str] =
        &["id", "user_id", "city_id", "created_at", "updated_at"];
    const PARENT: Option<EntityKind> = Some(EntityKind::City);

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
            (EntityKind::City, self.city_id),
            (EntityKind::User, self.user_id),
        ]
    }

    fn set_field(&mut self, key: &str, value: &Value) -> Result<bool, CoreError> {
        match key {
            "name" => self.name = payload::string(key, value)?,
            "description" => self.description = payload::optional_string(key, value)?,
            "number_rooms" => self.number_rooms = payload::integer(key, value)?,
            "number_bathrooms" => self.number_bathrooms = payload::integer(key, value)?,
            "max_guest" => self.max_guest = payload::integer(key, value)?,
            "price_by_night" => self.price_by_night = payload::integer(key, value)?,
            "latitude" => self.latitude = payload::optional_float(key, value)?,
            "longitude" => self.longitude = payload::optional_float(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id)
            .bind(self.city_id)
            .bind(self.user_id)
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.number_rooms)
            .bind(self.number_bathrooms)
            .bind(self.max_guest)
            .bind(self.price_by_night)
            .bind(self.latitude)
            .bind(self.longitude)
            .bind(self.created_at)
            .bind(self.updated_at)
    }
}
