//! The [`Entity`] trait: what the storage adapter needs to know about a model.

use hbnb_core::entity::EntityKind;
use hbnb_core::error::CoreError;
use hbnb_core::payload::JsonObject;
use hbnb_core::types::{DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{FromRow, Postgres};

/// A query awaiting its bind parameters.
pub type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

/// A persisted model with an id, two timestamps and an allow-listed set of
/// client-writable attributes.
pub trait Entity:
    Clone + Serialize + Send + Sync + Unpin + for<'r> FromRow<'r, PgRow> + 'static
{
    const KIND: EntityKind;

    /// Column names in bind order. `id` comes first, `created_at` and
    /// `updated_at` last.
    const COLUMNS: &'static [&'static str];

    /// Keys a client may never write: the id, foreign keys and timestamps.
    const IMMUTABLE: &'static [&'static str];

    /// Kind whose id scopes the parent-nested collection, if any.
    const PARENT: Option<EntityKind> = None;

    fn id(&self) -> DbId;

    fn created_at(&self) -> Timestamp;

    /// Refresh `updated_at`.
    fn touch(&mut self, now: Timestamp);

    /// Records this one belongs to, as `(kind, id)` pairs.
    fn references(&self) -> Vec<(EntityKind, DbId)> {
        Vec::new()
    }

    /// Assign one declared attribute from a JSON value.
    ///
    /// Returns `Ok(false)` for keys the entity does not declare, leaving the
    /// record untouched. Never called with a key from [`Entity::IMMUTABLE`].
    fn set_field(&mut self, key: &str, value: &Value) -> Result<bool, CoreError>;

    /// Bind every column in [`Entity::COLUMNS`] order.
    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;

    /// Apply a client patch: immutable keys are dropped, unknown keys ignored.
    fn apply_patch(&mut self, body: &JsonObject) -> Result<(), CoreError> {
        for (key, value) in body {
            if Self::IMMUTABLE.contains(&key.as_str()) {
                continue;
            }
            if !self.set_field(key, value)? {
                tracing::debug!(entity = %Self::KIND, key = %key, "Ignoring undeclared attribute");
            }
        }
        Ok(())
    }

    /// Id of the record scoping this one, per [`Entity::PARENT`].
    fn parent_id(&self) -> Option<DbId> {
        let parent = Self::PARENT?;
        self.references()
            .into_iter()
            .find_map(|(kind, id)| (kind == parent).then_some(id))
    }
}
