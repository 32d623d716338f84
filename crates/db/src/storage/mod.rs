//! The storage adapter.
//!
//! [`Storage`] is created once at startup and shared through application
//! state. Each request opens a [`Session`], its unit of work, and drops it
//! when the request ends; for PostgreSQL that returns the pooled connection.
//!
//! Both backends maintain the timestamps: [`Session::save`] refreshes
//! `updated_at` before writing.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use hbnb_core::entity::EntityKind;
use hbnb_core::types::{now, DbId};
use sqlx::pool::PoolConnection;
use sqlx::Postgres;

use crate::entity::Entity;
use crate::DbPool;

pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored {0} record has an unexpected shape")]
    Corrupt(&'static str),
}

/// Handle on the configured storage backend. Cheap to clone.
#[derive(Clone)]
pub enum Storage {
    Postgres(DbPool),
    Memory(Arc<MemoryStore>),
}

impl Storage {
    /// A fresh, empty in-memory store.
    pub fn memory() -> Self {
        Storage::Memory(Arc::new(MemoryStore::new()))
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Storage::Postgres(_) => "postgres",
            Storage::Memory(_) => "memory",
        }
    }

    /// Open a unit of work. Released when the returned session is dropped.
    pub async fn session(&self) -> Result<Session, StorageError> {
        match self {
            Storage::Postgres(pool) => Ok(Session::Postgres(pool.acquire().await?)),
            Storage::Memory(store) => Ok(Session::Memory(Arc::clone(store))),
        }
    }

    /// Verify the backend answers a trivial query.
    pub async fn health_check(&self) -> Result<(), StorageError> {
        match self {
            Storage::Postgres(pool) => Ok(crate::health_check(pool).await?),
            Storage::Memory(_) => Ok(()),
        }
    }
}

/// A per-request unit of work against [`Storage`].
pub enum Session {
    Postgres(PoolConnection<Postgres>),
    Memory(Arc<MemoryStore>),
}

impl Session {
    /// Fetch one record by id.
    pub async fn get<E: Entity>(&mut self, id: DbId) -> Result<Option<E>, StorageError> {
        match self {
            Session::Postgres(conn) => Ok(postgres::find_by_id(conn, id).await?),
            Session::Memory(store) => store.get(id).await,
        }
    }

    /// Fetch every record of a kind, oldest first.
    pub async fn all<E: Entity>(&mut self) -> Result<Vec<E>, StorageError> {
        match self {
            Session::Postgres(conn) => Ok(postgres::list(conn).await?),
            Session::Memory(store) => store.all().await,
        }
    }

    /// Fetch the records scoped to one parent, per [`Entity::PARENT`].
    ///
    /// Entities without a parent kind have no scoped collection and yield an
    /// empty list.
    pub async fn all_by_parent<E: Entity>(
        &mut self,
        parent_id: DbId,
    ) -> Result<Vec<E>, StorageError> {
        let Some(parent) = E::PARENT else {
            return Ok(Vec::new());
        };
        match self {
            Session::Postgres(conn) => Ok(postgres::list_by_parent(conn, parent, parent_id).await?),
            Session::Memory(store) => store.all_by_parent(parent, parent_id).await,
        }
    }

    /// Create or update a record, refreshing its `updated_at`.
    pub async fn save<E: Entity>(&mut self, entity: &mut E) -> Result<(), StorageError> {
        entity.touch(now());
        match self {
            Session::Postgres(conn) => postgres::upsert(conn, entity).await?,
            Session::Memory(store) => store.put(entity).await,
        }
        Ok(())
    }

    /// Delete a record and the records it owns. Returns `false` if absent.
    pub async fn delete<E: Entity>(&mut self, id: DbId) -> Result<bool, StorageError> {
        match self {
            Session::Postgres(conn) => Ok(postgres::delete(conn, E::KIND, id).await?),
            Session::Memory(store) => Ok(store.remove(E::KIND, id).await),
        }
    }

    /// Number of stored records of `kind`.
    pub async fn count(&mut self, kind: EntityKind) -> Result<i64, StorageError> {
        match self {
            Session::Postgres(conn) => Ok(postgres::count(conn, kind).await?),
            Session::Memory(store) => Ok(store.count(kind).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::models::{Amenity, City, State};

    #[tokio::test]
    async fn memory_backend_is_always_healthy() {
        let storage = Storage::memory();
        assert_eq!(storage.backend_name(), "memory");
        assert_matches!(storage.health_check().await, Ok(()));
    }

    #[tokio::test]
    async fn save_refreshes_updated_at_only() {
        let storage = Storage::memory();
        let mut session = storage.session().await.unwrap();
        let mut state = State::new("California".into());
        let created_at = state.created_at;

        session.save(&mut state).await.unwrap();

        assert_eq!(state.created_at, created_at);
        assert!(state.updated_at >= created_at);
        let stored: State = session.get(state.id).await.unwrap().unwrap();
        assert_eq!(stored, state);
    }

    #[tokio::test]
    async fn sessions_share_one_store() {
        let storage = Storage::memory();
        let mut amenity = Amenity::new("Wifi".into());
        storage
            .session()
            .await
            .unwrap()
            .save(&mut amenity)
            .await
            .unwrap();

        let mut other = storage.session().await.unwrap();
        assert_eq!(other.count(EntityKind::Amenity).await.unwrap(), 1);
        assert_eq!(other.count(EntityKind::State).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn count_follows_saves_and_cascading_deletes() {
        let storage = Storage::memory();
        let mut session = storage.session().await.unwrap();
        let mut state = State::new("California".into());
        session.save(&mut state).await.unwrap();
        for name in ["Fremont", "Oakland"] {
            session.save(&mut City::new(state.id, name.into())).await.unwrap();
        }
        let cities: i64 = session.count(EntityKind::City).await.unwrap();
        assert_eq!(cities, 2);

        session.delete::<State>(state.id).await.unwrap();
        assert_eq!(session.count(EntityKind::State).await.unwrap(), 0);
        assert_eq!(session.count(EntityKind::City).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unscoped_kind_has_no_parent_collection() {
        let storage = Storage::memory();
        let mut session = storage.session().await.unwrap();
        let mut state = State::new("California".into());
        session.save(&mut state).await.unwrap();

        let states: Vec<State> = session.all_by_parent(state.id).await.unwrap();
        assert!(states.is_empty());

        let mut city = City::new(state.id, "Fremont".into());
        session.save(&mut city).await.unwrap();
        let cities: Vec<City> = session.all_by_parent(state.id).await.unwrap();
        assert_eq!(cities, vec![city]);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_was_removed() {
        let storage = Storage::memory();
        let mut session = storage.session().await.unwrap();
        let mut state = State::new("California".into());
        session.save(&mut state).await.unwrap();

        assert!(session.delete::<State>(state.id).await.unwrap());
        assert!(!session.delete::<State>(state.id).await.unwrap());
        assert!(session.get::<State>(state.id).await.unwrap().is_none());
    }
}
