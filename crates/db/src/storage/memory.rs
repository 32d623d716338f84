//! In-memory backend, used for development and tests.
//!
//! Records are kept per kind in a map keyed by id. Each stored record keeps
//! the `(kind, id)` pairs it references so deletes can cascade to owned
//! records the same way the SQL schema does.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use hbnb_core::entity::EntityKind;
use hbnb_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use super::StorageError;
use crate::entity::Entity;

struct StoredRecord {
    value: Arc<dyn Any + Send + Sync>,
    references: Vec<(EntityKind, DbId)>,
    created_at: Timestamp,
    id: DbId,
}

type Tables = HashMap<EntityKind, HashMap<DbId, StoredRecord>>;

/// Process-local record store.
///
/// Thread-safe via interior `RwLock`; wrapped in `Arc` and shared by every
/// session.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn decode<E: Entity>(record: &StoredRecord) -> Result<E, StorageError> {
        record
            .value
            .downcast_ref::<E>()
            .cloned()
            .ok_or(StorageError::Corrupt(E::KIND.name()))
    }

    fn sorted<E: Entity>(records: Vec<&StoredRecord>) -> Result<Vec<E>, StorageError> {
        let mut records = records;
        records.sort_by_key(|record| (record.created_at, record.id));
        records.into_iter().map(Self::decode::<E>).collect()
    }

    pub async fn get<E: Entity>(&self, id: DbId) -> Result<Option<E>, StorageError> {
        let tables = self.tables.read().await;
        tables
            .get(&E::KIND)
            .and_then(|table| table.get(&id))
            .map(Self::decode::<E>)
            .transpose()
    }

    pub async fn all<E: Entity>(&self) -> Result<Vec<E>, StorageError> {
        let tables = self.tables.read().await;
        let records: Vec<&StoredRecord> = tables
            .get(&E::KIND)
            .map(|table| table.values().collect())
            .unwrap_or_default();
        Self::sorted(records)
    }

    pub async fn all_by_parent<E: Entity>(
        &self,
        parent: EntityKind,
        parent_id: DbId,
    ) -> Result<Vec<E>, StorageError> {
        let tables = self.tables.read().await;
        let records: Vec<&StoredRecord> = tables
            .get(&E::KIND)
            .map(|table| {
                table
                    .values()
                    .filter(|record| record.references.contains(&(parent, parent_id)))
                    .collect()
            })
            .unwrap_or_default();
        Self::sorted(records)
    }

    /// Insert or replace the record with `entity.id()`.
    pub async fn put<E: Entity>(&self, entity: &E) {
        let record = StoredRecord {
            value: Arc::new(entity.clone()),
            references: entity.references(),
            created_at: entity.created_at(),
            id: entity.id(),
        };
        self.tables
            .write()
            .await
            .entry(E::KIND)
            .or_default()
            .insert(entity.id(), record);
    }

    /// Remove a record and everything it owns. Returns `false` if absent.
    pub async fn remove(&self, kind: EntityKind, id: DbId) -> bool {
        let mut tables = self.tables.write().await;
        remove_cascade(&mut tables, kind, id)
    }

    /// Records of `kind`, typed like SQL `COUNT(*)`.
    pub async fn count(&self, kind: EntityKind) -> i64 {
        self.tables
            .read()
            .await
            .get(&kind)
            .map_or(0, |table| table.len() as i64)
    }
}

fn remove_cascade(tables: &mut Tables, kind: EntityKind, id: DbId) -> bool {
    let removed = tables
        .get_mut(&kind)
        .and_then(|table| table.remove(&id))
        .is_some();
    if !removed {
        return false;
    }

    for child in kind.children() {
        let owned: Vec<DbId> = tables
            .get(&child)
            .map(|table| {
                table
                    .iter()
                    .filter(|(_, record)| record.references.contains(&(kind, id)))
                    .map(|(child_id, _)| *child_id)
                    .collect()
            })
            .unwrap_or_default();
        for child_id in owned {
            remove_cascade(tables, child, child_id);
        }
    }
    true
}
