//! Handler for the `/stats` endpoint.

use axum::Json;
use hbnb_core::entity::EntityKind;
use indexmap::IndexMap;

use crate::error::AppResult;
use crate::extract::StorageSession;

/// GET /api/v1/stats
///
/// Record count per entity kind, keyed by type name in registry order.
pub async fn get_stats(
    StorageSession(mut session): StorageSession,
) -> AppResult<Json<IndexMap<&'static str, i64>>> {
    let mut counts = IndexMap::with_capacity(EntityKind::ALL.len());
    for kind in EntityKind::ALL {
        counts.insert(kind.name(), session.count(kind).await?);
    }
    Ok(Json(counts))
}
