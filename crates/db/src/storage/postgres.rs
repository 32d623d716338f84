//! PostgreSQL backend. Queries are assembled from [`Entity::COLUMNS`] so
//! every model shares one implementation.

use hbnb_core::entity::EntityKind;
use hbnb_core::types::DbId;
use sqlx::PgConnection;

use crate::entity::Entity;

/// Table backing each entity kind.
pub const fn table(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Amenity => "amenities",
        EntityKind::City => "cities",
        EntityKind::Place => "places",
        EntityKind::Review => "reviews",
        EntityKind::State => "states",
        EntityKind::User => "users",
    }
}

fn select_sql<E: Entity>() -> String {
    format!("SELECT {} FROM {}", E::COLUMNS.join(", "), table(E::KIND))
}

/// `INSERT ... ON CONFLICT (id) DO UPDATE` over every column. `id` and
/// `created_at` are never rewritten by the update arm.
pub(crate) fn upsert_sql<E: Entity>() -> String {
    let placeholders: Vec<String> = (1..=E::COLUMNS.len()).map(|n| format!("${n}")).collect();
    let assignments: Vec<String> = E::COLUMNS
        .iter()
        .filter(|column| !matches!(**column, "id" | "created_at"))
        .map(|column| format!("{column} = EXCLUDED.{column}"))
        .collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT (id) DO UPDATE SET {}",
        table(E::KIND),
        E::COLUMNS.join(", "),
        placeholders.join(", "),
        assignments.join(", "),
    )
}

pub(crate) async fn find_by_id<E: Entity>(
    conn: &mut PgConnection,
    id: DbId,
) -> Result<Option<E>, sqlx::Error> {
    let query = format!("{} WHERE id = $1", select_sql::<E>());
    sqlx::query_as::<_, E>(&query)
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub(crate) async fn list<E: Entity>(conn: &mut PgConnection) -> Result<Vec<E>, sqlx::Error> {
    let query = format!("{} ORDER BY created_at, id", select_sql::<E>());
    sqlx::query_as::<_, E>(&query).fetch_all(conn).await
}

pub(crate) async fn list_by_parent<E: Entity>(
    conn: &mut PgConnection,
    parent: EntityKind,
    parent_id: DbId,
) -> Result<Vec<E>, sqlx::Error> {
    let query = format!(
        "{} WHERE {} = $1 ORDER BY created_at, id",
        select_sql::<E>(),
        parent.foreign_key()
    );
    sqlx::query_as::<_, E>(&query)
        .bind(parent_id)
        .fetch_all(conn)
        .await
}

pub(crate) async fn upsert<E: Entity>(conn: &mut PgConnection, entity: &E) -> Result<(), sqlx::Error> {
    let query = upsert_sql::<E>();
    entity.bind_columns(sqlx::query(&query)).execute(conn).await?;
    Ok(())
}

/// Delete by id. Owned rows go with it via `ON DELETE CASCADE`.
pub(crate) async fn delete(
    conn: &mut PgConnection,
    kind: EntityKind,
    id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {} WHERE id = $1", table(kind));
    let result = sqlx::query(&query).bind(id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}

pub(crate) async fn count(conn: &mut PgConnection, kind: EntityKind) -> Result<i64, sqlx::Error> {
    let query = format!("SELECT COUNT(*) FROM {}", table(kind));
    let (count,): (i64,) = sqlx::query_as(&query).fetch_one(conn).await?;
    Ok(count)
}
