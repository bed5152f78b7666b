use sqlx::{PgExecutor, Postgres, QueryBuilder, Result as SqlxResult};
use uuid::Uuid;

use crate::{
    filter::MapFilter,
    models::{CreateMapData, MapRow},
    pagination::LimitOffset,
};

const MAP_COLUMNS: &str = "id, created_at, map_name, description, creator_name";

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<MapRow>> {
    sqlx::query_as::<_, MapRow>(
        r#"
        SELECT id, created_at, map_name, description, creator_name
        FROM maps
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Get multiple maps by IDs in a single query
pub async fn get_by_ids<'e>(executor: impl PgExecutor<'e>, ids: &[Uuid]) -> SqlxResult<Vec<MapRow>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, MapRow>(
        r#"
        SELECT id, created_at, map_name, description, creator_name
        FROM maps
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    filter: &MapFilter,
    page: LimitOffset,
) -> SqlxResult<Vec<MapRow>> {
    let mut query = QueryBuilder::<Postgres>::new(format!("SELECT {MAP_COLUMNS} FROM maps"));
    filter.push_where(&mut query);
    query.push(" ORDER BY created_at ASC, id ASC");
    query.push(" LIMIT ");
    query.push_bind(page.limit);
    query.push(" OFFSET ");
    query.push_bind(page.offset);

    query.build_query_as::<MapRow>().fetch_all(executor).await
}

/// Uniform sample of up to `size` distinct maps.
pub async fn sample<'e>(executor: impl PgExecutor<'e>, size: i64) -> SqlxResult<Vec<MapRow>> {
    sqlx::query_as::<_, MapRow>(
        r#"
        SELECT id, created_at, map_name, description, creator_name
        FROM maps
        ORDER BY random()
        LIMIT $1
        "#,
    )
    .bind(size)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateMapData) -> SqlxResult<MapRow> {
    sqlx::query_as::<_, MapRow>(
        r#"
        INSERT INTO maps (map_name, description, creator_name)
        VALUES ($1, $2, $3)
        RETURNING id, created_at, map_name, description, creator_name
        "#,
    )
    .bind(data.map_name)
    .bind(data.description)
    .bind(data.creator_name)
    .fetch_one(executor)
    .await
}

/// Lock the map row so points can be attached without it disappearing.
pub async fn exists_locked<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let row: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM maps WHERE id = $1 FOR SHARE")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}
