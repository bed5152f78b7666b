use sqlx::{PgExecutor, Postgres, QueryBuilder, Result as SqlxResult};
use uuid::Uuid;

use crate::{
    filter::PointFilter,
    models::{NewPoint, PointRow},
    pagination::LimitOffset,
};

const POINT_COLUMNS: &str =
    "id, map_id, name, x, y, description, category, other_text, creator_name, created_at";

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<PointRow>> {
    sqlx::query_as::<_, PointRow>(
        r#"
        SELECT id, map_id, name, x, y, description, category, other_text, creator_name, created_at
        FROM points
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    filter: &PointFilter,
    page: LimitOffset,
) -> SqlxResult<Vec<PointRow>> {
    let mut query = QueryBuilder::<Postgres>::new(format!("SELECT {POINT_COLUMNS} FROM points"));
    filter.push_where(&mut query);
    query.push(" ORDER BY created_at ASC, id ASC");
    query.push(" LIMIT ");
    query.push_bind(page.limit);
    query.push(" OFFSET ");
    query.push_bind(page.offset);

    query.build_query_as::<PointRow>().fetch_all(executor).await
}

/// Uniform sample of up to `size` distinct points.
pub async fn sample<'e>(executor: impl PgExecutor<'e>, size: i64) -> SqlxResult<Vec<PointRow>> {
    sqlx::query_as::<_, PointRow>(
        r#"
        SELECT id, map_id, name, x, y, description, category, other_text, creator_name, created_at
        FROM points
        ORDER BY random()
        LIMIT $1
        "#,
    )
    .bind(size)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    map_id: Uuid,
    point: NewPoint,
) -> SqlxResult<PointRow> {
    let label = point.category.as_ref().map(|c| c.label().as_str());
    let other_text = point
        .category
        .as_ref()
        .and_then(|c| c.other_text())
        .map(str::to_owned);

    sqlx::query_as::<_, PointRow>(
        r#"
        INSERT INTO points (map_id, name, x, y, description, category, other_text, creator_name)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, map_id, name, x, y, description, category, other_text, creator_name, created_at
        "#,
    )
    .bind(map_id)
    .bind(point.name)
    .bind(point.x)
    .bind(point.y)
    .bind(point.description)
    .bind(label)
    .bind(other_text)
    .bind(point.creator_name)
    .fetch_one(executor)
    .await
}
