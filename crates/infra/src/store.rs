use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::db::{self, Db};
use crate::filter::{MapFilter, PointFilter};
use crate::models::{CreateMapData, MapRow, NewPoint, PointRow};
use crate::pagination::LimitOffset;
use crate::repos::{maps, points};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("map {0} not found")]
    MapNotFound(Uuid),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage contract the resolvers execute against.
///
/// Maps and points are only ever created and read. List results are
/// ordered by creation time, then id.
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> StoreResult<()>;

    async fn get_map(&self, id: Uuid) -> StoreResult<Option<MapRow>>;

    async fn get_maps_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<MapRow>>;

    async fn list_maps(&self, filter: &MapFilter, page: LimitOffset) -> StoreResult<Vec<MapRow>>;

    /// Up to `size` distinct maps in no particular order.
    async fn sample_maps(&self, size: i64) -> StoreResult<Vec<MapRow>>;

    async fn create_map(&self, data: CreateMapData) -> StoreResult<MapRow>;

    async fn get_point(&self, id: Uuid) -> StoreResult<Option<PointRow>>;

    async fn list_points(
        &self,
        filter: &PointFilter,
        page: LimitOffset,
    ) -> StoreResult<Vec<PointRow>>;

    /// Up to `size` distinct points in no particular order.
    async fn sample_points(&self, size: i64) -> StoreResult<Vec<PointRow>>;

    /// Fails with [`StoreError::MapNotFound`] when `map_id` is unknown.
    async fn create_point(&self, map_id: Uuid, point: NewPoint) -> StoreResult<PointRow>;

    /// Create a map and all of its points. Either everything is persisted or
    /// nothing is.
    async fn save_map(
        &self,
        map: CreateMapData,
        points: Vec<NewPoint>,
    ) -> StoreResult<(MapRow, Vec<PointRow>)>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: Db,
}

impl PgStore {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Db {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        db::ping(&self.pool).await?;
        Ok(())
    }

    async fn get_map(&self, id: Uuid) -> StoreResult<Option<MapRow>> {
        Ok(maps::get_by_id(&self.pool, id).await?)
    }

    async fn get_maps_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<MapRow>> {
        Ok(maps::get_by_ids(&self.pool, ids).await?)
    }

    async fn list_maps(&self, filter: &MapFilter, page: LimitOffset) -> StoreResult<Vec<MapRow>> {
        Ok(maps::list(&self.pool, filter, page).await?)
    }

    async fn sample_maps(&self, size: i64) -> StoreResult<Vec<MapRow>> {
        Ok(maps::sample(&self.pool, size).await?)
    }

    async fn create_map(&self, data: CreateMapData) -> StoreResult<MapRow> {
        Ok(maps::create(&self.pool, data).await?)
    }

    async fn get_point(&self, id: Uuid) -> StoreResult<Option<PointRow>> {
        Ok(points::get_by_id(&self.pool, id).await?)
    }

    async fn list_points(
        &self,
        filter: &PointFilter,
        page: LimitOffset,
    ) -> StoreResult<Vec<PointRow>> {
        Ok(points::list(&self.pool, filter, page).await?)
    }

    async fn sample_points(&self, size: i64) -> StoreResult<Vec<PointRow>> {
        Ok(points::sample(&self.pool, size).await?)
    }

    async fn create_point(&self, map_id: Uuid, point: NewPoint) -> StoreResult<PointRow> {
        let mut tx = self.pool.begin().await?;

        if !maps::exists_locked(&mut *tx, map_id).await? {
            return Err(StoreError::MapNotFound(map_id));
        }
        let row = points::create(&mut *tx, map_id, point).await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn save_map(
        &self,
        map: CreateMapData,
        new_points: Vec<NewPoint>,
    ) -> StoreResult<(MapRow, Vec<PointRow>)> {
        // Dropping the transaction on any error rolls back the map insert too.
        let mut tx = self.pool.begin().await?;

        let map_row = maps::create(&mut *tx, map).await?;
        let mut point_rows = Vec::with_capacity(new_points.len());
        for point in new_points {
            point_rows.push(points::create(&mut *tx, map_row.id, point).await?);
        }

        tx.commit().await?;
        Ok((map_row, point_rows))
    }
}
