use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::filter::{MapFilter, PointFilter};
use crate::models::{CreateMapData, MapRow, NewPoint, PointRow};
use crate::pagination::LimitOffset;
use crate::store::{Store, StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    maps: Vec<MapRow>,
    points: Vec<PointRow>,
}

/// In-process store. Rows live in insertion order, which is also creation
/// order, so paging needs no sort.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn point_row(map_id: Uuid, point: NewPoint) -> PointRow {
        let label = point.category.as_ref().map(|c| c.label().as_str().to_owned());
        let other_text = point
            .category
            .as_ref()
            .and_then(|c| c.other_text())
            .map(str::to_owned);

        PointRow {
            id: Uuid::new_v4(),
            map_id,
            name: point.name,
            x: point.x,
            y: point.y,
            description: point.description,
            category: label,
            other_text,
            creator_name: point.creator_name,
            created_at: Utc::now(),
        }
    }

    fn map_row(data: CreateMapData) -> MapRow {
        MapRow {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            map_name: data.map_name,
            description: data.description,
            creator_name: data.creator_name,
        }
    }
}

fn page_of<T>(rows: impl Iterator<Item = T>, page: LimitOffset) -> Vec<T> {
    let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit).unwrap_or(0);
    rows.skip(offset).take(limit).collect()
}

fn sample_of<T: Clone>(rows: &[T], size: i64) -> Vec<T> {
    let size = usize::try_from(size).unwrap_or(0);
    let mut sampled = rows.to_vec();
    sampled.shuffle(&mut rand::rng());
    sampled.truncate(size);
    sampled
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn get_map(&self, id: Uuid) -> StoreResult<Option<MapRow>> {
        let tables = self.tables.read();
        Ok(tables.maps.iter().find(|m| m.id == id).cloned())
    }

    async fn get_maps_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<MapRow>> {
        let tables = self.tables.read();
        Ok(tables
            .maps
            .iter()
            .filter(|m| ids.contains(&m.id))
            .cloned()
            .collect())
    }

    async fn list_maps(&self, filter: &MapFilter, page: LimitOffset) -> StoreResult<Vec<MapRow>> {
        let tables = self.tables.read();
        Ok(page_of(
            tables.maps.iter().filter(|m| filter.matches(m)).cloned(),
            page,
        ))
    }

    async fn sample_maps(&self, size: i64) -> StoreResult<Vec<MapRow>> {
        let tables = self.tables.read();
        Ok(sample_of(&tables.maps, size))
    }

    async fn create_map(&self, data: CreateMapData) -> StoreResult<MapRow> {
        let row = Self::map_row(data);
        self.tables.write().maps.push(row.clone());
        tracing::debug!(map_id = %row.id, "stored map in memory");
        Ok(row)
    }

    async fn get_point(&self, id: Uuid) -> StoreResult<Option<PointRow>> {
        let tables = self.tables.read();
        Ok(tables.points.iter().find(|p| p.id == id).cloned())
    }

    async fn list_points(
        &self,
        filter: &PointFilter,
        page: LimitOffset,
    ) -> StoreResult<Vec<PointRow>> {
        let tables = self.tables.read();
        Ok(page_of(
            tables.points.iter().filter(|p| filter.matches(p)).cloned(),
            page,
        ))
    }

    async fn sample_points(&self, size: i64) -> StoreResult<Vec<PointRow>> {
        let tables = self.tables.read();
        Ok(sample_of(&tables.points, size))
    }

    async fn create_point(&self, map_id: Uuid, point: NewPoint) -> StoreResult<PointRow> {
        let mut tables = self.tables.write();
        if !tables.maps.iter().any(|m| m.id == map_id) {
            return Err(StoreError::MapNotFound(map_id));
        }
        let row = Self::point_row(map_id, point);
        tables.points.push(row.clone());
        tracing::debug!(point_id = %row.id, %map_id, "stored point in memory");
        Ok(row)
    }

    async fn save_map(
        &self,
        map: CreateMapData,
        points: Vec<NewPoint>,
    ) -> StoreResult<(MapRow, Vec<PointRow>)> {
        let map_row = Self::map_row(map);
        let point_rows: Vec<PointRow> = points
            .into_iter()
            .map(|p| Self::point_row(map_row.id, p))
            .collect();

        let mut tables = self.tables.write();
        tables.maps.push(map_row.clone());
        tables.points.extend(point_rows.iter().cloned());
        Ok((map_row, point_rows))
    }
}
