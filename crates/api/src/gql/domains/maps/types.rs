use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::gql::common::helpers::{page_params, require_id};
use crate::gql::common::types::Operation;
use crate::gql::domains::points::Point;
use crate::gql::error::StoreResultExt;
use crate::state::AppState;
use infra::filter::{MapClause, MapFilter, PointClause, PointFilter};
use infra::models::MapRow;
use infra::pagination::DEFAULT_PAGE_SIZE;

/// A Map
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Map {
    /// The ID of this map
    pub id: ID,
    /// The date on which this map was created
    pub created_at: DateTime<Utc>,
    /// The name of this map
    pub map_name: Option<String>,
    /// The description for this map
    pub description: Option<String>,
    /// The creator of this map
    pub creator_name: Option<String>,
    #[graphql(skip)]
    pub uuid: Uuid,
}

impl From<MapRow> for Map {
    fn from(row: MapRow) -> Self {
        Self {
            id: row.id.into(),
            created_at: row.created_at,
            map_name: row.map_name,
            description: row.description,
            creator_name: row.creator_name,
            uuid: row.id,
        }
    }
}

#[ComplexObject]
impl Map {
    /// The points placed on this map, in creation order
    async fn points(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The number of points to return (default 10)")] size: Option<i32>,
        #[graphql(desc = "The index of the page to return (default 0)")] page: Option<i32>,
    ) -> Result<Vec<Point>> {
        let state = ctx.data::<AppState>()?;
        let page = page_params(
            size.unwrap_or(DEFAULT_PAGE_SIZE as i32),
            page.unwrap_or(0),
        )?;

        let filter = PointFilter::default().with(PointClause::MapId(self.uuid));
        let rows = state.store.list_points(&filter, page).await.gql()?;
        Ok(rows.into_iter().map(Point::from).collect())
    }
}

/// Filter which can be applied to mapList
#[derive(InputObject, Default, Debug)]
pub struct MapListQuery {
    /// Selects all maps with this ID
    pub id: Option<ID>,
    /// Selects all maps with this mapName
    pub map_name: Option<String>,
    /// Selects all maps with this creatorName
    pub creator_name: Option<String>,
    /// Selects all maps created at or after this date
    pub start_date: Option<DateTime<Utc>>,
    /// Selects all maps created at or before this date
    pub end_date: Option<DateTime<Utc>>,
    /// Operation combining the given fields (default AND)
    pub operation: Option<Operation>,
    /// When true, returns a random selection of distinct maps (overrides all other params except size)
    pub random: Option<bool>,
}

impl MapListQuery {
    pub fn is_random(&self) -> bool {
        self.random.unwrap_or(false)
    }

    pub fn to_filter(&self) -> Result<MapFilter> {
        let mut filter = MapFilter::new(self.operation.unwrap_or(Operation::And).into());

        if let Some(id) = &self.id {
            filter.push(MapClause::Id(require_id(id, "map")?));
        }
        if let Some(name) = &self.map_name {
            filter.push(MapClause::MapName(name.clone()));
        }
        if let Some(creator) = &self.creator_name {
            filter.push(MapClause::CreatorName(creator.clone()));
        }
        if let Some(from) = self.start_date {
            filter.push(MapClause::CreatedFrom(from));
        }
        if let Some(until) = self.end_date {
            filter.push(MapClause::CreatedUntil(until));
        }

        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra::filter::Operation as FilterOperation;

    #[test]
    fn empty_query_has_no_clauses() {
        let filter = MapListQuery::default().to_filter().unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter.operation, FilterOperation::And);
    }

    #[test]
    fn each_present_field_becomes_a_clause() {
        let query = MapListQuery {
            map_name: Some("Campus".into()),
            creator_name: Some("ada".into()),
            operation: Some(Operation::Nor),
            ..Default::default()
        };
        let filter = query.to_filter().unwrap();
        assert_eq!(filter.operation, FilterOperation::Nor);
        assert_eq!(
            filter.clauses,
            vec![
                MapClause::MapName("Campus".into()),
                MapClause::CreatorName("ada".into()),
            ]
        );
    }

    #[test]
    fn invalid_id_filter_is_rejected() {
        let query = MapListQuery {
            id: Some(ID::from("not-a-uuid")),
            ..Default::default()
        };
        assert!(query.to_filter().is_err());
    }
}
