use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use uuid::Uuid;

use crate::gql::common::helpers::{parse_coordinates, require_id};
use crate::gql::common::types::{Coordinates, Operation, PointCategory};
use crate::gql::domains::maps::Map;
use crate::gql::error::GqlError;
use crate::gql::loaders::MapLoader;
use infra::filter::{PointClause, PointFilter};
use infra::models::PointRow;

/// A point on a map
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Point {
    /// The ID of this point
    pub id: ID,
    /// The ID of the map with which this point is associated
    pub map_id: ID,
    /// The name of this point
    pub name: String,
    /// The coordinates of the point
    pub coordinates: Coordinates,
    /// The description of this point
    pub description: Option<String>,
    /// The category of this point
    pub category: Option<PointCategory>,
    /// Describes the category when it is OTHER
    pub other_text: Option<String>,
    /// The creator of this point
    pub creator_name: Option<String>,
    #[graphql(skip)]
    pub map_uuid: Uuid,
}

impl From<PointRow> for Point {
    fn from(row: PointRow) -> Self {
        let category = row.category();
        Self {
            id: row.id.into(),
            map_id: row.map_id.into(),
            name: row.name,
            coordinates: Coordinates { x: row.x, y: row.y },
            description: row.description,
            category: category.as_ref().map(|c| c.label().into()),
            other_text: category.as_ref().and_then(|c| c.other_text()).map(str::to_owned),
            creator_name: row.creator_name,
            map_uuid: row.map_id,
        }
    }
}

#[ComplexObject]
impl Point {
    /// The map this point belongs to
    async fn map(&self, ctx: &Context<'_>) -> Result<Option<Map>> {
        let loader = ctx.data::<DataLoader<MapLoader>>()?;
        let row = loader.load_one(self.map_uuid).await.map_err(|e| {
            tracing::error!(map_id = %self.map_uuid, "Failed to load map: {e}");
            GqlError::new("Internal database error")
        })?;
        Ok(row.map(Map::from))
    }
}

/// Filter which can be applied to pointList
#[derive(InputObject, Default, Debug)]
pub struct PointListQuery {
    /// Selects the point with this ID
    pub id: Option<ID>,
    /// Selects all points with this mapId
    pub map_id: Option<ID>,
    /// Selects all points at the given coordinates, as [x, y]
    pub coordinates: Option<Vec<i32>>,
    /// Together with coordinates, selects all points within this many pixels (Euclidean, inclusive)
    pub within: Option<i32>,
    /// Selects all points with the given creatorName
    pub creator_name: Option<String>,
    /// Selects all points with the given category
    pub category: Option<PointCategory>,
    /// Operation combining the given fields (default AND)
    pub operation: Option<Operation>,
    /// When true, returns a random selection of distinct points (overrides all other params except size)
    pub random: Option<bool>,
}

impl PointListQuery {
    pub fn is_random(&self) -> bool {
        self.random.unwrap_or(false)
    }

    pub fn to_filter(&self) -> Result<PointFilter> {
        let mut filter = PointFilter::new(self.operation.unwrap_or(Operation::And).into());

        if let Some(id) = &self.id {
            filter.push(PointClause::Id(require_id(id, "point")?));
        }
        if let Some(map_id) = &self.map_id {
            filter.push(PointClause::MapId(require_id(map_id, "map")?));
        }
        match (&self.coordinates, self.within) {
            (Some(values), None) => {
                let Coordinates { x, y } = parse_coordinates(values)?;
                filter.push(PointClause::At { x, y });
            }
            (Some(values), Some(radius)) => {
                if radius < 0 {
                    return Err(GqlError::new("within must not be negative").into());
                }
                let Coordinates { x, y } = parse_coordinates(values)?;
                filter.push(PointClause::Within { x, y, radius });
            }
            (None, Some(_)) => {
                return Err(GqlError::new("within requires coordinates").into());
            }
            (None, None) => {}
        }
        if let Some(creator) = &self.creator_name {
            filter.push(PointClause::CreatorName(creator.clone()));
        }
        if let Some(category) = self.category {
            filter.push(PointClause::Category(category.into()));
        }

        Ok(filter)
    }
}

/// Input for adding a point
#[derive(InputObject, Debug, Clone)]
pub struct PointAdd {
    /// The name of this point
    pub name: String,
    /// The coordinates of this point, as [x, y]
    pub coordinates: Vec<i32>,
    /// The description of this point
    pub description: Option<String>,
    /// The category of this point
    pub category: Option<PointCategory>,
    /// Describes the category when it is OTHER
    pub other_text: Option<String>,
    /// The creator of this point
    pub creator_name: Option<String>,
}
