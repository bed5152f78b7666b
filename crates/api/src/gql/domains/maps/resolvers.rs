use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::{lookup_id, page_params};
use crate::gql::domains::points::{service, PointAdd};
use crate::gql::error::StoreResultExt;
use crate::state::AppState;
use infra::models::CreateMapData;
use infra::pagination::DEFAULT_PAGE_SIZE;

use super::types::{Map, MapListQuery};

#[derive(Default)]
pub struct MapQuery;

#[Object]
impl MapQuery {
    /// Given a map's ID, returns that map
    async fn map(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Map>> {
        let state = ctx.data::<AppState>()?;

        let Some(id) = lookup_id(&id) else {
            return Ok(None);
        };
        let row = state.store.get_map(id).await.gql()?;

        Ok(row.map(Map::from))
    }

    /// Get a list of maps of a given size, starting on a given page, conforming to a given filter
    async fn map_list(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Query object for more specific searches")] query: Option<MapListQuery>,
        #[graphql(desc = "The number of maps to return (default 10)")] size: Option<i32>,
        #[graphql(desc = "The index of the page to return (default 0)")] page: Option<i32>,
    ) -> Result<Vec<Map>> {
        let state = ctx.data::<AppState>()?;
        let query = query.unwrap_or_default();
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE as i32);

        let rows = if query.is_random() {
            let limit = page_params(size, 0)?.limit;
            state.store.sample_maps(limit).await.gql()?
        } else {
            let page = page_params(size, page.unwrap_or(0))?;
            let filter = query.to_filter()?;
            state.store.list_maps(&filter, page).await.gql()?
        };

        Ok(rows.into_iter().map(Map::from).collect())
    }
}

#[derive(Default)]
pub struct MapMutation;

#[Object]
impl MapMutation {
    /// Used to add a map. Returns the ID of the added map
    async fn add_map(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The name of this map")] map_name: Option<String>,
        #[graphql(desc = "The description of this map")] description: Option<String>,
        #[graphql(desc = "The creator of this map")] creator_name: Option<String>,
    ) -> Result<ID> {
        let state = ctx.data::<AppState>()?;

        let row = state
            .store
            .create_map(CreateMapData {
                map_name,
                description,
                creator_name,
            })
            .await
            .gql()?;

        tracing::info!(map_id = %row.id, "Map added");
        Ok(row.id.into())
    }

    /// Saves a map and its points in one step and returns the map's ID.
    /// Nothing is saved if any point is invalid.
    async fn save_map(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The name of this map")] map_name: Option<String>,
        #[graphql(desc = "The description for this map")] description: Option<String>,
        #[graphql(desc = "The creator of this map")] creator_name: Option<String>,
        #[graphql(desc = "A list of the points to add")] points: Option<Vec<PointAdd>>,
    ) -> Result<ID> {
        let state = ctx.data::<AppState>()?;

        let new_points = service::new_points(points.unwrap_or_default())?;
        let (map_row, point_rows) = state
            .store
            .save_map(
                CreateMapData {
                    map_name,
                    description,
                    creator_name,
                },
                new_points,
            )
            .await
            .gql()?;

        tracing::info!(map_id = %map_row.id, points = point_rows.len(), "Map saved");
        Ok(map_row.id.into())
    }
}
