use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::{lookup_id, page_params, require_id};
use crate::gql::common::types::PointCategory;
use crate::gql::error::StoreResultExt;
use crate::state::AppState;
use infra::pagination::DEFAULT_PAGE_SIZE;

use super::service;
use super::types::{Point, PointListQuery};

#[derive(Default)]
pub struct PointQuery;

#[Object]
impl PointQuery {
    /// Given a point's ID, returns that point
    async fn point(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Point>> {
        let state = ctx.data::<AppState>()?;

        let Some(id) = lookup_id(&id) else {
            return Ok(None);
        };
        let row = state.store.get_point(id).await.gql()?;

        Ok(row.map(Point::from))
    }

    /// Gets a list of points of a given size starting at a given page conforming to a given filter
    async fn point_list(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Query object for more specific searches")] query: Option<PointListQuery>,
        #[graphql(desc = "The number of points to return (default 10)")] size: Option<i32>,
        #[graphql(desc = "The index of the page to return (default 0)")] page: Option<i32>,
    ) -> Result<Vec<Point>> {
        let state = ctx.data::<AppState>()?;
        let query = query.unwrap_or_default();
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE as i32);

        let rows = if query.is_random() {
            let limit = page_params(size, 0)?.limit;
            state.store.sample_points(limit).await.gql()?
        } else {
            let page = page_params(size, page.unwrap_or(0))?;
            let filter = query.to_filter()?;
            state.store.list_points(&filter, page).await.gql()?
        };

        Ok(rows.into_iter().map(Point::from).collect())
    }
}

#[derive(Default)]
pub struct PointMutation;

#[Object]
impl PointMutation {
    /// Used to add a point. Returns the ID of the added point
    #[allow(clippy::too_many_arguments)]
    async fn add_point(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The ID of the point's map")] map_id: ID,
        #[graphql(desc = "The name of this point")] name: String,
        #[graphql(desc = "The [x, y] coordinates of the point")] coordinates: Vec<i32>,
        #[graphql(desc = "The description of this point")] description: Option<String>,
        #[graphql(desc = "The category of this point")] category: Option<PointCategory>,
        #[graphql(desc = "Describes the category when it is OTHER")] other_text: Option<String>,
        #[graphql(desc = "The creator of this point")] creator_name: Option<String>,
    ) -> Result<ID> {
        let state = ctx.data::<AppState>()?;

        let map_id = require_id(&map_id, "map")?;
        let point = service::new_point(
            name,
            &coordinates,
            description,
            category,
            other_text,
            creator_name,
        )?;

        let row = state.store.create_point(map_id, point).await.gql()?;

        tracing::info!(point_id = %row.id, %map_id, "Point added");
        Ok(row.id.into())
    }
}
