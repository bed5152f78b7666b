use async_graphql::MergedObject;

use crate::gql::domains::maps::MapQuery;
use crate::gql::domains::points::PointQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(MapQuery, PointQuery);
