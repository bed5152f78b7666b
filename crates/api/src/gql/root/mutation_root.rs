use async_graphql::MergedObject;

use crate::gql::domains::maps::MapMutation;
use crate::gql::domains::points::PointMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(MapMutation, PointMutation);
