use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::MapLoader;
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> AppSchema {
    let map_loader = DataLoader::new(MapLoader::new(state.store.clone()), tokio::spawn);
    let introspection_enabled = state.config().introspection_enabled;

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
    .data(map_loader)
    .limit_depth(10)
    .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
