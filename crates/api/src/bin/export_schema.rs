//! Prints the GraphQL schema (SDL) so clients can generate code against it.
//! Pass a path to write it to a file instead of stdout.

use std::sync::Arc;

use anyhow::Result;
use api::gql::build_schema;
use api::{AppConfig, AppState};
use infra::MemoryStore;

fn main() -> Result<()> {
    let state = AppState::new(Arc::new(MemoryStore::new()), AppConfig::default());
    let sdl = build_schema(state).sdl();

    if let Some(target) = std::env::args().nth(1) {
        std::fs::write(target, sdl)?;
    } else {
        println!("{}", sdl);
    }

    Ok(())
}
