// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod maps;
pub mod points;
