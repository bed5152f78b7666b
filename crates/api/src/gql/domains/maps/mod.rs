pub mod resolvers;
pub mod types;

pub use resolvers::{MapMutation, MapQuery};
pub use types::{Map, MapListQuery};
