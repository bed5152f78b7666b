pub mod resolvers;
pub mod service;
pub mod types;

pub use resolvers::{PointMutation, PointQuery};
pub use types::{Point, PointAdd, PointListQuery};
