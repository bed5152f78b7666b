pub mod common;
pub mod domains;
pub mod error;
pub mod loaders;
pub mod root;
pub mod schema;

pub use root::{MutationRoot, QueryRoot};
pub use schema::{build_schema, AppSchema};
