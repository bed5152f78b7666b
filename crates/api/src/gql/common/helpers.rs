use async_graphql::ID;
use uuid::Uuid;

use super::types::Coordinates;
use crate::gql::error::{GqlError, ResultExt};
use infra::pagination::LimitOffset;

/// Parse an ID for a lookup. Anything that is not a UUID cannot name a row,
/// so it reads as "not found" rather than an error.
pub fn lookup_id(id: &ID) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

/// Parse an ID that must be valid, e.g. a reference in a mutation or filter.
pub fn require_id(id: &ID, what: &str) -> async_graphql::Result<Uuid> {
    Uuid::parse_str(id.as_str()).gql_err(&format!("Invalid {what} ID"))
}

/// `[x, y]` as accepted on the wire.
pub fn parse_coordinates(values: &[i32]) -> async_graphql::Result<Coordinates> {
    match values {
        [x, y] => Ok(Coordinates { x: *x, y: *y }),
        _ => Err(GqlError::new(format!(
            "coordinates must be an array of exactly 2 integers [x, y], got {} values",
            values.len()
        ))
        .into()),
    }
}

pub fn page_params(size: i32, page: i32) -> async_graphql::Result<LimitOffset> {
    LimitOffset::from_page(i64::from(size), i64::from(page)).map_err(|e| GqlError::new(e).into())
}
