use async_graphql::Result;

use super::types::PointAdd;
use crate::gql::common::helpers::parse_coordinates;
use crate::gql::common::types::PointCategory;
use crate::gql::error::GqlError;
use infra::models::{Category, NewPoint};

/// Combine the wire `category` and `otherText` into a tagged category.
///
/// OTHER needs a non-blank `otherText`; `otherText` is refused for every
/// other category.
pub fn resolve_category(
    category: Option<PointCategory>,
    other_text: Option<String>,
) -> Result<Option<Category>> {
    let other_text = other_text.map(|t| t.trim().to_string());

    match (category, other_text) {
        (None, None) => Ok(None),
        (None, Some(_)) => Err(GqlError::new("otherText is only allowed when category is OTHER").into()),
        (Some(PointCategory::Other), text) => match text.filter(|t| !t.is_empty()) {
            Some(text) => Ok(Some(Category::Other(text))),
            None => Err(GqlError::new("otherText is required when category is OTHER").into()),
        },
        (Some(_), Some(_)) => Err(GqlError::new("otherText is only allowed when category is OTHER").into()),
        (Some(category), None) => Ok(Category::from_label(category.into(), None)),
    }
}

/// Validate the fields of a point-to-be.
pub fn new_point(
    name: String,
    coordinates: &[i32],
    description: Option<String>,
    category: Option<PointCategory>,
    other_text: Option<String>,
    creator_name: Option<String>,
) -> Result<NewPoint> {
    let coordinates = parse_coordinates(coordinates)?;
    let category = resolve_category(category, other_text)?;

    Ok(NewPoint {
        name,
        x: coordinates.x,
        y: coordinates.y,
        description,
        category,
        creator_name,
    })
}

/// Validate every entry up front so a bad one fails the batch before any write.
pub fn new_points(inputs: Vec<PointAdd>) -> Result<Vec<NewPoint>> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(i, input)| {
            new_point(
                input.name,
                &input.coordinates,
                input.description,
                input.category,
                input.other_text,
                input.creator_name,
            )
            .map_err(|e| async_graphql::Error::new(format!("points[{i}]: {}", e.message)))
        })
        .collect()
}
