use async_graphql::{Enum, SimpleObject};

use infra::filter;
use infra::models::CategoryLabel;

/// Boolean operation applied across the given filter fields
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum Operation {
    And,
    Or,
    Nor,
}

impl From<Operation> for filter::Operation {
    fn from(op: Operation) -> Self {
        match op {
            Operation::And => filter::Operation::And,
            Operation::Or => filter::Operation::Or,
            Operation::Nor => filter::Operation::Nor,
        }
    }
}

/// Category of a point. OTHER is described by the point's otherText.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum PointCategory {
    Art,
    Monument,
    #[graphql(name = "PUBLICSPACE")]
    PublicSpace,
    Residence,
    School,
    Business,
    Workplace,
    Other,
}

impl From<PointCategory> for CategoryLabel {
    fn from(category: PointCategory) -> Self {
        match category {
            PointCategory::Art => CategoryLabel::Art,
            PointCategory::Monument => CategoryLabel::Monument,
            PointCategory::PublicSpace => CategoryLabel::PublicSpace,
            PointCategory::Residence => CategoryLabel::Residence,
            PointCategory::School => CategoryLabel::School,
            PointCategory::Business => CategoryLabel::Business,
            PointCategory::Workplace => CategoryLabel::Workplace,
            PointCategory::Other => CategoryLabel::Other,
        }
    }
}

impl From<CategoryLabel> for PointCategory {
    fn from(label: CategoryLabel) -> Self {
        match label {
            CategoryLabel::Art => PointCategory::Art,
            CategoryLabel::Monument => PointCategory::Monument,
            CategoryLabel::PublicSpace => PointCategory::PublicSpace,
            CategoryLabel::Residence => PointCategory::Residence,
            CategoryLabel::School => PointCategory::School,
            CategoryLabel::Business => PointCategory::Business,
            CategoryLabel::Workplace => PointCategory::Workplace,
            CategoryLabel::Other => PointCategory::Other,
        }
    }
}

/// The coordinates of a point on the map
#[derive(SimpleObject, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coordinates {
    /// The x coordinate of the point
    pub x: i32,
    /// The y coordinate of the point
    pub y: i32,
}
