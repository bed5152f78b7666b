use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct MapRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub map_name: Option<String>,
    pub description: Option<String>,
    pub creator_name: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct PointRow {
    pub id: Uuid,
    pub map_id: Uuid,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub description: Option<String>,
    pub category: Option<String>,
    pub other_text: Option<String>,
    pub creator_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PointRow {
    /// Rebuild the tagged category from its two stored columns.
    /// Unknown labels read back as `None`.
    pub fn category(&self) -> Option<Category> {
        let label = self.category.as_deref()?;
        match CategoryLabel::from_str(label).ok()? {
            CategoryLabel::Other => Some(Category::Other(self.other_text.clone().unwrap_or_default())),
            known => Category::from_label(known, None),
        }
    }
}

/// Point category. `Other` carries the free-form description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Art,
    Monument,
    PublicSpace,
    Residence,
    School,
    Business,
    Workplace,
    Other(String),
}

/// Category without its payload; what the `category` column stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryLabel {
    Art,
    Monument,
    PublicSpace,
    Residence,
    School,
    Business,
    Workplace,
    Other,
}

impl CategoryLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryLabel::Art => "art",
            CategoryLabel::Monument => "monument",
            CategoryLabel::PublicSpace => "publicspace",
            CategoryLabel::Residence => "residence",
            CategoryLabel::School => "school",
            CategoryLabel::Business => "business",
            CategoryLabel::Workplace => "workplace",
            CategoryLabel::Other => "other",
        }
    }
}

impl FromStr for CategoryLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "art" => Ok(CategoryLabel::Art),
            "monument" => Ok(CategoryLabel::Monument),
            "publicspace" => Ok(CategoryLabel::PublicSpace),
            "residence" => Ok(CategoryLabel::Residence),
            "school" => Ok(CategoryLabel::School),
            "business" => Ok(CategoryLabel::Business),
            "workplace" => Ok(CategoryLabel::Workplace),
            "other" => Ok(CategoryLabel::Other),
            _ => Err(format!("Unknown point category: {}", s)),
        }
    }
}

impl Category {
    /// Build a category from a label and the optional free-form text.
    /// Returns `None` when `Other` has no text or a known label has some.
    pub fn from_label(label: CategoryLabel, other_text: Option<String>) -> Option<Self> {
        let category = match (label, other_text) {
            (CategoryLabel::Other, Some(text)) => Category::Other(text),
            (CategoryLabel::Other, None) => return None,
            (_, Some(_)) => return None,
            (CategoryLabel::Art, None) => Category::Art,
            (CategoryLabel::Monument, None) => Category::Monument,
            (CategoryLabel::PublicSpace, None) => Category::PublicSpace,
            (CategoryLabel::Residence, None) => Category::Residence,
            (CategoryLabel::School, None) => Category::School,
            (CategoryLabel::Business, None) => Category::Business,
            (CategoryLabel::Workplace, None) => Category::Workplace,
        };
        Some(category)
    }

    pub fn label(&self) -> CategoryLabel {
        match self {
            Category::Art => CategoryLabel::Art,
            Category::Monument => CategoryLabel::Monument,
            Category::PublicSpace => CategoryLabel::PublicSpace,
            Category::Residence => CategoryLabel::Residence,
            Category::School => CategoryLabel::School,
            Category::Business => CategoryLabel::Business,
            Category::Workplace => CategoryLabel::Workplace,
            Category::Other(_) => CategoryLabel::Other,
        }
    }

    pub fn other_text(&self) -> Option<&str> {
        match self {
            Category::Other(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateMapData {
    pub map_name: Option<String>,
    pub description: Option<String>,
    pub creator_name: Option<String>,
}

/// A point that is not yet attached to a map.
#[derive(Debug, Clone)]
pub struct NewPoint {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub creator_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: Option<&str>, other_text: Option<&str>) -> PointRow {
        PointRow {
            id: Uuid::new_v4(),
            map_id: Uuid::new_v4(),
            name: "Mural".into(),
            x: 0,
            y: 0,
            description: None,
            category: category.map(String::from),
            other_text: other_text.map(String::from),
            creator_name: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn other_requires_text() {
        assert_eq!(Category::from_label(CategoryLabel::Other, None), None);
        assert_eq!(
            Category::from_label(CategoryLabel::Other, Some("Food truck".into())),
            Some(Category::Other("Food truck".into()))
        );
    }

    #[test]
    fn known_label_rejects_text() {
        assert_eq!(
            Category::from_label(CategoryLabel::School, Some("why".into())),
            None
        );
        assert_eq!(
            Category::from_label(CategoryLabel::School, None),
            Some(Category::School)
        );
    }

    #[test]
    fn row_category_reads_both_columns() {
        assert_eq!(row(Some("art"), None).category(), Some(Category::Art));
        assert_eq!(
            row(Some("other"), Some("Bus stop")).category(),
            Some(Category::Other("Bus stop".into()))
        );
        assert_eq!(row(None, None).category(), None);
        assert_eq!(row(Some("castle"), None).category(), None);
    }

    #[test]
    fn labels_round_trip_through_column_text() {
        for label in [
            CategoryLabel::Art,
            CategoryLabel::PublicSpace,
            CategoryLabel::Workplace,
            CategoryLabel::Other,
        ] {
            assert_eq!(CategoryLabel::from_str(label.as_str()), Ok(label));
        }
    }
}
