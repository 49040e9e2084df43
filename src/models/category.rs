use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::constants::{ERR_CATEGORIES_NOT_ARRAY, ERR_DUPLICATE_CATEGORY_ID, ERR_INVALID_CATEGORY};
use crate::error::{AppError, Result};

/// An award category and the candidates that can be voted for in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, also the key in the vote document
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// Candidate names in display order (duplicates allowed)
    pub candidates: Vec<String>,
}

impl Category {
    /// Check the fields a category cannot be stored without
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() || self.name.is_empty() {
            return Err(AppError::Validation(ERR_INVALID_CATEGORY.to_string()));
        }
        Ok(())
    }

    pub fn has_candidate(&self, candidate: &str) -> bool {
        self.candidates.iter().any(|c| c == candidate)
    }

    /// Validate a whole replacement set: every element well formed, ids unique
    pub fn validate_all(categories: &[Category]) -> Result<()> {
        let mut seen = HashSet::new();
        for category in categories {
            category.validate()?;
            if !seen.insert(category.id.as_str()) {
                tracing::warn!("Duplicate category id in replacement: {}", category.id);
                return Err(AppError::Validation(ERR_DUPLICATE_CATEGORY_ID.to_string()));
            }
        }
        Ok(())
    }

    /// Parse the untyped `categories` field of a replacement request
    ///
    /// Shape errors (not an array, missing `candidates`, wrong field types)
    /// surface as validation errors instead of extractor rejections, so the
    /// caller always gets the same error body.
    pub fn parse_all(value: Value) -> Result<Vec<Category>> {
        let Value::Array(items) = value else {
            return Err(AppError::Validation(ERR_CATEGORIES_NOT_ARRAY.to_string()));
        };

        let categories = items
            .into_iter()
            .map(|item| {
                serde_json::from_value::<Category>(item)
                    .map_err(|_| AppError::Validation(ERR_INVALID_CATEGORY.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Category::validate_all(&categories)?;
        Ok(categories)
    }

    /// Look up a category by id
    pub fn find<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.id == id)
    }
}
