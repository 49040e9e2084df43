use std::path::PathBuf;

use super::document::JsonDocument;
use crate::error::Result;
use crate::models::Category;

/// The ordered category list, persisted as one JSON array
#[derive(Debug, Clone)]
pub struct CategoryStore {
    doc: JsonDocument<Vec<Category>>,
}

impl CategoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }

    /// Categories as persisted; an empty document is created on first use
    pub fn list(&self) -> Vec<Category> {
        self.doc.read()
    }

    /// Validate and overwrite the whole category list
    ///
    /// Returns the stored list. Synchronizing the vote document is the
    /// caller's job, see [`super::Stores::replace_categories`].
    pub fn replace_all(&self, categories: Vec<Category>) -> Result<Vec<Category>> {
        Category::validate_all(&categories)?;
        self.doc.write(&categories)?;

        tracing::info!("Replaced category list ({} categories)", categories.len());
        Ok(categories)
    }
}
