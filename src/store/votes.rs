use std::path::PathBuf;

use super::document::JsonDocument;
use crate::error::{AppError, Result};
use crate::models::{CandidateCounts, Category, CategoryResults, VoteTable};

/// Vote counts per category and candidate, persisted as one JSON object
///
/// Every operation is a read-modify-write of the whole document with no
/// locking. Two votes recorded at the same moment can read the same
/// counts and one of the increments is then lost.
#[derive(Debug, Clone)]
pub struct VoteStore {
    doc: JsonDocument<VoteTable>,
}

impl VoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }

    /// The whole vote document; an empty one is created on first use
    pub fn get_all(&self) -> VoteTable {
        self.doc.read()
    }

    /// Make sure every category/candidate pair has an entry
    ///
    /// Writes only when something was added. Returns whether it wrote.
    pub fn synchronize(&self, categories: &[Category]) -> Result<bool> {
        let mut votes = self.doc.read();
        if !votes.synchronize(categories) {
            return Ok(false);
        }

        self.doc.write(&votes)?;
        tracing::info!("Vote document synchronized with {} categories", categories.len());
        Ok(true)
    }

    /// Add one vote and return the category's counts after the increment
    pub fn record_vote(
        &self,
        categories: &[Category],
        category_id: &str,
        candidate: &str,
    ) -> Result<CandidateCounts> {
        let category = Category::find(categories, category_id).ok_or_else(|| {
            tracing::warn!("Vote for unknown category: {}", category_id);
            AppError::CategoryNotFound
        })?;

        if !category.has_candidate(candidate) {
            tracing::warn!("Vote for unknown candidate {} in {}", candidate, category_id);
            return Err(AppError::InvalidCandidate);
        }

        let mut votes = self.doc.read();
        let count = votes.increment(category_id, candidate);
        self.doc.write(&votes)?;

        tracing::debug!("Vote recorded: {} / {} -> {}", category_id, candidate, count);

        Ok(votes.category(category_id).cloned().unwrap_or_default())
    }

    /// Ranked results for every category, in category order
    pub fn all_results(&self, categories: &[Category]) -> Vec<CategoryResults> {
        let votes = self.doc.read();
        categories
            .iter()
            .map(|category| CategoryResults::rank(category, &votes))
            .collect()
    }

    /// Ranked results for one category
    pub fn category_results(
        &self,
        categories: &[Category],
        category_id: &str,
    ) -> Result<CategoryResults> {
        let category = Category::find(categories, category_id).ok_or(AppError::CategoryNotFound)?;
        let votes = self.doc.read();
        Ok(CategoryResults::rank(category, &votes))
    }
}
