pub mod categories;
pub mod document;
pub mod votes;

pub use categories::CategoryStore;
pub use document::JsonDocument;
pub use votes::VoteStore;

use std::path::Path;

use crate::constants::{CATEGORIES_FILE, VOTES_FILE};
use crate::error::Result;
use crate::models::{CandidateCounts, Category, CategoryResults};

/// Both stores, opened against one data directory
#[derive(Debug, Clone)]
pub struct Stores {
    pub categories: CategoryStore,
    pub votes: VoteStore,
}

impl Stores {
    /// Open the stores under `data_dir`, creating the directory if needed
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        tracing::info!("Opening data directory at: {:?}", data_dir);

        if !data_dir.exists() {
            std::fs::create_dir_all(data_dir).map_err(|e| {
                tracing::error!("Failed to create data directory: {}", e);
                e
            })?;
        }

        Ok(Self {
            categories: CategoryStore::new(data_dir.join(CATEGORIES_FILE)),
            votes: VoteStore::new(data_dir.join(VOTES_FILE)),
        })
    }

    /// Startup pass: create missing documents and fill in vote entries
    pub fn initialize(&self) -> Result<()> {
        let categories = self.categories.list();
        self.votes.synchronize(&categories)?;

        tracing::info!("Stores initialized ({} categories)", categories.len());
        Ok(())
    }

    /// Replace every category, then synchronize the vote document
    pub fn replace_categories(&self, categories: Vec<Category>) -> Result<()> {
        let categories = self.categories.replace_all(categories)?;
        self.votes.synchronize(&categories)?;
        Ok(())
    }

    pub fn record_vote(&self, category_id: &str, candidate: &str) -> Result<CandidateCounts> {
        let categories = self.categories.list();
        self.votes.record_vote(&categories, category_id, candidate)
    }

    pub fn all_results(&self) -> Vec<CategoryResults> {
        self.votes.all_results(&self.categories.list())
    }

    pub fn category_results(&self, category_id: &str) -> Result<CategoryResults> {
        self.votes
            .category_results(&self.categories.list(), category_id)
    }
}
