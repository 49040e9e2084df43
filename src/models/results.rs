use serde::{Deserialize, Serialize};

use super::{Category, VoteTable};

/// One candidate with its current vote count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub name: String,
    pub count: u64,
}

/// Ranked results for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResults {
    pub category_id: String,
    pub category_name: String,
    pub category_icon: String,
    pub candidates: Vec<CandidateResult>,
}

impl CategoryResults {
    /// Rank a category's candidates by count, highest first
    ///
    /// The sort is stable: equal counts keep the candidate list order.
    pub fn rank(category: &Category, votes: &VoteTable) -> Self {
        let mut candidates: Vec<CandidateResult> = category
            .candidates
            .iter()
            .map(|name| CandidateResult {
                name: name.clone(),
                count: votes.count(&category.id, name),
            })
            .collect();
        candidates.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            category_icon: category.icon.clone(),
            candidates,
        }
    }
}
