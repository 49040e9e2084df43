use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::MSG_CATEGORIES_UPDATED;
use crate::error::Result;
use crate::models::Category;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReplaceCategoriesRequest {
    /// Kept untyped so shape errors become validation errors
    #[serde(default)]
    pub categories: Value,
}

#[derive(Debug, Serialize)]
pub struct ReplaceCategoriesResponse {
    pub success: bool,
    pub message: String,
}

/// List categories in stored order
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let stores = state.stores.clone();
    let categories = tokio::task::spawn_blocking(move || stores.categories.list()).await?;

    Ok(Json(categories))
}

/// Replace the whole category set
///
/// Every element needs a non-empty `id` and `name` and a `candidates`
/// array; ids must be unique. On success the vote document gains a zero
/// entry for every new category/candidate pair.
pub async fn replace_categories(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ReplaceCategoriesRequest>, JsonRejection>,
) -> Result<Json<ReplaceCategoriesResponse>> {
    let Json(payload) = payload?;
    let categories = Category::parse_all(payload.categories)?;
    let stores = state.stores.clone();

    tokio::task::spawn_blocking(move || stores.replace_categories(categories)).await??;

    Ok(Json(ReplaceCategoriesResponse {
        success: true,
        message: MSG_CATEGORIES_UPDATED.to_string(),
    }))
}
