use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::CategoryResults;
use crate::AppState;

/// Ranked results for every category
pub async fn all_results(State(state): State<AppState>) -> Result<Json<Vec<CategoryResults>>> {
    let stores = state.stores.clone();
    let results = tokio::task::spawn_blocking(move || stores.all_results()).await?;

    Ok(Json(results))
}

/// Ranked results for one category, 404 if the id is unknown
pub async fn category_results(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryResults>> {
    let stores = state.stores.clone();
    let results =
        tokio::task::spawn_blocking(move || stores.category_results(&category_id)).await??;

    Ok(Json(results))
}
