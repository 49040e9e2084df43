//! Awards Vote Server Library
//!
//! File-backed category and vote stores plus the HTTP API over them.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use client::ApiClient;
pub use config::{ClientConfig, Config};
pub use error::{AppError, Result};
pub use store::Stores;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<Stores>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given stores and configuration
    pub fn new(stores: Stores, config: Config) -> Self {
        Self {
            stores: Arc::new(stores),
            config,
        }
    }
}

/// Build the API router (without CORS or tracing layers)
pub fn router(state: AppState) -> Router {
    use routes::*;

    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/categories",
            get(list_categories).put(replace_categories),
        )
        .route("/api/results", get(all_results))
        .route("/api/results/:category_id", get(category_results))
        .route("/api/vote", post(submit_vote))
        .route("/api/votes", get(all_votes))
        .with_state(state)
}
