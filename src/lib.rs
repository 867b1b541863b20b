// Library crate for the ecopoints collection-point API
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{create_point, get_point, list_items, list_points};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    let uploads_dir = state.config.uploads_dir.clone();

    Router::new()
        .route("/", get(|| async { "Hello, ecopoints!" }))
        // Item catalog routes
        .route("/items", get(list_items))
        // Point routes
        .route("/points", post(create_point))
        .route("/points", get(list_points))
        .route("/points/{id}", get(get_point))
        // Stored images are served straight from the uploads directory
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
