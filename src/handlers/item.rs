use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::common::resolve_image_url;
use crate::models::Item;
use crate::repositories::ItemRepository;
use crate::state::AppState;

// ============ Response DTOs ============

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub id: i32,
    pub title: String,
    pub image_url: String,
}

impl ItemResponse {
    pub fn from_model(item: Item, asset_base_url: &str) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: resolve_image_url(asset_base_url, &item.image),
        }
    }
}

// ============ Handlers ============

/// List the collectible-material catalog
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "Catalog of collectible items", body = [ItemResponse]),
        (status = 500, description = "Database error")
    ),
    tag = "Items"
)]
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<ItemResponse>>> {
    let items = ItemRepository::list(&state.db).await?;

    Ok(Json(
        items
            .into_iter()
            .map(|i| ItemResponse::from_model(i, &state.config.asset_base_url))
            .collect(),
    ))
}
