use std::collections::BTreeSet;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::common::{resolve_image_url, validate_required};
use crate::handlers::ItemResponse;
use crate::models::{CreatePoint, Point, PointWithItems};
use crate::repositories::PointRepository;
use crate::state::AppState;

// ============ Request/Response DTOs ============

/// Item identifiers as clients submit them: either a JSON array or the
/// comma-separated string the web form sends.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ItemIds {
    List(Vec<i32>),
    Csv(String),
}

impl ItemIds {
    /// Parse into a deduplicated set of identifiers, ascending.
    pub fn into_id_set(self) -> AppResult<Vec<i32>> {
        let ids = match self {
            ItemIds::List(ids) => ids,
            ItemIds::Csv(raw) => raw
                .split(',')
                .map(|part| {
                    part.trim().parse::<i32>().map_err(|_| {
                        AppError::Validation(format!("malformed item id: {:?}", part.trim()))
                    })
                })
                .collect::<AppResult<Vec<i32>>>()?,
        };

        let set: BTreeSet<i32> = ids.into_iter().collect();
        if set.is_empty() {
            return Err(AppError::Validation(
                "a point must accept at least one item".to_string(),
            ));
        }

        Ok(set.into_iter().collect())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePointRequest {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    /// Stored filename produced by the upload collaborator.
    pub image: String,
    pub items: ItemIds,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PointResponse {
    pub id: i32,
    pub image_url: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

impl PointResponse {
    pub fn from_model(point: Point, asset_base_url: &str) -> Self {
        Self {
            id: point.id,
            image_url: resolve_image_url(asset_base_url, &point.image),
            name: point.name,
            email: point.email,
            whatsapp: point.whatsapp,
            latitude: point.latitude,
            longitude: point.longitude,
            city: point.city,
            uf: point.uf,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PointDetailResponse {
    pub point: PointResponse,
    pub items: Vec<ItemResponse>,
}

impl PointDetailResponse {
    pub fn from_model(detail: PointWithItems, asset_base_url: &str) -> Self {
        Self {
            point: PointResponse::from_model(detail.point, asset_base_url),
            items: detail
                .items
                .into_iter()
                .map(|i| ItemResponse::from_model(i, asset_base_url))
                .collect(),
        }
    }
}

// ============ Handlers ============

/// Register a collection point with its accepted items
#[utoipa::path(
    post,
    path = "/points",
    request_body = CreatePointRequest,
    responses(
        (status = 200, description = "Point registered", body = PointDetailResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Database error")
    ),
    tag = "Points"
)]
pub async fn create_point(
    State(state): State<AppState>,
    Json(payload): Json<CreatePointRequest>,
) -> AppResult<Json<PointDetailResponse>> {
    validate_required("name", &payload.name)?;
    validate_required("email", &payload.email)?;
    validate_required("whatsapp", &payload.whatsapp)?;
    validate_required("city", &payload.city)?;
    validate_required("uf", &payload.uf)?;
    validate_required("image", &payload.image)?;

    let create_point = CreatePoint {
        image: payload.image,
        name: payload.name,
        email: payload.email,
        whatsapp: payload.whatsapp,
        latitude: payload.latitude,
        longitude: payload.longitude,
        city: payload.city,
        uf: payload.uf,
        items: payload.items.into_id_set()?,
    };

    let detail = PointRepository::create(&state.db, &create_point).await?;
    Ok(Json(PointDetailResponse::from_model(
        detail,
        &state.config.asset_base_url,
    )))
}

/// List all registered points (scalar fields only)
#[utoipa::path(
    get,
    path = "/points",
    responses(
        (status = 200, description = "List of points", body = [PointResponse]),
        (status = 500, description = "Database error")
    ),
    tag = "Points"
)]
pub async fn list_points(State(state): State<AppState>) -> AppResult<Json<Vec<PointResponse>>> {
    let points = PointRepository::list(&state.db).await?;

    Ok(Json(
        points
            .into_iter()
            .map(|p| PointResponse::from_model(p, &state.config.asset_base_url))
            .collect(),
    ))
}

/// Get one point with its accepted items
#[utoipa::path(
    get,
    path = "/points/{id}",
    params(
        ("id" = i32, Path, description = "Point ID")
    ),
    responses(
        (status = 200, description = "Point details", body = PointDetailResponse),
        (status = 404, description = "Point not found")
    ),
    tag = "Points"
)]
pub async fn get_point(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PointDetailResponse>> {
    let detail = PointRepository::find_by_id(&state.db, id).await?;
    Ok(Json(PointDetailResponse::from_model(
        detail,
        &state.config.asset_base_url,
    )))
}
