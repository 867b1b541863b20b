pub mod common;
pub mod item;
pub mod point;

pub use common::{resolve_image_url, validate_required};
pub use item::{list_items, ItemResponse};
pub use point::{
    create_point, get_point, list_points, CreatePointRequest, ItemIds, PointDetailResponse,
    PointResponse,
};
