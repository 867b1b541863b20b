use serde::{Deserialize, Serialize};

use crate::models::Item;

/// A registered physical collection location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: i32,
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

/// Validated input for point registration. `items` is already a
/// deduplicated set of catalog identifiers by the time it reaches the
/// repository.
#[derive(Debug, Clone)]
pub struct CreatePoint {
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub items: Vec<i32>,
}

/// A point together with the items it accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointWithItems {
    pub point: Point,
    pub items: Vec<Item>,
}
