use serde::{Deserialize, Serialize};

/// A category of collectible material. The catalog is seeded once by
/// migration and never written through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub image: String,
}
