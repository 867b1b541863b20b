use std::time::{SystemTime, UNIX_EPOCH};

use ecopoints::models::{CreatePoint, PointWithItems};
use ecopoints::repositories::PointRepository;
use ecopoints::state::AppState;

/// Generate a name unique across test runs (the test database persists
/// between runs).
#[allow(dead_code)]
pub fn unique_name(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{} {}", prefix, nanos)
}

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Register a point accepting the given catalog items.
    pub async fn create_point(&self, name: &str, items: &[i32]) -> PointWithItems {
        let input = CreatePoint {
            image: "fake-image.jpg".to_string(),
            name: name.to_string(),
            email: "contato@example.com".to_string(),
            whatsapp: "+5511999999999".to_string(),
            latitude: -23.5,
            longitude: -46.6,
            city: "São Paulo".to_string(),
            uf: "SP".to_string(),
            items: items.to_vec(),
        };

        PointRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }
}
