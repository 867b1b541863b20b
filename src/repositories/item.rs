use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::entity::item::{self, Column, Entity as ItemEntity};
use crate::error::AppResult;
use crate::models::Item;

/// Item catalog repository. Read-only: the catalog is seeded by
/// migration and never written at runtime.
pub struct ItemRepository;

impl ItemRepository {
    /// List the whole catalog, id ascending.
    pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<Item>> {
        let models = ItemEntity::find()
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}

// Conversion from SeaORM model to our domain model
impl From<item::Model> for Item {
    fn from(m: item::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            image: m.image,
        }
    }
}
