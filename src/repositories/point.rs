use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::entity::item::{Column as ItemColumn, Entity as ItemEntity};
use crate::entity::point::{self, ActiveModel, Entity as PointEntity};
use crate::entity::point_item;
use crate::error::{AppError, AppResult};
use crate::models::{CreatePoint, Point, PointWithItems};

/// Point repository for database operations
pub struct PointRepository;

impl PointRepository {
    /// Register a point together with its item associations.
    ///
    /// The point row and every junction row are written inside one
    /// transaction: an unknown item id trips the foreign-key constraint
    /// and rolls the whole registration back, so a point is never
    /// observable with a partial association set.
    pub async fn create(db: &DatabaseConnection, input: &CreatePoint) -> AppResult<PointWithItems> {
        // The association set is a set, not a multiset.
        let item_ids: Vec<i32> = input
            .items
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if item_ids.is_empty() {
            return Err(AppError::Validation(
                "a point must accept at least one item".to_string(),
            ));
        }

        let txn = db.begin().await?;

        let created = ActiveModel {
            id: NotSet,
            image: Set(input.image.clone()),
            name: Set(input.name.clone()),
            email: Set(input.email.clone()),
            whatsapp: Set(input.whatsapp.clone()),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            city: Set(input.city.clone()),
            uf: Set(input.uf.clone()),
        }
        .insert(&txn)
        .await?;

        let links = item_ids.iter().map(|&item_id| point_item::ActiveModel {
            point_id: Set(created.id),
            item_id: Set(item_id),
        });
        point_item::Entity::insert_many(links).exec(&txn).await?;

        let items = ItemEntity::find()
            .filter(ItemColumn::Id.is_in(item_ids))
            .order_by_asc(ItemColumn::Id)
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok(PointWithItems {
            point: created.into(),
            items: items.into_iter().map(|m| m.into()).collect(),
        })
    }

    /// Fetch one point with its associated items, id ascending. The
    /// items come back in a single batched join query, never one query
    /// per association.
    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<PointWithItems> {
        let model = PointEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Point".to_string()))?;

        let items = model
            .find_related(ItemEntity)
            .order_by_asc(ItemColumn::Id)
            .all(db)
            .await?;

        Ok(PointWithItems {
            point: model.into(),
            items: items.into_iter().map(|m| m.into()).collect(),
        })
    }

    /// List all points, scalar fields only.
    pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<Point>> {
        let models = PointEntity::find()
            .order_by_asc(point::Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}

// Conversion from SeaORM model to our domain model
impl From<point::Model> for Point {
    fn from(m: point::Model) -> Self {
        Self {
            id: m.id,
            image: m.image,
            name: m.name,
            email: m.email,
            whatsapp: m.whatsapp,
            latitude: m.latitude,
            longitude: m.longitude,
            city: m.city,
            uf: m.uf,
        }
    }
}
