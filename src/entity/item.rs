use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Asset filename; resolved to a full URL at the serialization layer.
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::point_item::Entity")]
    PointItems,
}

impl Related<super::point_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointItems.def()
    }
}

impl Related<super::point::Entity> for Entity {
    fn to() -> RelationDef {
        super::point_item::Relation::Point.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::point_item::Relation::Item.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
