use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction row: "this point accepts this item". The composite primary
/// key makes duplicate associations impossible at the schema level.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "point_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub point_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::point::Entity",
        from = "Column::PointId",
        to = "super::point::Column::Id"
    )]
    Point,
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id"
    )]
    Item,
}

impl Related<super::point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Point.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
