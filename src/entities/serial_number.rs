//! Serial number entity - Tracks individual units of an item.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Serial number database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "serial_numbers")]
pub struct Model {
    /// Unique identifier for the serial number
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the item this unit belongs to
    pub item_id: i64,
}

/// Defines relationships between `SerialNumber` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each serial number belongs to one item
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id"
    )]
    Item,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
