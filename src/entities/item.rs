//! Item entity - A stocked product with a price and a category.
//!
//! Each item belongs to exactly one category and owns any number of serial numbers.
//! Serial numbers must be removed before their item (see `core::item::delete_item`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the item (e.g., "Product 1")
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
    /// ID of the category this item is filed under
    pub category_id: i64,
}

/// Defines relationships between Item and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// One item has many serial numbers
    #[sea_orm(has_many = "super::serial_number::Entity")]
    SerialNumbers,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::serial_number::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SerialNumbers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
