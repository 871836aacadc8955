//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod item;
pub mod serial_number;

// Re-export specific types to avoid conflicts
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use item::{Column as ItemColumn, Entity as Item, Model as ItemModel};
pub use serial_number::{
    Column as SerialNumberColumn, Entity as SerialNumber, Model as SerialNumberModel,
};
