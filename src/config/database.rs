//! Database configuration module for the inventory store.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the `belongs_to` relations become real foreign keys (`items.category_id` and
//! `serial_numbers.item_id`). The sqlx `SQLite` driver turns `foreign_keys` on for every
//! connection, so those constraints are enforced.

use crate::entities::{Category, Item, SerialNumber};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::{debug, info};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/inventory.sqlite?mode=rwc";
const DEFAULT_DATA_DIR: &str = "data";

/// Gets the database URL from the `DATABASE_URL` environment variable or returns the
/// default local `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by [`get_database_url`].
///
/// The `data/` directory is created when the default URL is used. Connection
/// failures surface as `Error::StorageUnavailable`.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    if database_url == DEFAULT_DATABASE_URL {
        std::fs::create_dir_all(DEFAULT_DATA_DIR)?;
    }
    debug!("Connecting to database at {database_url}");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the `categories`, `items` and `serial_numbers` tables if they do not exist.
///
/// Parents are created before children so the foreign keys resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, Category).await?;
    create_table(db, Item).await?;
    create_table(db, SerialNumber).await?;
    info!("Database tables are ready");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(builder.build(&statement)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        category::Model as CategoryModel, item::Model as ItemModel,
        serial_number::Model as SerialNumberModel,
    };
    use sea_orm::{ActiveModelTrait, QuerySelect, Set};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<CategoryModel> = Category::find().limit(1).all(&db).await?;
        let _: Vec<ItemModel> = Item::find().limit(1).all(&db).await?;
        let _: Vec<SerialNumberModel> = SerialNumber::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_repeatable() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_item_category_foreign_key_is_enforced() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        let orphan = crate::entities::item::ActiveModel {
            name: Set("Orphan".to_string()),
            price: Set(1.0),
            category_id: Set(42),
            ..Default::default()
        };
        let result = orphan.insert(&db).await;
        assert!(result.is_err());

        Ok(())
    }
}
