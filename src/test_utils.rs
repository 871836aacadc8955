//! Shared test utilities for the inventory store.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config::settings::CategoryConfig,
    core::{
        category,
        item::{self, ItemInput},
    },
    entities,
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Sets up a test database seeded with "Electronics" (id 1) and "Groceries" (id 2).
/// Returns (db, categories) in id order.
pub async fn setup_with_categories() -> Result<(DatabaseConnection, Vec<entities::category::Model>)>
{
    let db = setup_test_db().await?;
    let configs = ["Electronics", "Groceries"].map(|name| CategoryConfig {
        name: name.to_string(),
    });
    category::seed_categories(&db, &configs).await?;

    let categories = entities::Category::find()
        .order_by_asc(entities::category::Column::Id)
        .all(&db)
        .await?;
    Ok((db, categories))
}

/// Inserts a category directly, without the duplicate-name check of seeding.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    let category = entities::category::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    category.insert(db).await.map_err(Into::into)
}

/// Creates a test item with sensible defaults.
///
/// # Defaults
/// * price: 10.0
pub async fn create_test_item(
    db: &DatabaseConnection,
    name: &str,
    category_id: i64,
) -> Result<entities::item::Model> {
    item::create_item(db, ItemInput::new(name, 10.0, category_id)).await
}

/// Attaches a serial number to an item.
pub async fn create_test_serial_number(
    db: &DatabaseConnection,
    item_id: i64,
) -> Result<entities::serial_number::Model> {
    let serial_number = entities::serial_number::ActiveModel {
        item_id: Set(item_id),
        ..Default::default()
    };
    serial_number.insert(db).await.map_err(Into::into)
}
