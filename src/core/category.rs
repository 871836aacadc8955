//! Category business logic - Category lookups and startup seeding.
//!
//! Categories are not created or removed by the item operations. They are seeded from
//! configuration when the application starts, and read here to populate category
//! selection controls.

use crate::{
    config::settings::CategoryConfig,
    entities::{Category, category},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Serialize;
use tracing::info;

/// An `(id, name)` pair for a category selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    /// Category id, the submitted value
    pub id: i64,
    /// Category name, the displayed label
    pub name: String,
}

/// Retrieves every category as a selection option, in insertion order.
pub async fn get_category_options(db: &DatabaseConnection) -> Result<Vec<CategoryOption>> {
    let categories = Category::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await?;

    Ok(categories
        .into_iter()
        .map(|c| CategoryOption {
            id: c.id,
            name: c.name,
        })
        .collect())
}

/// Finds a category by its unique ID.
pub async fn get_category_by_id(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Option<category::Model>> {
    Category::find_by_id(category_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts every configured category whose name is not already present.
///
/// Categories are inserted in configuration order. Returns the number of rows
/// inserted; running it again against the same configuration inserts nothing.
pub async fn seed_categories(db: &DatabaseConnection, configs: &[CategoryConfig]) -> Result<usize> {
    let mut inserted = 0;

    for config in configs {
        let name = config.name.trim();
        let existing = Category::find()
            .filter(category::Column::Name.eq(name))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let category = category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        category.insert(db).await?;
        inserted += 1;
    }

    if inserted > 0 {
        info!("Seeded {inserted} categories");
    }
    Ok(inserted)
}
