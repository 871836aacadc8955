//! Sample data generation.
//!
//! Inserts a fixed batch of ten items spread over categories 1 and 2. The batch is
//! always appended; existing rows with the same names are left alone.

use crate::{
    entities::{Item, item},
    errors::Result,
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// A row of the sample fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleItem {
    /// Item name
    pub name: &'static str,
    /// Unit price
    pub price: f64,
    /// Category the item is filed under
    pub category_id: i64,
}

const fn sample(name: &'static str, price: f64, category_id: i64) -> SampleItem {
    SampleItem {
        name,
        price,
        category_id,
    }
}

/// The items inserted by [`generate_sample_items`], in insertion order.
pub const SAMPLE_ITEMS: [SampleItem; 10] = [
    sample("Product 1", 10.0, 1),
    sample("Product 2", 20.0, 2),
    sample("Product 3", 30.0, 1),
    sample("Product 4", 40.0, 1),
    sample("Product 5", 50.0, 2),
    sample("Product 6", 60.0, 2),
    sample("Product 7", 70.0, 2),
    sample("Product 8", 80.0, 1),
    sample("Product 9", 90.0, 1),
    sample("Product 10", 100.0, 1),
];

/// Inserts [`SAMPLE_ITEMS`] as one bulk insert inside a transaction.
///
/// Categories 1 and 2 must exist. Returns the number of rows inserted.
#[instrument(skip(db))]
pub async fn generate_sample_items(db: &DatabaseConnection) -> Result<u64> {
    let models = SAMPLE_ITEMS.iter().map(|sample| item::ActiveModel {
        name: Set(sample.name.to_string()),
        price: Set(sample.price),
        category_id: Set(sample.category_id),
        ..Default::default()
    });

    let txn = db.begin().await?;
    Item::insert_many(models).exec(&txn).await?;
    txn.commit().await?;

    let inserted = SAMPLE_ITEMS.len() as u64;
    info!("Generated {inserted} sample items");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::item::list_items_with_category;
    use crate::core::report::{CategoryCount, count_items_by_category_name};
    use crate::errors::Error;
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_generate_sample_items_on_empty_store() -> Result<()> {
        let (db, _categories) = setup_with_categories().await?;

        assert_eq!(generate_sample_items(&db).await?, 10);

        let listing = list_items_with_category(&db).await?;
        assert_eq!(listing.len(), 10);
        assert_eq!(listing[0].name, "Product 1");
        assert_eq!(listing[9].name, "Product 10");
        assert_eq!(listing[9].price, 100.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_sample_items_category_counts() -> Result<()> {
        let (db, _categories) = setup_with_categories().await?;
        generate_sample_items(&db).await?;

        let counts = count_items_by_category_name(&db).await?;
        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    category: Some("Electronics".to_string()),
                    count: 6,
                },
                CategoryCount {
                    category: Some("Groceries".to_string()),
                    count: 4,
                },
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_sample_items_appends() -> Result<()> {
        let (db, _categories) = setup_with_categories().await?;

        generate_sample_items(&db).await?;
        generate_sample_items(&db).await?;

        assert_eq!(Item::find().count(&db).await?, 20);
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_sample_items_requires_categories() -> Result<()> {
        let db = setup_test_db().await?;

        let result = generate_sample_items(&db).await;
        assert!(matches!(result, Err(Error::Database(_))));

        // The failed batch left nothing behind
        assert_eq!(Item::find().count(&db).await?, 0);
        Ok(())
    }
}
