//! Item business logic - Handles listing, creating, editing and deleting items.
//!
//! Inputs are validated explicitly before anything touches the database. A rejected
//! input is handed back unchanged inside [`Error::ValidationFailed`] together with one
//! [`FieldError`] per offending field. Updates are read-modify-write: the stored row is
//! fetched by id and only the mutable fields are replaced. Deleting an item removes its
//! serial numbers first, within the same database transaction.

use crate::{
    entities::{Category, Item, SerialNumber, item, serial_number},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Values submitted for creating or editing an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Category the item is filed under
    pub category_id: i64,
}

impl ItemInput {
    /// Builds an input from borrowed values.
    #[must_use]
    pub fn new(name: &str, price: f64, category_id: i64) -> Self {
        Self {
            name: name.to_string(),
            price,
            category_id,
        }
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as it appears in [`ItemInput`]
    pub field: &'static str,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// An item joined with its category name, as shown in the inventory listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemListing {
    /// Item id
    pub id: i64,
    /// Item name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Referenced category id
    pub category_id: i64,
    /// Name of the category, `None` if the reference does not resolve
    pub category_name: Option<String>,
}

/// Checks the shape of an item input without touching the database.
///
/// Returns every problem found, empty when the input is acceptable.
#[must_use]
pub fn validate_item_input(input: &ItemInput) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if input.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    if !input.price.is_finite() {
        errors.push(FieldError::new("price", "Price must be a number"));
    } else if input.price < 0.0 {
        errors.push(FieldError::new("price", "Price must not be negative"));
    }

    errors
}

fn ensure_valid(input: &ItemInput) -> Result<()> {
    let errors = validate_item_input(input);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::ValidationFailed {
            input: input.clone(),
            errors,
        })
    }
}

async fn ensure_category_exists<C: ConnectionTrait>(db: &C, input: &ItemInput) -> Result<()> {
    if Category::find_by_id(input.category_id).one(db).await?.is_some() {
        return Ok(());
    }

    Err(Error::ValidationFailed {
        input: input.clone(),
        errors: vec![FieldError::new("category_id", "Category does not exist")],
    })
}

/// Retrieves every item joined with its category, ordered by id (insertion order).
pub async fn list_items_with_category(db: &DatabaseConnection) -> Result<Vec<ItemListing>> {
    let rows = Item::find()
        .find_also_related(Category)
        .order_by_asc(item::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(item, category)| ItemListing {
            id: item.id,
            name: item.name,
            price: item.price,
            category_id: item.category_id,
            category_name: category.map(|c| c.name),
        })
        .collect())
}

/// Retrieves a single item by id. The category is not joined.
pub async fn get_item_by_id(db: &DatabaseConnection, item_id: i64) -> Result<Option<item::Model>> {
    Item::find_by_id(item_id).one(db).await.map_err(Into::into)
}

/// Creates a new item after validating the input.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The price is negative or not finite (NaN, infinity)
/// - The category does not exist
/// - The database insert operation fails
#[instrument(skip(db))]
pub async fn create_item(db: &DatabaseConnection, input: ItemInput) -> Result<item::Model> {
    ensure_valid(&input)?;
    ensure_category_exists(db, &input).await?;

    let item = item::ActiveModel {
        name: Set(input.name.trim().to_string()),
        price: Set(input.price),
        category_id: Set(input.category_id),
        ..Default::default()
    };
    let created = item.insert(db).await?;

    info!("Created item {} ({})", created.id, created.name);
    Ok(created)
}

/// Replaces the name, price and category of an existing item.
///
/// Field validation runs first, then the item lookup, then the category check.
/// Nothing is written unless all three pass.
///
/// # Errors
/// Returns an error if:
/// - The input fails validation (see [`create_item`])
/// - No item with `item_id` exists
/// - The database update operation fails
#[instrument(skip(db))]
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: i64,
    input: ItemInput,
) -> Result<item::Model> {
    ensure_valid(&input)?;

    let mut item: item::ActiveModel = Item::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?
        .into();

    ensure_category_exists(db, &input).await?;

    item.name = Set(input.name.trim().to_string());
    item.price = Set(input.price);
    item.category_id = Set(input.category_id);

    let updated = item.update(db).await?;
    info!("Updated item {}", updated.id);
    Ok(updated)
}

/// Deletes an item together with all of its serial numbers.
///
/// Both deletions run in one transaction. Deleting an id that does not exist is
/// not an error.
///
/// Returns `true` if an item was removed, `false` if there was nothing to delete.
#[instrument(skip(db))]
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<bool> {
    let txn = db.begin().await?;

    let Some(item) = Item::find_by_id(item_id).one(&txn).await? else {
        debug!("Item {item_id} does not exist; nothing to delete");
        txn.commit().await?;
        return Ok(false);
    };

    let removed = SerialNumber::delete_many()
        .filter(serial_number::Column::ItemId.eq(item_id))
        .exec(&txn)
        .await?;

    item.delete(&txn).await?;
    txn.commit().await?;

    info!(
        "Deleted item {item_id} and {} serial number(s)",
        removed.rows_affected
    );
    Ok(true)
}
