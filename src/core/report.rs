//! Report generation business logic.
//!
//! Two reports are produced from the current inventory: the item count per category
//! name (the data behind the category chart) and a spreadsheet export of every item.
//! Both join items to categories with a LEFT JOIN, so an item whose category does not
//! resolve is still reported: it is counted in a `null` category bucket and exported
//! with a blank category cell.

use crate::{
    entities::{Category, Item, category, item},
    errors::Result,
    export::{Cell, Table, TableEncoder},
};
use sea_orm::{FromQueryResult, JoinType, QueryOrder, QuerySelect, prelude::*};
use serde::Serialize;
use tracing::debug;

/// Worksheet name and filename stem of the inventory export.
pub const EXPORT_SHEET_NAME: &str = "Products";

/// Column titles of the inventory export, in order.
pub const EXPORT_HEADER: [&str; 3] = ["Name", "Price", "Category"];

/// Number of items filed under one category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct CategoryCount {
    /// Category name, `None` for items whose category does not resolve
    pub category: Option<String>,
    /// Number of items in the group
    pub count: i64,
}

/// A ready-to-deliver export file.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    /// Encoded file contents
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`
    pub content_type: &'static str,
    /// Suggested download name, e.g. `Products.xlsx`
    pub filename: String,
}

/// Counts items grouped by the name of their category.
///
/// Categories without items are absent. Groups are ordered by category name, with the
/// unresolved (`None`) bucket first when present. The counts always sum to the total
/// number of items.
pub async fn count_items_by_category_name(db: &DatabaseConnection) -> Result<Vec<CategoryCount>> {
    let counts = Item::find()
        .select_only()
        .column_as(category::Column::Name, "category")
        .column_as(item::Column::Id.count(), "count")
        .join(JoinType::LeftJoin, item::Relation::Category.def())
        .group_by(category::Column::Name)
        .order_by_asc(category::Column::Name)
        .into_model::<CategoryCount>()
        .all(db)
        .await?;

    debug!("Counted items across {} category groups", counts.len());
    Ok(counts)
}

/// Builds the inventory table: a `Name, Price, Category` header and one row per item
/// in listing order.
pub async fn build_inventory_table(db: &DatabaseConnection) -> Result<Table> {
    let rows = Item::find()
        .find_also_related(Category)
        .order_by_asc(item::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|(item, category)| {
            vec![
                Cell::Text(item.name),
                Cell::Number(item.price),
                category.map_or(Cell::Empty, |c| Cell::Text(c.name)),
            ]
        })
        .collect();

    Ok(Table {
        sheet_name: EXPORT_SHEET_NAME.to_string(),
        header: EXPORT_HEADER.iter().map(ToString::to_string).collect(),
        rows,
    })
}

/// Exports the current inventory with the given encoder.
///
/// # Errors
/// Returns an error if the inventory cannot be read or the encoder fails.
pub async fn export_inventory_table(
    db: &DatabaseConnection,
    encoder: &dyn TableEncoder,
) -> Result<ExportedFile> {
    let table = build_inventory_table(db).await?;
    let bytes = encoder.encode(&table)?;

    debug!(
        "Exported {} rows as {} ({} bytes)",
        table.row_count(),
        encoder.extension(),
        bytes.len()
    );

    Ok(ExportedFile {
        bytes,
        content_type: encoder.content_type(),
        filename: format!("{}.{}", table.sheet_name, encoder.extension()),
    })
}
