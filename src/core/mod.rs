//! Core business logic - framework-agnostic inventory operations.
//!
//! Every operation takes a `SeaORM` connection and returns [`crate::errors::Result`].
//! Nothing here knows about the CLI or any other request layer.

/// Category lookups and seeding
pub mod category;
/// Item listing, creation, editing and deletion
pub mod item;
/// Category counts and spreadsheet export
pub mod report;
/// Fixed sample data generator
pub mod sample;
