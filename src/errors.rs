//! Unified error types for the inventory store.
//!
//! Every operation returns [`Result`]. Storage failures are split into
//! [`Error::StorageUnavailable`] (the database could not be reached) and
//! [`Error::Database`] (everything else SeaORM reports).

use crate::core::item::{FieldError, ItemInput};
use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the inventory store.
#[derive(Debug, Error)]
pub enum Error {
    /// Item values were rejected. The input is handed back as submitted so a form
    /// can be re-rendered without data loss.
    #[error("Validation failed: {}", format_field_errors(.errors))]
    ValidationFailed {
        /// The input exactly as it was submitted
        input: ItemInput,
        /// One entry per rejected field
        errors: Vec<FieldError>,
    },

    /// No item exists with the given id.
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// The backing database could not be reached.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        /// Driver message describing the connection failure
        message: String,
    },

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(DbErr),

    /// The tabular export encoder failed.
    #[error("Export error: {message}")]
    Export {
        /// Encoder error description
        message: String,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Report data could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure, e.g. while writing an export file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(e) => Self::StorageUnavailable {
                message: e.to_string(),
            },
            DbErr::ConnectionAcquire(e) => Self::StorageUnavailable {
                message: e.to_string(),
            },
            other => Self::Database(other),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Export {
            message: err.to_string(),
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
