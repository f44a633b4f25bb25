//! Error types for the dimension loader.
//!
//! Errors are split by the stage that raises them: configuration, extract
//! reading and database access. The top-level [`Error`] aggregates them so
//! loaders and the orchestrator can propagate anything with `?`.

pub mod config;
pub mod extract;

use thiserror::Error;

use crate::error::{config::ConfigError, extract::ExtractError};

/// Main error type of the loader.
///
/// Field-level cleaning never produces one of these. Row-level failures in the
/// customer and product loaders are logged and skipped; every other variant
/// aborts the table load that raised it.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Extract error (unreadable file, malformed CSV, missing column).
    #[error(transparent)]
    ExtractError(#[from] ExtractError),
    /// A natural ID in the extract could not be used as an integer key.
    #[error("Invalid natural key in column {column}: {value:?}")]
    InvalidNaturalKey { column: String, value: Option<String> },
    /// The calendar range could not be computed (date arithmetic overflow).
    #[error("Invalid calendar range: {0}")]
    DateRange(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
