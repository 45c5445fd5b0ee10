//! Unified application error type.
//! The gateway, the CLI handlers and the config layer all return AppError,
//! so storage failures surface the same way everywhere.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    /// Storage failure: connectivity, constraint violation, malformed
    /// statement, or a row that could not be hydrated.
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid discount code: {0:?} (expected exactly one character)")]
    InvalidDiscountCode(String),

    #[error("Invalid product code: {0:?}")]
    InvalidCode(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No product code found for {0:?}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for failures raised by the store, hydration failures included.
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Db(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
