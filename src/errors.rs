//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid duty slot type: {0}")]
    InvalidSlotType(String),

    // ---------------------------
    // Scheduling errors
    // ---------------------------
    #[error("Insufficient workers: {found} eligible, at least {required} required")]
    InsufficientWorkers { found: usize, required: usize },

    #[error("No worker found with id {0}")]
    UnknownWorker(i64),

    #[error("Consistency violation: {0}")]
    ConsistencyViolation(String),

    #[error("Regeneration of {year}-{month:02} failed: {source}")]
    Regeneration {
        year: i32,
        month: u32,
        #[source]
        source: Box<AppError>,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Wrap any failure from a month regeneration into the single
    /// aggregate error reported to the user.
    pub fn regeneration(year: i32, month: u32, source: AppError) -> Self {
        AppError::Regeneration {
            year,
            month,
            source: Box::new(source),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
