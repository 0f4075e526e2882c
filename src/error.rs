//! Custom error types for the society dashboard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every load error is terminal for the
//! current load: callers never receive a partially built workbook.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The configured workbook does not exist
    #[error("Workbook not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The workbook could not be opened or read
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// A required sheet is missing from the workbook
    #[error("Sheet not found in workbook: '{sheet}'")]
    SheetNotFound { sheet: String },

    /// A required column header is missing from a sheet
    #[error("Column '{column}' not found in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    /// A cell that must hold an amount holds something else
    #[error("Invalid amount in sheet '{sheet}', row {row}, column '{column}': '{value}'")]
    InvalidInput {
        sheet: String,
        row: usize,
        column: String,
        value: String,
    },

    /// A cell that must hold a date could not be parsed
    #[error("Invalid date in sheet '{sheet}', row {row}, column '{column}': '{value}'")]
    DateParse {
        sheet: String,
        row: usize,
        column: String,
        value: String,
    },

    /// A month label typed by the user could not be parsed
    #[error("Invalid month: '{0}'. Use a label such as \"March 2025\" or \"2025-03\"")]
    InvalidMonth(String),

    /// A month was requested that has no rows in the table
    #[error("No {table} rows in {month}")]
    MonthNotFound { table: &'static str, month: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl DashboardError {
    /// Create a "sheet not found" error
    pub fn sheet_not_found(sheet: impl Into<String>) -> Self {
        Self::SheetNotFound {
            sheet: sheet.into(),
        }
    }

    /// Create a "missing column" error
    pub fn missing_column(sheet: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            sheet: sheet.into(),
            column: column.into(),
        }
    }

    /// Check if this error was caused by the workbook contents rather than
    /// by the environment (missing file, I/O, configuration)
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::SheetNotFound { .. }
                | Self::MissingColumn { .. }
                | Self::InvalidInput { .. }
                | Self::DateParse { .. }
        )
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
