//! Export module for the society dashboard
//!
//! Writes the dashboard as currently selected in several formats:
//! - CSV: the metrics and each table as sections (spreadsheet-compatible)
//! - JSON: machine-readable export with schema versioning
//! - YAML: human-readable export
//! - HTML: a self-contained page with clickable bill links

pub mod csv;
pub mod document;
pub mod html;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::DashboardResult;

pub use self::csv::{export_dashboard_csv, export_table_csv};
pub use document::{DashboardExport, TableExport, EXPORT_SCHEMA_VERSION};
pub use html::export_html;
pub use json::export_json;
pub use yaml::export_yaml;

/// Output format of `society export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
    Html,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Html => "html",
        }
    }
}

/// Write an export in the given format
pub fn write_export<W: Write>(
    format: ExportFormat,
    export: &DashboardExport,
    writer: &mut W,
) -> DashboardResult<()> {
    match format {
        ExportFormat::Csv => export_dashboard_csv(export, writer),
        ExportFormat::Json => export_json(export, writer),
        ExportFormat::Yaml => export_yaml(export, writer),
        ExportFormat::Html => export_html(export, writer),
    }
}
