//! YAML export

use std::io::Write;

use super::document::DashboardExport;
use crate::error::{DashboardError, DashboardResult};

/// Write the export as YAML with a short comment header
pub fn export_yaml<W: Write>(export: &DashboardExport, writer: &mut W) -> DashboardResult<()> {
    writeln!(writer, "# {} dashboard export", export.society_name)?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, export).map_err(|e| DashboardError::Export(e.to_string()))?;
    Ok(())
}
