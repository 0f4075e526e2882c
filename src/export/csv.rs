//! CSV export
//!
//! A single table exports as plain CSV. The full dashboard exports as
//! consecutive sections, each introduced by a `# <heading>` record.

use std::io::Write;

use super::document::{DashboardExport, TableExport};
use crate::error::DashboardResult;

/// Write one table: header record then rows
pub fn export_table_csv<W: Write>(table: &TableExport, writer: W) -> DashboardResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&table.headers)?;
    for row in &table.rows {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the metrics followed by every table
pub fn export_dashboard_csv<W: Write>(export: &DashboardExport, writer: W) -> DashboardResult<()> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    csv.write_record(["# Financial Summary"])?;
    csv.write_record(["Metric", "Amount"])?;
    for (label, amount) in export.metrics.tiles() {
        csv.write_record([label, amount.to_decimal_string().as_str()])?;
    }

    for table in export.tables() {
        csv.write_record([format!("# {}", table.heading())])?;
        csv.write_record(&table.headers)?;
        for row in &table.rows {
            csv.write_record(row)?;
        }
    }

    csv.flush()?;
    Ok(())
}
