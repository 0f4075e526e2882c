//! JSON export

use std::io::Write;

use super::document::DashboardExport;
use crate::error::DashboardResult;

/// Write the export as pretty-printed JSON
pub fn export_json<W: Write>(export: &DashboardExport, writer: &mut W) -> DashboardResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::document::tests::sample_export;

    #[test]
    fn test_export_json() {
        let export = sample_export();
        let mut buffer = Vec::new();
        export_json(&export, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], "1.0.0");
        assert_eq!(value["revenue"]["month"], "March 2025");
        assert_eq!(value["expenses"]["rows"][0][2], "https://bills.example/1");
        assert_eq!(value["metrics"]["total_expected_maintenance"], 250000);
    }

    #[test]
    fn test_round_trip_keeps_metrics() {
        let export = sample_export();
        let mut buffer = Vec::new();
        export_json(&export, &mut buffer).unwrap();

        let parsed: DashboardExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.metrics, export.metrics);
        assert_eq!(parsed.expenses, export.expenses);
    }
}
