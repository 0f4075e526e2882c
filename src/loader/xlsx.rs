//! Workbook reading with calamine
//!
//! Opens `.xlsx`, `.xlsm`, `.xls` and `.ods` files and turns each requested
//! worksheet into a `Sheet`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::SheetSource;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Cell, Sheet};

/// A workbook file opened for reading
pub struct XlsxSource {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl XlsxSource {
    /// Open a workbook file
    ///
    /// # Errors
    ///
    /// `FileNotFound` if nothing exists at `path`, `Workbook` if the file
    /// cannot be read as a spreadsheet.
    pub fn open(path: &Path) -> DashboardResult<Self> {
        if !path.exists() {
            return Err(DashboardError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(DashboardError::Workbook(format!(
                "Not a file: {}",
                path.display()
            )));
        }

        let workbook = open_workbook_auto(path).map_err(|e| {
            DashboardError::Workbook(format!("Failed to open {}: {}", path.display(), e))
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }

    /// Names of all sheets in the workbook, in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }
}

impl SheetSource for XlsxSource {
    fn sheet(&mut self, name: &str) -> DashboardResult<Sheet> {
        if !self.sheet_names().iter().any(|n| n == name) {
            return Err(DashboardError::sheet_not_found(name));
        }

        let range = self.workbook.worksheet_range(name).map_err(|e| {
            DashboardError::Workbook(format!(
                "Failed to read sheet '{}' from {}: {}",
                name,
                self.path.display(),
                e
            ))
        })?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_from_data).collect())
            .collect();

        Ok(Sheet::from_rows(name, rows))
    }
}

/// Convert a calamine cell into our cell type
pub fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        // Durations are elapsed time, not calendar dates
        Data::DateTime(dt) if dt.is_duration() => Cell::Number(dt.as_f64()),
        // as_datetime honors the workbook's 1904 date system
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => Cell::Date(value),
            None => Cell::Error(format!("date out of range: {}", dt.as_f64())),
        },
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Text(s.clone())),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Error(format!("{:?}", e)),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};

    #[test]
    fn test_cell_from_data_scalars() {
        assert_eq!(cell_from_data(&Data::Empty), Cell::Empty);
        assert_eq!(cell_from_data(&Data::Int(5)), Cell::Number(5.0));
        assert_eq!(cell_from_data(&Data::Float(2.5)), Cell::Number(2.5));
        assert_eq!(
            cell_from_data(&Data::String("Paid".into())),
            Cell::Text("Paid".into())
        );
    }

    #[test]
    fn test_native_dates_in_both_date_systems() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 1);

        let dt = ExcelDateTime::new(45717.0, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_from_data(&Data::DateTime(dt)).as_date(), expected);

        // Same day stored as a 1904-system serial
        let dt = ExcelDateTime::new(45717.0 - 1462.0, ExcelDateTimeType::DateTime, true);
        let cell = cell_from_data(&Data::DateTime(dt));
        assert!(matches!(cell, Cell::Date(_)));
        assert_eq!(cell.as_date(), expected);
    }

    #[test]
    fn test_duration_is_not_a_date() {
        let dt = ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false);
        assert_eq!(cell_from_data(&Data::DateTime(dt)), Cell::Number(1.5));
    }

    #[test]
    fn test_iso_datetime() {
        let cell = cell_from_data(&Data::DateTimeIso("2025-03-01T00:00:00".into()));
        assert_eq!(
            cell.as_date(),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );

        let cell = cell_from_data(&Data::DateTimeIso("2025-03-01".into()));
        assert!(matches!(cell, Cell::Date(_)));
    }

    #[test]
    fn test_open_missing_file() {
        let err = XlsxSource::open(Path::new("/definitely/not/here.xlsx"))
            .err()
            .unwrap();
        assert!(matches!(err, DashboardError::FileNotFound { .. }));
    }
}
