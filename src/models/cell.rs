//! Spreadsheet cells and sheets
//!
//! A `Sheet` is the loader's view of one worksheet: a header row and the
//! non-empty data rows below it, each remembering its spreadsheet row number
//! so errors can point at the exact line.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

use crate::error::{DashboardError, DashboardResult};

/// Text date formats accepted in date columns, tried in order.
///
/// Ambiguous numeric dates read month first; the day-first form only
/// matches once the leading field can't be a month.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%y",
    "%d-%b-%Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%m.%d.%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Text datetime formats accepted in date columns
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Largest serial Excel can represent (9999-12-31)
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// A single spreadsheet cell value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDateTime),
    Error(String),
}

static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// Check if the cell has no content (blank text counts as empty)
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Interpret the cell as a calendar date
    ///
    /// Native date cells, Excel serial numbers and the text formats in
    /// `DATE_FORMATS` / `DATETIME_FORMATS` are understood.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(dt) => Some(dt.date()),
            Cell::Number(serial) => excel_serial_to_datetime(*serial).map(|dt| dt.date()),
            Cell::Text(s) => parse_date_text(s.trim()),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Date(dt) if dt.time() == NaiveTime::MIN => write!(f, "{}", dt.format("%Y-%m-%d")),
            Cell::Date(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Cell::Error(e) => write!(f, "#{}", e),
        }
    }
}

/// Convert an Excel serial day number (1900 date system) to a datetime
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(1.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    let days = serial.trunc() as u64;
    let seconds = ((serial.fract() * 86_400.0).round() as u32).min(86_399);
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = epoch.checked_add_days(Days::new(days))?;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;
    Some(date.and_time(time))
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// One data row of a sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetRow {
    /// 1-based spreadsheet row number (the header is row 1)
    pub number: usize,
    /// Cell values, left to right
    pub cells: Vec<Cell>,
}

/// A worksheet read from the workbook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    /// Sheet name as it appears in the workbook
    pub name: String,
    /// Column headers from the first row
    pub headers: Vec<String>,
    /// Data rows, fully empty rows excluded
    pub rows: Vec<SheetRow>,
}

impl Sheet {
    /// Build a sheet from raw rows; the first row becomes the header
    ///
    /// Blank headers are named `Unnamed: <index>`. Rows whose cells are all
    /// empty are dropped but the remaining rows keep their original numbers.
    pub fn from_rows(name: impl Into<String>, raw_rows: Vec<Vec<Cell>>) -> Self {
        let mut iter = raw_rows.into_iter();
        let headers = iter
            .next()
            .map(|header_row| {
                header_row
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        let text = cell.to_string();
                        let text = text.trim();
                        if text.is_empty() {
                            format!("Unnamed: {}", i)
                        } else {
                            text.to_string()
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let rows = iter
            .enumerate()
            .filter(|(_, cells)| !cells.iter().all(Cell::is_empty))
            .map(|(i, cells)| SheetRow {
                number: i + 2,
                cells,
            })
            .collect();

        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Find a column by its header
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Find a column that must exist
    pub fn require_column(&self, header: &str) -> DashboardResult<usize> {
        self.column_index(header)
            .ok_or_else(|| DashboardError::missing_column(&self.name, header))
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl SheetRow {
    /// Get a cell by column, treating short rows as padded with empty cells
    pub fn cell(&self, column: usize) -> &Cell {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_from_rows_headers_and_numbers() {
        let sheet = Sheet::from_rows(
            "Expenses",
            vec![
                vec![text(" Date "), text("Amount"), Cell::Empty],
                vec![text("2025-03-01"), Cell::Number(200.0)],
                vec![Cell::Empty, text("  ")],
                vec![text("2025-03-05"), Cell::Number(50.0), text("x")],
            ],
        );

        assert_eq!(sheet.headers, vec!["Date", "Amount", "Unnamed: 2"]);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.rows[0].number, 2);
        assert_eq!(sheet.rows[1].number, 4);
        assert_eq!(sheet.rows[0].cell(2), &Cell::Empty);
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = Sheet::from_rows("Missing", vec![]);
        assert!(sheet.headers.is_empty());
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_require_column() {
        let sheet = Sheet::from_rows("March 25", vec![vec![text("AMOUNT")]]);
        assert_eq!(sheet.require_column("AMOUNT").unwrap(), 0);

        let err = sheet.require_column("Status").unwrap_err();
        assert_eq!(err.to_string(), "Column 'Status' not found in sheet 'March 25'");
    }

    #[test]
    fn test_excel_serial_conversion() {
        let dt = excel_serial_to_datetime(45717.0).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());

        let dt = excel_serial_to_datetime(45717.5).unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "12:00");

        assert!(excel_serial_to_datetime(0.0).is_none());
        assert!(excel_serial_to_datetime(f64::NAN).is_none());
    }

    #[test]
    fn test_as_date_text_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(text("2025-03-01").as_date(), Some(expected));
        assert_eq!(text("1-Mar-25").as_date(), Some(expected));
        assert_eq!(text("01-Mar-2025").as_date(), Some(expected));
        assert_eq!(text("03/01/2025").as_date(), Some(expected));
        assert_eq!(text("2025/03/01").as_date(), Some(expected));
        assert_eq!(text("March 1, 2025").as_date(), Some(expected));
        assert_eq!(text("Mar 1, 2025").as_date(), Some(expected));
        assert_eq!(text("2025-03-01 10:30:00").as_date(), Some(expected));
        assert_eq!(text("2025-03-01 10:30").as_date(), Some(expected));
        assert_eq!(Cell::Number(45717.0).as_date(), Some(expected));
    }

    #[test]
    fn test_as_date_slashes_are_month_first() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
        assert_eq!(text("01/03/2025").as_date(), date(2025, 1, 3));
        assert_eq!(text("03/15/2025").as_date(), date(2025, 3, 15));
        // Leading field over 12 falls back to day first
        assert_eq!(text("15/03/2025").as_date(), date(2025, 3, 15));
        assert_eq!(text("15.03.2025").as_date(), date(2025, 3, 15));
        assert_eq!(text("15/03/2025 09:00").as_date(), date(2025, 3, 15));
    }

    #[test]
    fn test_as_date_rejects_garbage() {
        assert_eq!(text("sometime in March").as_date(), None);
        assert_eq!(text("").as_date(), None);
        assert_eq!(Cell::Empty.as_date(), None);
        assert_eq!(Cell::Bool(true).as_date(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Number(1500.0).to_string(), "1500");
        assert_eq!(Cell::Number(12.5).to_string(), "12.5");
        assert_eq!(Cell::Empty.to_string(), "");
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(Cell::Date(date.and_time(NaiveTime::MIN)).to_string(), "2025-03-01");
    }
}
