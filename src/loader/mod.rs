//! Workbook loading
//!
//! Reads the four sheets of a society workbook and converts them into typed
//! tables. Conversion is all-or-nothing: the first bad amount or date aborts
//! the load with an error naming the sheet, row and column.

pub mod xlsx;

use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info};

use crate::config::SheetNames;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    Cell, ExpenseRecord, MaintenanceRecord, Money, RecordTable, RevenueRecord, Sheet, SheetRow,
    SocietyWorkbook,
};

pub use xlsx::XlsxSource;

/// Ledger amount column
pub const LEDGER_AMOUNT: &str = "AMOUNT";
/// Ledger status column
pub const LEDGER_STATUS: &str = "Status";
/// Revenue date column
pub const REVENUE_DATE: &str = "DATE";
/// Revenue amount column
pub const REVENUE_AMOUNT: &str = "AMOUNT";
/// Expense date column
pub const EXPENSE_DATE: &str = "Date";
/// Expense amount column
pub const EXPENSE_AMOUNT: &str = "Amount";
/// Optional expense bill link column
pub const EXPENSE_BILL_LINK: &str = "Link for Bill";

/// Anything that can hand out sheets by name
pub trait SheetSource {
    /// Read one sheet, failing with `SheetNotFound` if it doesn't exist
    fn sheet(&mut self, name: &str) -> DashboardResult<Sheet>;
}

/// An in-memory set of sheets
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    sheets: Vec<Sheet>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet, replacing any sheet with the same name
    pub fn with_sheet(mut self, sheet: Sheet) -> Self {
        self.sheets.retain(|s| s.name != sheet.name);
        self.sheets.push(sheet);
        self
    }
}

impl SheetSource for MemorySource {
    fn sheet(&mut self, name: &str) -> DashboardResult<Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| DashboardError::sheet_not_found(name))
    }
}

/// Load a workbook file
pub fn load_workbook(path: &Path, names: &SheetNames) -> DashboardResult<SocietyWorkbook> {
    info!("Loading workbook {}", path.display());
    let mut source = XlsxSource::open(path)?;
    let mut workbook = read_workbook(&mut source, names)?;
    workbook.source = Some(path.to_path_buf());
    info!(
        "Loaded {} ledger, {} revenue, {} expense and {} missing rows",
        workbook.ledger.len(),
        workbook.revenue.len(),
        workbook.expenses.len(),
        workbook.missing.len()
    );
    Ok(workbook)
}

/// Read and convert all four sheets from a source
pub fn read_workbook<S: SheetSource>(
    source: &mut S,
    names: &SheetNames,
) -> DashboardResult<SocietyWorkbook> {
    let ledger = source.sheet(&names.ledger)?;
    let revenue = source.sheet(&names.revenue)?;
    let expenses = source.sheet(&names.expenses)?;
    let missing = source.sheet(&names.missing)?;

    for sheet in [&ledger, &revenue, &expenses, &missing] {
        debug!(
            "Sheet '{}': {} columns, {} rows",
            sheet.name,
            sheet.headers.len(),
            sheet.len()
        );
    }

    Ok(SocietyWorkbook {
        source: None,
        ledger: ledger_from_sheet(&ledger)?,
        revenue: revenue_from_sheet(&revenue)?,
        expenses: expenses_from_sheet(&expenses)?,
        missing,
    })
}

/// Convert the maintenance ledger
pub fn ledger_from_sheet(sheet: &Sheet) -> DashboardResult<RecordTable<MaintenanceRecord>> {
    let amount_col = sheet.require_column(LEDGER_AMOUNT)?;
    let status_col = sheet.require_column(LEDGER_STATUS)?;

    let rows = sheet
        .rows
        .iter()
        .map(|row| -> DashboardResult<MaintenanceRecord> {
            Ok(MaintenanceRecord {
                row: row.number,
                unit: row.cell(0).to_string(),
                amount: amount_at(sheet, row, amount_col)?,
                status: row.cell(status_col).to_string(),
                cells: row.cells.clone(),
            })
        })
        .collect::<DashboardResult<Vec<_>>>()?;

    Ok(RecordTable::new(sheet.headers.clone(), rows))
}

/// Convert the other revenue sheet
pub fn revenue_from_sheet(sheet: &Sheet) -> DashboardResult<RecordTable<RevenueRecord>> {
    let date_col = sheet.require_column(REVENUE_DATE)?;
    let amount_col = sheet.require_column(REVENUE_AMOUNT)?;

    let rows = sheet
        .rows
        .iter()
        .map(|row| -> DashboardResult<RevenueRecord> {
            Ok(RevenueRecord {
                row: row.number,
                date: date_at(sheet, row, date_col)?,
                amount: amount_at(sheet, row, amount_col)?,
                cells: row.cells.clone(),
            })
        })
        .collect::<DashboardResult<Vec<_>>>()?;

    Ok(RecordTable::new(sheet.headers.clone(), rows).with_date_column(date_col))
}

/// Convert the expenses sheet; the bill link column is optional
pub fn expenses_from_sheet(sheet: &Sheet) -> DashboardResult<RecordTable<ExpenseRecord>> {
    let date_col = sheet.require_column(EXPENSE_DATE)?;
    let amount_col = sheet.require_column(EXPENSE_AMOUNT)?;
    let link_col = sheet.column_index(EXPENSE_BILL_LINK);

    let rows = sheet
        .rows
        .iter()
        .map(|row| -> DashboardResult<ExpenseRecord> {
            Ok(ExpenseRecord {
                row: row.number,
                date: date_at(sheet, row, date_col)?,
                amount: amount_at(sheet, row, amount_col)?,
                bill_link: link_col.and_then(|col| link_at(row, col)),
                cells: row.cells.clone(),
            })
        })
        .collect::<DashboardResult<Vec<_>>>()?;

    Ok(RecordTable::new(sheet.headers.clone(), rows)
        .with_date_column(date_col)
        .with_link_column(link_col))
}

/// Read an amount cell; blank cells are `None` and are skipped by sums
fn amount_at(sheet: &Sheet, row: &SheetRow, column: usize) -> DashboardResult<Option<Money>> {
    let cell = row.cell(column);
    let invalid = || DashboardError::InvalidInput {
        sheet: sheet.name.clone(),
        row: row.number,
        column: sheet.headers[column].clone(),
        value: cell.to_string(),
    };

    match cell {
        c if c.is_empty() => Ok(None),
        Cell::Number(n) => Money::from_f64(*n).map(Some).ok_or_else(invalid),
        Cell::Text(s) => Money::parse(s).map(Some).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Read a date cell; anything unparseable, blank included, fails the load
fn date_at(sheet: &Sheet, row: &SheetRow, column: usize) -> DashboardResult<NaiveDate> {
    let cell = row.cell(column);
    cell.as_date().ok_or_else(|| DashboardError::DateParse {
        sheet: sheet.name.clone(),
        row: row.number,
        column: sheet.headers[column].clone(),
        value: cell.to_string(),
    })
}

fn link_at(row: &SheetRow, column: usize) -> Option<String> {
    let text = row.cell(column).to_string();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn num(n: f64) -> Cell {
        Cell::Number(n)
    }

    /// Ledger, revenue and expenses from the dashboard's worked example
    pub(crate) fn sample_source() -> MemorySource {
        MemorySource::new()
            .with_sheet(Sheet::from_rows(
                "March 25",
                vec![
                    vec![text("Flat"), text("AMOUNT"), text("Status")],
                    vec![text("A-101"), num(1000.0), text("Paid")],
                    vec![text("A-102"), num(1000.0), text("Unpaid")],
                    vec![text("A-103"), num(500.0), text("Paid")],
                ],
            ))
            .with_sheet(Sheet::from_rows(
                "OTHER REVENUE",
                vec![
                    vec![text("DATE"), text("Particulars"), text("AMOUNT")],
                    vec![num(45717.0), text("Hall booking"), num(100.0)],
                    vec![text("2025-04-12"), text("Parking"), num(200.0)],
                ],
            ))
            .with_sheet(Sheet::from_rows(
                "Expenses",
                vec![
                    vec![text("Date"), text("Amount"), text("Link for Bill")],
                    vec![text("2025-03-02"), num(150.0), text("https://bills.example/1")],
                    vec![text("2025-04-01"), num(50.0), Cell::Empty],
                ],
            ))
            .with_sheet(Sheet::from_rows(
                "Missing",
                vec![vec![text("Flat")], vec![text("A-102")]],
            ))
    }

    #[test]
    fn test_read_workbook() {
        let workbook = read_workbook(&mut sample_source(), &SheetNames::default()).unwrap();

        assert_eq!(workbook.ledger.len(), 3);
        assert_eq!(workbook.ledger.rows[0].unit, "A-101");
        assert_eq!(workbook.ledger.rows[1].status, "Unpaid");
        assert_eq!(workbook.revenue.rows[0].date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(workbook.revenue.date_column, Some(0));
        assert_eq!(workbook.expenses.link_column, Some(2));
        assert_eq!(
            workbook.expenses.rows[0].bill_link.as_deref(),
            Some("https://bills.example/1")
        );
        assert_eq!(workbook.expenses.rows[1].bill_link, None);
        assert_eq!(workbook.missing.len(), 1);
        assert!(workbook.source.is_none());
    }

    #[test]
    fn test_missing_sheet() {
        let mut source = sample_source();
        let names = SheetNames {
            ledger: "April 25".into(),
            ..SheetNames::default()
        };
        let err = read_workbook(&mut source, &names).unwrap_err();
        assert!(matches!(err, DashboardError::SheetNotFound { ref sheet } if sheet == "April 25"));
    }

    #[test]
    fn test_missing_column() {
        let sheet = Sheet::from_rows("March 25", vec![vec![text("Flat"), text("Amount")]]);
        let err = ledger_from_sheet(&sheet).unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn { ref column, .. } if column == "AMOUNT"));
    }

    #[test]
    fn test_non_numeric_amount_reports_row() {
        let sheet = Sheet::from_rows(
            "March 25",
            vec![
                vec![text("Flat"), text("AMOUNT"), text("Status")],
                vec![text("A-101"), num(1000.0), text("Paid")],
                vec![text("A-102"), text("one thousand"), text("Paid")],
            ],
        );
        let err = ledger_from_sheet(&sheet).unwrap_err();
        match err {
            DashboardError::InvalidInput {
                sheet,
                row,
                column,
                value,
            } => {
                assert_eq!(sheet, "March 25");
                assert_eq!(row, 3);
                assert_eq!(column, "AMOUNT");
                assert_eq!(value, "one thousand");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_and_text_amounts() {
        let sheet = Sheet::from_rows(
            "March 25",
            vec![
                vec![text("Flat"), text("AMOUNT"), text("Status")],
                vec![text("A-101"), Cell::Empty, text("Paid")],
                vec![text("A-102"), text("1,250.50"), text("Paid")],
            ],
        );
        let table = ledger_from_sheet(&sheet).unwrap();
        assert_eq!(table.rows[0].amount, None);
        assert_eq!(table.rows[1].amount, Some(Money::from_cents(125_050)));
    }

    #[test]
    fn test_unparseable_date_fails_fast() {
        let sheet = Sheet::from_rows(
            "OTHER REVENUE",
            vec![
                vec![text("DATE"), text("AMOUNT")],
                vec![text("2025-03-01"), num(100.0)],
                vec![text("early March"), num(100.0)],
            ],
        );
        let err = revenue_from_sheet(&sheet).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::DateParse { row: 3, ref value, .. } if value == "early March"
        ));
    }

    #[test]
    fn test_blank_date_fails() {
        let sheet = Sheet::from_rows(
            "Expenses",
            vec![
                vec![text("Date"), text("Amount")],
                vec![Cell::Empty, num(100.0)],
            ],
        );
        assert!(matches!(
            expenses_from_sheet(&sheet),
            Err(DashboardError::DateParse { row: 2, .. })
        ));
    }

    #[test]
    fn test_expenses_without_link_column() {
        let sheet = Sheet::from_rows(
            "Expenses",
            vec![
                vec![text("Date"), text("Amount")],
                vec![text("2025-03-02"), num(100.0)],
            ],
        );
        let table = expenses_from_sheet(&sheet).unwrap();
        assert_eq!(table.link_column, None);
        assert_eq!(table.rows[0].bill_link, None);
    }

    #[test]
    fn test_whitespace_link_is_empty() {
        let sheet = Sheet::from_rows(
            "Expenses",
            vec![
                vec![text("Date"), text("Amount"), text("Link for Bill")],
                vec![text("2025-03-02"), num(100.0), text("   ")],
            ],
        );
        let table = expenses_from_sheet(&sheet).unwrap();
        assert_eq!(table.rows[0].bill_link, None);
    }
}
