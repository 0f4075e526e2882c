//! Typed rows of the society workbook
//!
//! Each record keeps the fields the dashboard computes with plus the full
//! original row, so tables can show every free-form column verbatim.

use chrono::NaiveDate;
use serde::Serialize;

use super::cell::Cell;
use super::money::Money;
use super::month::MonthLabel;

/// The only ledger status that counts as collected (exact, case-sensitive)
pub const PAID_STATUS: &str = "Paid";

/// Common access to the original row behind a record
pub trait Record {
    /// All cells of the original row
    fn cells(&self) -> &[Cell];
}

/// Records carrying a calendar date, filterable by month
pub trait Dated {
    fn date(&self) -> NaiveDate;

    /// The month-year bucket of this record
    fn month(&self) -> MonthLabel {
        MonthLabel::of(self.date())
    }
}

/// One billable unit in the maintenance ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceRecord {
    pub row: usize,
    /// First column of the row (flat or unit number), display only
    pub unit: String,
    /// Maintenance due; `None` when the cell is blank
    pub amount: Option<Money>,
    pub status: String,
    pub cells: Vec<Cell>,
}

impl MaintenanceRecord {
    /// Check if this unit has paid; only the exact label "Paid" matches
    pub fn is_paid(&self) -> bool {
        self.status == PAID_STATUS
    }
}

/// One row of other revenue (parking, hall booking, interest)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueRecord {
    pub row: usize,
    pub date: NaiveDate,
    pub amount: Option<Money>,
    pub cells: Vec<Cell>,
}

/// One expense with an optional bill link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRecord {
    pub row: usize,
    pub date: NaiveDate,
    pub amount: Option<Money>,
    /// Non-empty URL from the "Link for Bill" column
    pub bill_link: Option<String>,
    pub cells: Vec<Cell>,
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn cells(&self) -> &[Cell] {
                &self.cells
            }
        })*
    };
}

impl_record!(MaintenanceRecord, RevenueRecord, ExpenseRecord);

impl Dated for RevenueRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for ExpenseRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A typed table: the sheet's headers and its records in sheet order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordTable<R> {
    pub headers: Vec<String>,
    /// Column holding the record date, shown as `%d-%b-%y`
    pub date_column: Option<usize>,
    /// Column holding bill links, shown as "Download Bill"
    pub link_column: Option<usize>,
    pub rows: Vec<R>,
}

impl<R> RecordTable<R> {
    pub fn new(headers: Vec<String>, rows: Vec<R>) -> Self {
        Self {
            headers,
            date_column: None,
            link_column: None,
            rows,
        }
    }

    pub fn with_date_column(mut self, column: usize) -> Self {
        self.date_column = Some(column);
        self
    }

    pub fn with_link_column(mut self, column: Option<usize>) -> Self {
        self.link_column = column;
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R> Default for RecordTable<R> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
