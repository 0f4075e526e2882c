//! Core data models for the society dashboard
//!
//! This module contains the structures that represent a loaded workbook:
//! raw cells and sheets, typed ledger/revenue/expense records, money and
//! month labels.

pub mod cell;
pub mod money;
pub mod month;
pub mod records;
pub mod workbook;

pub use cell::{Cell, Sheet, SheetRow};
pub use money::Money;
pub use month::MonthLabel;
pub use records::{
    Dated, ExpenseRecord, MaintenanceRecord, Record, RecordTable, RevenueRecord, PAID_STATUS,
};
pub use workbook::SocietyWorkbook;
