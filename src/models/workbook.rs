//! The loaded society workbook
//!
//! A read-only snapshot of the four sheets. It is created on load and
//! replaced wholesale when another workbook is loaded.

use std::path::PathBuf;

use serde::Serialize;

use super::cell::Sheet;
use super::records::{ExpenseRecord, MaintenanceRecord, RecordTable, RevenueRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocietyWorkbook {
    /// File the snapshot was read from (None for in-memory sources)
    pub source: Option<PathBuf>,
    /// Maintenance ledger for the billing period
    pub ledger: RecordTable<MaintenanceRecord>,
    pub revenue: RecordTable<RevenueRecord>,
    pub expenses: RecordTable<ExpenseRecord>,
    /// Missing maintenance report, shown verbatim
    pub missing: Sheet,
}
