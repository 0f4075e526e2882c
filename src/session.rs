//! Per-session dashboard state
//!
//! A `Session` owns the loaded workbook snapshot, the metrics computed from
//! it and the two month selections. The revenue and expense selections are
//! independent. Loading another workbook replaces everything at once; a
//! failed load leaves the previous state untouched.

use std::path::Path;

use clap::ValueEnum;
use log::{debug, info};

use crate::config::SheetNames;
use crate::error::{DashboardError, DashboardResult};
use crate::loader;
use crate::models::{ExpenseRecord, MonthLabel, RevenueRecord, SocietyWorkbook};
use crate::reports::FinancialMetrics;
use crate::services::{filter_by_month, month_labels, partition_by_month};

/// The two month-filterable tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TableKind {
    Revenue,
    Expenses,
}

impl TableKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Expenses => "expense",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    workbook: Option<SocietyWorkbook>,
    metrics: FinancialMetrics,
    revenue_month: Option<MonthLabel>,
    expenses_month: Option<MonthLabel>,
}

impl Session {
    /// An empty session with no workbook loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// A session over an already loaded workbook
    pub fn with_workbook(workbook: SocietyWorkbook) -> Self {
        let mut session = Self::new();
        session.replace(workbook);
        session
    }

    /// Load a workbook from disk, replacing the current one on success
    pub fn load_file(&mut self, path: &Path, sheets: &SheetNames) -> DashboardResult<()> {
        let workbook = loader::load_workbook(path, sheets)?;
        self.replace(workbook);
        Ok(())
    }

    /// Swap in a new snapshot; each selection defaults to its first month
    pub fn replace(&mut self, workbook: SocietyWorkbook) {
        self.metrics = FinancialMetrics::from_workbook(&workbook);
        self.revenue_month = month_labels(&workbook.revenue.rows).first().copied();
        self.expenses_month = month_labels(&workbook.expenses.rows).first().copied();
        info!(
            "Session holds {} ledger, {} revenue and {} expense rows",
            workbook.ledger.len(),
            workbook.revenue.len(),
            workbook.expenses.len()
        );
        self.workbook = Some(workbook);
    }

    pub fn is_loaded(&self) -> bool {
        self.workbook.is_some()
    }

    pub fn workbook(&self) -> Option<&SocietyWorkbook> {
        self.workbook.as_ref()
    }

    /// Metrics of the current snapshot (all zero before a load)
    pub fn metrics(&self) -> &FinancialMetrics {
        &self.metrics
    }

    /// Selectable months of a table in first-seen order
    pub fn months(&self, kind: TableKind) -> Vec<MonthLabel> {
        match (&self.workbook, kind) {
            (None, _) => Vec::new(),
            (Some(wb), TableKind::Revenue) => month_labels(&wb.revenue.rows),
            (Some(wb), TableKind::Expenses) => month_labels(&wb.expenses.rows),
        }
    }

    /// Row count of every month, in first-seen order
    pub fn month_counts(&self, kind: TableKind) -> Vec<(MonthLabel, usize)> {
        fn counts<R: crate::models::Dated>(rows: &[R]) -> Vec<(MonthLabel, usize)> {
            partition_by_month(rows)
                .into_iter()
                .map(|(label, bucket)| (label, bucket.len()))
                .collect()
        }

        match (&self.workbook, kind) {
            (None, _) => Vec::new(),
            (Some(wb), TableKind::Revenue) => counts(&wb.revenue.rows),
            (Some(wb), TableKind::Expenses) => counts(&wb.expenses.rows),
        }
    }

    pub fn selected_month(&self, kind: TableKind) -> Option<MonthLabel> {
        match kind {
            TableKind::Revenue => self.revenue_month,
            TableKind::Expenses => self.expenses_month,
        }
    }

    /// Select a month for one table without touching the other
    pub fn select_month(&mut self, kind: TableKind, month: MonthLabel) -> DashboardResult<()> {
        if !self.months(kind).contains(&month) {
            return Err(DashboardError::MonthNotFound {
                table: kind.name(),
                month: month.to_string(),
            });
        }
        debug!("Selected {} for {} table", month, kind.name());
        *self.selection_mut(kind) = Some(month);
        Ok(())
    }

    /// Move the selection forward (or backward) through the month list,
    /// wrapping at either end
    pub fn cycle_month(&mut self, kind: TableKind, forward: bool) -> Option<MonthLabel> {
        let months = self.months(kind);
        if months.is_empty() {
            return None;
        }

        let current = self
            .selected_month(kind)
            .and_then(|m| months.iter().position(|l| *l == m))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % months.len()
        } else {
            (current + months.len() - 1) % months.len()
        };

        let month = months[next];
        debug!("Selected {} for {} table", month, kind.name());
        *self.selection_mut(kind) = Some(month);
        Some(month)
    }

    /// Revenue rows of the selected month
    pub fn filtered_revenue(&self) -> Vec<&RevenueRecord> {
        match (&self.workbook, self.revenue_month) {
            (Some(wb), Some(month)) => filter_by_month(&wb.revenue.rows, month),
            _ => Vec::new(),
        }
    }

    /// Expense rows of the selected month
    pub fn filtered_expenses(&self) -> Vec<&ExpenseRecord> {
        match (&self.workbook, self.expenses_month) {
            (Some(wb), Some(month)) => filter_by_month(&wb.expenses.rows, month),
            _ => Vec::new(),
        }
    }

    fn selection_mut(&mut self, kind: TableKind) -> &mut Option<MonthLabel> {
        match kind {
            TableKind::Revenue => &mut self.revenue_month,
            TableKind::Expenses => &mut self.expenses_month,
        }
    }
}
