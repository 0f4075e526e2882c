//! The dashboard export document
//!
//! A self-describing snapshot of what the dashboard shows: the metrics,
//! the revenue and expense tables filtered to their selected months, and
//! the missing maintenance sheet. Every format is written from this one
//! structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::display::{record_cells, sheet_row_cells, LinkStyle};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{MonthLabel, Record, RecordTable};
use crate::reports::FinancialMetrics;
use crate::session::{Session, TableKind};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub society_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,

    pub currency_symbol: String,

    /// Workbook the figures were read from
    pub source: Option<String>,

    pub metrics: FinancialMetrics,

    pub revenue: TableExport,

    pub expenses: TableExport,

    pub missing: TableExport,
}

/// One table as displayed: headers and display strings per row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableExport {
    pub title: String,

    /// Month the rows are filtered to; `None` for unfiltered tables
    #[serde(default)]
    pub month: Option<MonthLabel>,

    pub headers: Vec<String>,

    /// Column holding raw bill URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_column: Option<usize>,

    pub rows: Vec<Vec<String>>,
}

impl TableExport {
    /// Capture selected records of a table; bill links stay raw URLs
    pub fn from_records<R: Record>(
        title: &str,
        month: Option<MonthLabel>,
        table: &RecordTable<R>,
        rows: &[&R],
    ) -> Self {
        Self {
            title: title.to_string(),
            month,
            headers: table.headers.clone(),
            link_column: table.link_column,
            rows: rows
                .iter()
                .map(|record| record_cells(table, *record, LinkStyle::Raw))
                .collect(),
        }
    }

    /// Title with the selected month, e.g. "OTHER REVENUE (March 2025)"
    pub fn heading(&self) -> String {
        match self.month {
            Some(month) => format!("{} ({})", self.title, month),
            None => self.title.clone(),
        }
    }
}

impl DashboardExport {
    /// Build an export from the session's current snapshot and selections
    pub fn from_session(session: &Session, settings: &Settings) -> DashboardResult<Self> {
        let workbook = session
            .workbook()
            .ok_or_else(|| DashboardError::Export("No workbook loaded".into()))?;

        let revenue = TableExport::from_records(
            &settings.sheets.revenue,
            session.selected_month(TableKind::Revenue),
            &workbook.revenue,
            &session.filtered_revenue(),
        );
        let expenses = TableExport::from_records(
            &settings.sheets.expenses,
            session.selected_month(TableKind::Expenses),
            &workbook.expenses,
            &session.filtered_expenses(),
        );
        let missing = TableExport {
            title: "Missing Maintenance".to_string(),
            month: None,
            headers: workbook.missing.headers.clone(),
            link_column: None,
            rows: workbook
                .missing
                .rows
                .iter()
                .map(|row| sheet_row_cells(&workbook.missing, row))
                .collect(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            society_name: settings.society_name.clone(),
            subtitle: settings.subtitle.clone(),
            currency_symbol: settings.currency_symbol.clone(),
            source: workbook.source.as_ref().map(|p| p.display().to_string()),
            metrics: *session.metrics(),
            revenue,
            expenses,
            missing,
        })
    }

    /// The two month-filtered tables and the missing sheet, in display order
    pub fn tables(&self) -> [&TableExport; 3] {
        [&self.revenue, &self.expenses, &self.missing]
    }
}
