//! Month filtering for dated tables
//!
//! Rows are bucketed by the month-year label of their date. The selectable
//! label list keeps the order in which months first appear in the sheet; it
//! is not sorted.

use crate::models::{Dated, MonthLabel};

/// Distinct month labels in first-seen order
pub fn month_labels<R: Dated>(rows: &[R]) -> Vec<MonthLabel> {
    let mut labels: Vec<MonthLabel> = Vec::new();
    for row in rows {
        let label = row.month();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

/// Rows whose date falls in `label`, in original order
pub fn filter_by_month<R: Dated>(rows: &[R], label: MonthLabel) -> Vec<&R> {
    rows.iter().filter(|row| row.month() == label).collect()
}

/// Every label with its rows; each row lands in exactly one bucket
pub fn partition_by_month<R: Dated>(rows: &[R]) -> Vec<(MonthLabel, Vec<&R>)> {
    month_labels(rows)
        .into_iter()
        .map(|label| (label, filter_by_month(rows, label)))
        .collect()
}
