//! Business logic layer
//!
//! Pure operations over the loaded workbook. Aggregation lives in
//! `reports::metrics`; this module holds month filtering.

pub mod month_filter;

pub use month_filter::{filter_by_month, month_labels, partition_by_month};
