//! Reports module for the society dashboard
//!
//! Provides the financial metrics shown on the dashboard tiles.

pub mod metrics;

pub use metrics::FinancialMetrics;
