//! Society Dashboard - maintenance, revenue and expenses of a housing society
//!
//! This library loads a society's workbook (maintenance ledger, other
//! revenue, expenses and the missing maintenance report), computes the
//! financial metrics shown on the dashboard tiles and filters the revenue
//! and expense tables by month. The `society` binary presents the result as
//! CLI reports, exports and an interactive TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Cells, sheets, typed records, money and month labels
//! - `loader`: Workbook reading and validation
//! - `services`: Month filtering
//! - `reports`: Financial metrics
//! - `session`: Per-session state (loaded snapshot and month selections)
//! - `display`: Currency, bill link and table formatting
//! - `export`: CSV, JSON, YAML and HTML export
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use society_dashboard::config::{DashboardPaths, Settings};
//! use society_dashboard::session::Session;
//!
//! let paths = DashboardPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut session = Session::new();
//! session.load_file(&settings.workbook_path(&std::env::current_dir()?), &settings.sheets)?;
//! println!("{}", session.metrics().format_terminal(&settings.currency_symbol));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod tui;

pub use error::{DashboardError, DashboardResult};
