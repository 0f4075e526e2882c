//! Configuration module for the society dashboard
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence (heading, currency, workbook and sheet names)

pub mod paths;
pub mod settings;

pub use paths::DashboardPaths;
pub use settings::{Settings, SheetNames};
