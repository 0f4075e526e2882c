//! User settings for the society dashboard
//!
//! Holds the dashboard heading, currency symbol, default workbook file and
//! the names of the four sheets the loader looks for.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::DashboardPaths;
use crate::error::DashboardError;

/// Names of the sheets read from the workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetNames {
    /// Maintenance ledger for the billing period
    pub ledger: String,
    /// Other revenue
    pub revenue: String,
    /// Expenses with bill links
    pub expenses: String,
    /// Missing maintenance report
    pub missing: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            ledger: "March 25".to_string(),
            revenue: "OTHER REVENUE".to_string(),
            expenses: "Expenses".to_string(),
            missing: "Missing".to_string(),
        }
    }
}

/// User settings for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Heading shown above the metric tiles
    #[serde(default = "default_society_name")]
    pub society_name: String,

    /// Second heading line (committee, chairman)
    #[serde(default)]
    pub subtitle: String,

    /// Currency symbol used by every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Workbook file name resolved against the working directory
    #[serde(default = "default_workbook_file")]
    pub workbook_file: PathBuf,

    /// Sheet names inside the workbook
    #[serde(default)]
    pub sheets: SheetNames,
}

fn default_schema_version() -> u32 {
    1
}

fn default_society_name() -> String {
    "Society Maintenance Dashboard".to_string()
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_workbook_file() -> PathBuf {
    PathBuf::from("society.xlsx")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            society_name: default_society_name(),
            subtitle: String::new(),
            currency_symbol: default_currency(),
            workbook_file: default_workbook_file(),
            sheets: SheetNames::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DashboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DashboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - `society init` persists
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), DashboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DashboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the fixed workbook file against a working directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn workbook_path(&self, working_dir: &Path) -> PathBuf {
        if self.workbook_file.is_absolute() {
            self.workbook_file.clone()
        } else {
            working_dir.join(&self.workbook_file)
        }
    }
}
