//! Path management for the society dashboard
//!
//! ## Path Resolution Order
//!
//! 1. `SOCIETY_DASHBOARD_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/society-dashboard` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::DashboardError;

/// Environment variable overriding the config directory
pub const DIR_ENV_VAR: &str = "SOCIETY_DASHBOARD_DIR";

/// Manages all paths used by the dashboard
#[derive(Debug, Clone)]
pub struct DashboardPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl DashboardPaths {
    /// Create a new DashboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, DashboardError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "society-dashboard")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    DashboardError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create DashboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("dashboard.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DashboardError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            DashboardError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
