//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the loaded session.

pub mod export;
pub mod summary;
pub mod tables;

use std::io::IsTerminal;

use crate::display::LinkStyle;

pub use export::{handle_export_command, ExportArgs};
pub use summary::{handle_missing_command, handle_summary_command};
pub use tables::{handle_months_command, handle_table_command, TableArgs};

/// Bill links are clickable only when stdout is a terminal
pub fn terminal_link_style() -> LinkStyle {
    if std::io::stdout().is_terminal() {
        LinkStyle::Terminal
    } else {
        LinkStyle::Raw
    }
}
