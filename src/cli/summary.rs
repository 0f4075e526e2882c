//! CLI commands for the metric tiles and the missing maintenance sheet

use crate::config::Settings;
use crate::display::format_sheet;
use crate::error::{DashboardError, DashboardResult};
use crate::session::Session;

/// Print the six metric tiles
pub fn handle_summary_command(session: &Session, settings: &Settings) -> DashboardResult<()> {
    print_heading(settings);
    print!("{}", session.metrics().format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print the missing maintenance sheet verbatim
pub fn handle_missing_command(session: &Session) -> DashboardResult<()> {
    let workbook = session
        .workbook()
        .ok_or_else(|| DashboardError::Config("No workbook loaded".into()))?;

    println!("Missing Maintenance");
    if workbook.missing.is_empty() {
        println!("No rows.");
        return Ok(());
    }
    println!("{}", format_sheet(&workbook.missing));
    Ok(())
}

fn print_heading(settings: &Settings) {
    println!("{}", settings.society_name);
    if !settings.subtitle.is_empty() {
        println!("{}", settings.subtitle);
    }
    println!();
}
