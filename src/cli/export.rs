//! CLI command for dashboard export
//!
//! Writes the metrics and the month-filtered tables in the chosen format,
//! to a file or to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use super::tables::apply_month;
use crate::config::Settings;
use crate::error::{DashboardError, DashboardResult};
use crate::export::{write_export, DashboardExport, ExportFormat};
use crate::session::{Session, TableKind};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format (`-f` is the global workbook flag)
    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Month for the revenue table
    #[arg(long)]
    pub revenue_month: Option<String>,

    /// Month for the expenses table
    #[arg(long)]
    pub expenses_month: Option<String>,
}

/// Handle `society export`
pub fn handle_export_command(
    session: &mut Session,
    settings: &Settings,
    args: ExportArgs,
) -> DashboardResult<()> {
    apply_month(session, TableKind::Revenue, args.revenue_month.as_deref())?;
    apply_month(session, TableKind::Expenses, args.expenses_month.as_deref())?;

    let export = DashboardExport::from_session(session, settings)?;

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .map_err(|e| DashboardError::Export(format!("Failed to create file: {}", e)))?;
            let mut writer = BufWriter::new(file);
            write_export(args.format, &export, &mut writer)?;
            writer.flush()?;
            println!(
                "Exported {} dashboard to: {}",
                args.format.extension(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(args.format, &export, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
