//! CLI commands for the month-filtered revenue and expense tables

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use super::terminal_link_style;
use crate::config::Settings;
use crate::display::{format_currency, format_record_table};
use crate::error::{DashboardError, DashboardResult};
use crate::export::{export_table_csv, TableExport};
use crate::models::{Money, MonthLabel};
use crate::session::{Session, TableKind};

/// Arguments shared by `revenue` and `expenses`
#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// Month to show (e.g. "March 2025", "Mar 2025" or "2025-03");
    /// defaults to the first month in the sheet
    #[arg(short, long)]
    pub month: Option<String>,

    /// Export the filtered rows to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Select a month typed on the command line
pub fn apply_month(session: &mut Session, kind: TableKind, month: Option<&str>) -> DashboardResult<()> {
    if let Some(text) = month {
        let label: MonthLabel = text.parse()?;
        session.select_month(kind, label)?;
    }
    Ok(())
}

/// Show one filtered table, or export it with `--output`
pub fn handle_table_command(
    session: &mut Session,
    settings: &Settings,
    kind: TableKind,
    args: TableArgs,
) -> DashboardResult<()> {
    apply_month(session, kind, args.month.as_deref())?;

    let workbook = session
        .workbook()
        .ok_or_else(|| DashboardError::Config("No workbook loaded".into()))?;
    let month = session.selected_month(kind);

    let (title, export, rendered, total) = match kind {
        TableKind::Revenue => {
            let rows = session.filtered_revenue();
            let total: Money = rows.iter().filter_map(|r| r.amount).sum();
            (
                settings.sheets.revenue.as_str(),
                TableExport::from_records(&settings.sheets.revenue, month, &workbook.revenue, &rows),
                format_record_table(&workbook.revenue, &rows, terminal_link_style()),
                total,
            )
        }
        TableKind::Expenses => {
            let rows = session.filtered_expenses();
            let total: Money = rows.iter().filter_map(|r| r.amount).sum();
            (
                settings.sheets.expenses.as_str(),
                TableExport::from_records(&settings.sheets.expenses, month, &workbook.expenses, &rows),
                format_record_table(&workbook.expenses, &rows, terminal_link_style()),
                total,
            )
        }
    };

    if let Some(path) = args.output {
        let file = File::create(&path)
            .map_err(|e| DashboardError::Export(format!("Failed to create file: {}", e)))?;
        export_table_csv(&export, BufWriter::new(file))?;
        println!("Exported {} rows to: {}", export.rows.len(), path.display());
        return Ok(());
    }

    match month {
        None => println!("{}: no rows.", title),
        Some(month) => {
            println!("{} ({})", title, month);
            println!("{}", rendered);
            println!(
                "{} rows, total {}",
                export.rows.len(),
                format_currency(total, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}

/// List the selectable months of a table in first-seen order
pub fn handle_months_command(session: &Session, kind: TableKind, counts: bool) -> DashboardResult<()> {
    let months = session.month_counts(kind);
    if months.is_empty() {
        println!("No {} rows.", kind.name());
        return Ok(());
    }
    for (month, rows) in months {
        if counts {
            println!("{:<16} {:>4}", month.to_string(), rows);
        } else {
            println!("{}", month);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetNames;
    use crate::loader::{read_workbook, tests::sample_source};
    use tempfile::TempDir;

    fn sample_session() -> Session {
        let workbook = read_workbook(&mut sample_source(), &SheetNames::default()).unwrap();
        Session::with_workbook(workbook)
    }

    #[test]
    fn test_apply_month_accepts_short_forms() {
        let mut session = sample_session();
        apply_month(&mut session, TableKind::Revenue, Some("apr 2025")).unwrap();
        assert_eq!(
            session.selected_month(TableKind::Revenue).map(|m| m.to_string()).as_deref(),
            Some("April 2025")
        );
        apply_month(&mut session, TableKind::Revenue, None).unwrap();
        assert_eq!(
            session.selected_month(TableKind::Revenue).map(|m| m.to_string()).as_deref(),
            Some("April 2025")
        );
    }

    #[test]
    fn test_apply_month_errors() {
        let mut session = sample_session();
        assert!(matches!(
            apply_month(&mut session, TableKind::Expenses, Some("Marchember")),
            Err(DashboardError::InvalidMonth(_))
        ));
        assert!(matches!(
            apply_month(&mut session, TableKind::Expenses, Some("2019-01")),
            Err(DashboardError::MonthNotFound { .. })
        ));
    }

    #[test]
    fn test_table_export_to_csv() {
        let mut session = sample_session();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        let args = TableArgs {
            month: Some("April 2025".into()),
            output: Some(path.clone()),
        };
        handle_table_command(&mut session, &Settings::default(), TableKind::Expenses, args).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text, "Date,Amount,Link for Bill\n01-Apr-25,50,\n");
    }
}
