//! Table rendering for terminal output
//!
//! Record tables are shown with every original column. Date columns use the
//! dashboard's short date format and the bill link column is rendered with
//! the requested `LinkStyle`.

use chrono::NaiveDate;
use tabled::builder::Builder;
use tabled::settings::Style;

use super::bill_link::{render_bill_link, LinkStyle};
use crate::models::{Cell, Record, RecordTable, Sheet, SheetRow};

/// Date format used in every table ("01-Mar-25")
pub const DISPLAY_DATE_FORMAT: &str = "%d-%b-%y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Display strings for one record, one per table header
pub fn record_cells<R: Record>(table: &RecordTable<R>, record: &R, style: LinkStyle) -> Vec<String> {
    let cells = record.cells();
    (0..table.headers.len())
        .map(|column| {
            let cell = cells.get(column).unwrap_or(&Cell::Empty);
            if table.date_column == Some(column) {
                cell.as_date()
                    .map(format_date)
                    .unwrap_or_else(|| cell.to_string())
            } else if table.link_column == Some(column) {
                render_bill_link(Some(&cell.to_string()), style)
            } else {
                cell.to_string()
            }
        })
        .collect()
}

/// Display strings for one passthrough row
pub fn sheet_row_cells(sheet: &Sheet, row: &SheetRow) -> Vec<String> {
    (0..sheet.headers.len())
        .map(|column| row.cell(column).to_string())
        .collect()
}

/// Render selected records of a table
pub fn format_record_table<R: Record>(
    table: &RecordTable<R>,
    rows: &[&R],
    style: LinkStyle,
) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.headers.iter().cloned());
    for record in rows {
        builder.push_record(record_cells(table, *record, style));
    }
    render(builder)
}

/// Render a sheet verbatim
pub fn format_sheet(sheet: &Sheet) -> String {
    let mut builder = Builder::default();
    builder.push_record(sheet.headers.iter().cloned());
    for row in &sheet.rows {
        builder.push_record(sheet_row_cells(sheet, row));
    }
    render(builder)
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
