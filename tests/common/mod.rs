//! Workbook fixtures for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet, XlsxError};

/// A cell to write into a fixture sheet
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    /// A native date cell (year, month, day)
    Date(u16, u8, u8),
    Blank,
}

pub use Value::{Blank, Date, Number, Text};

fn write_sheet(worksheet: &mut Worksheet, name: &str, rows: &[Vec<Value>]) -> Result<(), XlsxError> {
    worksheet.set_name(name)?;
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            match value {
                Text(s) => {
                    worksheet.write_string(r as u32, c as u16, *s)?;
                }
                Number(n) => {
                    worksheet.write_number(r as u32, c as u16, *n)?;
                }
                Date(y, m, d) => {
                    let date = ExcelDateTime::from_ymd(*y, *m, *d)?;
                    worksheet.write_datetime_with_format(r as u32, c as u16, &date, &date_format)?;
                }
                Blank => {}
            }
        }
    }
    Ok(())
}

/// Write a workbook with the given sheets
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Value>>)]) -> PathBuf {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, name, rows).unwrap();
    }
    workbook.save(path).unwrap();
    path.to_path_buf()
}

pub fn ledger() -> Vec<Vec<Value<'static>>> {
    vec![
        vec![Text("Flat"), Text("Owner"), Text("AMOUNT"), Text("Status")],
        vec![Text("A-101"), Text("Kale"), Number(1000.0), Text("Paid")],
        vec![Text("A-102"), Text("Joshi"), Number(1000.0), Text("Unpaid")],
        vec![Text("A-103"), Text("Patil"), Number(500.0), Text("Paid")],
    ]
}

pub fn revenue() -> Vec<Vec<Value<'static>>> {
    vec![
        vec![Text("DATE"), Text("Particulars"), Text("AMOUNT")],
        // 1 March 2025 as an Excel serial date
        vec![Number(45717.0), Text("Hall booking"), Number(100.0)],
        vec![Text("2025-04-12"), Text("Parking"), Number(200.0)],
    ]
}

pub fn expenses() -> Vec<Vec<Value<'static>>> {
    vec![
        vec![Text("Date"), Text("Particulars"), Text("Amount"), Text("Link for Bill")],
        vec![
            Text("2025-03-02"),
            Text("Lift service"),
            Number(150.0),
            Text("https://bills.example/lift"),
        ],
        vec![Text("2025-04-01"), Text("Cleaning"), Number(50.0), Blank],
    ]
}

pub fn missing() -> Vec<Vec<Value<'static>>> {
    vec![
        vec![Text("Flat"), Text("Owner"), Text("Months")],
        vec![Text("A-102"), Text("Joshi"), Number(2.0)],
    ]
}

/// The standard four-sheet society workbook
pub fn society_workbook(dir: &Path) -> PathBuf {
    write_workbook(
        &dir.join("society.xlsx"),
        &[
            ("March 25", ledger()),
            ("OTHER REVENUE", revenue()),
            ("Expenses", expenses()),
            ("Missing", missing()),
        ],
    )
}
