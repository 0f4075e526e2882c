//! Loading real workbook files

mod common;

use chrono::NaiveDate;
use common::{
    expenses, ledger, missing, revenue, society_workbook, write_workbook, Blank, Date, Number, Text,
};
use society_dashboard::config::SheetNames;
use society_dashboard::loader::load_workbook;
use society_dashboard::models::Money;
use society_dashboard::reports::FinancialMetrics;
use society_dashboard::session::{Session, TableKind};
use society_dashboard::DashboardError;
use tempfile::TempDir;

#[test]
fn loads_society_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let path = society_workbook(temp_dir.path());

    let workbook = load_workbook(&path, &SheetNames::default()).unwrap();
    assert_eq!(workbook.source.as_deref(), Some(path.as_path()));
    assert_eq!(workbook.ledger.len(), 3);
    assert_eq!(workbook.revenue.len(), 2);
    assert_eq!(workbook.expenses.len(), 2);
    assert_eq!(workbook.missing.len(), 1);

    let metrics = FinancialMetrics::from_workbook(&workbook);
    assert_eq!(metrics.total_expected_maintenance, Money::from_units(2500));
    assert_eq!(metrics.total_collected_maintenance, Money::from_units(1500));
    assert_eq!(metrics.remaining_maintenance, Money::from_units(1000));
    assert_eq!(metrics.other_revenue, Money::from_units(300));
    assert_eq!(metrics.expenses, Money::from_units(200));
    assert_eq!(metrics.balance_in_society_fund, Money::from_units(1600));
}

#[test]
fn session_months_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = society_workbook(temp_dir.path());

    let mut session = Session::new();
    session.load_file(&path, &SheetNames::default()).unwrap();

    let months: Vec<String> = session
        .months(TableKind::Expenses)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(months, vec!["March 2025", "April 2025"]);
    assert_eq!(
        session.filtered_expenses()[0].bill_link.as_deref(),
        Some("https://bills.example/lift")
    );
}

#[test]
fn missing_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_workbook(&temp_dir.path().join("nope.xlsx"), &SheetNames::default()).unwrap_err();
    assert!(matches!(err, DashboardError::FileNotFound { .. }));
}

#[test]
fn missing_sheet_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_workbook(
        &temp_dir.path().join("partial.xlsx"),
        &[
            ("March 25", ledger()),
            ("OTHER REVENUE", revenue()),
            ("Missing", missing()),
        ],
    );

    let err = load_workbook(&path, &SheetNames::default()).unwrap_err();
    assert!(matches!(err, DashboardError::SheetNotFound { ref sheet } if sheet == "Expenses"));
}

#[test]
fn text_amount_is_reported_with_row() {
    let temp_dir = TempDir::new().unwrap();
    let mut bad_ledger = ledger();
    bad_ledger.push(vec![Text("A-104"), Text("Rao"), Text("pending"), Text("Unpaid")]);
    let path = write_workbook(
        &temp_dir.path().join("bad.xlsx"),
        &[
            ("March 25", bad_ledger),
            ("OTHER REVENUE", revenue()),
            ("Expenses", expenses()),
            ("Missing", missing()),
        ],
    );

    let err = load_workbook(&path, &SheetNames::default()).unwrap_err();
    match err {
        DashboardError::InvalidInput { sheet, row, column, value } => {
            assert_eq!(sheet, "March 25");
            assert_eq!(row, 5);
            assert_eq!(column, "AMOUNT");
            assert_eq!(value, "pending");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_date_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let mut bad_revenue = revenue();
    bad_revenue.push(vec![Text("next week"), Text("Interest"), Number(10.0)]);
    let path = write_workbook(
        &temp_dir.path().join("bad.xlsx"),
        &[
            ("March 25", ledger()),
            ("OTHER REVENUE", bad_revenue),
            ("Expenses", expenses()),
            ("Missing", missing()),
        ],
    );

    let err = load_workbook(&path, &SheetNames::default()).unwrap_err();
    assert!(matches!(err, DashboardError::DateParse { row: 4, .. }));
}

#[test]
fn native_date_cells_are_dates() {
    let temp_dir = TempDir::new().unwrap();
    let dated_revenue = vec![
        vec![Text("DATE"), Text("Particulars"), Text("AMOUNT")],
        vec![Date(2025, 3, 1), Text("Hall booking"), Number(100.0)],
        vec![Date(2025, 5, 20), Text("Parking"), Number(200.0)],
    ];
    let dated_expenses = vec![
        vec![Text("Date"), Text("Particulars"), Text("Amount"), Text("Link for Bill")],
        vec![Date(2025, 5, 2), Text("Lift service"), Number(150.0), Blank],
    ];
    let path = write_workbook(
        &temp_dir.path().join("dated.xlsx"),
        &[
            ("March 25", ledger()),
            ("OTHER REVENUE", dated_revenue),
            ("Expenses", dated_expenses),
            ("Missing", missing()),
        ],
    );

    let mut session = Session::new();
    session.load_file(&path, &SheetNames::default()).unwrap();

    let months: Vec<String> = session
        .months(TableKind::Revenue)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(months, vec!["March 2025", "May 2025"]);
    assert_eq!(
        session.filtered_revenue()[0].date,
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    );

    let months: Vec<String> = session
        .months(TableKind::Expenses)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(months, vec!["May 2025"]);
}
