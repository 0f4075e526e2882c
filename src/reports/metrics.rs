//! Financial metrics
//!
//! The six totals shown as tiles at the top of the dashboard, computed from
//! the maintenance ledger, other revenue and expenses.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::display::format_currency;
use crate::error::DashboardResult;
use crate::models::{ExpenseRecord, MaintenanceRecord, Money, RevenueRecord, SocietyWorkbook};

/// Aggregate totals for one loaded workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Sum of every ledger amount, whatever its status
    pub total_expected_maintenance: Money,
    /// Sum of ledger amounts with status exactly "Paid"
    pub total_collected_maintenance: Money,
    pub remaining_maintenance: Money,
    pub other_revenue: Money,
    pub expenses: Money,
    /// Collected maintenance plus other revenue, less expenses
    pub balance_in_society_fund: Money,
}

impl FinancialMetrics {
    /// Compute the metrics; blank amounts are skipped
    pub fn compute(
        ledger: &[MaintenanceRecord],
        revenue: &[RevenueRecord],
        expenses: &[ExpenseRecord],
    ) -> Self {
        let total_expected_maintenance: Money = ledger.iter().filter_map(|r| r.amount).sum();
        let total_collected_maintenance: Money = ledger
            .iter()
            .filter(|r| r.is_paid())
            .filter_map(|r| r.amount)
            .sum();
        let other_revenue: Money = revenue.iter().filter_map(|r| r.amount).sum();
        let expenses: Money = expenses.iter().filter_map(|r| r.amount).sum();

        Self {
            total_expected_maintenance,
            total_collected_maintenance,
            remaining_maintenance: total_expected_maintenance - total_collected_maintenance,
            other_revenue,
            expenses,
            balance_in_society_fund: (total_collected_maintenance + other_revenue) - expenses,
        }
    }

    /// Compute the metrics for a whole workbook
    pub fn from_workbook(workbook: &SocietyWorkbook) -> Self {
        Self::compute(
            &workbook.ledger.rows,
            &workbook.revenue.rows,
            &workbook.expenses.rows,
        )
    }

    /// Tile labels and values in display order
    pub fn tiles(&self) -> [(&'static str, Money); 6] {
        [
            ("Total Expected Maintenance", self.total_expected_maintenance),
            ("Total Collected Maintenance", self.total_collected_maintenance),
            ("Remaining Maintenance", self.remaining_maintenance),
            ("OTHER REVENUE", self.other_revenue),
            ("Expenses", self.expenses),
            ("Balance In Society Fund", self.balance_in_society_fund),
        ]
    }

    /// Format the metrics for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Financial Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        for (label, amount) in self.tiles() {
            output.push_str(&format!(
                "{:<30} {:>19}\n",
                label,
                format_currency(amount, currency_symbol)
            ));
        }

        output
    }

    /// Export the metrics as `Metric,Amount` CSV rows
    pub fn export_csv<W: Write>(&self, writer: W) -> DashboardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Metric", "Amount"])?;
        for (label, amount) in self.tiles() {
            csv.write_record([label, amount.to_decimal_string().as_str()])?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ledger(rows: &[(i64, &str)]) -> Vec<MaintenanceRecord> {
        rows.iter()
            .enumerate()
            .map(|(i, (amount, status))| MaintenanceRecord {
                row: i + 2,
                unit: format!("A-{}", 101 + i),
                amount: Some(Money::from_units(*amount)),
                status: status.to_string(),
                cells: vec![],
            })
            .collect()
    }

    fn revenue(amount: i64) -> RevenueRecord {
        RevenueRecord {
            row: 2,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            amount: Some(Money::from_units(amount)),
            cells: vec![],
        }
    }

    fn expense(amount: i64) -> ExpenseRecord {
        ExpenseRecord {
            row: 2,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            amount: Some(Money::from_units(amount)),
            bill_link: None,
            cells: vec![],
        }
    }

    #[test]
    fn test_ledger_totals() {
        let rows = ledger(&[(1000, "Paid"), (1000, "Unpaid"), (500, "Paid")]);
        let metrics = FinancialMetrics::compute(&rows, &[], &[]);

        assert_eq!(metrics.total_expected_maintenance, Money::from_units(2500));
        assert_eq!(metrics.total_collected_maintenance, Money::from_units(1500));
        assert_eq!(metrics.remaining_maintenance, Money::from_units(1000));
    }

    #[test]
    fn test_balance() {
        let rows = ledger(&[(1000, "Paid"), (1000, "Unpaid"), (500, "Paid")]);
        let metrics = FinancialMetrics::compute(
            &rows,
            &[revenue(100), revenue(200)],
            &[expense(150), expense(50)],
        );

        assert_eq!(metrics.other_revenue, Money::from_units(300));
        assert_eq!(metrics.expenses, Money::from_units(200));
        assert_eq!(metrics.balance_in_society_fund, Money::from_units(1600));
    }

    #[test]
    fn test_status_match_is_case_sensitive() {
        let rows = ledger(&[(1000, "PAID"), (700, "paid"), (300, "Paid")]);
        let metrics = FinancialMetrics::compute(&rows, &[], &[]);

        assert_eq!(metrics.total_expected_maintenance, Money::from_units(2000));
        assert_eq!(metrics.total_collected_maintenance, Money::from_units(300));
    }

    #[test]
    fn test_blank_amounts_are_skipped() {
        let mut rows = ledger(&[(1000, "Paid"), (0, "Paid")]);
        rows[1].amount = None;
        let mut blank_expense = expense(0);
        blank_expense.amount = None;

        let metrics = FinancialMetrics::compute(&rows, &[], &[blank_expense, expense(40)]);
        assert_eq!(metrics.total_collected_maintenance, Money::from_units(1000));
        assert_eq!(metrics.expenses, Money::from_units(40));
    }

    #[test]
    fn test_invariants_hold_for_fractional_amounts() {
        let mut rows = ledger(&[(0, "Paid"), (0, "Unpaid"), (0, "Paid")]);
        rows[0].amount = Money::from_f64(1234.56);
        rows[1].amount = Money::from_f64(0.1);
        rows[2].amount = Money::from_f64(0.2);

        let metrics = FinancialMetrics::compute(&rows, &[revenue(10)], &[expense(3)]);
        assert!(metrics.total_expected_maintenance >= metrics.total_collected_maintenance);
        assert_eq!(
            metrics.remaining_maintenance,
            metrics.total_expected_maintenance - metrics.total_collected_maintenance
        );
        assert_eq!(metrics.remaining_maintenance, Money::from_cents(10));
        assert_eq!(
            metrics.balance_in_society_fund,
            metrics.total_collected_maintenance + metrics.other_revenue - metrics.expenses
        );
    }

    #[test]
    fn test_empty_workbook_is_zero() {
        let metrics = FinancialMetrics::compute(&[], &[], &[]);
        assert_eq!(metrics, FinancialMetrics::default());
    }

    #[test]
    fn test_format_terminal() {
        let rows = ledger(&[(1000, "Paid"), (1000, "Unpaid"), (500, "Paid")]);
        let metrics = FinancialMetrics::compute(&rows, &[revenue(300)], &[expense(200)]);
        let output = metrics.format_terminal("₹");

        assert!(output.contains("Total Expected Maintenance"));
        assert!(output.contains("₹2,500.00"));
        assert!(output.contains("₹1,600.00"));
    }

    #[test]
    fn test_export_csv() {
        let rows = ledger(&[(1000, "Paid")]);
        let metrics = FinancialMetrics::compute(&rows, &[], &[expense(1500)]);

        let mut buffer = Vec::new();
        metrics.export_csv(&mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("Metric,Amount\n"));
        assert!(output.contains("Total Collected Maintenance,1000.00\n"));
        assert!(output.contains("Balance In Society Fund,-500.00\n"));
    }
}
