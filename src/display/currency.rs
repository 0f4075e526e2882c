//! Currency formatting

use crate::models::Money;

/// Format an amount with a currency symbol, thousands separators and two
/// decimals ("₹1,234.50", "-₹1,600.00")
pub fn format_currency(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}
