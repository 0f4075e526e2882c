//! Display formatting for terminal output
//!
//! Provides currency formatting, bill link rendering and table helpers
//! shared by the CLI, the TUI and the exporters.

pub mod bill_link;
pub mod currency;
pub mod table;

pub use bill_link::{escape_html, render_bill_link, LinkStyle, BILL_LINK_LABEL};
pub use currency::format_currency;
pub use table::{format_date, format_record_table, format_sheet, record_cells, sheet_row_cells};
