//! Terminal User Interface module
//!
//! The interactive dashboard built on ratatui: metric tiles, month-filtered
//! revenue and expense tables, the missing maintenance table and a prompt
//! for loading a workbook.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
