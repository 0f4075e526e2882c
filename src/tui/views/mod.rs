//! TUI Views module
//!
//! The dashboard is a single screen: heading, metric tiles, the two
//! month-filtered tables, the missing maintenance table and the status bar.

pub mod header;
pub mod metrics;
pub mod status_bar;
pub mod tables;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{error_dialog_area, ErrorDialog};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    metrics::render(frame, app, layout.tiles);
    tables::render_revenue(frame, app, layout.revenue);
    tables::render_expenses(frame, app, layout.expenses);
    tables::render_missing(frame, app, layout.missing);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::LoadWorkbook => dialogs::load::render(frame, app),
        ActiveDialog::Error(info) => {
            let area = error_dialog_area(frame.area());
            frame.render_widget(ErrorDialog::new(info), area);
        }
        ActiveDialog::None => {}
    }
}
