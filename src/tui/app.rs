//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Dashboard data lives in the `Session`; everything else here is view state.

use std::path::PathBuf;

use log::info;

use crate::config::Settings;
use crate::session::{Session, TableKind};

use super::widgets::{ErrorInfo, TextInput};

/// Which table currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Revenue,
    Expenses,
    Missing,
}

impl FocusedPanel {
    pub fn next(self) -> Self {
        match self {
            Self::Revenue => Self::Expenses,
            Self::Expenses => Self::Missing,
            Self::Missing => Self::Revenue,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Revenue => Self::Missing,
            Self::Expenses => Self::Revenue,
            Self::Missing => Self::Expenses,
        }
    }

    /// The month-filterable table behind this panel
    pub fn table_kind(self) -> Option<TableKind> {
        match self {
            Self::Revenue => Some(TableKind::Revenue),
            Self::Expenses => Some(TableKind::Expenses),
            Self::Missing => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Revenue => 0,
            Self::Expenses => 1,
            Self::Missing => 2,
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    LoadWorkbook,
    Error(ErrorInfo),
}

/// Main application state
pub struct App {
    pub session: Session,

    pub settings: Settings,

    pub should_quit: bool,

    pub focused_panel: FocusedPanel,

    pub input_mode: InputMode,

    pub active_dialog: ActiveDialog,

    /// Path typed into the load prompt
    pub load_input: TextInput,

    /// Selected row per panel (revenue, expenses, missing)
    pub selected_rows: [usize; 3],

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create the app; without a loaded workbook it opens on the load prompt
    pub fn new(session: Session, settings: Settings) -> Self {
        let mut app = Self {
            session,
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            load_input: TextInput::new()
                .label("Path")
                .placeholder("society.xlsx"),
            selected_rows: [0; 3],
            status_message: None,
        };

        if !app.session.is_loaded() {
            app.open_load_prompt();
        }
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.input_mode = match dialog {
            ActiveDialog::LoadWorkbook => InputMode::Editing,
            _ => InputMode::Normal,
        };
        self.active_dialog = dialog;
    }

    /// Close the active dialog; with nothing loaded the load prompt returns
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
        if !self.session.is_loaded() {
            self.open_load_prompt();
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open the load prompt, prefilled with the current workbook path
    pub fn open_load_prompt(&mut self) {
        let current = self
            .session
            .workbook()
            .and_then(|wb| wb.source.as_ref())
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.load_input.set_content(current);
        self.load_input.focused = true;
        self.open_dialog(ActiveDialog::LoadWorkbook);
    }

    /// Load the path typed into the prompt
    ///
    /// On failure the error dialog opens and the previous snapshot stays.
    pub fn submit_load(&mut self) {
        let text = self.load_input.value().trim().to_string();
        if text.is_empty() {
            self.open_dialog(ActiveDialog::Error(
                ErrorInfo::simple("No Path", "Enter the path of a workbook to load")
                    .with_suggestion("Relative paths start from the current directory"),
            ));
            return;
        }

        let path = PathBuf::from(&text);
        match self.session.load_file(&path, &self.settings.sheets) {
            Ok(()) => {
                info!("Loaded {} from the TUI", path.display());
                self.selected_rows = [0; 3];
                self.load_input.focused = false;
                self.active_dialog = ActiveDialog::None;
                self.input_mode = InputMode::Normal;
                self.set_status(format!("Loaded {}", path.display()));
            }
            Err(e) => {
                self.open_dialog(ActiveDialog::Error(ErrorInfo::from_error(&e)));
            }
        }
    }

    /// Switch focus to the next (or previous) table
    pub fn cycle_focus(&mut self, forward: bool) {
        self.focused_panel = if forward {
            self.focused_panel.next()
        } else {
            self.focused_panel.prev()
        };
    }

    /// Step the focused table's month selection
    pub fn cycle_month(&mut self, forward: bool) {
        let Some(kind) = self.focused_panel.table_kind() else {
            self.set_status("The missing maintenance table has no month filter");
            return;
        };

        match self.session.cycle_month(kind, forward) {
            Some(month) => {
                self.selected_rows[self.focused_panel.index()] = 0;
                self.set_status(format!("Showing {}", month));
            }
            None => self.set_status(format!("No {} rows", kind.name())),
        }
    }

    /// Number of rows shown in a panel
    pub fn row_count(&self, panel: FocusedPanel) -> usize {
        match panel {
            FocusedPanel::Revenue => self.session.filtered_revenue().len(),
            FocusedPanel::Expenses => self.session.filtered_expenses().len(),
            FocusedPanel::Missing => self.session.workbook().map_or(0, |wb| wb.missing.len()),
        }
    }

    pub fn selected_row(&self, panel: FocusedPanel) -> usize {
        self.selected_rows[panel.index()]
    }

    pub fn move_up(&mut self) {
        let index = self.focused_panel.index();
        self.selected_rows[index] = self.selected_rows[index].saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.row_count(self.focused_panel);
        let index = self.focused_panel.index();
        if self.selected_rows[index] + 1 < count {
            self.selected_rows[index] += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected_rows[self.focused_panel.index()] = 0;
    }

    pub fn move_to_bottom(&mut self) {
        let count = self.row_count(self.focused_panel);
        self.selected_rows[self.focused_panel.index()] = count.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetNames;
    use crate::loader::{read_workbook, tests::sample_source};

    fn loaded_app() -> App {
        let workbook = read_workbook(&mut sample_source(), &SheetNames::default()).unwrap();
        App::new(Session::with_workbook(workbook), Settings::default())
    }

    #[test]
    fn test_starts_on_load_prompt_without_workbook() {
        let app = App::new(Session::new(), Settings::default());
        assert_eq!(app.active_dialog, ActiveDialog::LoadWorkbook);
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_starts_on_dashboard_with_workbook() {
        let app = loaded_app();
        assert!(!app.has_dialog());
        assert_eq!(app.focused_panel, FocusedPanel::Revenue);
    }

    #[test]
    fn test_failed_load_keeps_snapshot() {
        let mut app = loaded_app();
        let metrics = *app.session.metrics();

        app.open_load_prompt();
        app.load_input.set_content("/definitely/not/here.xlsx");
        app.submit_load();

        assert!(matches!(app.active_dialog, ActiveDialog::Error(ref info) if info.title == "Workbook Not Found"));
        assert_eq!(*app.session.metrics(), metrics);

        app.close_dialog();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_closing_error_without_workbook_reopens_prompt() {
        let mut app = App::new(Session::new(), Settings::default());
        app.submit_load();
        assert!(matches!(app.active_dialog, ActiveDialog::Error(_)));

        app.close_dialog();
        assert_eq!(app.active_dialog, ActiveDialog::LoadWorkbook);
    }

    #[test]
    fn test_month_cycling_follows_focus() {
        let mut app = loaded_app();
        let expenses = app.session.selected_month(TableKind::Expenses);

        app.cycle_month(true);
        assert_eq!(
            app.session.selected_month(TableKind::Revenue).map(|m| m.to_string()).as_deref(),
            Some("April 2025")
        );
        assert_eq!(app.session.selected_month(TableKind::Expenses), expenses);

        app.cycle_focus(false);
        assert_eq!(app.focused_panel, FocusedPanel::Missing);
        app.cycle_month(true);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_row_selection_is_bounded() {
        let mut app = loaded_app();
        app.focused_panel = FocusedPanel::Missing;
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_row(FocusedPanel::Missing), 0);

        app.move_up();
        app.move_to_bottom();
        assert_eq!(app.selected_row(FocusedPanel::Missing), 0);
    }
}
