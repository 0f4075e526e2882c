//! Error dialog widget
//!
//! Displays a failed load or command with recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::DashboardError;
use crate::tui::layout::centered_rect_fixed;

/// An error with details and suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub title: String,
    pub details: String,
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Create error info from a DashboardError
    pub fn from_error(error: &DashboardError) -> Self {
        let title = match error {
            DashboardError::FileNotFound { .. } => "Workbook Not Found",
            DashboardError::Workbook(_) => "Unreadable Workbook",
            DashboardError::SheetNotFound { .. } => "Missing Sheet",
            DashboardError::MissingColumn { .. } => "Missing Column",
            DashboardError::InvalidInput { .. } => "Invalid Amount",
            DashboardError::DateParse { .. } => "Invalid Date",
            DashboardError::InvalidMonth(_) | DashboardError::MonthNotFound { .. } => "Month",
            DashboardError::Config(_) => "Configuration Error",
            DashboardError::Io(_) => "I/O Error",
            DashboardError::Json(_) => "Data File Error",
            DashboardError::Export(_) => "Export Error",
        };

        let suggestions: Vec<&str> = match error {
            DashboardError::FileNotFound { .. } => vec![
                "Check the path; relative paths start from the current directory",
                "Press o to enter another path",
            ],
            DashboardError::Workbook(_) => vec![
                "Make sure the file is an .xlsx, .xls or .ods workbook",
                "Close the file in other programs and try again",
            ],
            DashboardError::SheetNotFound { .. } | DashboardError::MissingColumn { .. } => vec![
                "Sheet and column names must match exactly, including case",
                "Sheet names can be changed in the settings file",
            ],
            e if e.is_data_error() => vec!["Fix the cell in the workbook and load it again"],
            DashboardError::Config(_) | DashboardError::Json(_) => vec![
                "Check your settings file for syntax errors",
                "Run 'society init' to reset configuration",
            ],
            _ => vec![],
        };

        Self {
            title: title.to_string(),
            details: error.to_string(),
            suggestions: suggestions.into_iter().map(String::from).collect(),
        }
    }

    /// Create a simple error info
    pub fn simple(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            suggestions: vec![],
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    /// Create a new error dialog widget
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl<'a> Widget for ErrorDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Error: {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        let details = Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        details.render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let mut lines: Vec<Line> = vec![Line::from(Span::styled(
                "Suggestions:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];

            for suggestion in &self.error.suggestions {
                lines.push(Line::from(vec![
                    Span::raw("  - "),
                    Span::raw(suggestion.as_str()),
                ]));
            }

            let suggestions = Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            suggestions.render(chunks[1], buf);
        }

        let close_hint = Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        close_hint.render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 70 / 100).clamp(40, 80);
    let height = (parent.height * 50 / 100).clamp(10, 20);

    centered_rect_fixed(width, height, parent)
}
