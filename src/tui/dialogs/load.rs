//! Load workbook dialog
//!
//! Asks for the path of a workbook. The path is only kept for this session.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(70, 9, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Open Workbook ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Length(1), // Input
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let intro = format!(
        "Welcome to the {}. Enter the path of the workbook to load.",
        app.settings.society_name
    );
    frame.render_widget(
        Paragraph::new(intro)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    frame.render_widget(app.load_input.clone(), chunks[1]);

    let hint = if app.session.is_loaded() {
        "Enter: Load  Esc: Cancel"
    } else {
        "Enter: Load  Esc: Quit"
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}
