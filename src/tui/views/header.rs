//! Society heading

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the society name, subtitle and the loaded file
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![Span::styled(
        app.settings.society_name.as_str(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];

    if !app.settings.subtitle.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", app.settings.subtitle),
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0xFF, 0x57, 0x33))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let source = app
        .session
        .workbook()
        .and_then(|wb| wb.source.as_ref())
        .map(|p| format!(" {} ", p.display()))
        .unwrap_or_else(|| " no workbook loaded ".to_string());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_bottom(Line::from(source).right_aligned());

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
