//! Metric tiles
//!
//! Six bordered tiles, one per financial metric. Negative amounts are red.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::format_currency;
use crate::tui::app::App;
use crate::tui::layout::tile_areas;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let metrics = app.session.metrics();
    let symbol = app.settings.currency_symbol.as_str();

    for ((label, amount), tile) in metrics.tiles().into_iter().zip(tile_areas(area)) {
        let color = if amount.is_negative() {
            Color::Red
        } else {
            Color::Green
        };

        let block = Block::default()
            .title(label)
            .title_style(Style::default().fg(Color::White))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        let value = Paragraph::new(format_currency(amount, symbol))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        frame.render_widget(value, tile);
    }
}
