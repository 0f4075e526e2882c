//! Table views
//!
//! Revenue and expenses show the rows of their selected month; the missing
//! maintenance sheet is shown as is. Bill links render as an underlined
//! "Download Bill" label.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{format_currency, record_cells, sheet_row_cells, LinkStyle};
use crate::models::Money;
use crate::session::TableKind;
use crate::tui::app::{App, FocusedPanel};

/// Everything needed to draw one table
struct TableView<'a> {
    title: String,
    headers: &'a [String],
    rows: Vec<Vec<String>>,
    link_column: Option<usize>,
    panel: FocusedPanel,
    empty_message: &'static str,
}

pub fn render_revenue(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(workbook) = app.session.workbook() else {
        return render_unloaded(frame, &app.settings.sheets.revenue, area);
    };
    let records = app.session.filtered_revenue();
    let total: Money = records.iter().filter_map(|r| r.amount).sum();

    let view = TableView {
        title: title_with_month(app, &app.settings.sheets.revenue, TableKind::Revenue, total),
        headers: &workbook.revenue.headers,
        rows: records
            .iter()
            .map(|r| record_cells(&workbook.revenue, *r, LinkStyle::Label))
            .collect(),
        link_column: None,
        panel: FocusedPanel::Revenue,
        empty_message: "No revenue rows",
    };
    render_table(frame, app, view, area);
}

pub fn render_expenses(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(workbook) = app.session.workbook() else {
        return render_unloaded(frame, &app.settings.sheets.expenses, area);
    };
    let records = app.session.filtered_expenses();
    let total: Money = records.iter().filter_map(|r| r.amount).sum();

    let view = TableView {
        title: title_with_month(app, &app.settings.sheets.expenses, TableKind::Expenses, total),
        headers: &workbook.expenses.headers,
        rows: records
            .iter()
            .map(|r| record_cells(&workbook.expenses, *r, LinkStyle::Label))
            .collect(),
        link_column: workbook.expenses.link_column,
        panel: FocusedPanel::Expenses,
        empty_message: "No expense rows",
    };
    render_table(frame, app, view, area);
}

pub fn render_missing(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(workbook) = app.session.workbook() else {
        return render_unloaded(frame, "Missing Maintenance", area);
    };

    let view = TableView {
        title: " Missing Maintenance ".to_string(),
        headers: &workbook.missing.headers,
        rows: workbook
            .missing
            .rows
            .iter()
            .map(|row| sheet_row_cells(&workbook.missing, row))
            .collect(),
        link_column: None,
        panel: FocusedPanel::Missing,
        empty_message: "Nobody is missing",
    };
    render_table(frame, app, view, area);
}

fn title_with_month(app: &App, name: &str, kind: TableKind, total: Money) -> String {
    match app.session.selected_month(kind) {
        Some(month) => format!(
            " {} · {} · {} ",
            name,
            month,
            format_currency(total, &app.settings.currency_symbol)
        ),
        None => format!(" {} ", name),
    }
}

fn render_table(frame: &mut Frame, app: &App, view: TableView, area: Rect) {
    let focused = app.focused_panel == view.panel;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(view.title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if view.rows.is_empty() {
        let text = Paragraph::new(view.empty_message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(
        view.headers
            .iter()
            .map(|h| Cell::from(h.as_str()).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let link_style = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED);

    let rows: Vec<Row> = view
        .rows
        .into_iter()
        .map(|cells| {
            Row::new(cells.into_iter().enumerate().map(|(column, text)| {
                if view.link_column == Some(column) && !text.is_empty() {
                    Cell::from(text).style(link_style)
                } else {
                    Cell::from(text)
                }
            }))
        })
        .collect();

    let widths = vec![Constraint::Fill(1); view.headers.len().max(1)];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(if focused {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        })
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row(view.panel)));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_unloaded(frame: &mut Frame, name: &str, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new("Press o to open a workbook")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}
