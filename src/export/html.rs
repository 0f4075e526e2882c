//! HTML export
//!
//! Generates a self-contained page with embedded CSS: the society heading,
//! the six metric tiles and the three tables. Bill links become anchors
//! that open in a new tab.

use std::io::Write;

use super::document::{DashboardExport, TableExport};
use crate::display::{escape_html, format_currency, render_bill_link, LinkStyle};
use crate::error::DashboardResult;

/// Write the export as an HTML page
pub fn export_html<W: Write>(export: &DashboardExport, writer: &mut W) -> DashboardResult<()> {
    writer.write_all(generate(export).as_bytes())?;
    Ok(())
}

/// Generate the HTML page content
pub fn generate(export: &DashboardExport) -> String {
    let title = escape_html(&export.society_name);

    let subtitle = if export.subtitle.is_empty() {
        String::new()
    } else {
        format!(
            "\n        <div class=\"subtitle\">{}</div>",
            escape_html(&export.subtitle)
        )
    };

    let tiles: String = export
        .metrics
        .tiles()
        .iter()
        .map(|(label, amount)| {
            let class = if amount.is_negative() { "metric negative" } else { "metric" };
            format!(
                "        <div class=\"{}\"><span class=\"label\">{}</span><span class=\"value\">{}</span></div>\n",
                class,
                escape_html(label),
                escape_html(&format_currency(*amount, &export.currency_symbol))
            )
        })
        .collect();

    let tables: String = export.tables().iter().map(|t| table_section(t)).collect();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <header>
        <h1>{title}</h1>{subtitle}
    </header>
    <section class="metrics">
{tiles}    </section>
{tables}    <footer>Generated {exported_at} by society-dashboard {version}</footer>
</body>
</html>
"##,
        title = title,
        css = CSS,
        subtitle = subtitle,
        tiles = tiles,
        tables = tables,
        exported_at = export.exported_at.format("%Y-%m-%d %H:%M UTC"),
        version = escape_html(&export.app_version),
    )
}

fn table_section(table: &TableExport) -> String {
    let mut html = String::new();
    html.push_str("    <section>\n");
    html.push_str(&format!("        <h2>{}</h2>\n", escape_html(&table.heading())));
    html.push_str("        <table>\n            <thead><tr>");
    for header in &table.headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead>\n            <tbody>\n");

    for row in &table.rows {
        html.push_str("                <tr>");
        for (column, value) in row.iter().enumerate() {
            let cell = if table.link_column == Some(column) {
                render_bill_link(Some(value), LinkStyle::Html)
            } else {
                escape_html(value)
            };
            html.push_str(&format!("<td>{}</td>", cell));
        }
        html.push_str("</tr>\n");
    }

    if table.rows.is_empty() {
        html.push_str(&format!(
            "                <tr><td class=\"empty\" colspan=\"{}\">No rows</td></tr>\n",
            table.headers.len().max(1)
        ));
    }

    html.push_str("            </tbody>\n        </table>\n    </section>\n");
    html
}

const CSS: &str = r#"
body {
    font-family: 'Roboto', system-ui, sans-serif;
    margin: 0 auto;
    max-width: 1200px;
    padding: 1rem 2rem;
    color: #111827;
}
header { text-align: center; }
h1 { color: #4CAF50; font-size: 2.5em; margin-bottom: 0.25em; }
.subtitle {
    display: inline-block;
    background-color: #FF5733;
    color: #FFFFFF;
    font-size: 1.4em;
    font-weight: bold;
    padding: 10px 20px;
    border-radius: 10px;
}
.metrics { display: flex; gap: 10px; margin: 20px 0; }
.metric {
    flex: 1;
    background-color: #4CAF50;
    color: white;
    padding: 15px;
    border-radius: 10px;
    text-align: center;
    font-weight: bold;
    box-shadow: 0 4px 8px 0 rgba(0,0,0,0.2);
}
.metric.negative { background-color: #dc2626; }
.metric .label { display: block; font-size: 0.9em; }
.metric .value { display: block; font-size: 1.3em; margin-top: 6px; }
table { border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }
th, td { border: 1px solid #e5e7eb; padding: 6px 10px; text-align: left; }
th { background-color: #f3f4f6; }
td.empty { color: #6b7280; text-align: center; }
footer { color: #6b7280; font-size: 0.8em; text-align: center; margin-top: 2rem; }
"#;
