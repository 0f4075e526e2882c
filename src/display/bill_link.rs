//! Bill link rendering
//!
//! A non-empty "Link for Bill" cell becomes one hyperlink labeled
//! "Download Bill". How the link is expressed depends on the surface.

/// Text shown in place of a bill URL
pub const BILL_LINK_LABEL: &str = "Download Bill";

/// How a bill link is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// OSC 8 terminal hyperlink around the label
    Terminal,
    /// `<a>` anchor opening in a new tab
    Html,
    /// The label alone; the caller styles it
    Label,
    /// The URL itself
    Raw,
}

/// Render a bill link cell; empty or whitespace-only links render as ""
pub fn render_bill_link(link: Option<&str>, style: LinkStyle) -> String {
    let url = match link.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => return String::new(),
    };

    match style {
        LinkStyle::Terminal => terminal_hyperlink(url, BILL_LINK_LABEL),
        LinkStyle::Html => format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            escape_html(url),
            BILL_LINK_LABEL
        ),
        LinkStyle::Label => BILL_LINK_LABEL.to_string(),
        LinkStyle::Raw => url.to_string(),
    }
}

/// Wrap `label` in an OSC 8 hyperlink escape
pub fn terminal_hyperlink(url: &str, label: &str) -> String {
    // control characters would end the escape early
    let url: String = url.chars().filter(|c| !c.is_control()).collect();
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, label)
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
