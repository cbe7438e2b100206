//! Server-rendered HTML views.
//!
//! Every page is the shared [`layout`] around a body fragment. Any value
//! that came from a user or the database goes through [`escape`] before it
//! is interpolated.

pub mod errors;
pub mod forms;
pub mod pages;

use std::fmt::Write as _;

use axum::response::Html;
use chrono::{DateTime, Utc};

/// Severity of a flash banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// The submission was stored.
    Success,
    /// The submission was rejected or could not be stored.
    Error,
}

/// A one-shot acknowledgment rendered above the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    /// Banner severity.
    pub kind: FlashKind,
    /// Banner lines.
    pub messages: Vec<String>,
}

impl Flash {
    /// A success banner.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            messages: vec![message.into()],
        }
    }

    /// An error banner with one line per problem.
    #[must_use]
    pub fn error(messages: Vec<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            messages,
        }
    }

    fn render(&self) -> String {
        let class = match self.kind {
            FlashKind::Success => "flash flash-success",
            FlashKind::Error => "flash flash-error",
        };
        let mut out = format!("<div class=\"{class}\" role=\"alert\"><ul>");
        for message in &self.messages {
            let _ = write!(out, "<li>{}</li>", escape(message));
        }
        out.push_str("</ul></div>");
        out
    }
}

/// Escapes text for use in element content and quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display format for a show start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Monday May, 21, 2035 at 9:30PM`
    Full,
    /// `Mon 05, 21, 2035 9:30PM`
    Medium,
}

/// Formats a start time for display.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>, style: DateStyle) -> String {
    let pattern = match style {
        DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

/// Wraps a body fragment in the site chrome.
#[must_use]
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    let flash = flash.map(Flash::render).unwrap_or_default();
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title} | Fyyur</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<body>
    <nav>
        <a href="/">Fyyur</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
    </nav>
    <main>
        {flash}
        {body}
    </main>
</body>
</html>"#,
        title = escape(title),
    ))
}

/// Renders an optional image, or nothing.
fn image(link: Option<&str>, alt: &str) -> String {
    link.map(|src| {
        format!(
            "<img src=\"{}\" alt=\"{}\" width=\"120\">",
            escape(src),
            escape(alt)
        )
    })
    .unwrap_or_default()
}

/// Renders an optional external link, or nothing.
fn external_link(link: Option<&str>, label: &str) -> String {
    link.map(|href| {
        format!(
            "<p><a href=\"{}\" rel=\"noopener\">{}</a></p>",
            escape(href),
            escape(label)
        )
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape(r#"<a href="x">R&B's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;B&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn datetime_styles() {
        let Some(when) = Utc.with_ymd_and_hms(2035, 5, 21, 21, 30, 0).single() else {
            return;
        };
        assert_eq!(
            format_datetime(when, DateStyle::Full),
            "Monday May, 21, 2035 at 9:30PM"
        );
        assert_eq!(
            format_datetime(when, DateStyle::Medium),
            "Mon 05, 21, 2035 9:30PM"
        );
    }

    #[test]
    fn layout_escapes_title_and_renders_flash() {
        let flash = Flash::error(vec!["<bad>".to_string()]);
        let Html(page) = layout("A & B", Some(&flash), "<p>body</p>");
        assert!(page.contains("<title>A &amp; B | Fyyur</title>"));
        assert!(page.contains("flash-error"));
        assert!(page.contains("<li>&lt;bad&gt;</li>"));
        assert!(page.contains("<p>body</p>"));
    }
}
