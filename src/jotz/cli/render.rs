//! Terminal output for records, keyword lists, config values and messages.
//!
//! Rendering functions return strings so they can be tested without a
//! terminal; the `print_*` wrappers write them to stdout.

use chrono::NaiveDate;
use colored::Colorize;
use jotz::api::{CmdMessage, MessageLevel};
use jotz::codec;
use jotz::error::{JotzError, Result};
use jotz::model::{Keywords, Record};
use jotz::rank::{self, Marker};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const UNDATED: &str = "undated";

/// How search hits are set off in record bodies.
pub(super) enum Emphasis<'a> {
    /// ANSI bold yellow via `colored`.
    Styled,
    /// The configured text markers.
    Marked(&'a Marker),
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn date_label(record: &Record) -> String {
    if record.is_dated() {
        format!("[{}]", codec::format_date_tag(record.date))
    } else {
        format!("[{}]", UNDATED)
    }
}

/// Full records, one block each, with keyword hits emphasized.
pub(super) fn render_records(
    records: &[Record],
    highlight: Option<&Keywords>,
    emphasis: &Emphasis,
) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&date_label(record).dimmed().to_string());
        out.push('\n');
        let body = match highlight {
            Some(keywords) => emphasize(&record.body, keywords, emphasis),
            None => record.body.clone(),
        };
        out.push_str(&body);
        out.push('\n');
    }
    out
}

fn emphasize(body: &str, keywords: &Keywords, emphasis: &Emphasis) -> String {
    match emphasis {
        Emphasis::Marked(marker) => rank::highlight(body, keywords, marker),
        Emphasis::Styled => {
            let mut out = String::with_capacity(body.len());
            let mut cursor = 0;
            for span in rank::highlight_spans(body, keywords) {
                out.push_str(&body[cursor..span.start]);
                out.push_str(&body[span.clone()].bold().yellow().to_string());
                cursor = span.end;
            }
            out.push_str(&body[cursor..]);
            out
        }
    }
}

/// One line per record: date label and a single-line preview cut to the line width.
pub(super) fn render_previews(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        let label = date_label(record);
        let preview = jotz::model::collapse_whitespace(&record.body);
        let available = LINE_WIDTH.saturating_sub(label.width() + 2);
        out.push_str(&format!(
            "{}  {}\n",
            label.dimmed(),
            truncate_to_width(&preview, available)
        ));
    }
    out
}

#[derive(Serialize)]
struct RecordView<'a> {
    date: Option<NaiveDate>,
    body: &'a str,
}

pub(super) fn render_json(records: &[Record]) -> Result<String> {
    let views: Vec<RecordView> = records
        .iter()
        .map(|r| RecordView {
            date: r.is_dated().then_some(r.date),
            body: &r.body,
        })
        .collect();
    serde_json::to_string_pretty(&views).map_err(JotzError::Serialization)
}

pub(super) fn render_keywords(keywords: &[String]) -> String {
    keywords
        .iter()
        .enumerate()
        .map(|(i, k)| format!("{} {}\n", format!("{}.", i + 1).yellow(), k))
        .collect()
}

pub(super) fn render_config_values(values: &[(String, String)]) -> String {
    values
        .iter()
        .map(|(k, v)| format!("{} = {}\n", k, v))
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn marked_records_carry_config_markers() {
        plain();
        let marker = Marker::new("[", "]");
        let keywords = Keywords::parse("pie").unwrap();
        let records = vec![
            Record::new("apple pie", NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            Record::undated("old pie"),
        ];
        let out = render_records(&records, Some(&keywords), &Emphasis::Marked(&marker));
        assert_eq!(out, "[2024:01:02]\napple [pie]\n\n[undated]\nold [pie]\n");
    }

    #[test]
    fn styled_emphasis_leaves_text_intact_without_color() {
        plain();
        let keywords = Keywords::parse("pie").unwrap();
        let records = vec![Record::undated("pie and more pie")];
        let out = render_records(&records, Some(&keywords), &Emphasis::Styled);
        assert_eq!(out, "[undated]\npie and more pie\n");
    }

    #[test]
    fn styled_emphasis_ignores_control_characters_in_body() {
        let keywords = Keywords::parse("pie").unwrap();
        let body = "a\u{1}b pie \u{2}c";
        let out = emphasize(body, &keywords, &Emphasis::Styled);

        assert!(out.starts_with("a\u{1}b "), "{:?}", out);
        assert!(out.ends_with(" \u{2}c"), "{:?}", out);
        assert!(out.contains("pie"));
    }

    #[test]
    fn previews_are_single_line_and_width_bounded() {
        plain();
        let long = "宽".repeat(80);
        let records = vec![Record::undated(format!("first\nsecond {}", long))];
        let out = render_previews(&records);
        let line = out.lines().next().unwrap();
        assert!(line.starts_with("[undated]  first second "));
        assert!(line.ends_with('…'));
        assert!(line.width() <= LINE_WIDTH);
    }

    #[test]
    fn json_omits_sentinel_dates() {
        let records = vec![
            Record::new("a", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            Record::undated("b"),
        ];
        let value: serde_json::Value = serde_json::from_str(&render_json(&records).unwrap()).unwrap();
        assert_eq!(value[0]["date"], "2024-03-01");
        assert!(value[1]["date"].is_null());
    }
}
