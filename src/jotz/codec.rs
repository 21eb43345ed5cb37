//! # Record Codec
//!
//! Converts between journal entries and the text stored on disk.
//!
//! ## On-Disk Format
//!
//! Every save appends a blank-line separator followed by one framed record:
//!
//! ```text
//!
//! {Bought apples at the market.
//! They were on sale.}[2024:03:01]
//!
//! {Second entry}[2024:03:02]
//! ```
//!
//! The body is written verbatim between the braces, so it may span lines,
//! contain blank lines, and contain braces of its own. The date tag is the
//! calendar date of the save in the configured time zone.
//!
//! ## Decoding
//!
//! Journals written by older versions of the tool are still readable, so the
//! decoder is a small tagged-variant scanner ([`Framing`]). At each fragment
//! start it tries, in order:
//!
//! 1. **Framed**: `{` ... `}` followed (after optional whitespace) by a
//!    date-shaped tag. The body runs to the *first* such `}` + tag that closes
//!    a record: one followed by the end of the text, by the next `{`, or by
//!    text with no other `}` + tag before the next blank line. This lets
//!    bodies contain `}` and blank lines while neighbouring records on one
//!    line stay separate. Leftover text after a tag decodes as a paragraph.
//! 2. **Braced**: `{` ... `}` with no `}` + tag anywhere later; the body ends
//!    at the first `}` and may be followed by a tag on the same line.
//! 3. **Paragraph**: plain text up to the next blank line, with an optional
//!    `[YYYY:MM:DD]` tag at its end.
//!
//! Decoding is total. A fragment with a missing or impossible date still
//! produces a [`Record`], dated [`SENTINEL_DATE`](crate::model::SENTINEL_DATE).
//! Fragments whose body is blank are skipped.

use crate::model::Record;
use chrono::{DateTime, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Written before every appended record.
pub const RECORD_SEPARATOR: &str = "\n\n";

/// `strftime` format of the date inside a tag.
pub const DATE_TAG_FORMAT: &str = "%Y:%m:%d";

/// Older journals occasionally used dashes or slashes between the date parts.
const LEGACY_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// A tag right after a closing brace, possibly on the next line.
static BRACE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[ \t\r\n]*\[\s*(\d{4}[\-:/]\d{1,2}[\-:/]\d{1,2})\s*\]")
        .expect("brace tag pattern is valid")
});

/// A tag right after a closing brace on the same line.
static INLINE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[ \t]*\[\s*(\d{4}[\-:/]\d{1,2}[\-:/]\d{1,2})\s*\]")
        .expect("inline tag pattern is valid")
});

/// A tag closing a legacy paragraph.
static TRAILING_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\s*(\d{4}[\-:/]\d{1,2}[\-:/]\d{1,2})\s*\]\s*\z")
        .expect("trailing tag pattern is valid")
});

static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("blank line pattern is valid"));

/// Which convention a fragment was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    Framed,
    Braced,
    Paragraph,
}

/// A decoded record together with where it came from in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub framing: Framing,
    pub record: Record,
    /// Byte range of the whole fragment (braces and tag included).
    pub span: Range<usize>,
}

/// Formats the text inside a date tag, e.g. `2024:03:01`.
pub fn format_date_tag(date: NaiveDate) -> String {
    date.format(DATE_TAG_FORMAT).to_string()
}

/// Parses the text inside a date tag. Returns `None` for impossible dates.
pub fn parse_date_tag(tag: &str) -> Option<NaiveDate> {
    let tag = tag.trim();
    std::iter::once(DATE_TAG_FORMAT)
        .chain(LEGACY_DATE_FORMATS.iter().copied())
        .find_map(|fmt| NaiveDate::parse_from_str(tag, fmt).ok())
}

/// Encodes an entry saved at `now`, using the calendar date of `now`'s zone.
///
/// Returns `None` when the body is empty or whitespace-only: nothing should be
/// written for it.
pub fn encode<Tz: TimeZone>(body: &str, now: &DateTime<Tz>) -> Option<String> {
    encode_dated(body, now.date_naive())
}

/// Encodes an entry for an explicit calendar date.
pub fn encode_dated(body: &str, date: NaiveDate) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    Some(format!("{{{}}}[{}]", body, format_date_tag(date)))
}

/// Decodes the full journal text into records, in file order.
pub fn decode(text: &str) -> Vec<Record> {
    decode_fragments(text)
        .into_iter()
        .map(|fragment| fragment.record)
        .collect()
}

/// Decodes the full journal text, keeping framing and source spans.
pub fn decode_fragments(text: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let start = pos + (rest.len() - rest.trim_start().len());
        if start >= text.len() {
            break;
        }

        let scan = if text[start..].starts_with('{') {
            scan_framed(text, start)
                .or_else(|| scan_braced(text, start))
                .unwrap_or_else(|| scan_paragraph(text, start))
        } else {
            scan_paragraph(text, start)
        };

        if let Some(fragment) = scan.fragment {
            fragments.push(fragment);
        }
        pos = scan.end;
    }

    tracing::debug!(count = fragments.len(), bytes = text.len(), "decoded journal");
    fragments
}

struct Scan {
    fragment: Option<Fragment>,
    end: usize,
}

fn scan_framed(text: &str, start: usize) -> Option<Scan> {
    let body_start = start + 1;
    for (offset, _) in text[body_start..].match_indices('}') {
        let close = body_start + offset;
        let after = close + 1;
        let Some(caps) = BRACE_TAG.captures(&text[after..]) else {
            continue;
        };
        let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let tag_end = after + whole.end();
        if !closes_record(&text[tag_end..]) {
            continue;
        }

        let body = &text[body_start..close];
        let date = date_or_sentinel(tag.as_str());
        return Some(Scan {
            fragment: build(Framing::Framed, body, date, start..tag_end),
            end: tag_end,
        });
    }
    None
}

/// Whether a `}` + tag ends its record, given the text after the tag.
fn closes_record(rest: &str) -> bool {
    let next = rest.trim_start();
    if next.is_empty() || next.starts_with('{') {
        return true;
    }
    let paragraph = match BLANK_LINE.find(rest) {
        Some(m) => &rest[..m.start()],
        None => rest,
    };
    !has_brace_tag(paragraph)
}

fn has_brace_tag(text: &str) -> bool {
    text.match_indices('}')
        .any(|(offset, _)| BRACE_TAG.is_match(&text[offset + 1..]))
}

fn scan_braced(text: &str, start: usize) -> Option<Scan> {
    let body_start = start + 1;
    let close = body_start + text[body_start..].find('}')?;
    let body = &text[body_start..close];
    let after = close + 1;

    let (date, end) = match INLINE_TAG.captures(&text[after..]) {
        Some(caps) => match (caps.get(0), caps.get(1)) {
            (Some(whole), Some(tag)) => (date_or_sentinel(tag.as_str()), after + whole.end()),
            _ => (None, after),
        },
        None => (None, after),
    };

    Some(Scan {
        fragment: build(Framing::Braced, body, date, start..end),
        end,
    })
}

fn scan_paragraph(text: &str, start: usize) -> Scan {
    let (para_end, end) = match BLANK_LINE.find(&text[start..]) {
        Some(m) => (start + m.start(), start + m.end()),
        None => (text.len(), text.len()),
    };
    let paragraph = text[start..para_end].trim_end();
    let span = start..start + paragraph.len();

    let (body, date) = match TRAILING_TAG.captures(paragraph) {
        Some(caps) => match (caps.get(0), caps.get(1)) {
            (Some(whole), Some(tag)) => (
                paragraph[..whole.start()].trim_end(),
                date_or_sentinel(tag.as_str()),
            ),
            _ => (paragraph, None),
        },
        None => (paragraph, None),
    };

    Scan {
        fragment: build(Framing::Paragraph, body, date, span),
        end,
    }
}

fn date_or_sentinel(tag: &str) -> Option<NaiveDate> {
    let date = parse_date_tag(tag);
    if date.is_none() {
        tracing::warn!(tag, "unreadable date tag, treating record as undated");
    }
    date
}

fn build(
    framing: Framing,
    body: &str,
    date: Option<NaiveDate>,
    span: Range<usize>,
) -> Option<Fragment> {
    if body.trim().is_empty() {
        return None;
    }
    let record = match date {
        Some(date) => Record::new(body, date),
        None => Record::undated(body),
    };
    Some(Fragment {
        framing,
        record,
        span,
    })
}
