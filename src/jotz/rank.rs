//! # Search & Rank
//!
//! Pure functions over decoded [`Record`]s: keyword filtering, date filtering,
//! ordering, and keyword highlighting for display.
//!
//! ## Matching Rule
//!
//! A record matches a [`Keywords`] set when **every** keyword is a substring of
//! the record's *normalized* body: lowercased, with each run of whitespace
//! collapsed to a single space. Line wrapping therefore never hides a match,
//! but there is no tokenization or stemming: `"pie"` matches `"pies"`.
//!
//! [`highlight`] follows the same rule on the original text (case-insensitive,
//! whitespace inside a keyword matches any whitespace run), so whatever made a
//! record match is what gets marked.
//!
//! ## Ordering
//!
//! [`filter`] and [`filter_by_date`] keep file order. [`filter`] also drops
//! repeated records (same body and date), keeping the first. [`sort`] is a separate
//! step: newest date first, then longest body first, then file order.

use crate::model::{collapse_whitespace, Keywords, Record};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;

/// Text inserted around highlighted keyword occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub open: String,
    pub close: String,
}

impl Marker {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::new("<mark>", "</mark>")
    }
}

/// Lowercases and collapses whitespace, the form keywords are matched against.
pub fn normalize(body: &str) -> String {
    collapse_whitespace(&body.to_lowercase())
}

pub fn matches(record: &Record, keywords: &Keywords) -> bool {
    let haystack = normalize(&record.body);
    keywords.tokens().iter().all(|kw| haystack.contains(kw.as_str()))
}

/// Distinct records containing all keywords, in their original order.
pub fn filter(records: &[Record], keywords: &Keywords) -> Vec<Record> {
    let mut seen = HashSet::new();
    let matched: Vec<Record> = records
        .iter()
        .filter(|record| matches(record, keywords) && seen.insert(*record))
        .cloned()
        .collect();
    tracing::debug!(
        keywords = ?keywords.tokens(),
        scanned = records.len(),
        matched = matched.len(),
        "filtered records"
    );
    matched
}

/// Newest first; within a day, longest body first. Ties keep input order.
pub fn sort(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.raw_length().cmp(&a.raw_length()))
    });
    records
}

/// Records written on `date`, in their original order. Undated records never match.
pub fn filter_by_date(records: &[Record], date: NaiveDate) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.is_dated() && record.date == date)
        .cloned()
        .collect()
}

/// Wraps every case-insensitive keyword occurrence in `marker`.
///
/// Occurrences of different keywords that overlap or touch are merged into a
/// single marked span, so the output never contains nested markers.
pub fn highlight(body: &str, keywords: &Keywords, marker: &Marker) -> String {
    let spans = highlight_spans(body, keywords);
    if spans.is_empty() {
        return body.to_string();
    }

    let mut out = String::with_capacity(body.len() + spans.len() * 16);
    let mut cursor = 0;
    for span in spans {
        out.push_str(&body[cursor..span.start]);
        out.push_str(&marker.open);
        out.push_str(&body[span.clone()]);
        out.push_str(&marker.close);
        cursor = span.end;
    }
    out.push_str(&body[cursor..]);
    out
}

/// Byte ranges of `body` that [`highlight`] marks: sorted, disjoint and
/// never touching.
pub fn highlight_spans(body: &str, keywords: &Keywords) -> Vec<Range<usize>> {
    merge_spans(keyword_spans(body, keywords))
}

/// Removes the markers inserted by [`highlight`], and nothing else.
pub fn strip_markers(annotated: &str, marker: &Marker) -> String {
    let mut plain = annotated.to_string();
    for token in [&marker.open, &marker.close] {
        if !token.is_empty() {
            plain = plain.replace(token.as_str(), "");
        }
    }
    plain
}

/// Drops markdown emphasis symbols (`#`, `*`) so they are not read aloud.
///
/// Only applied to text headed for speech synthesis, never to text that is
/// searched or stored.
pub fn clean_symbols(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '#' | '*')).collect()
}

fn keyword_pattern(keyword: &str) -> Option<Regex> {
    let parts: Vec<String> = keyword.split_whitespace().map(regex::escape).collect();
    if parts.is_empty() {
        return None;
    }
    match Regex::new(&format!("(?i){}", parts.join(r"\s+"))) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(keyword, error = %e, "cannot highlight keyword");
            None
        }
    }
}

fn keyword_spans(body: &str, keywords: &Keywords) -> Vec<Range<usize>> {
    keywords
        .tokens()
        .iter()
        .filter_map(|kw| keyword_pattern(kw))
        .flat_map(|re| {
            re.find_iter(body)
                .map(|m| m.range())
                .collect::<Vec<_>>()
        })
        .filter(|span| !span.is_empty())
        .collect()
}

fn merge_spans(mut spans: Vec<Range<usize>>) -> Vec<Range<usize>> {
    spans.sort_by_key(|span| (span.start, span.end));
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}
