use crate::error::{JotzError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date given to records whose tag is missing or unreadable, so they sort as oldest.
pub const SENTINEL_DATE: NaiveDate = NaiveDate::MIN;

/// One journaled entry.
///
/// Records are only ever created by appending; nothing in the crate edits a
/// body once it has been written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub body: String,
    pub date: NaiveDate,
}

impl Record {
    pub fn new(body: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            body: body.into(),
            date,
        }
    }

    /// A record with no usable date tag.
    pub fn undated(body: impl Into<String>) -> Self {
        Self::new(body, SENTINEL_DATE)
    }

    pub fn is_dated(&self) -> bool {
        self.date != SENTINEL_DATE
    }

    /// Character count of the body, the tie-breaker when ranking.
    pub fn raw_length(&self) -> usize {
        self.body.chars().count()
    }
}

/// A non-empty, ordered list of lowercase search tokens combined with AND.
///
/// Internal whitespace inside a token is collapsed to single spaces so that a
/// saved keyword such as `"apple   pie"` compares the same way bodies do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// Builds a keyword set from already-separated tokens, dropping blanks.
    pub fn new<I, T>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|t| collapse_whitespace(&t.as_ref().to_lowercase()))
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return Err(JotzError::Api("Please enter keywords to search.".into()));
        }
        Ok(Self(tokens))
    }

    /// Splits a free-form search phrase on whitespace, one token per word.
    pub fn parse(phrase: &str) -> Result<Self> {
        Self::new(phrase.split_whitespace())
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Trims and collapses every run of whitespace to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_length_counts_chars_not_bytes() {
        let record = Record::undated("héllo");
        assert_eq!(record.raw_length(), 5);
    }

    #[test]
    fn undated_records_carry_sentinel() {
        let record = Record::undated("x");
        assert_eq!(record.date, SENTINEL_DATE);
        assert!(!record.is_dated());
    }

    #[test]
    fn keywords_are_lowercased_and_ordered() {
        let kw = Keywords::parse("  Apple PIE  recipe ").unwrap();
        assert_eq!(kw.tokens(), &["apple", "pie", "recipe"]);
    }

    #[test]
    fn keywords_collapse_inner_whitespace() {
        let kw = Keywords::new(["Apple \n  Pie"]).unwrap();
        assert_eq!(kw.tokens(), &["apple pie"]);
    }

    #[test]
    fn empty_query_is_rejected() {
        assert!(Keywords::parse("   ").is_err());
        assert!(Keywords::new(Vec::<String>::new()).is_err());
    }
}
