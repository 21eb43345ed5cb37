//! # External Capabilities
//!
//! Interfaces for services jotz can hand text to but never implements itself:
//! mood classification and speech synthesis. A UI that has access to such a
//! service implements the trait and passes it in; the record and search core
//! does not depend on this module.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of labels a classifier may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Joyful,
    Positive,
    Neutral,
    Negative,
    Distressed,
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoodLabel::Joyful => "joyful",
            MoodLabel::Positive => "positive",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Negative => "negative",
            MoodLabel::Distressed => "distressed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodReading {
    pub label: MoodLabel,
    /// Sentiment polarity in `[-1.0, 1.0]`.
    pub polarity: f64,
}

/// Maps two sentences (typically "how was today" and "what happened") to a mood.
pub trait MoodClassifier {
    fn classify(&self, first: &str, second: &str) -> Result<MoodReading>;
}

/// Turns text into encoded audio.
pub trait SpeechSynthesizer {
    fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
}
