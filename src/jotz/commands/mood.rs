use crate::capabilities::MoodClassifier;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Asks a classifier for the mood of two sentences.
pub fn run<C: MoodClassifier + ?Sized>(
    classifier: &C,
    first: &str,
    second: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if first.trim().is_empty() || second.trim().is_empty() {
        result.add_message(CmdMessage::warning("Both sentences are needed to read a mood."));
        return Ok(result);
    }

    let reading = classifier.classify(first.trim(), second.trim())?;
    result.add_message(CmdMessage::info(format!(
        "Mood: {} ({:+.2})",
        reading.label, reading.polarity
    )));
    result.mood = Some(reading);
    Ok(result)
}
