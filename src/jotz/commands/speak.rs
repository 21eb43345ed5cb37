use crate::capabilities::SpeechSynthesizer;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::rank::{self, Marker};

/// Joins record bodies into one passage suitable for reading aloud.
pub fn records_text(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| r.body.trim())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Strips highlight markers and markdown symbols from displayed text.
pub fn prepare(text: &str, marker: &Marker) -> String {
    rank::clean_symbols(&rank::strip_markers(text, marker))
}

/// Sends displayed (possibly highlighted) text to a synthesizer.
pub fn run<T: SpeechSynthesizer + ?Sized>(
    synth: &T,
    text: &str,
    marker: &Marker,
) -> Result<CmdResult> {
    let plain = prepare(text, marker);
    let mut result = CmdResult::default();
    if plain.trim().is_empty() {
        result.add_message(CmdMessage::warning("Nothing to read aloud."));
        return Ok(result);
    }

    let audio = synth.synthesize(&plain)?;
    tracing::debug!(chars = plain.chars().count(), bytes = audio.len(), "synthesized speech");
    result.audio = Some(audio);
    Ok(result)
}
