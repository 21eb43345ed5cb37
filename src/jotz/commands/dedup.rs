use crate::codec::{self, RECORD_SEPARATOR};
use crate::commands::helpers::plural;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::JournalStore;
use std::collections::HashSet;

/// Removes repeated records (same body and date) from the journal.
///
/// This is the one operation that rewrites the journal. The first occurrence
/// of each record is kept, in place, with its original text.
pub fn run<S: JournalStore>(store: &mut S) -> Result<CmdResult> {
    let text = store.read_journal()?;
    let fragments = codec::decode_fragments(&text);
    let total = fragments.len();

    let mut seen: HashSet<&Record> = HashSet::new();
    let kept: Vec<&str> = fragments
        .iter()
        .filter(|fragment| seen.insert(&fragment.record))
        .map(|fragment| &text[fragment.span.clone()])
        .collect();

    let removed = total - kept.len();
    let mut result = CmdResult::default();
    if removed == 0 {
        result.add_message(CmdMessage::info("No duplicate records found."));
        return Ok(result);
    }

    let rebuilt: String = kept
        .iter()
        .flat_map(|raw| [RECORD_SEPARATOR, *raw])
        .collect();
    store.replace_journal(&rebuilt)?;

    tracing::info!(removed, kept = kept.len(), "removed duplicate records");
    result.add_message(CmdMessage::success(format!(
        "Removed {}, {} left.",
        plural(removed, "duplicate record"),
        kept.len()
    )));
    Ok(result)
}
