use crate::codec;
use crate::commands::helpers::{load_records, plural};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::JournalStore;
use chrono::{DateTime, FixedOffset};

/// Appends `body` as a new record dated by `now`.
///
/// A blank body writes nothing; the result then carries a warning and no
/// affected records.
pub fn run<S: JournalStore>(
    store: &mut S,
    body: &str,
    now: &DateTime<FixedOffset>,
) -> Result<CmdResult> {
    let Some(fragment) = codec::encode(body, now) else {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::warning(if body.is_empty() {
            "Nothing to save: the entry is empty."
        } else {
            "Nothing to save: the entry only contains whitespace."
        }));
        return Ok(res);
    };

    store.append_journal(&fragment)?;

    // Re-read from the store instead of assuming what was written.
    let total = load_records(store)?.len();

    let record = Record::new(body, now.date_naive());
    let mut result = CmdResult::default().with_affected_records(vec![record]);
    result.add_message(CmdMessage::success(format!(
        "Saved entry for {} ({} in journal).",
        now.date_naive(),
        plural(total, "record")
    )));
    Ok(result)
}
