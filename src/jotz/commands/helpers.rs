use crate::codec;
use crate::error::Result;
use crate::model::Record;
use crate::store::JournalStore;

/// Reads and decodes the whole journal.
pub fn load_records<S: JournalStore>(store: &S) -> Result<Vec<Record>> {
    let text = store.read_journal()?;
    Ok(codec::decode(&text))
}

pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
