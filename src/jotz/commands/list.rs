use crate::commands::helpers::load_records;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::rank;
use crate::store::JournalStore;

/// Every record, newest first.
pub fn run<S: JournalStore>(store: &S) -> Result<CmdResult> {
    let records = rank::sort(load_records(store)?);
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("The journal is empty."));
    }
    Ok(result.with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_newest_first_with_legacy_last() {
        let store = InMemoryStore::with_journal(
            "legacy\n\n{older}[2023:01:01]\n\n{newer}[2024:01:01]",
        );
        let result = run(&store).unwrap();
        let bodies: Vec<_> = result
            .listed_records
            .iter()
            .map(|r| r.body.as_str())
            .collect();
        assert_eq!(bodies, vec!["newer", "older", "legacy"]);
    }

    #[test]
    fn empty_journal_says_so() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
