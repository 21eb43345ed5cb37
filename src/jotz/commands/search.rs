use crate::commands::helpers::{load_records, plural};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Keywords;
use crate::rank;
use crate::store::JournalStore;

/// Records containing every keyword, newest and longest first.
pub fn run<S: JournalStore>(store: &S, keywords: &Keywords) -> Result<CmdResult> {
    let records = load_records(store)?;
    let matched = rank::sort(rank::filter(&records, keywords));

    let mut result = CmdResult::default();
    if matched.is_empty() {
        result.add_message(CmdMessage::warning("No matching records found."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} matching {}.",
            plural(matched.len(), "record"),
            keywords.tokens().join(" + ")
        )));
    }
    Ok(result
        .with_listed_records(matched)
        .with_highlight(keywords.clone()))
}

/// Search by a single saved keyword, as if it were typed alone.
pub fn run_saved<S: JournalStore>(store: &S, keyword: &str) -> Result<CmdResult> {
    let keywords = Keywords::new([keyword])?;
    run(store, &keywords)
}
