use crate::commands::helpers::{load_records, plural};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::rank;
use crate::store::JournalStore;
use chrono::NaiveDate;

/// Records written on `date`, in the order they were written.
pub fn run<S: JournalStore>(store: &S, date: NaiveDate) -> Result<CmdResult> {
    let records = load_records(store)?;
    let on_day = rank::filter_by_date(&records, date);

    let mut result = CmdResult::default();
    if on_day.is_empty() {
        result.add_message(CmdMessage::warning(format!("No records for {}.", date)));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} on {}.",
            plural(on_day.len(), "record"),
            date
        )));
    }
    Ok(result.with_listed_records(on_day))
}
