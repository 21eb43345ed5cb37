//! Saved ("favorite") keywords.
//!
//! The keyword file holds one keyword per line and is rewritten in full on
//! every save. Blank lines are ignored when loading.

use crate::commands::helpers::plural;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::JournalStore;

/// Loads the saved keyword list, in file order.
pub fn load<S: JournalStore>(store: &S) -> Result<Vec<String>> {
    Ok(store
        .read_keywords()?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Replaces the saved keyword list.
///
/// Entries are trimmed and blank ones dropped. If nothing is left the list is
/// cleared.
pub fn save<S: JournalStore, K: AsRef<str>>(store: &mut S, keywords: &[K]) -> Result<CmdResult> {
    let cleaned: Vec<String> = keywords
        .iter()
        .flat_map(|k| k.as_ref().lines())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    store.write_keywords(&cleaned.join("\n"))?;

    let mut result = CmdResult::default();
    if cleaned.is_empty() {
        result.add_message(CmdMessage::success("Cleared saved keywords."));
        return Ok(result);
    }
    result.add_message(CmdMessage::success(format!(
        "Saved {}.",
        plural(cleaned.len(), "keyword")
    )));
    Ok(result.with_keywords(cleaned))
}

/// Shows the saved list.
pub fn show<S: JournalStore>(store: &S) -> Result<CmdResult> {
    let keywords = load(store)?;
    let mut result = CmdResult::default();
    if keywords.is_empty() {
        result.add_message(CmdMessage::info("No saved keywords."));
    }
    Ok(result.with_keywords(keywords))
}

/// Resolves a saved keyword by 1-based position or by exact (case-insensitive) name.
pub fn resolve<S: JournalStore>(store: &S, selector: &str) -> Result<Option<String>> {
    let keywords = load(store)?;
    if let Ok(n) = selector.trim().parse::<usize>() {
        if n >= 1 {
            if let Some(keyword) = keywords.get(n - 1) {
                return Ok(Some(keyword.clone()));
            }
        }
    }
    Ok(keywords
        .into_iter()
        .find(|k| k.eq_ignore_ascii_case(selector.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn save_then_load_round_trips_cleaned_list() {
        let mut store = InMemoryStore::new();
        let result = save(&mut store, &["  tea ", "", "apple pie", "   "]).unwrap();

        assert_eq!(result.keywords, vec!["tea", "apple pie"]);
        assert_eq!(store.read_keywords().unwrap(), "tea\napple pie");
        assert_eq!(load(&store).unwrap(), vec!["tea", "apple pie"]);
    }

    #[test]
    fn save_overwrites_previous_list() {
        let mut store = InMemoryStore::new();
        save(&mut store, &["one", "two"]).unwrap();
        save(&mut store, &["three"]).unwrap();
        assert_eq!(load(&store).unwrap(), vec!["three"]);
    }

    #[test]
    fn multi_line_input_is_split_per_line() {
        let mut store = InMemoryStore::new();
        save(&mut store, &["tea\ncoffee\n\n"]).unwrap();
        assert_eq!(load(&store).unwrap(), vec!["tea", "coffee"]);
    }

    #[test]
    fn all_blank_list_clears_saved_keywords() {
        let mut store = InMemoryStore::new();
        save(&mut store, &["gym"]).unwrap();
        let result = save(&mut store, &[" ", ""]).unwrap();

        assert_eq!(result.messages[0].content, "Cleared saved keywords.");
        assert_eq!(store.read_keywords().unwrap(), "");
        assert!(load(&store).unwrap().is_empty());

        let empty: [&str; 0] = [];
        save(&mut store, &["gym"]).unwrap();
        save(&mut store, &empty).unwrap();
        assert!(load(&store).unwrap().is_empty());
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = InMemoryStore::new();
        assert!(load(&store).unwrap().is_empty());
        assert_eq!(show(&store).unwrap().messages[0].content, "No saved keywords.");
    }

    #[test]
    fn resolve_by_position_or_name() {
        let mut store = InMemoryStore::new();
        save(&mut store, &["tea", "Apple Pie"]).unwrap();

        assert_eq!(resolve(&store, "2").unwrap().as_deref(), Some("Apple Pie"));
        assert_eq!(resolve(&store, "apple pie").unwrap().as_deref(), Some("Apple Pie"));
        assert_eq!(resolve(&store, "3").unwrap(), None);
        assert_eq!(resolve(&store, "coffee").unwrap(), None);
    }
}
