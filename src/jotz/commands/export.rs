use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JotzError, Result};
use crate::store::JournalStore;
use std::fs;
use std::path::Path;

/// Copies the raw journal to `dest`, or hands it back for printing when `dest` is `None`.
pub fn run<S: JournalStore>(store: &S, dest: Option<&Path>) -> Result<CmdResult> {
    let content = store.read_journal()?;
    let mut result = CmdResult::default();

    if content.trim().is_empty() {
        result.add_message(CmdMessage::error(
            "Nothing to export. Save some text first.",
        ));
        return Ok(result);
    }

    match dest {
        Some(path) => {
            fs::write(path, &content).map_err(JotzError::Io)?;
            result.add_message(CmdMessage::success(format!(
                "Exported journal to {}",
                path.display()
            )));
            result.export_path = Some(path.to_path_buf());
        }
        None => result.exported = Some(content),
    }
    Ok(result)
}
