//! Loader for the optional input-sequence table.

use std::collections::HashMap;
use std::path::Path;

/// Canonical display name -> ordered directional input tokens.
pub type SequenceTable = HashMap<String, Vec<String>>;

/// Load input sequences from a JSON document.
///
/// Sequence data is supplementary: a missing or unparsable file degrades to
/// an empty table with a warning and never aborts the run. Entries without a
/// sequence surface later as an advisory in the run report.
pub fn load_sequences(path: &Path) -> SequenceTable {
    if !path.exists() {
        log::warn!(
            "{} not found; stratagems will have empty sequences",
            path.display()
        );
        return SequenceTable::new();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to read {}: {e}", path.display());
            return SequenceTable::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Failed to parse {}: {e}", path.display());
            SequenceTable::new()
        }
    }
}
