//! Manifest serialization.
//!
//! The manifest is a pretty-printed JSON array, except that each `sequence`
//! array of single-character tokens is collapsed onto one line so the
//! document stays scannable by eye.

use std::path::Path;

use crate::entry::Catalog;
use crate::error::PipelineError;

/// Render the catalog as manifest JSON.
///
/// The catalog must already be sorted; rendering preserves entry order, so
/// identical catalogs always produce byte-identical output.
pub fn render_manifest(catalog: &Catalog) -> Result<String, PipelineError> {
    let pretty = serde_json::to_string_pretty(catalog.entries())?;
    Ok(inline_sequences(&pretty))
}

/// Render and write the manifest to disk.
pub fn write_manifest(catalog: &Catalog, path: &Path) -> Result<(), PipelineError> {
    std::fs::write(path, render_manifest(catalog)?)?;
    Ok(())
}

/// Collapse multi-line `"sequence": [...]` arrays into a single line,
/// leaving the rest of the pretty-printed document untouched.
fn inline_sequences(pretty: &str) -> String {
    let mut out = String::with_capacity(pretty.len());
    let mut lines = pretty.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        // Empty arrays already serialize inline as `"sequence": [],`.
        if trimmed.starts_with("\"sequence\": [") && !trimmed.contains(']') {
            out.push_str(line.trim_end());
            let mut items: Vec<String> = Vec::new();
            for inner in lines.by_ref() {
                let token = inner.trim();
                if let Some(closer) = token.strip_prefix(']') {
                    out.push_str(&items.join(", "));
                    out.push(']');
                    out.push_str(closer);
                    break;
                }
                items.push(token.trim_end_matches(',').to_string());
            }
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }

    out
}
