//! Scanner for the extracted icon archive.
//!
//! Walks the archive root, turning each category folder into an
//! [`AssetGroup`] with a sorted list of SVG stems. Traversal is sorted so the
//! pipeline sees an identical asset order on every run.

use std::path::{Path, PathBuf};

use crate::error::PipelineError;

/// Folders in the icon archive that do not contain real stratagems.
const DENY_FOLDERS: &[&str] = &["_Experimental Stratagems", ".git", "node_modules"];

/// A named folder of raw vector assets corresponding to one in-game source
/// category.
#[derive(Debug, Clone)]
pub struct AssetGroup {
    /// Folder name, used as the department lookup key.
    pub name: String,
    /// Directory holding this group's SVG files.
    pub dir: PathBuf,
    /// Asset stems (file names minus the `.svg` extension), sorted.
    pub assets: Vec<String>,
}

impl AssetGroup {
    /// Path of the vector file for one of this group's asset stems.
    pub fn asset_path(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.svg"))
    }
}

/// Scan the extracted archive root for asset groups.
///
/// Deny-listed and hidden folders are skipped. Both the group list and each
/// group's assets come back sorted.
pub fn scan_asset_groups(root: &Path) -> Result<Vec<AssetGroup>, PipelineError> {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(root)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();

    let mut groups = Vec::new();
    for dir in dirs {
        let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || DENY_FOLDERS.contains(&name) {
            continue;
        }

        let assets = collect_svg_stems(&dir)?;
        if assets.is_empty() {
            log::debug!("Skipping {name}: no SVG files");
            continue;
        }

        groups.push(AssetGroup {
            name: name.to_string(),
            dir,
            assets,
        });
    }

    Ok(groups)
}

/// Collect the stems of all `.svg` files directly inside a directory, sorted.
fn collect_svg_stems(dir: &Path) -> Result<Vec<String>, PipelineError> {
    let mut stems: Vec<String> = std::fs::read_dir(dir)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.eq_ignore_ascii_case("svg"))
                    .unwrap_or(false)
        })
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect();
    stems.sort();
    Ok(stems)
}
