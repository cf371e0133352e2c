//! Pipeline orchestrator.
//!
//! Drives the full run: scan asset groups, resolve each asset's name and
//! department, rasterize through the injected [`Rasterizer`], link shared
//! icons, then sort and write the manifest. A single asset's conversion
//! failure never aborts the batch; failures are collected into the
//! [`GenerateReport`] and summarized by the caller.

use std::collections::HashMap;
use std::path::Path;

use crate::entry::{Catalog, NameOrdering, StratagemEntry};
use crate::error::PipelineError;
use crate::link::link_shared;
use crate::manifest::write_manifest;
use crate::render::Rasterizer;
use crate::resolve::resolve_asset;
use crate::scan::scan_asset_groups;
use crate::sequence::SequenceTable;
use crate::slug::slug;
use crate::tables::ResolverTables;

/// Options controlling a pipeline run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Output size for rasterized icons, in pixels.
    pub icon_size: u32,
    /// Comparison used when sorting the catalog.
    pub ordering: NameOrdering,
}

/// Progress events emitted while the pipeline runs.
#[derive(Debug, Clone)]
pub enum GenerateProgress {
    /// Starting a category folder.
    ScanningGroup { name: String, asset_count: usize },
    /// Converting one asset.
    RenderingAsset { name: String },
    /// All groups processed.
    Done,
}

/// Statistics and per-item detail from a pipeline run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub groups_scanned: usize,
    pub assets_seen: usize,
    pub icons_rendered: usize,
    /// Entries written to the manifest (rendered assets plus linked aliases,
    /// minus duplicates).
    pub entries_written: usize,
    /// Raw asset identifiers whose conversion failed.
    pub render_failures: Vec<String>,
    /// Shared-icon aliases whose source entry was never produced.
    pub unresolved_aliases: Vec<String>,
    /// Entries that ended up with an empty input sequence, in catalog order.
    pub missing_sequences: Vec<String>,
}

impl GenerateReport {
    /// Whether the run completed without any per-item failures.
    pub fn is_clean(&self) -> bool {
        self.render_failures.is_empty() && self.unresolved_aliases.is_empty()
    }
}

/// Run the full pipeline over an extracted icon archive.
///
/// `svg_root` is the extracted archive root containing category folders.
/// Icons land in `icons_dir` (created if needed) and the manifest at
/// `manifest_path`. Returns the run report; only scan or write failures are
/// fatal.
pub fn generate(
    svg_root: &Path,
    icons_dir: &Path,
    manifest_path: &Path,
    tables: &ResolverTables,
    sequences: &SequenceTable,
    rasterizer: &dyn Rasterizer,
    options: &GenerateOptions,
    progress: &dyn Fn(GenerateProgress),
) -> Result<GenerateReport, PipelineError> {
    let mut report = GenerateReport::default();
    let mut catalog = Catalog::new();
    let mut seen_slugs: HashMap<String, String> = HashMap::new();

    std::fs::create_dir_all(icons_dir)?;

    let groups = scan_asset_groups(svg_root)?;
    report.groups_scanned = groups.len();

    for group in &groups {
        progress(GenerateProgress::ScanningGroup {
            name: group.name.clone(),
            asset_count: group.assets.len(),
        });

        for stem in &group.assets {
            report.assets_seen += 1;
            let resolved = resolve_asset(tables, &group.name, stem);

            let base = slug(&resolved.name);
            if base.is_empty() {
                log::warn!("\"{}\" normalizes to an empty slug; skipping", resolved.name);
                report.render_failures.push(stem.clone());
                continue;
            }
            let icon = format!("{base}.png");

            match seen_slugs.get(&base) {
                Some(prev) if prev != &resolved.name => {
                    log::warn!(
                        "\"{}\" and \"{prev}\" both normalize to {icon}; the later render wins",
                        resolved.name
                    );
                }
                _ => {
                    seen_slugs.insert(base.clone(), resolved.name.clone());
                }
            }

            progress(GenerateProgress::RenderingAsset {
                name: resolved.name.clone(),
            });

            let src = group.asset_path(stem);
            let dest = icons_dir.join(&icon);
            if let Err(e) = rasterizer.rasterize(&src, &dest, options.icon_size) {
                log::warn!("Failed to convert {}: {e}", src.display());
                report.render_failures.push(stem.clone());
                continue;
            }
            report.icons_rendered += 1;

            log::debug!("{stem} -> {icon} ({})", resolved.dept.label());
            catalog.push(StratagemEntry {
                name: resolved.name.clone(),
                sequence: sequences.get(&resolved.name).cloned().unwrap_or_default(),
                dept: resolved.dept.label().to_string(),
                icon,
            });
        }
    }

    let (linked, unresolved) = link_shared(tables, &catalog, sequences);
    for entry in linked {
        catalog.push(entry);
    }
    report.unresolved_aliases = unresolved;

    catalog.sort(options.ordering);
    write_manifest(&catalog, manifest_path)?;

    report.entries_written = catalog.len();
    report.missing_sequences = catalog.missing_sequences();
    progress(GenerateProgress::Done);

    Ok(report)
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
