//! Core reconciliation pipeline for the stratagem icon catalog.
//!
//! Maps raw SVG asset names to canonical stratagem names, resolves department
//! membership (including cross-cutting reclassification), links stratagems
//! that share a rendered icon, merges in directional input sequences, and
//! assembles the sorted `stratagems.json` manifest.
//!
//! Rasterization itself is delegated to an injected [`Rasterizer`]
//! implementation; see the `stratpack-render` crate for the production one.

pub mod entry;
pub mod error;
pub mod link;
pub mod manifest;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod scan;
pub mod sequence;
pub mod slug;
pub mod tables;

pub use entry::{Catalog, NameOrdering, StratagemEntry};
pub use error::PipelineError;
pub use pipeline::{GenerateOptions, GenerateProgress, GenerateReport, generate};
pub use render::{
    DEFAULT_ICON_SIZE, MAX_ICON_SIZE, MIN_ICON_SIZE, Rasterizer, RenderError,
};
pub use resolve::{Department, ResolvedAsset, resolve_asset};
pub use scan::{AssetGroup, scan_asset_groups};
pub use sequence::{SequenceTable, load_sequences};
pub use slug::slug;
pub use tables::{ResolverTables, TableError};
