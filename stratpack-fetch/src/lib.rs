//! Archive retrieval and extraction.
//!
//! Fetches the icon repository zip over HTTP and unpacks it into the working
//! directory. Every failure here is fatal to the run: without the extracted
//! tree there is nothing to reconcile.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from archive download or extraction.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("invalid archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("no archive root folder found under {0}")]
    NoArchiveRoot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Download an archive and return its raw bytes. No retries; a transport
/// error or non-success status fails the run.
pub fn download(url: &str) -> Result<Vec<u8>, FetchError> {
    log::info!("Downloading {url}");
    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(FetchError::Status {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }
    let bytes = response.bytes()?;
    log::debug!("Downloaded {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

/// Extract archive bytes into a destination directory, recreating the
/// original folder tree.
pub fn extract(bytes: &[u8], dest: &Path) -> Result<(), FetchError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    log::debug!("Extracting {} archive entries to {}", archive.len(), dest.display());
    archive.extract(dest)?;
    Ok(())
}

/// Locate the extracted repository root inside `dir`.
///
/// GitHub archives unpack to a single `{repo}-{branch}` folder; hidden
/// entries and zip metadata folders (`__MACOSX` and friends) are ignored.
/// Candidates are checked in sorted order so the result is deterministic.
pub fn find_archive_root(dir: &Path) -> Result<PathBuf, FetchError> {
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| !n.starts_with('.') && !n.starts_with("__"))
                .unwrap_or(false)
        })
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::NoArchiveRoot(dir.display().to_string()))
}
