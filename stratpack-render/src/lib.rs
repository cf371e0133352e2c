//! SVG-to-PNG rasterization via the external `rsvg-convert` tool.
//!
//! `rsvg-convert` ships with librsvg (`brew install librsvg` on macOS,
//! `apt install librsvg2-bin` on Debian/Ubuntu). Its absence is fatal to a
//! run and detected up front; an individual conversion failure is
//! recoverable and surfaces through [`RenderError::Conversion`].

use std::path::{Path, PathBuf};
use std::process::Command;

use stratpack_core::render::{Rasterizer, RenderError, check_icon_size};

/// Name of the converter binary looked up on `PATH`.
const CONVERTER_BIN: &str = "rsvg-convert";

/// [`Rasterizer`] backed by the `rsvg-convert` command-line tool.
#[derive(Debug, Clone)]
pub struct RsvgConvert {
    bin: PathBuf,
}

impl RsvgConvert {
    /// Locate `rsvg-convert` on `PATH` and probe that it runs.
    pub fn detect() -> Result<Self, RenderError> {
        let bin = which::which(CONVERTER_BIN).map_err(|_| {
            RenderError::Unavailable(format!(
                "{CONVERTER_BIN} not found on PATH; install librsvg \
                 (brew install librsvg / apt install librsvg2-bin)"
            ))
        })?;

        let probe = Command::new(&bin).arg("--version").output()?;
        if !probe.status.success() {
            return Err(RenderError::Unavailable(format!(
                "{} --version exited with {}",
                bin.display(),
                probe.status
            )));
        }

        let version = String::from_utf8_lossy(&probe.stdout);
        log::debug!("Using {} ({})", bin.display(), version.trim());
        Ok(Self { bin })
    }

    /// Build a converter around an explicit binary path. Used by tests to
    /// point at a stub script.
    pub fn with_binary(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Rasterizer for RsvgConvert {
    fn rasterize(&self, src: &Path, dest: &Path, size_px: u32) -> Result<(), RenderError> {
        check_icon_size(size_px)?;

        let output = Command::new(&self.bin)
            .arg("-w")
            .arg(size_px.to_string())
            .arg("-h")
            .arg(size_px.to_string())
            .arg(src)
            .arg("-o")
            .arg(dest)
            .output()?;

        if !output.status.success() {
            return Err(RenderError::Conversion {
                path: src.display().to_string(),
                message: format!(
                    "{} exited with {}: {}",
                    CONVERTER_BIN,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn stub_converter(dir: &Path, script_body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("rsvg-convert-stub");
        std::fs::write(&path, format!("#!/bin/sh\n{script_body}\n")).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn test_size_is_validated_before_invocation() {
        let converter = RsvgConvert::with_binary("/nonexistent/rsvg-convert");
        let err = converter
            .rasterize(Path::new("a.svg"), Path::new("a.png"), 8)
            .unwrap_err();
        assert!(matches!(err, RenderError::SizeOutOfRange(8)));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_conversion() {
        let dir = tempfile::tempdir().unwrap();
        // The stub writes its last argument (the -o target).
        let bin = stub_converter(dir.path(), "for arg do last=$arg; done; echo png > \"$last\"");
        let converter = RsvgConvert::with_binary(bin);

        let dest = dir.path().join("out.png");
        converter
            .rasterize(&dir.path().join("in.svg"), &dest, 126)
            .unwrap();
        assert!(dest.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_a_conversion_error() {
        let dir = tempfile::tempdir().unwrap();
        let bin = stub_converter(dir.path(), "echo 'boom' >&2; exit 1");
        let converter = RsvgConvert::with_binary(bin);

        let err = converter
            .rasterize(&dir.path().join("in.svg"), &dir.path().join("out.png"), 126)
            .unwrap_err();
        match err {
            RenderError::Conversion { message, .. } => assert!(message.contains("boom")),
            other => panic!("expected Conversion error, got {other:?}"),
        }
    }
}
