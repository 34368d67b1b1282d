// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export — turning the current document into downloadable artifacts.
//
// The engine never names a concrete PDF or image library. It talks to the
// `PdfEncoder` and `RasterEncoder` traits, and obtains them through
// lazily-loaded `Capability`s.

pub mod capability;
pub mod engine;

pub use capability::Capability;
pub use engine::{ExportEngine, ExportLifetime};

use std::io::Write;
use std::path::{Path, PathBuf};

use papersmith_core::error::{PapersmithError, Result};
use papersmith_core::types::{DocumentKind, ExportFormat};
use papersmith_security::hash_bytes;
use tracing::info;

use crate::pdf::sheet::PdfSheet;
use crate::render::Surface;

/// Produces the text-only PDF rendition.
pub trait PdfEncoder: Send + Sync {
    fn encode(&self, sheet: &PdfSheet) -> Result<Vec<u8>>;
}

/// Pixel formats the raster encoder writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
}

/// Encoded bitmap plus its pixel size.
#[derive(Debug, Clone)]
pub struct RasterOutput {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Rasterises a surface at its natural size and encodes it.
pub trait RasterEncoder: Send + Sync {
    fn encode(&self, surface: &Surface, format: RasterFormat) -> Result<RasterOutput>;
}

/// A finished export, held in memory until the caller saves it.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub kind: DocumentKind,
    pub format: ExportFormat,
    /// Default download name, derived from the kind only.
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Pixel size for raster formats.
    pub dimensions: Option<(u32, u32)>,
    /// Lowercase hex SHA-256 of `bytes`.
    pub sha256: String,
}

impl ExportArtifact {
    pub fn new(
        kind: DocumentKind,
        format: ExportFormat,
        bytes: Vec<u8>,
        dimensions: Option<(u32, u32)>,
    ) -> Self {
        Self {
            kind,
            format,
            file_name: kind.file_name(format),
            sha256: hash_bytes(&bytes),
            bytes,
            dimensions,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Write the artifact into `dir` under its default name.
    ///
    /// Bytes go to a temporary file in the same directory which is then
    /// renamed into place, so a failed write never leaves a partial file.
    pub fn save_into(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        let target = dir.join(&self.file_name);
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&self.bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target)
            .map_err(|err| PapersmithError::Io(err.error))?;
        info!(
            path = %target.display(),
            bytes = self.bytes.len(),
            sha256 = %self.sha256,
            "export saved"
        );
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papersmith_security::verify_hash;

    #[test]
    fn artifact_name_ignores_content() {
        let pdf = |bytes: &[u8]| {
            ExportArtifact::new(DocumentKind::Clearance, ExportFormat::Pdf, bytes.to_vec(), None)
        };
        let (a, b) = (pdf(b"one"), pdf(b"two"));
        assert_eq!(a.file_name, "letter-of-clearance.pdf");
        assert_eq!(a.file_name, b.file_name);
        assert_ne!(a.sha256, b.sha256);
    }

    #[test]
    fn save_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = ExportArtifact::new(
            DocumentKind::Letterhead,
            ExportFormat::Png,
            vec![1, 2, 3, 4],
            Some((1, 1)),
        );
        let path = artifact.save_into(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("letterhead.png"));
        let written = std::fs::read(&path).unwrap();
        assert!(verify_hash(&written, &artifact.sha256).is_ok());
    }

    #[test]
    fn save_into_missing_dir_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let artifact =
            ExportArtifact::new(DocumentKind::Certificate, ExportFormat::Jpeg, vec![0xff], None);
        assert!(matches!(artifact.save_into(&missing), Err(PapersmithError::Io(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
