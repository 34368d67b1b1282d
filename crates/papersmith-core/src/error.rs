// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Papersmith.

use thiserror::Error;

use crate::types::{DocumentKind, ExportFormat, FieldId};

/// Top-level error type for all Papersmith operations.
#[derive(Debug, Error)]
pub enum PapersmithError {
    // -- Form errors --
    #[error("field {field} is not part of the {kind} form")]
    FieldNotVisible { kind: DocumentKind, field: FieldId },

    #[error("invalid value for {field}: {reason}")]
    InvalidFieldValue { field: FieldId, reason: String },

    #[error("unknown document kind: {0}")]
    UnknownDocumentKind(String),

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    // -- Export errors --
    #[error("{capability} encoder could not be loaded: {reason}")]
    CapabilityUnavailable {
        capability: &'static str,
        reason: String,
    },

    #[error("nothing to export yet: the preview has not been rendered")]
    NothingToExport,

    #[error("a {0} export is already in progress")]
    ExportInProgress(ExportFormat),

    #[error("export abandoned: the document was closed before it finished")]
    ExportAbandoned,

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("PDF operation failed: {0}")]
    PdfError(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("document is too long to rasterise: {height}px exceeds the {max}px limit")]
    SurfaceTooLarge { height: u32, max: u32 },

    // -- Share errors --
    #[error("could not build share link: {0}")]
    ShareLink(String),

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PapersmithError>;
