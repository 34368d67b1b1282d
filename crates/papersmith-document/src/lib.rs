// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// papersmith-document — The document pipeline.
//
// Field policy and immutable edits (form), the preview renderer and its
// capturable surface (render), rasterisation and image encoding (image), the
// text-only PDF rendition (pdf), the export engine with lazily loaded encoders
// (export), share actions (share), and the per-page editing session (session).

pub mod export;
pub mod form;
pub mod image;
pub mod pdf;
pub mod render;
pub mod session;
pub mod share;

// Re-export the primary items so callers can use `papersmith_document::render` etc.
pub use crate::image::raster::Rasterizer;
pub use export::{ExportArtifact, ExportEngine, ExportLifetime};
pub use form::{apply_edit, apply_input, field_text, visible_fields};
pub use pdf::{PdfSheet, PdfWriter, pdf_fields};
pub use render::{PreviewSlot, Surface, render};
pub use session::{EditingSession, ExportJob};
pub use share::{ShareEngine, build_share_link, share_text};
