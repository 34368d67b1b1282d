// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export engine — produces PDF, PNG and JPEG artifacts from the current
// document.
//
// PDF is built from the model (text only, curated fields). PNG and JPEG capture
// the surface currently shown in the preview slot. At most one export per
// format runs at a time; a second request is rejected rather than queued.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use papersmith_core::config::AppConfig;
use papersmith_core::error::{PapersmithError, Result};
use papersmith_core::model::DocumentModel;
use papersmith_core::types::ExportFormat;
use tracing::{info, instrument, warn};

use super::{Capability, ExportArtifact, PdfEncoder, RasterEncoder, RasterFormat};
use crate::image::encoder::ImageRasterEncoder;
use crate::image::raster::Rasterizer;
use crate::pdf::sheet::PdfSheet;
use crate::pdf::writer::PdfWriter;
use crate::render::PreviewSlot;

/// Per-session export state: which formats are in flight, and whether the
/// page that requested them is still open.
///
/// Each export takes a ticket when it starts. `abandon` invalidates every
/// outstanding ticket, so exports that are still waiting on an encoder finish
/// with `ExportAbandoned` instead of delivering a file.
#[derive(Debug, Clone, Default)]
pub struct ExportLifetime {
    epoch: Arc<AtomicU64>,
    in_flight: Arc<Mutex<HashSet<ExportFormat>>>,
}

impl ExportLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an export of `format` is currently running for this session.
    pub fn is_busy(&self, format: ExportFormat) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .contains(&format)
    }

    fn begin(&self, format: ExportFormat) -> Result<InFlight<'_>> {
        let mut formats = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        if !formats.insert(format) {
            warn!(%format, "export rejected: already in progress");
            return Err(PapersmithError::ExportInProgress(format));
        }
        Ok(InFlight {
            formats: &self.in_flight,
            format,
        })
    }

    pub fn ticket(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    pub fn abandon(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }

    pub fn ensure_current(&self, ticket: u64) -> Result<()> {
        if self.ticket() == ticket {
            Ok(())
        } else {
            Err(PapersmithError::ExportAbandoned)
        }
    }
}

/// Releases the per-format busy flag when an export ends, however it ends.
struct InFlight<'a> {
    formats: &'a Mutex<HashSet<ExportFormat>>,
    format: ExportFormat,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.formats
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .remove(&self.format);
    }
}

/// Shared by every session; encoders are loaded once per engine.
pub struct ExportEngine {
    pdf: Capability<dyn PdfEncoder>,
    raster: Capability<dyn RasterEncoder>,
}

impl ExportEngine {
    pub fn with_capabilities(
        pdf: Capability<dyn PdfEncoder>,
        raster: Capability<dyn RasterEncoder>,
    ) -> Self {
        Self { pdf, raster }
    }

    /// Engine backed by `printpdf` and the `image` crate.
    ///
    /// The raster encoder draws with the bundled Times faces, or reads
    /// `config.font_path` on first use when one is set. A missing or unreadable
    /// font makes raster exports fail with `CapabilityUnavailable` until the
    /// file is fixed.
    pub fn from_config(config: &AppConfig) -> Self {
        let font_path = config.font_path.clone();
        let quality = config.clamped_jpeg_quality();

        let pdf = Capability::lazy("pdf", || async {
            Ok(Arc::new(PdfWriter::a4()) as Arc<dyn PdfEncoder>)
        });

        let raster = Capability::lazy("raster", move || {
            let font_path = font_path.clone();
            async move {
                let rasterizer = match font_path {
                    Some(path) => {
                        let bytes = tokio::fs::read(&path).await?;
                        Rasterizer::from_font_bytes(bytes)?
                    }
                    None => Rasterizer::new()?,
                };
                let encoder = ImageRasterEncoder::new(rasterizer, quality);
                Ok::<_, PapersmithError>(Arc::new(encoder) as Arc<dyn RasterEncoder>)
            }
        });

        Self::with_capabilities(pdf, raster)
    }

    /// Produce an artifact of `format` for the document.
    ///
    /// PDF reads `model`; PNG and JPEG capture whatever `slot` shows when the
    /// encoder is ready. DOCX is rejected before any work is done.
    #[instrument(skip_all, fields(kind = %model.kind, format = %format))]
    pub async fn export(
        &self,
        format: ExportFormat,
        model: &DocumentModel,
        slot: &PreviewSlot,
        lifetime: &ExportLifetime,
    ) -> Result<ExportArtifact> {
        let raster = match format {
            ExportFormat::Pdf => None,
            ExportFormat::Png => Some(RasterFormat::Png),
            ExportFormat::Jpeg => Some(RasterFormat::Jpeg),
            ExportFormat::Docx => return Err(PapersmithError::NotImplemented("DOCX export")),
        };

        let _guard = lifetime.begin(format)?;
        let ticket = lifetime.ticket();

        let artifact = match raster {
            None => self.export_pdf(model, lifetime, ticket).await?,
            Some(raster) => self.export_raster(model, raster, slot, lifetime, ticket).await?,
        };

        lifetime.ensure_current(ticket)?;
        info!(
            file = %artifact.file_name,
            bytes = artifact.bytes.len(),
            "export finished"
        );
        Ok(artifact)
    }

    async fn export_pdf(
        &self,
        model: &DocumentModel,
        lifetime: &ExportLifetime,
        ticket: u64,
    ) -> Result<ExportArtifact> {
        let sheet = PdfSheet::from_model(model);
        let encoder = self.pdf.get().await?;
        lifetime.ensure_current(ticket)?;

        let bytes = tokio::task::spawn_blocking(move || encoder.encode(&sheet))
            .await
            .map_err(|err| PapersmithError::PdfError(format!("encoder task failed: {err}")))??;
        Ok(ExportArtifact::new(model.kind, ExportFormat::Pdf, bytes, None))
    }

    async fn export_raster(
        &self,
        model: &DocumentModel,
        format: RasterFormat,
        slot: &PreviewSlot,
        lifetime: &ExportLifetime,
        ticket: u64,
    ) -> Result<ExportArtifact> {
        // Fail fast when there is nothing on screen, before paying for a load.
        slot.capture()?.surface.ensure_rasterisable()?;
        let encoder = self.raster.get().await?;
        lifetime.ensure_current(ticket)?;

        // Re-capture: the user may have kept typing while the encoder loaded.
        let captured = slot.capture()?;
        if captured.surface.kind != model.kind {
            warn!(
                shown = %captured.surface.kind,
                requested = %model.kind,
                "preview shows a different kind than the model"
            );
        }
        captured.surface.ensure_rasterisable()?;
        let surface = Arc::clone(&captured.surface);
        let output = tokio::task::spawn_blocking(move || encoder.encode(&surface, format))
            .await
            .map_err(|err| PapersmithError::ImageError(format!("encoder task failed: {err}")))??;

        let export_format = match format {
            RasterFormat::Png => ExportFormat::Png,
            RasterFormat::Jpeg => ExportFormat::Jpeg,
        };
        Ok(ExportArtifact::new(
            captured.surface.kind,
            export_format,
            output.bytes,
            Some((output.width, output.height)),
        ))
    }
}
