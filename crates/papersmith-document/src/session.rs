// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Editing session — one open generator page.
//
// Owns the document model, the selected template and the preview slot. Every
// edit replaces the model and re-renders once. Dropping the session abandons
// any export still waiting on an encoder.

use std::sync::Arc;

use papersmith_core::error::Result;
use papersmith_core::model::DocumentModel;
use papersmith_core::template::Template;
use papersmith_core::types::{
    DocumentKind, ExportFormat, FieldId, FieldValue, SessionId, SharePayload,
};
use tracing::{debug, info, instrument};

use crate::export::{ExportArtifact, ExportEngine, ExportLifetime};
use crate::form;
use crate::render::{PreviewSlot, Surface, render};
use crate::share::{ShareEngine, share_text};

pub struct EditingSession {
    id: SessionId,
    model: DocumentModel,
    template: &'static Template,
    slot: Arc<PreviewSlot>,
    lifetime: ExportLifetime,
    engine: Arc<ExportEngine>,
}

impl EditingSession {
    /// Start a session with a fresh model. Nothing is rendered until
    /// [`render`](Self::render) is called.
    pub fn open(
        kind: DocumentKind,
        template: &'static Template,
        engine: Arc<ExportEngine>,
        today: impl Into<String>,
    ) -> Self {
        let session = Self {
            id: SessionId::new(),
            model: DocumentModel::new(kind, today),
            template,
            slot: Arc::new(PreviewSlot::detached()),
            lifetime: ExportLifetime::new(),
            engine,
        };
        info!(session = %session.id, %kind, template = template.id, "session opened");
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn kind(&self) -> DocumentKind {
        self.model.kind
    }

    pub fn model(&self) -> &DocumentModel {
        &self.model
    }

    pub fn template(&self) -> &'static Template {
        self.template
    }

    pub fn slot(&self) -> &Arc<PreviewSlot> {
        &self.slot
    }

    /// Render the current model and publish it to the preview slot.
    pub fn render(&self) -> u64 {
        let revision = self.slot.publish(render(&self.model, self.template));
        debug!(session = %self.id, revision, "preview published");
        revision
    }

    /// The surface currently on screen.
    pub fn surface(&self) -> Result<Arc<Surface>> {
        Ok(self.slot.capture()?.surface)
    }

    /// Apply a typed edit and re-render.
    #[instrument(skip(self, value), fields(session = %self.id))]
    pub fn edit(&mut self, field: FieldId, value: FieldValue) -> Result<u64> {
        self.model = form::apply_edit(&self.model, field, value)?;
        Ok(self.render())
    }

    /// Apply a raw input-control string and re-render.
    #[instrument(skip(self, raw), fields(session = %self.id))]
    pub fn input(&mut self, field: FieldId, raw: &str) -> Result<u64> {
        self.model = form::apply_input(&self.model, field, raw)?;
        Ok(self.render())
    }

    /// Switch template. The model is untouched.
    pub fn set_template(&mut self, template: &'static Template) -> u64 {
        info!(session = %self.id, template = template.id, "template changed");
        self.template = template;
        self.render()
    }

    /// Snapshot what an export of `format` needs, so it can run after the
    /// caller stops borrowing the session.
    pub fn prepare_export(&self, format: ExportFormat) -> ExportJob {
        ExportJob {
            format,
            model: self.model.clone(),
            slot: Arc::clone(&self.slot),
            lifetime: self.lifetime.clone(),
            engine: Arc::clone(&self.engine),
        }
    }

    /// Whether an export of `format` is still running for this session.
    pub fn is_exporting(&self, format: ExportFormat) -> bool {
        self.lifetime.is_busy(format)
    }

    pub async fn export(&self, format: ExportFormat) -> Result<ExportArtifact> {
        self.prepare_export(format).run().await
    }

    /// Rasterise the preview to PNG and open the print dialog with it.
    pub async fn print(&self, share: &ShareEngine) -> Result<ExportArtifact> {
        let artifact = self.export(ExportFormat::Png).await?;
        share.trigger_print(&artifact)?;
        Ok(artifact)
    }

    /// Subject and body for an external share of this document.
    pub fn share_payload(&self, url: Option<&str>) -> SharePayload {
        let organization = self.model.text(FieldId::Organization).unwrap_or("");
        SharePayload {
            subject: self.kind().title().to_owned(),
            body: share_text(self.kind(), organization),
            url: url.map(str::to_owned),
        }
    }

    /// Invalidate exports that are still pending.
    pub fn abandon(&self) {
        self.lifetime.abandon();
    }
}

impl Drop for EditingSession {
    fn drop(&mut self) {
        self.abandon();
        debug!(session = %self.id, "session closed");
    }
}

/// An export detached from the session borrow.
pub struct ExportJob {
    format: ExportFormat,
    model: DocumentModel,
    slot: Arc<PreviewSlot>,
    lifetime: ExportLifetime,
    engine: Arc<ExportEngine>,
}

impl ExportJob {
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub async fn run(self) -> Result<ExportArtifact> {
        self.engine
            .export(self.format, &self.model, &self.slot, &self.lifetime)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papersmith_core::error::PapersmithError;
    use papersmith_core::template::{default_template, find};
    use tokio::sync::Notify;

    use crate::export::{Capability, PdfEncoder, RasterEncoder};
    use crate::image::encoder::ImageRasterEncoder;
    use crate::image::raster::Rasterizer;
    use crate::pdf::PdfWriter;

    fn raster_encoder() -> Arc<dyn RasterEncoder> {
        Arc::new(ImageRasterEncoder::new(Rasterizer::new().unwrap(), 80))
    }

    fn engine() -> Arc<ExportEngine> {
        Arc::new(ExportEngine::with_capabilities(
            Capability::ready("pdf", Arc::new(PdfWriter::a4()) as Arc<dyn PdfEncoder>),
            Capability::ready("raster", raster_encoder()),
        ))
    }

    fn open(kind: DocumentKind) -> EditingSession {
        EditingSession::open(kind, default_template(), engine(), "9 September 2026")
    }

    #[test]
    fn opening_does_not_render() {
        let session = open(DocumentKind::Certificate);
        assert!(!session.slot().is_attached());
        assert!(matches!(session.surface(), Err(PapersmithError::NothingToExport)));
        assert_eq!(session.model().text(FieldId::Date), Some("9 September 2026"));
    }

    #[test]
    fn each_edit_publishes_one_revision() {
        let mut session = open(DocumentKind::Certificate);
        assert_eq!(session.render(), 1);
        assert_eq!(session.input(FieldId::Name, "Ada").unwrap(), 2);
        assert_eq!(
            session
                .edit(FieldId::Title, FieldValue::Text("Engineer".into()))
                .unwrap(),
            3
        );
        let surface = session.surface().unwrap();
        assert!(surface.text_content().iter().any(|t| t.contains("Ada")));
    }

    #[test]
    fn rejected_edit_keeps_model_and_preview() {
        let mut session = open(DocumentKind::Letterhead);
        session.render();
        let before = session.model().clone();
        let err = session.input(FieldId::Name, "Nobody").unwrap_err();
        assert!(matches!(err, PapersmithError::FieldNotVisible { .. }));
        assert_eq!(session.model(), &before);
        assert_eq!(session.slot().capture().unwrap().revision, 1);
    }

    #[test]
    fn template_switch_keeps_the_model() {
        let mut session = open(DocumentKind::Certificate);
        session.input(FieldId::Organization, "Acme").unwrap();
        let model = session.model().clone();
        session.set_template(find("elegant").unwrap());
        assert_eq!(session.model(), &model);
        assert_eq!(session.surface().unwrap().styling.template_id, "elegant");
    }

    #[tokio::test]
    async fn export_follows_the_current_preview() {
        let mut session = open(DocumentKind::Clearance);
        assert!(matches!(
            session.export(ExportFormat::Jpeg).await,
            Err(PapersmithError::NothingToExport)
        ));

        session.render();
        let jpeg = session.export(ExportFormat::Jpeg).await.unwrap();
        assert_eq!(jpeg.file_name, "letter-of-clearance.jpg");

        session.input(FieldId::VisitLocation, "Main hall").unwrap();
        let pdf = session.export(ExportFormat::Pdf).await.unwrap();
        assert!(pdf.bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn dropping_the_session_abandons_its_exports() {
        let gate = Arc::new(Notify::new());
        let waiting = Arc::clone(&gate);
        let engine = Arc::new(ExportEngine::with_capabilities(
            Capability::lazy("pdf", move || {
                let gate = Arc::clone(&waiting);
                async move {
                    gate.notified().await;
                    Ok(Arc::new(PdfWriter::a4()) as Arc<dyn PdfEncoder>)
                }
            }),
            Capability::ready("raster", raster_encoder()),
        ));

        let session =
            EditingSession::open(DocumentKind::Certificate, default_template(), engine, "");
        let job = session.prepare_export(ExportFormat::Pdf);
        let pending = tokio::spawn(job.run());
        while !session.is_exporting(ExportFormat::Pdf) {
            tokio::task::yield_now().await;
        }

        drop(session);
        gate.notify_one();

        assert!(matches!(
            pending.await.unwrap(),
            Err(PapersmithError::ExportAbandoned)
        ));
    }

    #[tokio::test]
    async fn print_exports_png_before_asking_the_bridge() {
        let session = open(DocumentKind::Letterhead);
        session.render();
        let share = ShareEngine::new(Box::new(papersmith_bridge::stub::StubBridge));
        assert!(matches!(
            session.print(&share).await,
            Err(PapersmithError::PlatformUnavailable)
        ));

        let unrendered = open(DocumentKind::Letterhead);
        assert!(matches!(
            unrendered.print(&share).await,
            Err(PapersmithError::NothingToExport)
        ));
    }

    #[test]
    fn share_payload_uses_the_organization() {
        let mut session = open(DocumentKind::Collaboration);
        session.input(FieldId::Organization, "Acme Labs").unwrap();
        let payload = session.share_payload(Some("https://acme.example"));
        assert_eq!(payload.subject, DocumentKind::Collaboration.title());
        assert!(payload.body.contains("from Acme Labs"));
        assert_eq!(payload.url.as_deref(), Some("https://acme.example"));
    }
}
