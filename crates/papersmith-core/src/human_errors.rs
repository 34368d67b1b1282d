// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the notification area.
//
// Export and share calls return plain `Result`s; the UI turns failures into a
// dismissible notice with this mapping.

use crate::error::PapersmithError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Temporary problem. Trying again may work.
    Transient,
    /// The user has to do something first (fill a field, wait for a preview).
    ActionRequired,
    /// Retrying will not help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether trying the same action again can succeed.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `PapersmithError` into a notice the user can act on.
pub fn humanize_error(err: &PapersmithError) -> HumanError {
    match err {
        // -- Form errors --
        PapersmithError::FieldNotVisible { kind, field } => HumanError {
            message: format!("\"{field}\" isn't used on a {}.", kind.title()),
            suggestion: "Switch to a document type that has this field.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        PapersmithError::InvalidFieldValue { field, reason } => HumanError {
            message: format!("That value doesn't fit \"{field}\"."),
            suggestion: format!("Check the entry and try again. ({reason})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PapersmithError::UnknownDocumentKind(slug) => HumanError {
            message: "We don't know that kind of document.".into(),
            suggestion: format!("Go back to the start page and pick a document. ({slug})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        PapersmithError::UnknownTemplate(id) => HumanError {
            message: "That design isn't available.".into(),
            suggestion: format!("Pick another design from the list. ({id})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        // -- Export errors --
        PapersmithError::CapabilityUnavailable { capability, .. } => HumanError {
            message: format!("The {capability} exporter isn't ready."),
            suggestion: "Wait a moment and try the download again. Other formats still work."
                .into(),
            retriable: true,
            severity: Severity::Transient,
        },

        PapersmithError::NothingToExport => HumanError {
            message: "There's nothing to download yet.".into(),
            suggestion: "Wait for the preview to appear, then try again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        PapersmithError::ExportInProgress(format) => HumanError {
            message: format!("Your {format} is still being prepared."),
            suggestion: "It will download as soon as it is ready.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        PapersmithError::ExportAbandoned => HumanError {
            message: "The download was cancelled.".into(),
            suggestion: "Open the document again and start a new download.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        PapersmithError::NotImplemented(what) => HumanError {
            message: format!("{what} isn't available yet."),
            suggestion: "Download as PDF instead.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        PapersmithError::PdfError(_) => HumanError {
            message: "We couldn't create the PDF.".into(),
            suggestion: "Try again, or download the document as an image.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        PapersmithError::ImageError(_) => HumanError {
            message: "We couldn't create the image.".into(),
            suggestion: "Try again, or download the document as a PDF.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        PapersmithError::SurfaceTooLarge { .. } => HumanError {
            message: "This document is too long to save as an image.".into(),
            suggestion: "Shorten the longest lists or notes, or download it as a PDF.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Share errors --
        PapersmithError::ShareLink(_) => HumanError {
            message: "We couldn't prepare the share link.".into(),
            suggestion: "Copy the share text instead and paste it where you like.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        // -- Storage --
        PapersmithError::Io(io) => HumanError {
            message: "The file couldn't be saved.".into(),
            suggestion: format!(
                "Check there is free space and that the folder is writable. ({io})"
            ),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        // -- Platform bridge --
        PapersmithError::Bridge(detail) => HumanError {
            message: "This device didn't respond.".into(),
            suggestion: format!("Try again. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        PapersmithError::PlatformUnavailable => HumanError {
            message: "This isn't supported on this device.".into(),
            suggestion: "Download the document and share or print it from your files.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExportFormat;

    #[test]
    fn encoder_load_failure_is_transient() {
        let err = PapersmithError::CapabilityUnavailable {
            capability: "PDF",
            reason: "timed out".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
    }

    #[test]
    fn missing_preview_asks_user_to_wait() {
        let human = humanize_error(&PapersmithError::NothingToExport);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.retriable);
    }

    #[test]
    fn docx_is_permanent() {
        let human = humanize_error(&PapersmithError::NotImplemented("DOCX export"));
        assert_eq!(human.severity, Severity::Permanent);
        assert!(!human.retriable);
    }

    #[test]
    fn busy_export_names_the_format() {
        let human = humanize_error(&PapersmithError::ExportInProgress(ExportFormat::Jpeg));
        assert!(human.message.contains("JPEG"));
    }
}
