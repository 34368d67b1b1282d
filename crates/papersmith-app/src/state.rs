// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use std::path::PathBuf;

use papersmith_core::error::PapersmithError;
use papersmith_core::human_errors::{Severity, humanize_error};

use crate::services::app_services::AppServices;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether the access key has been accepted this run.
    pub unlocked: bool,
    /// Folder exports are saved into. Starts from config; the user may pick
    /// another folder for the rest of the run.
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(svc: &AppServices) -> Self {
        Self {
            unlocked: false,
            export_dir: svc.default_export_dir(),
        }
    }
}

/// Tone of a notice, driving its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
    Error,
}

/// A dismissible message shown under the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub message: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Info,
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Plain-language notice for a failed action.
    pub fn from_error(err: &PapersmithError) -> Self {
        let human = humanize_error(err);
        let tone = match human.severity {
            Severity::Transient | Severity::ActionRequired => Tone::Warning,
            Severity::Permanent => Tone::Error,
        };
        Self {
            tone,
            message: human.message,
            detail: Some(human.suggestion),
        }
    }

    pub fn colors(&self) -> (&'static str, &'static str) {
        match self.tone {
            Tone::Info => ("#e8f4ff", "#0b5394"),
            Tone::Warning => ("#fff4e0", "#8a5300"),
            Tone::Error => ("#fdecea", "#a61b1b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papersmith_core::types::ExportFormat;

    #[test]
    fn busy_export_is_a_warning() {
        let notice = Notice::from_error(&PapersmithError::ExportInProgress(ExportFormat::Png));
        assert_eq!(notice.tone, Tone::Warning);
        assert!(notice.detail.is_some());
    }

    #[test]
    fn docx_is_an_error() {
        let notice = Notice::from_error(&PapersmithError::NotImplemented("DOCX export"));
        assert_eq!(notice.tone, Tone::Error);
    }
}
