// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — builds the export engine, share engine and access
// gate once at startup and hands them to every page.
//
// Configuration is read once from `config.json` in the data dir and never
// written back.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use papersmith_bridge::platform_bridge;
use papersmith_core::AppConfig;
use papersmith_core::error::Result;
use papersmith_core::template::{Template, default_template, find};
use papersmith_core::types::DocumentKind;
use papersmith_document::{EditingSession, ExportArtifact, ExportEngine, ShareEngine};
use papersmith_security::AccessGate;
use tracing::{info, warn};

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are Arc-wrapped so the struct can be cloned into closures and
/// async blocks.
#[derive(Clone)]
pub struct AppServices {
    config: Arc<AppConfig>,
    export: Arc<ExportEngine>,
    share: Arc<ShareEngine>,
    gate: Arc<AccessGate>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise all services. Call once at app startup.
    ///
    /// A missing or unreadable config file falls back to defaults. Encoders
    /// are not loaded here; the first export loads them.
    pub fn init() -> Self {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");
        Self::with_config(dir.clone(), load_config(&dir))
    }

    pub fn with_config(data_dir: PathBuf, config: AppConfig) -> Self {
        Self {
            export: Arc::new(ExportEngine::from_config(&config)),
            share: Arc::new(ShareEngine::new(platform_bridge())),
            gate: Arc::new(AccessGate::new(&config.access_secret)),
            config: Arc::new(config),
            data_dir,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn share(&self) -> &ShareEngine {
        &self.share
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// Template a new page starts with. An unknown configured id falls back
    /// to the built-in default.
    pub fn initial_template(&self) -> &'static Template {
        find(&self.config.default_template).unwrap_or_else(|e| {
            warn!(error = %e, "configured template not found, using default");
            default_template()
        })
    }

    /// Open an editing session with today's date and render its first preview.
    pub fn open_session(&self, kind: DocumentKind) -> EditingSession {
        let session = EditingSession::open(
            kind,
            self.initial_template(),
            Arc::clone(&self.export),
            self.config.today(),
        );
        session.render();
        session
    }

    pub fn default_export_dir(&self) -> PathBuf {
        data_dir::export_dir(&self.config, &self.data_dir)
    }

    /// Write a finished export into `dir`.
    pub fn save_artifact(&self, artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf> {
        let path = artifact.save_into(dir)?;
        info!(format = %artifact.format, path = %path.display(), "artifact saved");
        Ok(path)
    }
}

// -- Config file -------------------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> AppConfig {
    let path = data_dir.join(CONFIG_FILE);
    let Ok(data) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    serde_json::from_str(&data).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "ignoring invalid config");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load_config(tmp.path());
        assert_eq!(config.default_template, "classic");
    }

    #[test]
    fn invalid_config_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert_eq!(load_config(tmp.path()).jpeg_quality, 90);
    }

    #[test]
    fn configured_secret_opens_the_gate() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), r#"{ "access_secret": "letmein" }"#).unwrap();
        let svc = AppServices::with_config(tmp.path().to_path_buf(), load_config(tmp.path()));
        assert!(svc.gate().check("letmein").granted);
        assert!(!svc.gate().check("UNCIF01").granted);
    }

    #[test]
    fn unknown_template_falls_back() {
        let config = AppConfig {
            default_template: "neon".into(),
            ..AppConfig::default()
        };
        let svc = AppServices::with_config(std::env::temp_dir(), config);
        assert_eq!(svc.initial_template().id, default_template().id);
    }

    #[test]
    fn opened_session_is_rendered() {
        let svc = AppServices::with_config(std::env::temp_dir(), AppConfig::default());
        let session = svc.open_session(DocumentKind::Letterhead);
        assert!(session.slot().is_attached());
    }
}
