// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Read-only application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Template id selected when a generator page opens.
    pub default_template: String,
    /// JPEG quality for raster exports (1-100).
    pub jpeg_quality: u8,
    /// Directory exports are saved into. `None` uses the platform downloads dir.
    pub export_dir: Option<PathBuf>,
    /// TrueType font used to draw text in raster exports.
    pub font_path: Option<PathBuf>,
    /// `chrono` format string for the pre-filled date.
    pub date_format: String,
    /// Passphrase that unlocks the generator pages.
    pub access_secret: String,
    /// Public link appended to social shares.
    pub share_base_url: Option<String>,
}

impl AppConfig {
    /// Today's date rendered with `date_format`.
    pub fn today(&self) -> String {
        Local::now().format(&self.date_format).to_string()
    }

    /// JPEG quality clamped to the range the encoder accepts.
    pub fn clamped_jpeg_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_template: "classic".into(),
            jpeg_quality: 90,
            export_dir: None,
            font_path: None,
            date_format: "%-d %B %Y".into(),
            access_secret: "UNCIF01".into(),
            share_base_url: None,
        }
    }
}
