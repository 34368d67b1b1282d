// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge — Linux, macOS and Windows.
//
// Clipboard access goes through `arboard`; links and documents are handed to
// the system's default handler with `open`. Native failures are reported as
// `PapersmithError::Bridge`.

use std::io::Write;
use std::sync::Mutex;

use papersmith_core::error::{PapersmithError, Result};
use tracing::{debug, info};

use crate::traits::*;

pub struct DesktopBridge {
    name: String,
    /// Kept alive after the first copy: on X11 the clipboard contents are
    /// served by the process that owns them.
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl DesktopBridge {
    pub fn new() -> Self {
        Self {
            name: format!("Desktop ({})", std::env::consts::OS),
            clipboard: Mutex::new(None),
        }
    }
}

impl Default for DesktopBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        &self.name
    }
}

impl NativeClipboard for DesktopBridge {
    fn set_clipboard_text(&self, text: &str) -> Result<()> {
        let mut slot = self.clipboard.lock().unwrap_or_else(|p| p.into_inner());
        let clipboard = match slot.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(bridge_error)?,
        };
        let clipboard = slot.insert(clipboard);
        clipboard.set_text(text.to_owned()).map_err(bridge_error)?;
        debug!(chars = text.chars().count(), "clipboard text set");
        Ok(())
    }
}

impl NativePrint for DesktopBridge {
    /// Desktop printing goes through the default viewer for the document type,
    /// so the document is written to a kept temporary file and opened there.
    fn show_print_dialog(&self, document: &[u8], mime_type: &str) -> Result<()> {
        let mut file = tempfile::Builder::new()
            .prefix("papersmith-print-")
            .suffix(print_suffix(mime_type))
            .tempfile()?;
        file.write_all(document)?;
        let (_, path) = file.keep().map_err(bridge_error)?;
        open::that_detached(&path).map_err(bridge_error)?;
        info!(path = %path.display(), "document handed to the system viewer");
        Ok(())
    }
}

impl NativeOpener for DesktopBridge {
    fn open_url(&self, url: &str) -> Result<()> {
        open::that_detached(url).map_err(bridge_error)?;
        debug!(scheme = url.split(':').next().unwrap_or_default(), "link opened");
        Ok(())
    }
}

fn print_suffix(mime_type: &str) -> &'static str {
    match mime_type {
        "application/pdf" => ".pdf",
        "image/png" => ".png",
        "image/jpeg" => ".jpg",
        _ => ".bin",
    }
}

fn bridge_error(err: impl std::fmt::Display) -> PapersmithError {
    PapersmithError::Bridge(err.to_string())
}
