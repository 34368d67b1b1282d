// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for headless tests. Every capability reports
// `PlatformUnavailable`, so callers can exercise their failure paths without
// touching the real clipboard or launching applications.

use papersmith_core::error::{PapersmithError, Result};

use crate::traits::*;

/// Bridge that reports every capability as unavailable.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Headless (stub)"
    }
}

impl NativeClipboard for StubBridge {
    fn set_clipboard_text(&self, _text: &str) -> Result<()> {
        tracing::warn!("NativeClipboard::set_clipboard_text called on stub bridge");
        Err(PapersmithError::PlatformUnavailable)
    }
}

impl NativePrint for StubBridge {
    fn show_print_dialog(&self, _document: &[u8], _mime_type: &str) -> Result<()> {
        tracing::warn!("NativePrint::show_print_dialog called on stub bridge");
        Err(PapersmithError::PlatformUnavailable)
    }
}

impl NativeOpener for StubBridge {
    fn open_url(&self, _url: &str) -> Result<()> {
        tracing::warn!("NativeOpener::open_url called on stub bridge");
        Err(PapersmithError::PlatformUnavailable)
    }
}
