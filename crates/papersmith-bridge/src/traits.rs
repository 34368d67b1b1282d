// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.

use papersmith_core::error::Result;

/// Unified bridge that groups all native capabilities.
pub trait PlatformBridge: NativeClipboard + NativePrint + NativeOpener {
    /// Human-readable platform name (e.g. "macOS 15", "Android 14").
    fn platform_name(&self) -> &str;
}

/// Write to the system clipboard.
pub trait NativeClipboard {
    fn set_clipboard_text(&self, text: &str) -> Result<()>;
}

/// Send documents to the OS-level print dialog.
pub trait NativePrint {
    /// Open the native print dialog for the given document bytes.
    /// Returns Ok(()) if the dialog was presented (user may still cancel).
    fn show_print_dialog(&self, document: &[u8], mime_type: &str) -> Result<()>;
}

/// Hand a URL to the system (mail client, browser, messaging app).
pub trait NativeOpener {
    fn open_url(&self, url: &str) -> Result<()>;
}
