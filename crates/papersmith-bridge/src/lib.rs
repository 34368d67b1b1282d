// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Papersmith — Native platform bridge abstractions.
//
// The share and print actions talk to the host only through these traits, so
// the document pipeline never names a platform API directly.

pub mod desktop;
pub mod stub;
pub mod traits;

pub use desktop::DesktopBridge;
pub use traits::{NativeClipboard, NativeOpener, NativePrint, PlatformBridge};

/// The bridge implementation for the host operating system.
pub fn platform_bridge() -> Box<dyn PlatformBridge> {
    Box::new(DesktopBridge::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_bridge_is_the_default() {
        let bridge = platform_bridge();
        assert_eq!(bridge.platform_name(), DesktopBridge::new().platform_name());
        assert_ne!(bridge.platform_name(), stub::StubBridge.platform_name());
    }
}
