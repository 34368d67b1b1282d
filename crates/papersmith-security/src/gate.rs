// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Access gate — a single shared passphrase in front of the generator pages.
//
// This is a convenience barrier, not authentication: the secret ships with the
// app. Comparison still runs in constant time over fixed-length digests so the
// check leaks neither content nor length.

use ring::constant_time::verify_slices_are_equal;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

/// Result of a passphrase check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    pub granted: bool,
}

/// Compares submitted keys against one static secret.
#[derive(Clone)]
pub struct AccessGate {
    secret_digest: [u8; 32],
}

impl AccessGate {
    pub fn new(secret: &str) -> Self {
        Self {
            secret_digest: Sha256::digest(secret.as_bytes()).into(),
        }
    }

    /// Check a submitted key. Surrounding whitespace is ignored.
    pub fn check(&self, submitted_key: &str) -> GateDecision {
        let submitted: [u8; 32] = Sha256::digest(submitted_key.trim().as_bytes()).into();
        let granted = verify_slices_are_equal(&submitted, &self.secret_digest).is_ok();
        debug!(granted, "access gate checked");
        GateDecision { granted }
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new("UNCIF01")
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}

/// State behind the passphrase prompt.
///
/// The user first picks where they want to go, then types the key. The key is
/// cleared only when it is accepted; a wrong key stays in the input so it can be
/// corrected.
#[derive(Debug, Clone, Default)]
pub struct GateForm {
    /// Current contents of the key input.
    pub input: String,
    destination: Option<String>,
}

impl GateForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the page the user asked for.
    pub fn choose(&mut self, destination: impl Into<String>) {
        self.destination = Some(destination.into());
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Submit the current input. Returns the destination to navigate to when
    /// the key is accepted.
    pub fn submit(&mut self, gate: &AccessGate) -> Option<String> {
        if !gate.check(&self.input).granted {
            return None;
        }
        self.input.clear();
        let destination = self.destination.take();
        info!(destination = ?destination, "access granted");
        destination
    }
}
