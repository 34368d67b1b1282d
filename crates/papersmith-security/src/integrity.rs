// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Artifact integrity — SHA-256 fingerprints of exported files.

use papersmith_core::error::PapersmithError;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of `data` and return it as a lowercase hex string.
///
/// Every export artifact carries this digest so a saved file can be matched
/// against the log line that produced it.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Verify that `data` matches the expected SHA-256 hex digest.
pub fn verify_hash(data: &[u8], expected_hex: &str) -> Result<(), PapersmithError> {
    let actual = hash_bytes(data);
    if actual.eq_ignore_ascii_case(expected_hex) {
        Ok(())
    } else {
        Err(PapersmithError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("checksum mismatch: expected {expected_hex}, got {actual}"),
        )))
    }
}
