// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// papersmith-security — Passphrase gate in front of the generator pages and
// SHA-256 fingerprints for exported artifacts.

pub mod gate;
pub mod integrity;

pub use gate::{AccessGate, GateDecision, GateForm};
pub use integrity::{hash_bytes, verify_hash};
