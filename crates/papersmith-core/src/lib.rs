// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Papersmith — Core types, document model, and error definitions shared across
// all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod model;
pub mod template;
pub mod types;

pub use config::AppConfig;
pub use error::PapersmithError;
pub use model::{ClearanceData, CollaborationData, DocumentData, DocumentModel};
pub use template::Template;
pub use types::*;
