// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — the curated text sheet for each kind and the printpdf writer
// that lays it out.

pub mod sheet;
pub mod writer;

pub use sheet::{PdfSheet, pdf_fields};
pub use writer::PdfWriter;
