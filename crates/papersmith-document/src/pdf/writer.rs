// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — lays out a `PdfSheet` with `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use papersmith_core::error::Result;
use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, TextItem,
};
use tracing::{debug, info, instrument};

use super::sheet::PdfSheet;
use crate::export::PdfEncoder;
use crate::render::wrap_text;

const TITLE_SIZE_PT: f32 = 20.0;
const BODY_SIZE_PT: f32 = 11.0;
const LINE_HEIGHT_PT: f32 = 15.0;
const MARGIN_MM: f32 = 25.0;
const VALUE_COLUMN_MM: f32 = 75.0;

/// Text-only PDF encoder with Helvetica at fixed positions.
pub struct PdfWriter {
    page_mm: (f32, f32),
}

impl PdfWriter {
    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            page_mm: (width_mm, height_mm),
        }
    }

    pub fn a4() -> Self {
        Self::new(210.0, 297.0)
    }

    /// Build the page operations for `sheet`.
    ///
    /// Every wrapped line checks the bottom margin on its own, so a long value
    /// continues on the next page. An entry's label sits on its first line.
    fn layout(&self, sheet: &PdfSheet) -> Vec<Vec<Op>> {
        let (page_w, page_h) = self.page_mm;
        let margin_pt = Mm(MARGIN_MM).into_pt().0;
        let label_x = margin_pt;
        let value_x = Mm(VALUE_COLUMN_MM).into_pt().0;
        let top = Mm(page_h).into_pt().0 - margin_pt;

        // Average Helvetica glyph width is roughly half the font size; 1pt = 0.3528mm.
        let value_width_mm = page_w - VALUE_COLUMN_MM - MARGIN_MM;
        let max_chars = (value_width_mm / (0.5 * BODY_SIZE_PT * 0.3528)) as usize;

        let mut pages = Vec::new();
        let mut ops = Vec::new();
        push_text(&mut ops, &sheet.title, label_x, top, TITLE_SIZE_PT, BuiltinFont::HelveticaBold);
        let mut y = top - 2.5 * LINE_HEIGHT_PT;

        for (label, value) in &sheet.entries {
            let lines = wrap_text(value, max_chars);
            for row in 0..lines.len().max(1) {
                if y < margin_pt {
                    pages.push(std::mem::take(&mut ops));
                    y = top;
                }
                if row == 0 {
                    let bold = BuiltinFont::HelveticaBold;
                    push_text(&mut ops, label, label_x, y, BODY_SIZE_PT, bold);
                }
                if let Some(line) = lines.get(row) {
                    push_text(&mut ops, line, value_x, y, BODY_SIZE_PT, BuiltinFont::Helvetica);
                }
                y -= LINE_HEIGHT_PT;
            }
            y -= LINE_HEIGHT_PT / 2.0;
        }

        pages.push(ops);
        pages
    }
}

fn push_text(ops: &mut Vec<Op>, text: &str, x: f32, y: f32, size: f32, font: BuiltinFont) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point { x: Pt(x), y: Pt(y) },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(size),
        font: font.clone(),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text.to_owned())],
        font,
    });
    ops.push(Op::EndTextSection);
}

impl PdfEncoder for PdfWriter {
    #[instrument(skip_all, fields(title = %sheet.title, entries = sheet.entries.len()))]
    fn encode(&self, sheet: &PdfSheet) -> Result<Vec<u8>> {
        let (w, h) = self.page_mm;
        let pages: Vec<PdfPage> = self
            .layout(sheet)
            .into_iter()
            .map(|ops| PdfPage::new(Mm(w), Mm(h), ops))
            .collect();
        debug!(pages = pages.len(), "PDF layout complete");

        let mut doc = PdfDocument::new(&sheet.title);
        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        info!(bytes = output.len(), warnings = warnings.len(), "PDF written");
        Ok(output)
    }
}
