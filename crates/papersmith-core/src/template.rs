// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Template catalog — named visual themes. A template only decides how a
// document looks; it never carries document content.

use serde::Serialize;

use crate::error::PapersmithError;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex notation, e.g. `#1f3a93`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Headings, header band, border.
    pub primary: Rgb,
    /// Emblem and rules.
    pub accent: Rgb,
    /// Page background.
    pub paper: Rgb,
    /// Body text.
    pub ink: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BorderStyle {
    None,
    Single,
    Double,
    /// Double frame with corner ornaments.
    Ornate,
}

/// Icon drawn in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Emblem {
    Seal,
    Star,
    Laurel,
    Monogram,
}

/// Decoration hints. None of these move or resize content blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutHints {
    pub border: BorderStyle,
    /// Fill a coloured band behind the heading area.
    pub header_band: bool,
    pub emblem: Emblem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub palette: Palette,
    pub layout: LayoutHints,
}

const CATALOG: [Template; 4] = [
    Template {
        id: "classic",
        name: "Classic Navy",
        palette: Palette {
            primary: Rgb(0x1f, 0x3a, 0x93),
            accent: Rgb(0xc9, 0xa2, 0x27),
            paper: Rgb(0xff, 0xff, 0xff),
            ink: Rgb(0x22, 0x22, 0x22),
        },
        layout: LayoutHints {
            border: BorderStyle::Double,
            header_band: false,
            emblem: Emblem::Seal,
        },
    },
    Template {
        id: "modern",
        name: "Modern Teal",
        palette: Palette {
            primary: Rgb(0x00, 0x7a, 0x78),
            accent: Rgb(0xff, 0x8c, 0x42),
            paper: Rgb(0xfa, 0xfa, 0xfa),
            ink: Rgb(0x1b, 0x1b, 0x1b),
        },
        layout: LayoutHints {
            border: BorderStyle::Single,
            header_band: true,
            emblem: Emblem::Star,
        },
    },
    Template {
        id: "elegant",
        name: "Elegant Burgundy",
        palette: Palette {
            primary: Rgb(0x7b, 0x1e, 0x3a),
            accent: Rgb(0xb8, 0x8a, 0x44),
            paper: Rgb(0xfd, 0xf8, 0xef),
            ink: Rgb(0x2b, 0x21, 0x1d),
        },
        layout: LayoutHints {
            border: BorderStyle::Ornate,
            header_band: false,
            emblem: Emblem::Laurel,
        },
    },
    Template {
        id: "minimal",
        name: "Minimal Mono",
        palette: Palette {
            primary: Rgb(0x33, 0x33, 0x33),
            accent: Rgb(0x99, 0x99, 0x99),
            paper: Rgb(0xff, 0xff, 0xff),
            ink: Rgb(0x11, 0x11, 0x11),
        },
        layout: LayoutHints {
            border: BorderStyle::None,
            header_band: false,
            emblem: Emblem::Monogram,
        },
    },
];

/// Every available template, in display order.
pub fn catalog() -> &'static [Template] {
    &CATALOG
}

/// The template used when nothing else is configured.
pub fn default_template() -> &'static Template {
    &CATALOG[0]
}

/// Look a template up by id.
pub fn find(id: &str) -> Result<&'static Template, PapersmithError> {
    CATALOG
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| PapersmithError::UnknownTemplate(id.to_owned()))
}
