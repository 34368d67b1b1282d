// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Surface — the laid-out document the screen shows and pixel exports capture.
//
// A `Surface` is an immutable display list: positioned text blocks plus the
// template styling. `PreviewSlot` is the stable handle the export engine
// addresses; it always holds the surface that was last rendered.

use std::sync::{Arc, RwLock};

use papersmith_core::error::{PapersmithError, Result};
use papersmith_core::template::{BorderStyle, Emblem, Rgb, Template};
use papersmith_core::types::{DocumentKind, FieldId};
use uuid::Uuid;

/// A4 at 96 dpi.
pub const PAGE_WIDTH_PX: u32 = 794;
pub const PAGE_HEIGHT_PX: u32 = 1123;

/// Tallest surface the pixel exports accept: ten A4 pages.
pub const MAX_SURFACE_HEIGHT_PX: u32 = 10 * PAGE_HEIGHT_PX;

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// What a block shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Document kind heading.
    Heading,
    /// Fixed wording that is part of the layout.
    Static,
    /// Value of a model field (or its placeholder).
    Field(FieldId),
}

/// Typographic role of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Subheading,
    Body,
    Label,
    ListItem,
    Caption,
    Signature,
}

impl Role {
    /// Font size in pixels.
    pub fn font_px(&self) -> u32 {
        match self {
            Self::Heading => 34,
            Self::Subheading => 24,
            Self::Body | Self::ListItem | Self::Signature => 16,
            Self::Label | Self::Caption => 13,
        }
    }

    pub fn line_height_px(&self) -> u32 {
        self.font_px() * 4 / 3
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Heading | Self::Subheading | Self::Label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One positioned run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub slot: Slot,
    pub role: Role,
    pub align: Align,
    /// Full text of the block (placeholder text when `placeholder`).
    pub text: String,
    /// `text` wrapped to the block width.
    pub lines: Vec<String>,
    pub rect: Rect,
    pub placeholder: bool,
}

impl Block {
    /// Text colour under `style`. Placeholders use the accent colour.
    pub fn color(&self, style: &Styling) -> Rgb {
        if self.placeholder {
            return style.accent;
        }
        match (self.slot, self.role) {
            (Slot::Heading, _) if style.header_band => style.paper,
            (Slot::Heading, _) | (_, Role::Label) => style.primary,
            _ => style.ink,
        }
    }
}

/// Non-text paint laid out by the renderer: header band, frame and emblem.
///
/// Outlines are one pixel wide and sit on the edge pixels of their shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoration {
    Fill { rect: Rect, color: Rgb },
    Outline { rect: Rect, color: Rgb },
    Disc { cx: u32, cy: u32, r: u32, color: Rgb },
    Ring { cx: u32, cy: u32, r: u32, color: Rgb },
    Polygon { points: Vec<(u32, u32)>, color: Rgb },
}

/// Presentation taken from the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styling {
    pub template_id: &'static str,
    pub paper: Rgb,
    pub ink: Rgb,
    pub primary: Rgb,
    pub accent: Rgb,
    pub border: BorderStyle,
    pub header_band: bool,
    pub emblem: Emblem,
}

impl Styling {
    pub fn from_template(template: &Template) -> Self {
        Self {
            template_id: template.id,
            paper: template.palette.paper,
            ink: template.palette.ink,
            primary: template.palette.primary,
            accent: template.palette.accent,
            border: template.layout.border,
            header_band: template.layout.header_band,
            emblem: template.layout.emblem,
        }
    }
}

/// A fully laid-out document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub kind: DocumentKind,
    pub width: u32,
    pub height: u32,
    pub blocks: Vec<Block>,
    /// Painted below the blocks, in order.
    pub decorations: Vec<Decoration>,
    pub styling: Styling,
}

impl Surface {
    /// Reject surfaces too tall to rasterise. Both pixel formats share this
    /// limit so they always agree on dimensions.
    pub fn ensure_rasterisable(&self) -> Result<()> {
        if self.height > MAX_SURFACE_HEIGHT_PX {
            return Err(PapersmithError::SurfaceTooLarge {
                height: self.height,
                max: MAX_SURFACE_HEIGHT_PX,
            });
        }
        Ok(())
    }

    /// Block texts in layout order.
    pub fn text_content(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.text.as_str()).collect()
    }

    /// Blocks showing `field`.
    pub fn field_blocks(&self, field: FieldId) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(move |b| b.slot == Slot::Field(field))
    }
}

/// Stable identity of a preview slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub Uuid);

impl std::fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A surface as captured from a slot.
#[derive(Debug, Clone)]
pub struct Captured {
    pub handle: SurfaceHandle,
    pub revision: u64,
    pub surface: Arc<Surface>,
}

/// The on-screen preview target. Screen display and pixel exports read the
/// same published surface.
#[derive(Debug)]
pub struct PreviewSlot {
    handle: SurfaceHandle,
    current: RwLock<Option<(u64, Arc<Surface>)>>,
}

impl PreviewSlot {
    /// A slot with nothing rendered into it yet.
    pub fn detached() -> Self {
        Self {
            handle: SurfaceHandle(Uuid::new_v4()),
            current: RwLock::new(None),
        }
    }

    pub fn handle(&self) -> SurfaceHandle {
        self.handle
    }

    /// Replace the shown surface. Returns the new revision.
    pub fn publish(&self, surface: Surface) -> u64 {
        let mut current = self.current.write().unwrap_or_else(|p| p.into_inner());
        let revision = current.as_ref().map_or(1, |(rev, _)| rev + 1);
        *current = Some((revision, Arc::new(surface)));
        revision
    }

    pub fn is_attached(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .is_some()
    }

    /// The surface as last rendered, or `NothingToExport` before the first
    /// render.
    pub fn capture(&self) -> Result<Captured> {
        let current = self.current.read().unwrap_or_else(|p| p.into_inner());
        match current.as_ref() {
            Some((revision, surface)) => Ok(Captured {
                handle: self.handle,
                revision: *revision,
                surface: Arc::clone(surface),
            }),
            None => Err(PapersmithError::NothingToExport),
        }
    }
}
