// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview renderer — lays a document model out as a `Surface`.
//
// Layout depends only on the model: block order, text and rectangles are the
// same for every template. The template contributes `Styling` and nothing else.
// Only fields visible for the model's kind are ever placed on the surface.

mod decor;
pub mod surface;

pub use surface::{
    Align, Block, Captured, Decoration, MAX_SURFACE_HEIGHT_PX, PAGE_HEIGHT_PX, PAGE_WIDTH_PX,
    PreviewSlot, Rect, Role, Slot, Styling, Surface, SurfaceHandle,
};

use papersmith_core::model::DocumentModel;
use papersmith_core::template::Template;
use papersmith_core::types::{DocumentKind, FieldId, FieldShape};
use tracing::{debug, instrument};

use crate::form::is_visible;

/// Left/right/top/bottom page margin in pixels.
pub const MARGIN_PX: u32 = 72;

/// Placeholder shown when no requested service is ticked.
const NO_SERVICES: &str = "[Requested Services]";

/// Lay out `model` with `template`'s styling.
///
/// Pure: the model is only read, and equal inputs give equal surfaces.
#[instrument(skip_all, fields(kind = %model.kind, template = template.id))]
pub fn render(model: &DocumentModel, template: &Template) -> Surface {
    let mut layout = Layout::new(model);
    match model.kind {
        DocumentKind::Certificate => certificate(&mut layout),
        DocumentKind::Letterhead => letterhead(&mut layout),
        DocumentKind::Clearance => clearance(&mut layout),
        DocumentKind::Collaboration => collaboration(&mut layout),
    }
    let surface = layout.finish(Styling::from_template(template));
    debug!(
        blocks = surface.blocks.len(),
        height = surface.height,
        "surface laid out"
    );
    surface
}

// -- Per-kind layouts ---------------------------------------------------------

fn certificate(l: &mut Layout<'_>) {
    l.align = Align::Center;
    l.heading();
    l.gap(8);
    l.field(FieldId::Organization, Role::Subheading);
    l.gap(28);
    l.fixed("This certificate is proudly presented to", Role::Caption);
    l.gap(8);
    l.field(FieldId::Name, Role::Subheading);
    l.field(FieldId::Title, Role::Body);
    l.gap(16);
    l.fixed("in recognition of", Role::Caption);
    l.field(FieldId::Purpose, Role::Body);
    l.field(FieldId::Department, Role::Caption);
    l.gap(40);
    l.labelled("Date", FieldId::Date);
    l.labelled("Certificate No.", FieldId::CertificateNumber);
    l.labelled("Valid Until", FieldId::ValidUntil);
    l.gap(32);
    l.field(FieldId::Authority, Role::Signature);
    l.fixed("Issuing Authority", Role::Caption);
}

fn letterhead(l: &mut Layout<'_>) {
    l.heading();
    l.gap(24);
    l.field(FieldId::Date, Role::Body);
    l.gap(16);
    l.field(FieldId::CustomNote, Role::Body);
}

fn clearance(l: &mut Layout<'_>) {
    l.heading();
    l.field(FieldId::Date, Role::Body);
    l.gap(16);
    l.fixed("Representative", Role::Label);
    l.field(FieldId::Name, Role::Body);
    l.field(FieldId::Title, Role::Body);
    l.field(FieldId::Organization, Role::Body);
    l.gap(12);
    l.fixed("Visit", Role::Label);
    l.field(FieldId::Purpose, Role::Body);
    l.field(FieldId::VisitLocation, Role::Body);
    l.field(FieldId::VisitTime, Role::Body);
    l.gap(12);
    l.fixed("Frontliner", Role::Label);
    l.field(FieldId::FrontlinerName, Role::Body);
    l.field(FieldId::FrontlinerPosition, Role::Body);
    l.field(FieldId::FrontlinerPhone, Role::Caption);
    l.field(FieldId::FrontlinerEmail, Role::Caption);
    l.gap(12);
    l.fixed("Interest", Role::Label);
    l.field(FieldId::Interest, Role::Body);
    l.gap(12);
    l.fixed("Requested Services", Role::Label);
    l.services();
    l.gap(12);
    l.fixed("Notes", Role::Label);
    l.field(FieldId::Notes, Role::Body);
    l.gap(12);
    l.fixed("Feedback", Role::Label);
    l.field(FieldId::Feedback, Role::Body);
}

fn collaboration(l: &mut Layout<'_>) {
    l.heading();
    l.field(FieldId::Date, Role::Body);
    l.gap(16);
    l.fixed("Partner", Role::Label);
    l.field(FieldId::Organization, Role::Subheading);
    l.field(FieldId::Name, Role::Body);
    l.field(FieldId::Title, Role::Body);
    l.gap(12);
    l.fixed("Subject", Role::Label);
    l.field(FieldId::Purpose, Role::Body);
    l.gap(12);
    l.field(FieldId::Introduction, Role::Body);
    l.gap(12);
    l.fixed(FieldId::Scope.label(), Role::Label);
    l.field(FieldId::Scope, Role::ListItem);
    l.gap(12);
    l.fixed(FieldId::Understanding.label(), Role::Label);
    l.field(FieldId::Understanding, Role::ListItem);
    l.gap(32);
    l.fixed("For and on behalf of the partner,", Role::Body);
    l.field(FieldId::SignatoryName, Role::Signature);
    l.field(FieldId::SignatoryTitle, Role::Caption);
    l.field(FieldId::Email, Role::Caption);
    l.field(FieldId::Phone, Role::Caption);
}

// -- Layout builder -----------------------------------------------------------

struct Layout<'m> {
    model: &'m DocumentModel,
    blocks: Vec<Block>,
    y: u32,
    align: Align,
}

impl<'m> Layout<'m> {
    fn new(model: &'m DocumentModel) -> Self {
        Self {
            model,
            blocks: Vec::new(),
            y: MARGIN_PX,
            align: Align::Left,
        }
    }

    fn gap(&mut self, px: u32) {
        self.y += px;
    }

    fn heading(&mut self) {
        self.push(Slot::Heading, Role::Heading, self.model.kind.title().to_owned(), false);
        self.gap(12);
    }

    fn fixed(&mut self, text: &str, role: Role) {
        self.push(Slot::Static, role, text.to_owned(), false);
    }

    /// A small label followed by the field value, both left-aligned.
    fn labelled(&mut self, label: &str, field: FieldId) {
        if !is_visible(self.model.kind, field) {
            return;
        }
        let align = std::mem::replace(&mut self.align, Align::Left);
        self.fixed(label, Role::Label);
        self.field(field, Role::Body);
        self.align = align;
    }

    fn field(&mut self, field: FieldId, role: Role) {
        let model = self.model;
        if !is_visible(model.kind, field) {
            return;
        }
        match field.shape() {
            FieldShape::Text => match model.text(field) {
                Some(text) => self.push(Slot::Field(field), role, text.to_owned(), false),
                None => self.push(Slot::Field(field), role, field.placeholder(), true),
            },
            FieldShape::Lines => {
                let items = model.lines(field);
                if items.is_empty() {
                    self.push(Slot::Field(field), role, field.placeholder(), true);
                }
                for item in items {
                    self.push(Slot::Field(field), role, format!("\u{2022} {item}"), false);
                }
            }
            FieldShape::Choice => {
                let text = model.clearance.interest.describe().to_owned();
                self.push(Slot::Field(field), role, text, false);
            }
            FieldShape::Flag => {
                // Flags are shown through `services`, never on their own.
            }
        }
    }

    fn services(&mut self) {
        let model = self.model;
        let services = &model.clearance.requested_services;
        let mut entries: Vec<(FieldId, String)> = [
            (FieldId::ServiceConsultation, services.consultation),
            (FieldId::ServiceTraining, services.training),
            (FieldId::ServicePartnership, services.partnership),
            (FieldId::ServicePublication, services.publication),
        ]
        .into_iter()
        .filter(|(field, on)| *on && is_visible(model.kind, *field))
        .map(|(field, _)| (field, field.label().to_owned()))
        .collect();
        let other = model
            .text(FieldId::ServiceOther)
            .filter(|_| is_visible(model.kind, FieldId::ServiceOther));
        if let Some(other) = other {
            entries.push((FieldId::ServiceOther, other.to_owned()));
        }

        if entries.is_empty() {
            self.push(
                Slot::Field(FieldId::ServiceOther),
                Role::ListItem,
                NO_SERVICES.to_owned(),
                true,
            );
        }
        for (field, label) in entries {
            self.push(Slot::Field(field), Role::ListItem, format!("\u{2022} {label}"), false);
        }
    }

    fn push(&mut self, slot: Slot, role: Role, text: String, placeholder: bool) {
        let width = PAGE_WIDTH_PX - 2 * MARGIN_PX;
        let lines = wrap_text(&text, chars_per_line(width, role.font_px()));
        let height = lines.len().max(1) as u32 * role.line_height_px();
        let rect = Rect {
            x: MARGIN_PX,
            y: self.y,
            width,
            height,
        };
        self.y += height + 4;
        self.blocks.push(Block {
            slot,
            role,
            align: self.align,
            text,
            lines,
            rect,
            placeholder,
        });
    }

    fn finish(self, styling: Styling) -> Surface {
        let height = PAGE_HEIGHT_PX.max(self.y + MARGIN_PX);
        let heading_bottom = self
            .blocks
            .iter()
            .find(|b| b.slot == Slot::Heading)
            .map_or(0, |b| b.rect.bottom());
        Surface {
            kind: self.model.kind,
            width: PAGE_WIDTH_PX,
            height,
            decorations: decor::decorate(&styling, PAGE_WIDTH_PX, height, heading_bottom),
            blocks: self.blocks,
            styling,
        }
    }
}

/// Approximate glyph advance: half the font size.
pub fn estimated_text_width(text: &str, font_px: u32) -> u32 {
    text.chars().count() as u32 * font_px / 2
}

fn chars_per_line(width_px: u32, font_px: u32) -> usize {
    ((width_px * 2) / font_px.max(1)).max(1) as usize
}

// -- Text wrapping helper -----------------------------------------------------

/// Wrap a multi-line string so that no line exceeds `max_width` characters.
///
/// Splits on existing newlines first, then performs simple word-wrap within each
/// paragraph. Words longer than `max_width` are force-broken on char
/// boundaries.
pub(crate) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut result = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if word_len > max_width {
                if !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let chars: Vec<char> = word.chars().collect();
                let mut chunks = chars.chunks(max_width).peekable();
                while let Some(chunk) = chunks.next() {
                    if chunks.peek().is_some() {
                        result.push(chunk.iter().collect());
                    } else {
                        current = chunk.iter().collect();
                        current_len = chunk.len();
                    }
                }
            } else if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= max_width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                result.push(std::mem::replace(&mut current, word.to_owned()));
                current_len = word_len;
            }
        }

        result.push(current);
    }

    if result.is_empty() {
        result.push(String::new());
    }
    result
}
