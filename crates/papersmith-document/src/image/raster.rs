// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rasteriser — paints a `Surface` into an RGBA bitmap at its natural size using
// the `image` and `imageproc` crates.
//
// Text is drawn with the Times faces bundled in printpdf (the same serif the
// preview asks the webview for) unless a TrueType font is configured.
// Decorations come from the surface, so the bitmap and the preview paint the
// same geometry.

use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_hollow_rect_mut,
    draw_polygon_mut, draw_text_mut, text_size,
};
use imageproc::point::Point;
use imageproc::rect::Rect as PixelRect;
use papersmith_core::error::{PapersmithError, Result};
use papersmith_core::template::Rgb;
use printpdf::BuiltinFont;
use tracing::{debug, instrument};

use crate::render::{Align, Block, Decoration, Rect, Surface};

/// Regular, bold and italic faces.
#[derive(Clone)]
struct FontSet {
    regular: FontArc,
    bold: FontArc,
    italic: FontArc,
}

impl FontSet {
    fn for_block(&self, block: &Block) -> &FontArc {
        if block.placeholder {
            &self.italic
        } else if block.role.is_bold() {
            &self.bold
        } else {
            &self.regular
        }
    }
}

/// Paints surfaces into bitmaps.
#[derive(Clone)]
pub struct Rasterizer {
    fonts: FontSet,
}

impl Rasterizer {
    /// Rasteriser using the bundled Times Roman, Bold and Italic faces.
    pub fn new() -> Result<Self> {
        let face = |font: BuiltinFont| parse_font(font.get_subset_font().bytes);
        Ok(Self {
            fonts: FontSet {
                regular: face(BuiltinFont::TimesRoman)?,
                bold: face(BuiltinFont::TimesBold)?,
                italic: face(BuiltinFont::TimesItalic)?,
            },
        })
    }

    /// Rasteriser drawing every block with one TrueType/OpenType font.
    pub fn from_font_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = parse_font(bytes)?;
        Ok(Self {
            fonts: FontSet {
                regular: font.clone(),
                bold: font.clone(),
                italic: font,
            },
        })
    }

    /// Paint `surface` at `surface.width` x `surface.height`.
    #[instrument(
        skip_all,
        fields(kind = %surface.kind, width = surface.width, height = surface.height)
    )]
    pub fn rasterize(&self, surface: &Surface) -> RgbaImage {
        let style = &surface.styling;
        let mut canvas = RgbaImage::from_pixel(surface.width, surface.height, rgba(style.paper));

        for decoration in &surface.decorations {
            paint(&mut canvas, decoration);
        }
        for block in &surface.blocks {
            self.draw_block(&mut canvas, block, rgba(block.color(style)));
        }

        debug!(
            decorations = surface.decorations.len(),
            blocks = surface.blocks.len(),
            "surface rasterised"
        );
        canvas
    }

    fn draw_block(&self, canvas: &mut RgbaImage, block: &Block, color: Rgba<u8>) {
        let font = self.fonts.for_block(block);
        let font_px = block.role.font_px();
        let scale = PxScale::from(font_px as f32);
        let line_height = block.role.line_height_px();

        for (i, line) in block.lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let x = match block.align {
                Align::Left => block.rect.x,
                Align::Center => {
                    let (line_width, _) = text_size(scale, font, line);
                    block.rect.x + block.rect.width.saturating_sub(line_width) / 2
                }
            };
            let y = block.rect.y + i as u32 * line_height + (line_height - font_px) / 2;
            draw_text_mut(canvas, color, x as i32, y as i32, scale, font, line);
        }
    }
}

fn parse_font(bytes: Vec<u8>) -> Result<FontArc> {
    FontArc::try_from_vec(bytes)
        .map_err(|err| PapersmithError::ImageError(format!("invalid font: {err}")))
}

fn paint(canvas: &mut RgbaImage, decoration: &Decoration) {
    match decoration {
        Decoration::Fill { rect, color } => {
            draw_filled_rect_mut(canvas, pixel_rect(rect), rgba(*color));
        }
        Decoration::Outline { rect, color } => {
            draw_hollow_rect_mut(canvas, pixel_rect(rect), rgba(*color));
        }
        Decoration::Disc { cx, cy, r, color } => {
            draw_filled_circle_mut(canvas, (*cx as i32, *cy as i32), *r as i32, rgba(*color));
        }
        Decoration::Ring { cx, cy, r, color } => {
            draw_hollow_circle_mut(canvas, (*cx as i32, *cy as i32), *r as i32, rgba(*color));
        }
        Decoration::Polygon { points, color } => {
            let points: Vec<Point<i32>> = points
                .iter()
                .map(|&(x, y)| Point::new(x as i32, y as i32))
                .collect();
            draw_polygon_mut(canvas, &points, rgba(*color));
        }
    }
}

fn pixel_rect(rect: &Rect) -> PixelRect {
    PixelRect::at(rect.x as i32, rect.y as i32).of_size(rect.width.max(1), rect.height.max(1))
}

fn rgba(color: Rgb) -> Rgba<u8> {
    Rgba([color.0, color.1, color.2, 255])
}

#[cfg(test)]
mod tests {
    use super::*;
    use papersmith_core::model::DocumentModel;
    use papersmith_core::template::{catalog, default_template, find};
    use papersmith_core::types::{DocumentKind, FieldId};

    use crate::form::apply_input;
    use crate::render::{PAGE_HEIGHT_PX, PAGE_WIDTH_PX, render};

    fn rasterizer() -> Rasterizer {
        Rasterizer::new().unwrap()
    }

    #[test]
    fn bitmap_has_the_surface_size() {
        let model = DocumentModel::new(DocumentKind::Certificate, "1 May 2026");
        let surface = render(&model, default_template());
        let image = rasterizer().rasterize(&surface);
        assert_eq!(image.dimensions(), (PAGE_WIDTH_PX, PAGE_HEIGHT_PX));
    }

    #[test]
    fn every_template_paints_without_panicking() {
        let rasterizer = rasterizer();
        for kind in DocumentKind::ALL {
            let model = DocumentModel::new(kind, "");
            for template in catalog() {
                let surface = render(&model, template);
                let image = rasterizer.rasterize(&surface);
                assert_eq!(image.width(), surface.width);
            }
        }
    }

    #[test]
    fn paper_colour_fills_untouched_pixels() {
        let model = DocumentModel::new(DocumentKind::Letterhead, "today");
        let template = find("minimal").unwrap();
        let surface = render(&model, template);
        let image = rasterizer().rasterize(&surface);
        // Bottom-left corner: no border, no text.
        let pixel = image.get_pixel(2, surface.height - 2);
        assert_eq!(pixel.0, [0xff, 0xff, 0xff, 255]);
    }

    #[test]
    fn text_is_inked() {
        let model = DocumentModel::new(DocumentKind::Letterhead, "today");
        let template = find("minimal").unwrap();
        let surface = render(&model, template);
        let heading = &surface.blocks[0];
        let image = rasterizer().rasterize(&surface);
        let rows = heading.rect.y..heading.rect.y + heading.role.line_height_px();
        let inked = rows
            .flat_map(|y| (heading.rect.x..heading.rect.x + 60).map(move |x| (x, y)))
            .any(|(x, y)| image.get_pixel(x, y).0 != [0xff, 0xff, 0xff, 255]);
        assert!(inked);
    }

    #[test]
    fn different_names_give_different_pixels() {
        let rasterizer = rasterizer();
        let paint = |name: &str| {
            let model = DocumentModel::new(DocumentKind::Certificate, "1 May 2026");
            let model = apply_input(&model, FieldId::Name, name).unwrap();
            rasterizer.rasterize(&render(&model, default_template()))
        };
        // Same length, so only the glyphs differ.
        assert_ne!(paint("Ada Lovelace"), paint("Bob Marleyxx"));
    }

    #[test]
    fn decorations_are_painted() {
        let model = DocumentModel::new(DocumentKind::Letterhead, "today");
        let template = find("classic").unwrap();
        let surface = render(&model, template);
        let image = rasterizer().rasterize(&surface);
        let Some(Decoration::Outline { rect, color }) = surface
            .decorations
            .iter()
            .find(|d| matches!(d, Decoration::Outline { .. }))
        else {
            panic!("classic template has a frame");
        };
        let mid_y = rect.y + rect.height / 2;
        assert_eq!(image.get_pixel(rect.x, mid_y).0, rgba(*color).0);
    }

    #[test]
    fn garbage_font_is_rejected() {
        assert!(Rasterizer::from_font_bytes(vec![0, 1, 2, 3]).is_err());
    }
}
