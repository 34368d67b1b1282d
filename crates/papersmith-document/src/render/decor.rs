// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Template decorations as plain geometry. The screen preview and the
// rasteriser both paint exactly this list.

use papersmith_core::template::{BorderStyle, Emblem};

use super::MARGIN_PX;
use super::surface::{Decoration, Rect, Styling};

const OUTER_FRAME_INSET: u32 = 24;
const INNER_FRAME_INSET: u32 = 30;
const CORNER_PX: u32 = 10;
const EMBLEM_RADIUS: u32 = 22;

/// Band, frame and emblem for a `width` x `height` page whose heading ends at
/// `heading_bottom`.
pub(crate) fn decorate(
    style: &Styling,
    width: u32,
    height: u32,
    heading_bottom: u32,
) -> Vec<Decoration> {
    let mut out = Vec::new();

    if style.header_band {
        out.push(Decoration::Fill {
            rect: Rect {
                x: 0,
                y: 0,
                width,
                height: (heading_bottom + 16).min(height),
            },
            color: style.primary,
        });
    }

    let frame = |inset: u32| {
        (width > 2 * inset && height > 2 * inset).then(|| Decoration::Outline {
            rect: Rect {
                x: inset,
                y: inset,
                width: width - 2 * inset,
                height: height - 2 * inset,
            },
            color: style.primary,
        })
    };
    match style.border {
        BorderStyle::None => {}
        BorderStyle::Single => out.extend(frame(OUTER_FRAME_INSET)),
        BorderStyle::Double => {
            out.extend(frame(OUTER_FRAME_INSET));
            out.extend(frame(INNER_FRAME_INSET));
        }
        BorderStyle::Ornate => {
            out.extend(frame(OUTER_FRAME_INSET));
            out.extend(frame(INNER_FRAME_INSET));
            let near = OUTER_FRAME_INSET - 4;
            let far_x = width.saturating_sub(near + CORNER_PX);
            let far_y = height.saturating_sub(near + CORNER_PX);
            for (x, y) in [(near, near), (far_x, near), (near, far_y), (far_x, far_y)] {
                out.push(Decoration::Fill {
                    rect: Rect {
                        x,
                        y,
                        width: CORNER_PX,
                        height: CORNER_PX,
                    },
                    color: style.accent,
                });
            }
        }
    }

    emblem(&mut out, style, width);
    out
}

fn emblem(out: &mut Vec<Decoration>, style: &Styling, width: u32) {
    let r = EMBLEM_RADIUS;
    let cx = width.saturating_sub(MARGIN_PX + r);
    let cy = MARGIN_PX + r;
    let (primary, accent) = (style.primary, style.accent);

    match style.emblem {
        Emblem::Seal => {
            out.push(Decoration::Disc { cx, cy, r, color: accent });
            out.push(Decoration::Ring { cx, cy, r: r + 4, color: primary });
        }
        Emblem::Star => {
            let k = r / 3;
            out.push(Decoration::Polygon {
                points: vec![
                    (cx, cy - r),
                    (cx + k, cy - k),
                    (cx + r, cy),
                    (cx + k, cy + k),
                    (cx, cy + r),
                    (cx - k, cy + k),
                    (cx - r, cy),
                    (cx - k, cy - k),
                ],
                color: accent,
            });
        }
        Emblem::Laurel => {
            out.push(Decoration::Ring { cx: cx - r / 2, cy, r, color: accent });
            out.push(Decoration::Ring { cx: cx + r / 2, cy, r, color: accent });
            out.push(Decoration::Disc { cx, cy, r: r / 4, color: primary });
        }
        Emblem::Monogram => {
            let side = 2 * r;
            out.push(Decoration::Fill {
                rect: Rect { x: cx - r, y: cy - r, width: side, height: side },
                color: accent,
            });
            out.push(Decoration::Outline {
                rect: Rect {
                    x: cx - r - 4,
                    y: cy - r - 4,
                    width: side + 8,
                    height: side + 8,
                },
                color: primary,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papersmith_core::template::find;

    use crate::render::surface::{PAGE_HEIGHT_PX, PAGE_WIDTH_PX};

    fn styling(id: &str) -> Styling {
        Styling::from_template(find(id).unwrap())
    }

    #[test]
    fn band_only_with_header_templates() {
        let with_band = decorate(&styling("modern"), PAGE_WIDTH_PX, PAGE_HEIGHT_PX, 100);
        assert!(matches!(
            with_band.first(),
            Some(Decoration::Fill { rect, .. }) if rect.y == 0 && rect.height == 116
        ));
        let plain = decorate(&styling("minimal"), PAGE_WIDTH_PX, PAGE_HEIGHT_PX, 100);
        assert!(!plain.iter().any(
            |d| matches!(d, Decoration::Fill { rect, .. } if rect.width == PAGE_WIDTH_PX)
        ));
    }

    #[test]
    fn ornate_frame_has_two_outlines_and_four_corners() {
        let out = decorate(&styling("elegant"), PAGE_WIDTH_PX, PAGE_HEIGHT_PX, 100);
        let outlines = out
            .iter()
            .filter(|d| matches!(d, Decoration::Outline { .. }))
            .count();
        let corners = out
            .iter()
            .filter(|d| matches!(d, Decoration::Fill { rect, .. } if rect.width == CORNER_PX))
            .count();
        assert_eq!((outlines, corners), (2, 4));
    }

    #[test]
    fn everything_stays_on_the_page() {
        for id in ["classic", "modern", "elegant", "minimal"] {
            for d in decorate(&styling(id), PAGE_WIDTH_PX, PAGE_HEIGHT_PX, 100) {
                let inside = match &d {
                    Decoration::Fill { rect, .. } | Decoration::Outline { rect, .. } => {
                        rect.x + rect.width <= PAGE_WIDTH_PX && rect.bottom() <= PAGE_HEIGHT_PX
                    }
                    Decoration::Disc { cx, cy, r, .. } | Decoration::Ring { cx, cy, r, .. } => {
                        *cx + *r < PAGE_WIDTH_PX && *cy + *r < PAGE_HEIGHT_PX
                    }
                    Decoration::Polygon { points, .. } => points
                        .iter()
                        .all(|&(x, y)| x < PAGE_WIDTH_PX && y < PAGE_HEIGHT_PX),
                };
                assert!(inside, "{id}: {d:?}");
            }
        }
    }
}
