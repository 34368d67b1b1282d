// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview — draws the published surface as absolutely positioned HTML over an
// SVG layer of its decorations.
//
// Positions, sizes, colours and decoration geometry come from the surface
// alone, so what is shown here is what PNG/JPEG exports rasterise.

use std::sync::Arc;

use dioxus::prelude::*;

use papersmith_document::Surface;
use papersmith_document::render::{Align, Block, Decoration, Styling};

/// On-screen scale of the A4 page.
const SCALE: f32 = 0.75;

/// Element id the print stylesheet in `main.rs` keeps visible.
const PREVIEW_ID: &str = "papersmith-preview";

/// Serif stack matching the rasteriser's bundled Times faces.
const FONT_FAMILY: &str = "'Times New Roman', Times, 'Liberation Serif', serif";

#[component]
pub fn Preview(surface: Arc<Surface>) -> Element {
    let style = surface.styling;
    let scaled_w = (surface.width as f32 * SCALE).round();
    let scaled_h = (surface.height as f32 * SCALE).round();
    let (width, height) = (surface.width, surface.height);
    let frame_css = format!(
        "width: {scaled_w}px; height: {scaled_h}px; overflow: hidden; \
         box-shadow: 0 2px 12px rgba(0,0,0,0.15);"
    );
    let page_css = format!(
        "position: relative; width: {width}px; height: {height}px; \
         transform: scale({SCALE}); transform-origin: top left; background: {};",
        style.paper.to_hex()
    );

    rsx! {
        div { id: PREVIEW_ID, style: frame_css,
            div { style: page_css,

                svg {
                    width: "{width}",
                    height: "{height}",
                    view_box: "0 0 {width} {height}",
                    style: "position: absolute; left: 0; top: 0;",
                    for (i, decoration) in surface.decorations.iter().enumerate() {
                        DecorationShape { key: "{i}", decoration: decoration.clone() }
                    }
                }

                for (i, block) in surface.blocks.iter().enumerate() {
                    div { key: "{i}", style: block_css(block, &style),
                        for (j, line) in block.lines.iter().enumerate() {
                            div { key: "{j}", style: line_css(block), {line.clone()} }
                        }
                    }
                }
            }
        }
    }
}

/// One decoration as SVG. Outlines are stroked half a pixel inside their
/// rectangle so they cover the same pixels as the rasteriser's.
#[component]
fn DecorationShape(decoration: Decoration) -> Element {
    match decoration {
        Decoration::Fill { rect: area, color } => rsx! {
            rect {
                x: "{area.x}",
                y: "{area.y}",
                width: "{area.width}",
                height: "{area.height}",
                fill: color.to_hex(),
            }
        },
        Decoration::Outline { rect: area, color } => {
            let (x, y) = (area.x as f32 + 0.5, area.y as f32 + 0.5);
            let w = area.width.saturating_sub(1);
            let h = area.height.saturating_sub(1);
            rsx! {
                rect {
                    x: "{x}",
                    y: "{y}",
                    width: "{w}",
                    height: "{h}",
                    fill: "none",
                    stroke: color.to_hex(),
                    stroke_width: "1",
                }
            }
        }
        Decoration::Disc { cx, cy, r, color } => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}", fill: color.to_hex() }
        },
        Decoration::Ring { cx, cy, r, color } => rsx! {
            circle {
                cx: "{cx}",
                cy: "{cy}",
                r: "{r}",
                fill: "none",
                stroke: color.to_hex(),
                stroke_width: "1",
            }
        },
        Decoration::Polygon { points, color } => {
            let points = points
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");
            rsx! {
                polygon { points: "{points}", fill: color.to_hex() }
            }
        }
    }
}

fn line_css(block: &Block) -> String {
    let line_height = block.role.line_height_px();
    format!("height: {line_height}px; line-height: {line_height}px; white-space: pre;")
}

fn block_css(block: &Block, style: &Styling) -> String {
    let weight = if block.role.is_bold() { "bold" } else { "normal" };
    let italic = if block.placeholder { "italic" } else { "normal" };
    let align = match block.align {
        Align::Left => "left",
        Align::Center => "center",
    };
    format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; \
         font-size: {}px; font-weight: {weight}; font-style: {italic}; text-align: {align}; \
         color: {}; font-family: {FONT_FAMILY}; overflow: hidden;",
        block.rect.x,
        block.rect.y,
        block.rect.width,
        block.rect.height,
        block.role.font_px(),
        block.color(style).to_hex(),
    )
}
