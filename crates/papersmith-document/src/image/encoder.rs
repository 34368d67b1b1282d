// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster encoder — rasterises a surface and encodes it as PNG (lossless) or
// JPEG (lossy) with the `image` crate.

use image::{DynamicImage, ImageFormat, RgbaImage};
use papersmith_core::error::{PapersmithError, Result};
use tracing::{debug, instrument};

use crate::export::{RasterEncoder, RasterFormat, RasterOutput};
use crate::image::raster::Rasterizer;
use crate::render::Surface;

/// The production `RasterEncoder`.
pub struct ImageRasterEncoder {
    rasterizer: Rasterizer,
    jpeg_quality: u8,
}

impl ImageRasterEncoder {
    pub fn new(rasterizer: Rasterizer, jpeg_quality: u8) -> Self {
        Self {
            rasterizer,
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }
}

impl RasterEncoder for ImageRasterEncoder {
    #[instrument(skip_all, fields(format = ?format))]
    fn encode(&self, surface: &Surface, format: RasterFormat) -> Result<RasterOutput> {
        surface.ensure_rasterisable()?;
        let bitmap = self.rasterizer.rasterize(surface);
        let (width, height) = bitmap.dimensions();
        let bytes = match format {
            RasterFormat::Png => to_png_bytes(bitmap)?,
            RasterFormat::Jpeg => to_jpeg_bytes(bitmap, self.jpeg_quality)?,
        };
        debug!(width, height, bytes = bytes.len(), "surface encoded");
        Ok(RasterOutput {
            bytes,
            width,
            height,
        })
    }
}

/// Encode as PNG bytes.
fn to_png_bytes(bitmap: RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    DynamicImage::ImageRgba8(bitmap)
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| PapersmithError::ImageError(format!("PNG encoding failed: {}", err)))?;
    Ok(buffer)
}

/// Encode as JPEG bytes with the given quality (1-100). JPEG has no alpha, so
/// the bitmap is flattened to RGB first.
fn to_jpeg_bytes(bitmap: RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let rgb = DynamicImage::ImageRgba8(bitmap).to_rgb8();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|err| PapersmithError::ImageError(format!("JPEG encoding failed: {}", err)))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use papersmith_core::model::DocumentModel;
    use papersmith_core::template::default_template;
    use papersmith_core::types::DocumentKind;

    use crate::render::{MAX_SURFACE_HEIGHT_PX, render};

    fn surface() -> Surface {
        render(
            &DocumentModel::new(DocumentKind::Certificate, "9 September 2026"),
            default_template(),
        )
    }

    fn encoder(quality: u8) -> ImageRasterEncoder {
        ImageRasterEncoder::new(Rasterizer::new().unwrap(), quality)
    }

    #[test]
    fn png_and_jpeg_share_dimensions() {
        let encoder = encoder(85);
        let surface = surface();
        let png = encoder.encode(&surface, RasterFormat::Png).unwrap();
        let jpeg = encoder.encode(&surface, RasterFormat::Jpeg).unwrap();
        assert_eq!((png.width, png.height), (jpeg.width, jpeg.height));

        let png_decoded = image::load_from_memory(&png.bytes).unwrap();
        let jpeg_decoded = image::load_from_memory(&jpeg.bytes).unwrap();
        assert_eq!(png_decoded.width(), jpeg_decoded.width());
        assert_eq!(png_decoded.height(), jpeg_decoded.height());
        assert_eq!(png_decoded.width(), surface.width);
    }

    #[test]
    fn png_is_lossless() {
        let encoder = encoder(85);
        let surface = surface();
        let png = encoder.encode(&surface, RasterFormat::Png).unwrap();
        let decoded = image::load_from_memory(&png.bytes).unwrap().to_rgba8();
        assert_eq!(decoded, Rasterizer::new().unwrap().rasterize(&surface));
    }

    #[test]
    fn output_starts_with_format_magic() {
        let encoder = encoder(0);
        let surface = surface();
        let png = encoder.encode(&surface, RasterFormat::Png).unwrap();
        let jpeg = encoder.encode(&surface, RasterFormat::Jpeg).unwrap();
        assert_eq!(&png.bytes[..4], b"\x89PNG");
        assert_eq!(&jpeg.bytes[..2], b"\xff\xd8");
    }

    #[test]
    fn oversize_surface_is_rejected_for_both_formats() {
        let mut surface = surface();
        surface.height = MAX_SURFACE_HEIGHT_PX + 1;
        let encoder = encoder(85);
        for format in [RasterFormat::Png, RasterFormat::Jpeg] {
            assert!(matches!(
                encoder.encode(&surface, format),
                Err(PapersmithError::SurfaceTooLarge { height, max })
                    if height == MAX_SURFACE_HEIGHT_PX + 1 && max == MAX_SURFACE_HEIGHT_PX
            ));
        }
    }
}
