// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — surface rasterisation and PNG/JPEG encoding.

pub mod encoder;
pub mod raster;

pub use encoder::ImageRasterEncoder;
pub use raster::Rasterizer;
