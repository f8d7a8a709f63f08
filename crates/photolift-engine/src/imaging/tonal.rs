// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tonal adjustments: brightness, contrast, saturation, and grayscale.
//
// Brightness, contrast, and saturation are all the same operation with a
// different reference image: `out = base + (pixel - base) * factor`, rounded
// and clamped to 0..=255. A factor of exactly 1.0 reproduces the input.
//
// | Operator   | Reference (`base`)                 |
// |------------|------------------------------------|
// | brightness | black                              |
// | contrast   | mean luma of the whole image       |
// | saturation | the pixel's own luma               |

use image::{Rgb, RgbImage};

/// ITU-R 601-2 luma with 16-bit fixed-point weights.
#[inline]
pub fn luma(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Scale intensity toward (`factor < 1`) or away from black.
pub fn brightness(image: &RgbImage, factor: f32) -> RgbImage {
    blend_with(image, factor, |_| 0.0)
}

/// Scale each channel's distance from the image's mean gray level.
pub fn contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let mean = mean_luma(image);
    blend_with(image, factor, |_| mean)
}

/// Interpolate between the image's grayscale version (0.0) and itself (1.0);
/// factors above 1.0 oversaturate.
pub fn saturation(image: &RgbImage, factor: f32) -> RgbImage {
    blend_with(image, factor, |pixel| luma(pixel) as f32)
}

/// Collapse to luma and re-expand to three identical channels.
pub fn grayscale(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let l = luma(image.get_pixel(x, y));
        Rgb([l, l, l])
    })
}

/// Rounded mean of the per-pixel luma. Zero for an empty image.
pub fn mean_luma(image: &RgbImage) -> f32 {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = image.pixels().map(|p| luma(p) as u64).sum();
    (sum as f64 / count as f64 + 0.5).floor() as f32
}

fn blend_with(image: &RgbImage, factor: f32, base: impl Fn(&Rgb<u8>) -> f32) -> RgbImage {
    let (width, height) = image.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        let reference = base(pixel);
        Rgb(pixel.0.map(|channel| {
            let value = reference + (channel as f32 - reference) * factor;
            value.round().clamp(0.0, 255.0) as u8
        }))
    })
}
