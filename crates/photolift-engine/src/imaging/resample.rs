// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lanczos resampling.

use image::RgbImage;
use image::imageops::{self, FilterType};
use photolift_core::error::{PhotoliftError, Result};
use tracing::debug;

/// Largest output the resampler will allocate, in pixels.
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 28;

/// Output dimensions for scaling `width` x `height` by `factor`.
///
/// Integer factors are exact. Fractional factors round to the nearest pixel
/// and never go below 1x1.
pub fn scaled_dimensions(width: u32, height: u32, factor: f32) -> Result<(u32, u32)> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(PhotoliftError::InvalidScale(factor));
    }
    let scale = |side: u32| -> Result<u32> {
        let scaled = (side as f64 * factor as f64).round().max(1.0);
        if scaled > u32::MAX as f64 {
            return Err(PhotoliftError::stage(
                "resample",
                format!("{side} x {factor} overflows the image size limit"),
            ));
        }
        Ok(scaled as u32)
    };
    let (new_w, new_h) = (scale(width)?, scale(height)?);
    if new_w as u64 * new_h as u64 > MAX_OUTPUT_PIXELS {
        return Err(PhotoliftError::stage(
            "resample",
            format!("{new_w}x{new_h} exceeds {MAX_OUTPUT_PIXELS} pixels"),
        ));
    }
    Ok((new_w, new_h))
}

/// Scale an image by `factor` in both directions using a Lanczos3 kernel.
pub fn resample(image: &RgbImage, factor: f32) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PhotoliftError::stage("resample", "source image is empty"));
    }
    let (new_w, new_h) = scaled_dimensions(width, height, factor)?;
    debug!(width, height, new_w, new_h, factor, "Resampling");
    Ok(resize_exact(image, new_w, new_h))
}

/// Resize to exactly `width` x `height` with Lanczos3, ignoring aspect ratio.
pub fn resize_exact(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    imageops::resize(image, width, height, FilterType::Lanczos3)
}
