// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Manual adjustment sliders.
//
// Applied in a fixed order regardless of which keys are set: brightness,
// contrast, saturation, sharpness.

use image::RgbImage;
use photolift_core::Adjustments;
use photolift_core::error::{PhotoliftError, Result};
use tracing::{debug, instrument, warn};

use crate::imaging::ensure_non_empty;
use crate::imaging::kernel::sharpen;
use crate::imaging::tonal::{brightness, contrast, saturation};

/// Apply `adjustments`. Never fails; on any internal error a copy of the
/// original image is returned.
#[instrument(skip(image, adjustments), fields(width = image.width(), height = image.height()))]
pub fn apply_adjustments(image: &RgbImage, adjustments: &Adjustments) -> RgbImage {
    if adjustments.is_empty() {
        return image.clone();
    }
    match try_apply_adjustments(image, adjustments) {
        Ok(output) => output,
        Err(err) => {
            warn!(error = %err, "Adjustments failed; returning original image");
            image.clone()
        }
    }
}

/// Apply `adjustments`, surfacing internal failures.
pub fn try_apply_adjustments(image: &RgbImage, adjustments: &Adjustments) -> Result<RgbImage> {
    ensure_non_empty(image, "adjust")?;

    let mut output = image.clone();
    if let Some(factor) = adjustments.brightness {
        output = brightness(&output, finite("brightness", factor)?);
    }
    if let Some(factor) = adjustments.contrast {
        output = contrast(&output, finite("contrast", factor)?);
    }
    if let Some(factor) = adjustments.saturation {
        output = saturation(&output, finite("saturation", factor)?);
    }
    let passes = adjustments.sharpen_passes();
    for _ in 0..passes {
        output = sharpen(&output);
    }
    debug!(sharpen_passes = passes, "Adjustments applied");
    Ok(output)
}

fn finite(name: &'static str, factor: f32) -> Result<f32> {
    if factor.is_finite() {
        Ok(factor)
    } else {
        Err(PhotoliftError::stage(name, format!("factor {factor} is not finite")))
    }
}
