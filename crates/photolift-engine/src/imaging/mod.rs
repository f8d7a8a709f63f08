// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Imaging primitives: orientation, resampling, 3x3 kernels, tonal
// adjustments, and encode/decode helpers. Everything here takes an input
// buffer by reference and returns a new one.

pub mod codec;
pub mod kernel;
pub mod orientation;
pub mod resample;
pub mod tonal;

use image::RgbImage;
use photolift_core::error::{PhotoliftError, Result};

pub use codec::{decode, to_canonical};
pub use orientation::{normalize_orientation, normalize_orientation_from_bytes};
pub use resample::resample;

/// Reject zero-area images before running `stage` on them.
pub(crate) fn ensure_non_empty(image: &RgbImage, stage: &'static str) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PhotoliftError::stage(stage, "image has no pixels"));
    }
    Ok(())
}
