// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancement profile interpreter.
//
// A profile is a static stage list (see `photolift_core::presets`). Running
// it is a left fold: every stage borrows the previous output and returns a
// new buffer, so there is no in-place mutation between stages.

use image::{DynamicImage, RgbImage};
use photolift_core::error::{PhotoliftError, Result};
use photolift_core::{ProfileId, Stage};
use tracing::{debug, info, instrument};

use crate::imaging::kernel::{denoise, edge_enhance, edge_enhance_more, sharpen};
use crate::imaging::tonal::{brightness, contrast, saturation};
use crate::imaging::{decode, ensure_non_empty, resample, to_canonical};

/// Run a built-in profile on an already decoded, upright image.
///
/// The image is first converted to 8-bit RGB. `scale_override` replaces the
/// profile's default scale factor.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn run_profile(
    profile: ProfileId,
    image: &DynamicImage,
    scale_override: Option<u32>,
) -> Result<RgbImage> {
    let descriptor = profile.descriptor();
    let scale = scale_override.unwrap_or(descriptor.default_scale);
    if scale == 0 {
        return Err(PhotoliftError::InvalidScale(0.0));
    }
    info!(%profile, scale, stages = descriptor.stages.len(), "Running enhancement profile");

    let canonical = to_canonical(image);
    let output = run_stages(descriptor.stages, canonical, scale as f32)?;

    info!(
        %profile,
        out_w = output.width(),
        out_h = output.height(),
        "Enhancement profile complete"
    );
    Ok(output)
}

/// Same as [`run_profile`] but looks the profile up by id; unknown ids run
/// `traditional`.
pub fn run_profile_by_id(
    profile_id: &str,
    image: &DynamicImage,
    scale_override: Option<u32>,
) -> Result<RgbImage> {
    let profile = ProfileId::resolve(profile_id);
    if profile.as_str() != profile_id {
        debug!(requested = profile_id, resolved = %profile, "Profile id resolved");
    }
    run_profile(profile, image, scale_override)
}

/// Decode encoded bytes (normalising orientation), then run `profile`.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn enhance_bytes(
    profile: ProfileId,
    data: &[u8],
    scale_override: Option<u32>,
) -> Result<RgbImage> {
    let image = decode(data)?;
    run_profile(profile, &image, scale_override)
}

/// Apply `stages` in order. `scale` is used by every `Resample` stage.
pub fn run_stages(stages: &[Stage], image: RgbImage, scale: f32) -> Result<RgbImage> {
    ensure_non_empty(&image, "profile")?;
    stages.iter().try_fold(image, |current, stage| {
        debug!(stage = stage.name(), "Applying stage");
        apply_stage(stage, &current, scale)
    })
}

/// Apply a single stage.
pub fn apply_stage(stage: &Stage, image: &RgbImage, scale: f32) -> Result<RgbImage> {
    let output = match *stage {
        Stage::Resample => resample(image, scale)?,
        Stage::Sharpen => sharpen(image),
        Stage::EdgeEnhance => edge_enhance(image),
        Stage::EdgeEnhanceMore => edge_enhance_more(image),
        Stage::Denoise => denoise(image),
        Stage::Contrast(factor) => contrast(image, factor),
        Stage::Saturation(factor) => saturation(image, factor),
        Stage::Brightness(factor) => brightness(image, factor),
    };
    Ok(output)
}
