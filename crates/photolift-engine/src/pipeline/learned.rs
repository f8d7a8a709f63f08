// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Learned blend stage for the advanced-AI path.
//
// The classical half is the `traditional` profile. The learned half is any
// [`SecondaryEnhancer`] the caller injects; this crate does not know or care
// how it is implemented. The two results are mixed 70/30 in favour of the
// learned output. If the learned half fails, or hands back an image of the
// wrong size, the classical result is returned on its own.

use image::{DynamicImage, Rgb, RgbImage};
use photolift_core::ProfileId;
use photolift_core::error::{PhotoliftError, Result};
use tracing::{info, instrument, warn};

use crate::imaging::to_canonical;
use crate::pipeline::profile::run_profile;

/// Weight of the learned output in the blend. The classical output gets the
/// remainder.
pub const LEARNED_WEIGHT: f32 = 0.7;

/// A secondary enhancement pass, typically backed by a learned model.
///
/// Implementations receive the upright, 8-bit RGB source image and must
/// return an image with the same dimensions the classical profile produces
/// for that source.
pub trait SecondaryEnhancer: Sync {
    fn enhance(&self, image: &RgbImage) -> Result<RgbImage>;
}

impl<F> SecondaryEnhancer for F
where
    F: Fn(&RgbImage) -> Result<RgbImage> + Sync,
{
    fn enhance(&self, image: &RgbImage) -> Result<RgbImage> {
        self(image)
    }
}

/// Pixel-wise `learned * weight + classical * (1 - weight)`, rounded and
/// clamped.
pub fn blend(learned: &RgbImage, classical: &RgbImage, learned_weight: f32) -> Result<RgbImage> {
    if learned.dimensions() != classical.dimensions() {
        return Err(PhotoliftError::stage(
            "blend",
            format!(
                "learned output is {:?} but classical output is {:?}",
                learned.dimensions(),
                classical.dimensions()
            ),
        ));
    }
    let classical_weight = 1.0 - learned_weight;
    let (width, height) = classical.dimensions();
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let l = learned.get_pixel(x, y).0;
        let c = classical.get_pixel(x, y).0;
        Rgb(std::array::from_fn(|i| {
            (l[i] as f32 * learned_weight + c[i] as f32 * classical_weight)
                .round()
                .clamp(0.0, 255.0) as u8
        }))
    }))
}

/// Run the classical pipeline and `enhancer` independently, then blend.
///
/// Only a classical failure is surfaced; a learned failure falls back to the
/// classical result.
#[instrument(skip(image, enhancer), fields(width = image.width(), height = image.height()))]
pub fn run_advanced_ai(
    image: &DynamicImage,
    scale_override: Option<u32>,
    enhancer: &dyn SecondaryEnhancer,
) -> Result<RgbImage> {
    let classical = run_profile(ProfileId::Traditional, image, scale_override)?;

    let learned = match enhancer.enhance(&to_canonical(image)) {
        Ok(learned) => learned,
        Err(err) => {
            warn!(error = %err, "Learned enhancement failed; using classical result");
            return Ok(classical);
        }
    };

    match blend(&learned, &classical, LEARNED_WEIGHT) {
        Ok(blended) => {
            info!("Learned and classical results blended");
            Ok(blended)
        }
        Err(err) => {
            warn!(error = %err, "Learned output unusable; using classical result");
            Ok(classical)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::resample::resize_exact;

    fn source() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(4, 3, |x, y| {
            Rgb([(x * 60) as u8, (y * 80) as u8, 128])
        }))
    }

    fn upscale_twice(image: &RgbImage) -> Result<RgbImage> {
        Ok(resize_exact(image, image.width() * 2, image.height() * 2))
    }

    #[test]
    fn blend_weights_learned_output() {
        let learned = RgbImage::from_pixel(2, 2, Rgb([200, 0, 100]));
        let classical = RgbImage::from_pixel(2, 2, Rgb([100, 100, 100]));
        let out = blend(&learned, &classical, LEARNED_WEIGHT).unwrap();
        // 200*0.7 + 100*0.3 = 170, 0 + 30 = 30, 70 + 30 = 100
        assert_eq!(out.get_pixel(1, 1).0, [170, 30, 100]);
    }

    #[test]
    fn blend_rejects_size_mismatch() {
        let a = RgbImage::new(2, 2);
        let b = RgbImage::new(3, 2);
        assert!(blend(&a, &b, LEARNED_WEIGHT).is_err());
    }

    #[test]
    fn failing_enhancer_falls_back_to_classical() {
        let failing = |_: &RgbImage| -> Result<RgbImage> {
            Err(PhotoliftError::LearnedStage("model not loaded".into()))
        };
        let out = run_advanced_ai(&source(), None, &failing).unwrap();
        let classical = run_profile(ProfileId::Traditional, &source(), None).unwrap();
        assert_eq!(out, classical);
    }

    #[test]
    fn fallback_respects_scale_override() {
        let failing = |_: &RgbImage| -> Result<RgbImage> {
            Err(PhotoliftError::LearnedStage("timeout".into()))
        };
        let out = run_advanced_ai(&source(), Some(3), &failing).unwrap();
        let classical = run_profile(ProfileId::Traditional, &source(), Some(3)).unwrap();
        assert_eq!(out, classical);
    }

    #[test]
    fn wrong_sized_learned_output_falls_back() {
        let identity = |img: &RgbImage| -> Result<RgbImage> { Ok(img.clone()) };
        let out = run_advanced_ai(&source(), None, &identity).unwrap();
        let classical = run_profile(ProfileId::Traditional, &source(), None).unwrap();
        assert_eq!(out, classical);
    }

    #[test]
    fn working_enhancer_is_blended() {
        let out = run_advanced_ai(&source(), None, &upscale_twice).unwrap();
        let classical = run_profile(ProfileId::Traditional, &source(), None).unwrap();
        let learned = upscale_twice(&to_canonical(&source())).unwrap();
        assert_eq!(out, blend(&learned, &classical, LEARNED_WEIGHT).unwrap());
        assert_eq!(out.dimensions(), (8, 6));
    }

    #[test]
    fn classical_failure_is_surfaced() {
        let empty = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        let identity = |img: &RgbImage| -> Result<RgbImage> { Ok(img.clone()) };
        assert!(run_advanced_ai(&empty, None, &identity).is_err());
    }
}
