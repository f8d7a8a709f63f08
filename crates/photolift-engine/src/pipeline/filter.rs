// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filter bank: stylistic tone mappings applied after the fact.
//
// Filters are cosmetic. An unknown id or any internal failure hands back the
// input unchanged instead of an error.

use image::RgbImage;
use photolift_core::error::Result;
use photolift_core::{FilterId, ToneStep};
use tracing::{debug, instrument, warn};

use crate::imaging::ensure_non_empty;
use crate::imaging::tonal::{brightness, contrast, grayscale, saturation};

/// Apply the filter named `filter_id`. Never fails; unknown ids and internal
/// errors return a copy of `image`.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn apply_filter(filter_id: &str, image: &RgbImage) -> RgbImage {
    let Some(filter) = FilterId::from_id(filter_id) else {
        debug!(filter_id, "Unknown filter id; passing image through");
        return image.clone();
    };
    match try_apply_filter(filter, image) {
        Ok(output) => output,
        Err(err) => {
            warn!(%filter, error = %err, "Filter failed; returning original image");
            image.clone()
        }
    }
}

/// Apply `filter`, surfacing internal failures.
pub fn try_apply_filter(filter: FilterId, image: &RgbImage) -> Result<RgbImage> {
    ensure_non_empty(image, "filter")?;
    let steps = filter.descriptor().steps;
    Ok(steps
        .iter()
        .fold(image.clone(), |current, step| apply_tone_step(step, &current)))
}

fn apply_tone_step(step: &ToneStep, image: &RgbImage) -> RgbImage {
    match *step {
        ToneStep::Grayscale => grayscale(image),
        ToneStep::Saturation(factor) => saturation(image, factor),
        ToneStep::Contrast(factor) => contrast(image, factor),
        ToneStep::Brightness(factor) => brightness(image, factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn colourful() -> RgbImage {
        RgbImage::from_fn(7, 5, |x, y| {
            Rgb([(x * 36) as u8, (y * 50) as u8, (255 - x * 30) as u8])
        })
    }

    #[test]
    fn film_is_saturation_then_contrast_only() {
        let img = colourful();
        let expected = contrast(&saturation(&img, 0.8), 1.2);
        assert_eq!(apply_filter("film", &img), expected);
    }

    #[test]
    fn vintage_ends_with_brightness() {
        let img = colourful();
        let expected = brightness(&contrast(&saturation(&img, 0.7), 1.3), 0.9);
        assert_eq!(apply_filter("vintage", &img), expected);
    }

    #[test]
    fn fresh_is_saturation_then_brightness() {
        let img = colourful();
        let expected = brightness(&saturation(&img, 1.3), 1.1);
        assert_eq!(apply_filter("fresh", &img), expected);
    }

    #[test]
    fn unknown_filter_is_passthrough() {
        let img = colourful();
        assert_eq!(apply_filter("sepia", &img), img);
        assert_eq!(apply_filter("", &img), img);
    }

    #[test]
    fn black_and_white_keeps_three_equal_channels() {
        let out = apply_filter("blackwhite", &colourful());
        assert_eq!(out.dimensions(), (7, 5));
        assert!(out.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
    }

    #[test]
    fn every_filter_preserves_dimensions() {
        let img = colourful();
        for filter in FilterId::ALL {
            let out = apply_filter(filter.as_str(), &img);
            assert_eq!(out.dimensions(), img.dimensions(), "{filter}");
        }
    }

    #[test]
    fn empty_image_is_returned_unchanged() {
        let img = RgbImage::new(0, 0);
        assert!(try_apply_filter(FilterId::Warm, &img).is_err());
        assert_eq!(apply_filter("warm", &img), img);
    }
}
