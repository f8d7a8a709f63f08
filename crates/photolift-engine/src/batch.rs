// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Parallel batch enhancement.
//
// Each input is decoded and enhanced on the rayon pool independently. One
// item's failure is reported in its own slot and never affects the others.

use image::RgbImage;
use photolift_core::ProfileId;
use photolift_core::error::{PhotoliftError, Result};
use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::pipeline::enhance_bytes;

/// Enhance every encoded input with `profile`. The outer error is only
/// returned for an empty batch; results keep the input order.
#[instrument(skip(inputs), fields(count = inputs.len()))]
pub fn enhance_batch<B>(
    inputs: &[B],
    profile: ProfileId,
    scale_override: Option<u32>,
) -> Result<Vec<Result<RgbImage>>>
where
    B: AsRef<[u8]> + Sync,
{
    if inputs.is_empty() {
        return Err(PhotoliftError::EmptyInput("batch"));
    }

    let results: Vec<Result<RgbImage>> = inputs
        .par_iter()
        .enumerate()
        .map(|(index, data)| {
            let result = enhance_bytes(profile, data.as_ref(), scale_override);
            if let Err(err) = &result {
                warn!(index, error = %err, "Batch item failed");
            }
            result
        })
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(%profile, total = results.len(), failed, "Batch complete");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::codec::encode_png;
    use image::Rgb;

    fn png(width: u32, height: u32) -> Vec<u8> {
        encode_png(&RgbImage::from_pixel(width, height, Rgb([40, 80, 120]))).unwrap()
    }

    #[test]
    fn empty_batch_is_an_error() {
        let none: Vec<Vec<u8>> = Vec::new();
        assert!(matches!(
            enhance_batch(&none, ProfileId::Traditional, None),
            Err(PhotoliftError::EmptyInput("batch"))
        ));
    }

    #[test]
    fn failures_are_isolated_and_order_is_kept() {
        let inputs = vec![png(3, 2), b"broken".to_vec(), png(5, 4)];
        let results = enhance_batch(&inputs, ProfileId::Traditional, None).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().dimensions(), (6, 4));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().dimensions(), (10, 8));
    }

    #[test]
    fn scale_override_applies_to_every_item() {
        let inputs = [png(2, 2), png(1, 3)];
        let results = enhance_batch(&inputs, ProfileId::SuperQuality, Some(1)).unwrap();
        let dims: Vec<_> = results
            .into_iter()
            .map(|r| r.unwrap().dimensions())
            .collect();
        assert_eq!(dims, vec![(2, 2), (1, 3)]);
    }
}
