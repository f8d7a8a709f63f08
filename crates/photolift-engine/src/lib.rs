// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// photolift-engine — Image enhancement pipeline for Photolift.
//
// Provides EXIF orientation normalisation, Lanczos resampling, 3x3 kernel
// filters, tonal adjustments, the enhancement profiles built from them, the
// learned blend stage, the filter bank, manual adjustments, poster
// compositing, and a parallel batch runner.

pub mod batch;
pub mod imaging;
pub mod pipeline;
pub mod poster;

// Re-export the primary entry points so callers can use `photolift_engine::run_profile` etc.
pub use batch::enhance_batch;
pub use imaging::codec::{OutputFormat, encode, encode_jpeg, encode_png};
pub use imaging::{decode, normalize_orientation, to_canonical};
pub use pipeline::{
    SecondaryEnhancer, apply_adjustments, apply_filter, enhance_bytes, run_advanced_ai,
    run_profile, run_profile_by_id,
};
pub use poster::{PosterGeometry, compose_poster, compose_poster_from_bytes};
