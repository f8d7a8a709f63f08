// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// 3x3 convolution filters: sharpen, edge-enhance, edge-enhance-more, and a
// median denoiser.
//
// Each call is a single full-image pass into a fresh buffer. Border pixels
// replicate the nearest edge sample. Repeated passes are not equivalent to a
// stronger kernel, so profiles call these a fixed number of times.

use image::RgbImage;
use imageproc::filter::median_filter;

/// A 3x3 integer kernel, row-major, applied as `sum(w * p) / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel3 {
    pub weights: [i32; 9],
    pub divisor: i32,
}

/// High-pass sharpen. Weights sum to 1, so flat regions keep their value.
/// ```text
/// -1  -1  -1
/// -1   9  -1
/// -1  -1  -1
/// ```
pub const SHARPEN: Kernel3 = Kernel3 {
    weights: [-1, -1, -1, -1, 9, -1, -1, -1, -1],
    divisor: 1,
};

/// Mild edge boost: centre 10, neighbours -1, halved.
pub const EDGE_ENHANCE: Kernel3 = Kernel3 {
    weights: [-1, -1, -1, -1, 10, -1, -1, -1, -1],
    divisor: 2,
};

/// Strong edge boost: centre 9, neighbours -1, undivided.
pub const EDGE_ENHANCE_MORE: Kernel3 = Kernel3 {
    weights: [-1, -1, -1, -1, 9, -1, -1, -1, -1],
    divisor: 1,
};

pub fn sharpen(image: &RgbImage) -> RgbImage {
    convolve3x3(image, &SHARPEN)
}

pub fn edge_enhance(image: &RgbImage) -> RgbImage {
    convolve3x3(image, &EDGE_ENHANCE)
}

pub fn edge_enhance_more(image: &RgbImage) -> RgbImage {
    convolve3x3(image, &EDGE_ENHANCE_MORE)
}

/// 3x3 median filter for speckle noise.
pub fn denoise(image: &RgbImage) -> RgbImage {
    median_filter(image, 1, 1)
}

/// Convolve every channel of `image` with `kernel`, replicating edges.
pub fn convolve3x3(image: &RgbImage, kernel: &Kernel3) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut output = RgbImage::new(width, height);
    if width == 0 || height == 0 {
        return output;
    }

    let src = image.as_raw();
    let w = width as i64;
    let h = height as i64;
    let divisor = kernel.divisor as f32;

    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let mut acc = [0i32; 3];
        for ky in 0..3i64 {
            let sy = (y as i64 + ky - 1).clamp(0, h - 1);
            for kx in 0..3i64 {
                let sx = (x as i64 + kx - 1).clamp(0, w - 1);
                let weight = kernel.weights[(ky * 3 + kx) as usize];
                let base = ((sy * w + sx) * 3) as usize;
                for (c, sum) in acc.iter_mut().enumerate() {
                    *sum += weight * src[base + c] as i32;
                }
            }
        }
        for (c, sum) in acc.into_iter().enumerate() {
            pixel.0[c] = (sum as f32 / divisor).round().clamp(0.0, 255.0) as u8;
        }
    }

    output
}
