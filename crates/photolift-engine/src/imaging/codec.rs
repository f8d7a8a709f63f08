// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Decoding, mode normalisation, and output encoding.
//
// Decoding always runs the orientation normaliser, so every image handed to
// the pipeline is upright.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat, RgbImage};
use photolift_core::error::{PhotoliftError, Result};
use tracing::{debug, instrument};

use super::orientation::normalize_orientation_from_bytes;

/// Upload extensions accepted by the surrounding layer.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// JPEG quality used when the caller does not choose one.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Whether `path` has one of the [`SUPPORTED_EXTENSIONS`] (case-insensitive).
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|ok| e.eq_ignore_ascii_case(ok))
        })
}

/// Decode encoded image bytes and normalise their EXIF orientation.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode(data: &[u8]) -> Result<DynamicImage> {
    let image = image::load_from_memory(data).map_err(|err| match err {
        ImageError::Unsupported(detail) => PhotoliftError::UnsupportedMode(detail.to_string()),
        other => PhotoliftError::Decode(other.to_string()),
    })?;
    debug!(
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Image decoded from bytes"
    );
    Ok(normalize_orientation_from_bytes(image, data))
}

/// Convert any color mode to 8-bit RGB. Alpha is dropped, not composited;
/// single-channel input is expanded to three equal channels.
pub fn to_canonical(image: &DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb.clone(),
        other => {
            debug!(from = ?other.color(), "Converting to 8-bit RGB");
            other.to_rgb8()
        }
    }
}

/// Encoded output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg { quality: u8 },
    Png,
}

impl OutputFormat {
    /// PNG for a `.png` path, JPEG at `quality` for everything else.
    pub fn for_path(path: &Path, quality: u8) -> Self {
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if is_png {
            Self::Png
        } else {
            Self::Jpeg {
                quality: quality.clamp(1, 100),
            }
        }
    }
}

/// Encode an RGB image in the given container.
pub fn encode(image: &RgbImage, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Jpeg { quality } => encode_jpeg(image, quality),
        OutputFormat::Png => encode_png(image),
    }
}

/// Encode as baseline JPEG with the given quality (1-100).
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    image
        .write_with_encoder(encoder)
        .map_err(|err| PhotoliftError::Encode(format!("JPEG encoding failed: {err}")))?;
    Ok(buffer)
}

/// Encode as PNG.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|err| PhotoliftError::Encode(format!("PNG encoding failed: {err}")))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::orientation::read_orientation_tag;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_extension(Path::new("cat.JPG")));
        assert!(is_supported_extension(Path::new("dir/dog.bmp")));
        assert!(!is_supported_extension(Path::new("scan.tiff")));
        assert!(!is_supported_extension(Path::new("README")));
    }

    #[test]
    fn corrupt_bytes_are_a_decode_failure() {
        let err = decode(b"\x89PNG\r\n\x1a\nthis is not the rest of a png").unwrap_err();
        assert!(matches!(err, PhotoliftError::Decode(_) | PhotoliftError::UnsupportedMode(_)));
    }

    #[test]
    fn png_decodes_back_to_same_pixels() {
        let img = RgbImage::from_fn(5, 4, |x, y| Rgb([x as u8 * 40, y as u8 * 60, 9]));
        let bytes = encode_png(&img).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(to_canonical(&decoded), img);
    }

    #[test]
    fn jpeg_output_has_soi_marker() {
        let img = RgbImage::from_pixel(8, 8, Rgb([10, 20, 30]));
        let bytes = encode_jpeg(&img, DEFAULT_JPEG_QUALITY).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    /// JPEG bytes with an APP1 EXIF segment carrying `orientation`, inserted
    /// right after SOI.
    fn jpeg_with_orientation(image: &RgbImage, orientation: u8) -> Vec<u8> {
        let mut payload = b"Exif\0\0".to_vec();
        // Big-endian TIFF header, first IFD at offset 8.
        payload.extend_from_slice(b"MM\0\x2a\0\0\0\x08");
        // One entry: Orientation (0x0112), SHORT, count 1, value inline.
        payload.extend_from_slice(&[0, 1]);
        payload.extend_from_slice(&[0x01, 0x12, 0, 3, 0, 0, 0, 1, 0, orientation, 0, 0]);
        payload.extend_from_slice(&[0, 0, 0, 0]);

        let jpeg = encode_jpeg(image, 100).unwrap();
        let length = (payload.len() + 2) as u16;
        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&length.to_be_bytes());
        out.extend_from_slice(&payload);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    /// 32x16, left half red and right half blue. Halves align with JPEG
    /// MCUs so chroma does not bleed across the boundary.
    fn red_left_blue_right() -> RgbImage {
        RgbImage::from_fn(32, 16, |x, _| {
            if x < 16 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 0, 255])
            }
        })
    }

    fn is_red(pixel: &Rgb<u8>) -> bool {
        pixel.0[0] > 200 && pixel.0[2] < 60
    }

    fn is_blue(pixel: &Rgb<u8>) -> bool {
        pixel.0[2] > 200 && pixel.0[0] < 60
    }

    #[test]
    fn exif_orientation_is_read_and_applied_on_decode() {
        let source = red_left_blue_right();

        let bytes = jpeg_with_orientation(&source, 3);
        assert_eq!(read_orientation_tag(&bytes), Some(3));
        let out = to_canonical(&decode(&bytes).unwrap());
        assert_eq!(out.dimensions(), (32, 16));
        assert!(is_blue(out.get_pixel(4, 8)));
        assert!(is_red(out.get_pixel(27, 8)));

        // Tag 6: the left end ends up on top.
        let bytes = jpeg_with_orientation(&source, 6);
        assert_eq!(read_orientation_tag(&bytes), Some(6));
        let out = to_canonical(&decode(&bytes).unwrap());
        assert_eq!(out.dimensions(), (16, 32));
        assert!(is_red(out.get_pixel(8, 4)));
        assert!(is_blue(out.get_pixel(8, 27)));

        // Tag 8: the right end ends up on top.
        let bytes = jpeg_with_orientation(&source, 8);
        assert_eq!(read_orientation_tag(&bytes), Some(8));
        let out = to_canonical(&decode(&bytes).unwrap());
        assert_eq!(out.dimensions(), (16, 32));
        assert!(is_blue(out.get_pixel(8, 4)));
        assert!(is_red(out.get_pixel(8, 27)));
    }

    #[test]
    fn upright_exif_tag_leaves_jpeg_alone() {
        let bytes = jpeg_with_orientation(&red_left_blue_right(), 1);
        assert_eq!(read_orientation_tag(&bytes), Some(1));
        let out = to_canonical(&decode(&bytes).unwrap());
        assert_eq!(out.dimensions(), (32, 16));
        assert!(is_red(out.get_pixel(4, 8)));
    }

    #[test]
    fn canonical_drops_alpha_without_compositing() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 0]));
        let rgb = to_canonical(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.get_pixel(0, 0).0, [200, 100, 50]);
    }

    #[test]
    fn output_format_follows_extension() {
        assert_eq!(OutputFormat::for_path(Path::new("a.PNG"), 80), OutputFormat::Png);
        assert_eq!(
            OutputFormat::for_path(Path::new("a.jpg"), 0),
            OutputFormat::Jpeg { quality: 1 }
        );
    }
}
