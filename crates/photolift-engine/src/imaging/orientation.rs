// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// EXIF orientation normalisation.
//
// Only three tag values change the pixels:
//
// | Tag | Counter-clockwise rotation | `image` call  |
// |-----|----------------------------|---------------|
// | 3   | 180°                       | `rotate180()` |
// | 6   | 270°                       | `rotate90()`  |
// | 8   | 90°                        | `rotate270()` |
//
// Rotation angles are counter-clockwise. The `image` crate names its
// rotations clockwise, so 270° counter-clockwise is its `rotate90`. Canvas
// dimensions swap for tags 6 and 8. Every other value, including the
// mirrored orientations 2/4/5/7, is left untouched.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use tracing::{debug, info, warn};

/// EXIF `Orientation` tag values the normaliser acts on.
pub const UPSIDE_DOWN: u32 = 3;
pub const ROTATED_RIGHT: u32 = 6;
pub const ROTATED_LEFT: u32 = 8;

/// Read the EXIF orientation tag from encoded image bytes.
///
/// Returns `None` when the container carries no EXIF block, the block has no
/// orientation field, or the metadata cannot be parsed. Parse failures are
/// logged and otherwise ignored.
pub fn read_orientation_tag(bytes: &[u8]) -> Option<u32> {
    if !may_carry_exif(bytes) {
        debug!("Container has no EXIF support");
        return None;
    }
    let mut cursor = Cursor::new(bytes);
    let exif = match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => {
            debug!("No EXIF metadata present");
            return None;
        }
        Err(err) => {
            warn!(error = %err, "EXIF metadata unreadable; assuming upright");
            return None;
        }
    };
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let tag = field.value.get_uint(0);
    debug!(?tag, "EXIF orientation tag read");
    tag
}

/// Whether the container format can hold EXIF metadata at all. GIF and BMP
/// cannot, and the EXIF reader rejects them as malformed.
fn may_carry_exif(bytes: &[u8]) -> bool {
    matches!(
        image::guess_format(bytes),
        Ok(ImageFormat::Jpeg
            | ImageFormat::Png
            | ImageFormat::Tiff
            | ImageFormat::WebP
            | ImageFormat::Avif)
    )
}

/// Rotate `image` so its visual top-left matches its stored top-left.
///
/// `None` and unhandled tag values return the image unchanged.
pub fn normalize_orientation(image: DynamicImage, tag: Option<u32>) -> DynamicImage {
    match tag {
        Some(UPSIDE_DOWN) => {
            info!(tag = UPSIDE_DOWN, "Rotating 180 degrees");
            image.rotate180()
        }
        Some(ROTATED_RIGHT) => {
            info!(tag = ROTATED_RIGHT, "Rotating 270 degrees counter-clockwise");
            image.rotate90()
        }
        Some(ROTATED_LEFT) => {
            info!(tag = ROTATED_LEFT, "Rotating 90 degrees counter-clockwise");
            image.rotate270()
        }
        _ => image,
    }
}

/// Read the orientation tag from `bytes` and apply it to the already
/// decoded `image`.
pub fn normalize_orientation_from_bytes(image: DynamicImage, bytes: &[u8]) -> DynamicImage {
    normalize_orientation(image, read_orientation_tag(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    const A: Rgb<u8> = Rgb([255, 0, 0]);
    const B: Rgb<u8> = Rgb([0, 0, 255]);

    /// A 2x1 strip: A on the left, B on the right.
    fn strip() -> DynamicImage {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, A);
        img.put_pixel(1, 0, B);
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn tag_three_rotates_half_turn() {
        let out = normalize_orientation(strip(), Some(3)).to_rgb8();
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(*out.get_pixel(0, 0), B);
        assert_eq!(*out.get_pixel(1, 0), A);
    }

    #[test]
    fn tag_six_rotates_270_counter_clockwise() {
        let out = normalize_orientation(strip(), Some(6)).to_rgb8();
        assert_eq!(out.dimensions(), (1, 2));
        // The left end of the strip ends up on top.
        assert_eq!(*out.get_pixel(0, 0), A);
        assert_eq!(*out.get_pixel(0, 1), B);
    }

    #[test]
    fn tag_eight_rotates_90_counter_clockwise() {
        let out = normalize_orientation(strip(), Some(8)).to_rgb8();
        assert_eq!(out.dimensions(), (1, 2));
        // The right end of the strip ends up on top.
        assert_eq!(*out.get_pixel(0, 0), B);
        assert_eq!(*out.get_pixel(0, 1), A);
    }

    #[test]
    fn other_tags_are_identity() {
        let original = strip();
        for tag in [None, Some(0), Some(1), Some(2), Some(4), Some(5), Some(7), Some(9)] {
            let out = normalize_orientation(original.clone(), tag);
            assert_eq!(out.as_bytes(), original.as_bytes(), "tag {tag:?}");
            assert_eq!(out.width(), 2);
        }
    }

    #[test]
    fn garbage_bytes_have_no_tag() {
        assert_eq!(read_orientation_tag(b"definitely not an image"), None);
        assert_eq!(read_orientation_tag(&[]), None);
    }

    #[test]
    fn gif_and_bmp_skip_the_exif_reader() {
        for format in [image::ImageFormat::Gif, image::ImageFormat::Bmp] {
            let rgba = DynamicImage::ImageRgba8(strip().to_rgba8());
            let mut bytes = Vec::new();
            rgba.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
            assert!(!may_carry_exif(&bytes), "{format:?}");
            assert_eq!(read_orientation_tag(&bytes), None);
        }
    }

    #[test]
    fn png_without_exif_is_left_alone() {
        let mut bytes = Vec::new();
        strip()
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let out = normalize_orientation_from_bytes(strip(), &bytes);
        assert_eq!(out.as_bytes(), strip().as_bytes());
    }
}
