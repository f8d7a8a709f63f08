// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Poster compositor.
//
// Every source is squashed to a 280x280 cell (aspect ratio is not kept) and
// pasted onto a white canvas with a 300px pitch. Cells that cannot be
// prepared are left white; the rest of the poster is still produced.

use image::imageops;
use image::{DynamicImage, Rgb, RgbImage};
use photolift_core::PosterLayout;
use photolift_core::error::{PhotoliftError, Result};
use tracing::{info, instrument, warn};

use crate::imaging::resample::resize_exact;
use crate::imaging::{decode, ensure_non_empty, to_canonical};

/// Distance between the top-left corners of adjacent cells.
pub const CELL_PITCH: u32 = 300;
/// Side of the square each source image is resized to.
pub const CELL_CONTENT: u32 = 280;
/// Offset of the content from the cell's top-left corner.
pub const CELL_MARGIN: u32 = 10;
/// Grid layouts never use more columns than this.
pub const MAX_GRID_COLUMNS: u32 = 3;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Canvas size and cell placement for a poster of `count` images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosterGeometry {
    pub count: u32,
    pub columns: u32,
    pub rows: u32,
}

impl PosterGeometry {
    pub fn new(count: usize, layout: PosterLayout) -> Result<Self> {
        if count == 0 {
            return Err(PhotoliftError::EmptyInput("poster"));
        }
        let count = u32::try_from(count)
            .map_err(|_| PhotoliftError::InvalidArgument(format!("{count} poster cells")))?;
        let (columns, rows) = match layout {
            PosterLayout::Grid => {
                let columns = count.min(MAX_GRID_COLUMNS);
                (columns, count.div_ceil(columns))
            }
            PosterLayout::Horizontal => (count, 1),
        };
        let geometry = Self {
            count,
            columns,
            rows,
        };
        geometry.canvas_size()?;
        Ok(geometry)
    }

    /// Canvas `(width, height)` in pixels.
    pub fn canvas_size(&self) -> Result<(u32, u32)> {
        let side = |cells: u32| {
            cells.checked_mul(CELL_PITCH).ok_or_else(|| {
                PhotoliftError::InvalidArgument(format!("{cells} poster cells overflow the canvas"))
            })
        };
        Ok((side(self.columns)?, side(self.rows)?))
    }

    /// Top-left corner of cell `index`'s content.
    pub fn cell_origin(&self, index: u32) -> (u32, u32) {
        let column = index % self.columns;
        let row = index / self.columns;
        (
            column * CELL_PITCH + CELL_MARGIN,
            row * CELL_PITCH + CELL_MARGIN,
        )
    }
}

/// Compose `images` onto one canvas. Fails only for an empty list.
#[instrument(skip(images), fields(count = images.len()))]
pub fn compose_poster(images: &[DynamicImage], layout: PosterLayout) -> Result<RgbImage> {
    let cells = images.iter().map(prepare_cell);
    compose_cells(images.len(), cells, layout)
}

/// Decode each entry (normalising orientation) and compose. An entry that
/// fails to decode leaves its cell white.
#[instrument(skip(inputs), fields(count = inputs.len()))]
pub fn compose_poster_from_bytes<B: AsRef<[u8]>>(
    inputs: &[B],
    layout: PosterLayout,
) -> Result<RgbImage> {
    let cells = inputs
        .iter()
        .map(|data| decode(data.as_ref()).and_then(|image| prepare_cell(&image)));
    compose_cells(inputs.len(), cells, layout)
}

fn prepare_cell(image: &DynamicImage) -> Result<RgbImage> {
    let rgb = to_canonical(image);
    ensure_non_empty(&rgb, "poster")?;
    Ok(resize_exact(&rgb, CELL_CONTENT, CELL_CONTENT))
}

fn compose_cells(
    count: usize,
    cells: impl Iterator<Item = Result<RgbImage>>,
    layout: PosterLayout,
) -> Result<RgbImage> {
    let geometry = PosterGeometry::new(count, layout)?;
    let (width, height) = geometry.canvas_size()?;
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    let mut placed = 0usize;
    for (index, cell) in (0u32..).zip(cells) {
        match cell {
            Ok(cell) => {
                let (x, y) = geometry.cell_origin(index);
                imageops::replace(&mut canvas, &cell, i64::from(x), i64::from(y));
                placed += 1;
            }
            Err(err) => warn!(index, error = %err, "Skipping poster cell"),
        }
    }

    info!(
        %layout,
        placed,
        skipped = count - placed,
        width,
        height,
        "Poster composed"
    );
    Ok(canvas)
}
