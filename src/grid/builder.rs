//! Canvas allocation and sequential tile pasting
//!
//! The cell size for the whole grid comes from the first eligible file and
//! is never checked against the rest: a larger tile overlaps its neighbours
//! and clips at the canvas edge, a smaller one leaves part of its cell
//! black. Both are accepted behaviour.

use crate::grid::geometry::GridGeometry;
use crate::io::error::{GridError, Result};
use crate::io::scan::eligible_images;
use image::{RgbImage, imageops};
use std::path::{Path, PathBuf};

/// Step-wise grid compositor over one directory scan
///
/// `scan` fixes the file list, geometry, and canvas; each `paste_next` call
/// places one tile so the caller can interleave progress reporting. The
/// finished canvas is taken with `finish`.
pub struct GridBuilder {
    files: Vec<PathBuf>,
    geometry: GridGeometry,
    canvas: RgbImage,
    cursor: usize,
}

impl GridBuilder {
    /// Scan `directory` and allocate a blank canvas for `columns` columns
    ///
    /// The first eligible file is opened for its dimensions, which become
    /// the uniform cell size.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be read
    /// - No eligible image files are found
    /// - The first file cannot be decoded
    /// - `columns` is zero
    pub fn scan(directory: &Path, columns: u32) -> Result<Self> {
        let files = eligible_images(directory)?;
        let first = files.first().ok_or_else(|| GridError::EmptyInput {
            path: directory.to_path_buf(),
        })?;

        let (tile_width, tile_height) = read_dimensions(first)?;
        let geometry = GridGeometry::new(files.len(), columns, tile_width, tile_height)?;
        let canvas = RgbImage::new(geometry.canvas_width(), geometry.canvas_height());

        Ok(Self {
            files,
            geometry,
            canvas,
            cursor: 0,
        })
    }

    /// Layout derived from the scan
    pub const fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Number of tiles the grid will hold
    pub fn tile_count(&self) -> usize {
        self.files.len()
    }

    /// Path of the tile the next `paste_next` call will place, if any
    pub fn next_tile(&self) -> Option<&Path> {
        self.files.get(self.cursor).map(PathBuf::as_path)
    }

    /// Open the next tile and paste it at its cell offset
    ///
    /// Pastes are opaque overwrites at the tile's native size. The first
    /// file is reopened here; its sizing read is not reused. Returns
    /// `Ok(false)` once every tile has been pasted.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile file cannot be opened or decoded
    pub fn paste_next(&mut self) -> Result<bool> {
        let Some(path) = self.files.get(self.cursor) else {
            return Ok(false);
        };

        let tile = open_rgb(path)?;
        let (x, y) = self.geometry.cell_offset(self.cursor);
        imageops::replace(&mut self.canvas, &tile, i64::from(x), i64::from(y));
        self.cursor += 1;

        Ok(true)
    }

    /// Consume the builder, yielding the composed canvas
    pub fn finish(self) -> RgbImage {
        self.canvas
    }

    /// Scan `directory`, paste every tile, and return the finished canvas
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as `scan` and
    /// `paste_next`
    pub fn compose(directory: &Path, columns: u32) -> Result<RgbImage> {
        let mut builder = Self::scan(directory, columns)?;
        while builder.paste_next()? {}
        Ok(builder.finish())
    }
}

// Header-only read, the pixel data is not decoded here
fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|e| GridError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

fn open_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| GridError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}
