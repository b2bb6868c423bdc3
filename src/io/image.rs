//! JPEG export of the composed canvas

use crate::io::error::{GridError, Result};
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Write the composed canvas to `path` as a JPEG
///
/// Any existing file at the path is overwritten without confirmation.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written
pub fn export_canvas_as_jpeg(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas
        .save_with_format(path, ImageFormat::Jpeg)
        .map_err(|e| GridError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
