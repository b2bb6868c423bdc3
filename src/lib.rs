//! Tile a directory of same-sized images into a single grid image
//!
//! The builder scans one directory for image files, takes the first file's
//! dimensions as the uniform cell size, and pastes every image into a
//! row-major grid on a blank canvas. The finished canvas is written back
//! into the scanned directory as a JPEG.

#![forbid(unsafe_code)]

/// Grid geometry arithmetic and the canvas builder
pub mod grid;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{GridError, Result};
