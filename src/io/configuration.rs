//! Runtime defaults and output naming constants

/// Default number of grid columns
pub const DEFAULT_COLUMNS: u32 = 4;

/// Filename extensions accepted as grid input, matched case-insensitively
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// Keeps a previously written grid.jpg out of later runs over the same
// directory
/// Filename substring that marks a file as grid output rather than input
pub const OUTPUT_MARKER: &str = "grid";

/// Base name of the written grid file
pub const OUTPUT_FILE_NAME: &str = "grid.jpg";
