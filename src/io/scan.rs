//! Directory enumeration and eligibility filtering
//!
//! A file is eligible when its lowercased name carries a supported image
//! extension and does not contain the output marker substring. The marker
//! check keeps a grid written by an earlier run from being re-ingested as
//! input on the next one.

use crate::io::configuration::{OUTPUT_MARKER, SUPPORTED_EXTENSIONS};
use crate::io::error::{GridError, Result};
use std::path::{Path, PathBuf};

/// List eligible image files directly inside `directory`, sorted by path
///
/// The scan is non-recursive. Sorting fixes the grid positions across runs
/// and platforms instead of leaking directory-enumeration order into the
/// output.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn eligible_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory).map_err(|e| GridError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GridError::FileSystem {
            path: directory.to_path_buf(),
            operation: "read directory entry",
            source: e,
        })?;

        let path = entry.path();
        if path.is_file()
            && path
                .file_name()
                .is_some_and(|name| is_eligible_name(&name.to_string_lossy()))
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Check a bare filename against the extension whitelist and output marker
pub fn is_eligible_name(name: &str) -> bool {
    let lowered = name.to_lowercase();
    if lowered.contains(OUTPUT_MARKER) {
        return false;
    }

    lowered
        .rsplit_once('.')
        .is_some_and(|(_, ext)| SUPPORTED_EXTENSIONS.contains(&ext))
}
