//! Command-line interface for composing a directory of images into a grid

use crate::grid::builder::GridBuilder;
use crate::io::configuration::{DEFAULT_COLUMNS, OUTPUT_FILE_NAME};
use crate::io::error::Result;
use crate::io::image::export_canvas_as_jpeg;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridstitch")]
#[command(
    author,
    version,
    about = "Tile a directory of images into a single grid image"
)]
/// Command-line arguments for the grid composition tool
pub struct Cli {
    /// Directory containing the source images
    #[arg(short, long, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub cols: u32,

    /// Prefix for the output filename
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Path the composed grid will be written to
    ///
    /// Always inside the scanned directory: `grid.jpg`, or
    /// `<prefix>_grid.jpg` when a prefix was supplied.
    pub fn output_path(&self) -> PathBuf {
        let file_name = self.prefix.as_ref().map_or_else(
            || OUTPUT_FILE_NAME.to_string(),
            |prefix| format!("{prefix}_{OUTPUT_FILE_NAME}"),
        );
        self.input_dir.join(file_name)
    }
}

/// Orchestrates one grid composition with progress tracking
pub struct GridProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl GridProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Compose the grid and write it next to its inputs
    ///
    /// # Errors
    ///
    /// Returns an error if the scan finds no eligible files, a tile cannot
    /// be decoded, or the grid cannot be written
    // Allow print for the output path contract on stdout
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        let output_path = self.cli.output_path();
        let mut builder = GridBuilder::scan(&self.cli.input_dir, self.cli.cols)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(builder.tile_count());
        }

        while let Some(path) = builder.next_tile() {
            if let Some(ref pm) = self.progress_manager {
                pm.start_tile(path);
            }

            builder.paste_next()?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_tile();
            }
        }

        let canvas = builder.finish();
        export_canvas_as_jpeg(&canvas, &output_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        println!("Grid image saved as {}", output_path.display());

        Ok(())
    }
}
