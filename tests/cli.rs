//! Tests for command-line parsing, output naming, and the processing run

use clap::Parser;
use gridstitch::io::cli::{Cli, GridProcessor};
use gridstitch::io::configuration::DEFAULT_COLUMNS;
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

fn write_tile(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) {
    let tile = RgbImage::from_pixel(width, height, Rgb(color));
    tile.save(dir.join(name)).unwrap();
}

#[test]
fn test_cli_parse_minimal_args() {
    let args = vec!["program", "--input-dir", "photos"];
    let cli = Cli::parse_from(args);

    assert_eq!(cli.input_dir, PathBuf::from("photos"));
    assert_eq!(cli.cols, DEFAULT_COLUMNS);
    assert_eq!(cli.prefix, None);
    assert!(!cli.quiet);
    assert!(cli.should_show_progress());
}

#[test]
fn test_cli_parse_all_args() {
    let args = vec![
        "program", "-i", "photos", "-c", "3", "-p", "run1", "--quiet",
    ];
    let cli = Cli::parse_from(args);

    assert_eq!(cli.input_dir, PathBuf::from("photos"));
    assert_eq!(cli.cols, 3);
    assert_eq!(cli.prefix.as_deref(), Some("run1"));
    assert!(cli.quiet);
    assert!(!cli.should_show_progress());
}

#[test]
fn test_output_path_without_prefix() {
    let cli = Cli::parse_from(vec!["program", "-i", "photos"]);

    assert_eq!(cli.output_path(), PathBuf::from("photos").join("grid.jpg"));
}

#[test]
fn test_output_path_with_prefix() {
    let cli = Cli::parse_from(vec!["program", "-i", "photos", "-p", "run1"]);

    assert_eq!(
        cli.output_path(),
        PathBuf::from("photos").join("run1_grid.jpg")
    );
}

// A full quiet run writes a decodable JPEG of the expected geometry
#[test]
fn test_process_writes_grid_jpeg() {
    let temp_dir = tempfile::tempdir().unwrap();
    for (index, name) in ["a.png", "b.png", "c.png"].iter().enumerate() {
        write_tile(temp_dir.path(), name, 16, 16, [index as u8 * 80, 0, 0]);
    }

    let dir_arg = temp_dir.path().to_str().unwrap();
    let cli = Cli::parse_from(vec!["program", "-i", dir_arg, "-c", "2", "--quiet"]);
    let output_path = cli.output_path();
    let mut processor = GridProcessor::new(cli);

    processor.process().unwrap();

    assert_eq!(output_path, temp_dir.path().join("grid.jpg"));
    assert_eq!(image::image_dimensions(&output_path).unwrap(), (32, 32));
}

#[test]
fn test_process_honours_prefix() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_tile(temp_dir.path(), "a.png", 8, 8, [50, 60, 70]);

    let dir_arg = temp_dir.path().to_str().unwrap();
    let cli = Cli::parse_from(vec![
        "program", "-i", dir_arg, "-p", "run1", "--quiet",
    ]);
    let mut processor = GridProcessor::new(cli);

    processor.process().unwrap();

    assert!(temp_dir.path().join("run1_grid.jpg").exists());
    assert!(!temp_dir.path().join("grid.jpg").exists());
}

// A failed run must not leave an output file behind
#[test]
fn test_process_empty_directory_fails_without_output() {
    let temp_dir = tempfile::tempdir().unwrap();

    let dir_arg = temp_dir.path().to_str().unwrap();
    let cli = Cli::parse_from(vec!["program", "-i", dir_arg, "--quiet"]);
    let output_path = cli.output_path();
    let mut processor = GridProcessor::new(cli);

    assert!(processor.process().is_err());
    assert!(!output_path.exists());
}

#[test]
fn test_process_missing_directory_fails() {
    let cli = Cli::parse_from(vec!["program", "-i", "/no/such/directory", "--quiet"]);
    let mut processor = GridProcessor::new(cli);

    assert!(processor.process().is_err());
}

// A second run overwrites the previous grid instead of ingesting it
#[test]
fn test_process_rerun_overwrites_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_tile(temp_dir.path(), "a.png", 8, 8, [200, 10, 10]);
    write_tile(temp_dir.path(), "b.png", 8, 8, [10, 200, 10]);

    let dir_arg = temp_dir.path().to_str().unwrap();

    for _ in 0..2 {
        let cli = Cli::parse_from(vec!["program", "-i", dir_arg, "-c", "2", "--quiet"]);
        let mut processor = GridProcessor::new(cli);
        processor.process().unwrap();
    }

    let output_path = temp_dir.path().join("grid.jpg");
    assert_eq!(image::image_dimensions(&output_path).unwrap(), (16, 8));
}
