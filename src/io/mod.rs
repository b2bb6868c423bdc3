//! Input/output operations and error handling
//!
//! Directory scanning, CLI orchestration, progress display, and JPEG
//! export around the composition core.

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime defaults and output naming constants
pub mod configuration;
/// Error types for scan, decode, and export operations
pub mod error;
/// JPEG export of the finished canvas
pub mod image;
/// Paste-loop progress display
pub mod progress;
/// Directory enumeration and eligibility filtering
pub mod scan;
