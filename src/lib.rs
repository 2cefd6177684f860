/*!
 * # mojifix
 *
 * A Rust utility that rewrites mis-encoded character sequences (mojibake)
 * in text files into their intended emoji and symbol equivalents.
 *
 * ## Features
 *
 * - Ordered, deterministic table of literal substring replacements
 * - Lossy or strict UTF-8 decoding of input files
 * - Single-file and directory processing
 * - Check mode that reports without writing
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `replacement_table`: The ordered mojibake replacement table
 * - `mojibake_fixer`: Pure text correction, no I/O
 * - `file_utils`: File system operations and decode policy
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod mojibake_fixer;
pub mod replacement_table;

// Re-export main types for easier usage
pub use app_config::{Config, DecodeMode};
pub use app_controller::Controller;
pub use errors::{AppError, TableError};
pub use mojibake_fixer::{FixOutcome, MojibakeFixer};
pub use replacement_table::{REPLACEMENTS, ReplacementTable};
