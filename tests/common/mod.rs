/*!
 * Common test utilities for the mojifix test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The mojibake form of "✅" (U+2705 mis-decoded as Windows-1252)
pub const BROKEN_CHECK: &str = "\u{E2}\u{153}\u{2026}";

/// The mojibake form of "❌"
pub const BROKEN_CROSS: &str = "\u{E2}\u{152}";

/// The mojibake form of "💾"
pub const BROKEN_FLOPPY: &str = "\u{F0}\u{178}\u{27}\u{BE}";

/// The mojibake form of "≥"
pub const BROKEN_GEQ: &str = "\u{E2}\u{2030}\u{A5}";

/// The mojibake form of "≤"
pub const BROKEN_LEQ: &str = "\u{E2}\u{2030}\u{A4}";

/// The mojibake form of an em dash inside "Mon-Sat"
pub const BROKEN_MON_SAT: &str = "Mon\u{E2}\u{20AC}\u{22}Sat";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a test file with raw bytes, for exercising decode policy
pub fn create_test_file_bytes(dir: &PathBuf, filename: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}
