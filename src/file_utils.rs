use anyhow::{Context, Result, anyhow};
use encoding_rs::UTF_8;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::app_config::DecodeMode;
use crate::errors::AppError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Read a file as UTF-8 text under the given decode mode.
    ///
    /// Lossy mode substitutes U+FFFD for any byte sequence that does not
    /// decode; the read never fails on content, only on I/O. Strict mode
    /// turns undecodable content into an `AppError::Decode`.
    pub fn read_text<P: AsRef<Path>>(path: P, mode: DecodeMode) -> Result<String> {
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;

        match mode {
            DecodeMode::Lossy => {
                // No BOM handling: a clean file must round-trip byte-for-byte
                let (decoded, had_errors) = UTF_8.decode_without_bom_handling(&bytes);
                if had_errors {
                    log::warn!(
                        "Undecodable byte sequences in {:?} replaced with U+FFFD",
                        path.as_ref()
                    );
                }
                Ok(decoded.into_owned())
            }
            DecodeMode::Strict => String::from_utf8(bytes).map_err(|e| {
                anyhow!(AppError::Decode(format!(
                    "invalid UTF-8 in {:?}: {}",
                    path.as_ref(),
                    e
                )))
            }),
        }
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }
}
