use anyhow::{Context, Result, anyhow};
use log::{debug, error, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::mojibake_fixer::MojibakeFixer;

// @module: Application controller wiring the fixer to the filesystem

/// Main application controller for mojibake fixing
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: The pure text fixer
    fixer: MojibakeFixer,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let fixer = MojibakeFixer::default();

        // A cascading table would make repeated runs keep rewriting output
        fixer
            .table()
            .check_no_cascades()
            .context("Replacement table failed validation")?;

        Ok(Self { config, fixer })
    }

    /// The configuration this controller runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fix a single file in place: read, replace, write back.
    ///
    /// With `check` set, the file is read and inspected but never written.
    /// Zero replacements is success either way.
    pub fn run<P: AsRef<Path>>(&self, input_file: P, check: bool) -> Result<()> {
        let input_file = input_file.as_ref();

        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let text = FileManager::read_text(input_file, self.config.decode_mode)?;
        let outcome = self.fixer.fix_text(&text);

        if check {
            if outcome.changed() {
                info!(
                    "Would fix {} mojibake sequence(s) in {:?}",
                    outcome.replacements, input_file
                );
            } else {
                info!("No mojibake found in {:?}", input_file);
            }
            return Ok(());
        }

        FileManager::write_to_file(input_file, &outcome.text)?;

        if outcome.changed() {
            info!(
                "✅ Fixed {} mojibake sequence(s) in {:?}",
                outcome.replacements, input_file
            );
        } else {
            info!("✅ {:?} already clean, nothing to fix", input_file);
        }

        Ok(())
    }

    /// Fix every matching file under a directory.
    ///
    /// Files are selected by the configured extension. A failure on one file
    /// is logged and the walk continues; the summary counts successes.
    pub fn run_folder<P: AsRef<Path>>(&self, input_dir: P, check: bool) -> Result<()> {
        let input_dir = input_dir.as_ref();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files = FileManager::find_files(input_dir, &self.config.text_extension)?;
        if files.is_empty() {
            warn!(
                "No .{} files found under {:?}",
                self.config.text_extension, input_dir
            );
            return Ok(());
        }

        let mut processed_count = 0;
        for file in &files {
            debug!("Processing file: {:?}", file);
            if let Err(e) = self.run(file, check) {
                error!("Error processing file {:?}: {}", file, e);
            } else {
                processed_count += 1;
            }
        }

        info!("Finished processing {} of {} file(s)", processed_count, files.len());

        Ok(())
    }
}
