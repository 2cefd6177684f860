// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::{Config, DecodeMode};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod mojibake_fixer;
mod replacement_table;

/// CLI Wrapper for DecodeMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliDecodeMode {
    Lossy,
    Strict,
}

impl From<CliDecodeMode> for DecodeMode {
    fn from(cli_mode: CliDecodeMode) -> Self {
        match cli_mode {
            CliDecodeMode::Lossy => DecodeMode::Lossy,
            CliDecodeMode::Strict => DecodeMode::Strict,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fix mojibake in a text file or directory (default command)
    Fix(FixArgs),

    /// Generate shell completions for mojifix
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct FixArgs {
    /// Input text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Report what would change without writing anything
    #[arg(short = 'n', long)]
    check: bool,

    /// Decoding policy for undecodable byte sequences
    #[arg(short, long, value_enum)]
    decode_mode: Option<CliDecodeMode>,

    /// File extension to select when processing a directory
    #[arg(short, long)]
    extension: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// mojifix - Mojibake fixer for text files
///
/// Rewrites mis-encoded character sequences (mojibake) back into the
/// emoji and symbols they were meant to be, in place.
#[derive(Parser, Debug)]
#[command(name = "mojifix")]
#[command(version = "1.0.0")]
#[command(about = "Fix mojibake emoji sequences in text files")]
#[command(long_about = "mojifix rewrites a fixed set of mis-encoded character sequences in a
text file into their intended emoji/glyph equivalents, overwriting the
file in place.

EXAMPLES:
    mojifix notes.txt                   # Fix a single file using default config
    mojifix -n notes.txt                # Report what would change, write nothing
    mojifix -d strict notes.txt         # Fail instead of absorbing invalid UTF-8
    mojifix -e md docs/                 # Fix every .md file under docs/
    mojifix --log-level debug notes.txt # Verbose per-file logging
    mojifix completions bash > mojifix.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(short = 'n', long)]
    check: bool,

    /// Decoding policy for undecodable byte sequences
    #[arg(short, long, value_enum)]
    decode_mode: Option<CliDecodeMode>,

    /// File extension to select when processing a directory
    #[arg(short, long)]
    extension: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "mojifix", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Fix(args)) => run_fix(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let fix_args = FixArgs {
                input_path,
                check: cli.check,
                decode_mode: cli.decode_mode,
                extension: cli.extension,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_fix(fix_args)
        }
    }
}

fn run_fix(options: FixArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(decode_mode) = &options.decode_mode {
            config.decode_mode = decode_mode.clone().into();
        }

        if let Some(extension) = &options.extension {
            config.text_extension = extension.clone();
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let mut config = Config::default();

        // Apply command line overrides to default config if specified
        if let Some(decode_mode) = &options.decode_mode {
            config.decode_mode = decode_mode.clone().into();
        }

        if let Some(extension) = &options.extension {
            config.text_extension = extension.clone();
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // Run the controller against the input file or directory
    if options.input_path.is_file() {
        controller.run(&options.input_path, options.check)
    } else if options.input_path.is_dir() {
        controller.run_folder(&options.input_path, options.check)
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
