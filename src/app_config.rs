use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// How undecodable byte sequences are handled on read
    #[serde(default)]
    pub decode_mode: DecodeMode,

    /// File extension selected when processing a directory
    #[serde(default = "default_text_extension")]
    pub text_extension: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decode_mode: DecodeMode::default(),
            text_extension: default_text_extension(),
            log_level: LogLevel::default(),
        }
    }
}

/// Decoding policy for file reads
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    // @mode: Substitute U+FFFD for undecodable byte sequences
    #[default]
    Lossy,
    // @mode: Fail the read on undecodable byte sequences
    Strict,
}

impl DecodeMode {
    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Lossy => "lossy".to_string(),
            Self::Strict => "strict".to_string(),
        }
    }
}

// Implement Display trait for DecodeMode
impl std::fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for DecodeMode
impl std::str::FromStr for DecodeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lossy" => Ok(Self::Lossy),
            "strict" => Ok(Self::Strict),
            _ => Err(anyhow!("Invalid decode mode: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_text_extension() -> String {
    "txt".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.text_extension.is_empty() {
            return Err(anyhow!("text_extension must not be empty"));
        }

        if self.text_extension.contains(char::is_whitespace) {
            return Err(anyhow!(
                "text_extension must not contain whitespace: {:?}",
                self.text_extension
            ));
        }

        Ok(())
    }
}
