//! Configuration management for chat-transcript.
//!
//! Handles:
//! - Display settings (timezone, clock style, reply previews)
//! - Document settings (title, roster)
//! - Output file naming

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranscriptError};
use crate::transcript::{RenderOptions, DEFAULT_PREVIEW_LENGTH};
use crate::util::atomic_write;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Timestamp and preview settings.
    #[serde(default)]
    pub render: RenderConfig,
    /// Page-level settings.
    #[serde(default)]
    pub document: DocumentConfig,
    /// Output file settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Directory-specific configuration filename.
pub const LOCAL_CONFIG_FILENAME: &str = ".chat-transcript.toml";

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        let config_path = default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration with directory-specific overrides.
    ///
    /// Looks for `.chat-transcript.toml` in `dir` and merges it over the
    /// global configuration.
    pub fn load_for_dir(dir: &Path) -> Result<Self> {
        let mut config = Self::load().unwrap_or_default();

        let local_path = dir.join(LOCAL_CONFIG_FILENAME);
        if local_path.exists() {
            let local = Self::load_from(&local_path)?;
            config.merge_from(&local);
        }

        Ok(config)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TranscriptError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| TranscriptError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence).
    ///
    /// Values equal to their defaults in `other` do not override.
    pub fn merge_from(&mut self, other: &Config) {
        let defaults = Config::default();

        if other.render.timezone != defaults.render.timezone {
            self.render.timezone = other.render.timezone.clone();
        }
        self.render.military_time = other.render.military_time;
        if other.render.reference_preview_length != defaults.render.reference_preview_length {
            self.render.reference_preview_length = other.render.reference_preview_length;
        }

        if other.document.title_prefix != defaults.document.title_prefix {
            self.document.title_prefix = other.document.title_prefix.clone();
        }
        self.document.include_roster = other.document.include_roster;

        if other.output.directory.is_some() {
            self.output.directory = other.output.directory.clone();
        }
        if other.output.file_prefix != defaults.output.file_prefix {
            self.output.file_prefix = other.output.file_prefix.clone();
        }
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.render.reference_preview_length == 0 {
            return Err(TranscriptError::InvalidConfig {
                message: "render.reference_preview_length must be greater than zero".to_string(),
            });
        }
        if self.output.file_prefix.trim().is_empty() {
            return Err(TranscriptError::InvalidConfig {
                message: "output.file_prefix must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Validated render options.
    pub fn render_options(&self) -> Result<RenderOptions> {
        Ok(RenderOptions::new(&self.render.timezone)?
            .with_military_time(self.render.military_time)
            .with_preview_length(self.render.reference_preview_length))
    }

    /// Output file name for a channel.
    #[must_use]
    pub fn output_file_name(&self, channel_name: &str) -> String {
        let channel: String = channel_name
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
            .collect();
        format!("{}-{channel}.html", self.output.file_prefix)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = default_config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to a specific path.
    ///
    /// Uses atomic file writes so a crash never leaves a half-written file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| TranscriptError::InvalidConfig {
            message: format!("Failed to serialize config: {e}"),
        })?;

        atomic_write(path, content.as_bytes())?;

        Ok(())
    }
}

/// Timestamp and preview settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// IANA zone name.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// 24-hour clock.
    #[serde(default = "default_true")]
    pub military_time: bool,
    /// Characters kept in reply previews.
    #[serde(default = "default_preview_length")]
    pub reference_preview_length: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            military_time: true,
            reference_preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Page title prefix.
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
    /// Include the participant roster.
    #[serde(default = "default_true")]
    pub include_roster: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title_prefix: default_title_prefix(),
            include_roster: true,
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory transcripts are written to when no path is given.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// File name prefix.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: default_file_prefix(),
        }
    }
}

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_preview_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

fn default_title_prefix() -> String {
    "Transcript".to_string()
}

fn default_file_prefix() -> String {
    "transcript".to_string()
}

/// Get the default configuration path.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| TranscriptError::Unsupported {
        feature: "config directory discovery".to_string(),
    })?;

    Ok(config_dir.join("chat-transcript").join("config.toml"))
}
