//! Config command implementation.
//!
//! View and modify transcript configuration settings. All actions act on the
//! `--config` file when one is given, the global file otherwise.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{default_config_path, Config};
use crate::error::{Result, TranscriptError};
use crate::time::parse_timezone;

/// Run the config command.
pub fn run(cli: &Cli, args: &ConfigArgs) -> Result<()> {
    let path = config_path(cli)?;
    match &args.action {
        ConfigAction::Show => show_config(&path),
        ConfigAction::Get { key } => {
            println!("{}", get_value(&load(&path)?, key)?);
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut config = load(&path)?;
            set_value(&mut config, key, value)?;
            config.save_to(&path)?;
            println!("Set {key} = {value}");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Init => init_config(&path),
        ConfigAction::Reset => reset_config(&path),
    }
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    cli.config.clone().map_or_else(default_config_path, Ok)
}

fn load(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::load_from(path)
    } else {
        Ok(Config::default())
    }
}

/// Show full configuration as TOML.
fn show_config(path: &Path) -> Result<()> {
    let config = load(path)?;
    let text = toml::to_string_pretty(&config).map_err(|e| TranscriptError::ConfigError {
        message: format!("Failed to serialize config: {e}"),
    })?;
    println!("# {}", path.display());
    print!("{text}");
    Ok(())
}

/// Read one value by dotted key.
fn get_value(config: &Config, key: &str) -> Result<String> {
    let value = match key {
        "render.timezone" => config.render.timezone.clone(),
        "render.military_time" => config.render.military_time.to_string(),
        "render.reference_preview_length" => config.render.reference_preview_length.to_string(),

        "document.title_prefix" => config.document.title_prefix.clone(),
        "document.include_roster" => config.document.include_roster.to_string(),

        "output.directory" => config
            .output
            .directory
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(stdout)".to_string()),
        "output.file_prefix" => config.output.file_prefix.clone(),

        _ => {
            return Err(TranscriptError::ConfigError {
                message: format!("Unknown configuration key: {key}"),
            })
        }
    };
    Ok(value)
}

/// Write one value by dotted key.
fn set_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "render.timezone" => {
            parse_timezone(value)?;
            config.render.timezone = value.to_string();
        }
        "render.military_time" => config.render.military_time = parse_bool(value)?,
        "render.reference_preview_length" => {
            config.render.reference_preview_length = parse_usize(value)?;
        }

        "document.title_prefix" => config.document.title_prefix = value.to_string(),
        "document.include_roster" => config.document.include_roster = parse_bool(value)?,

        "output.directory" => config.output.directory = Some(PathBuf::from(value)),
        "output.file_prefix" => config.output.file_prefix = value.to_string(),

        _ => {
            return Err(TranscriptError::ConfigError {
                message: format!("Unknown configuration key: {key}"),
            })
        }
    }
    config.validate()
}

/// Initialize configuration file with defaults.
fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Configuration file already exists at: {}", path.display());
        println!("Use 'transcript config reset' to reset to defaults.");
        return Ok(());
    }

    Config::default().save_to(path)?;
    println!("Created configuration file at: {}", path.display());
    Ok(())
}

/// Reset configuration to defaults.
fn reset_config(path: &Path) -> Result<()> {
    if !path.exists() {
        println!("No configuration file exists. Use 'transcript config init' to create one.");
        return Ok(());
    }

    Config::default().save_to(path)?;
    println!("Reset configuration to defaults at: {}", path.display());
    Ok(())
}

/// Parse boolean value.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(TranscriptError::ConfigError {
            message: format!("Invalid boolean value: {s}. Use true/false."),
        }),
    }
}

/// Parse usize value.
fn parse_usize(s: &str) -> Result<usize> {
    s.parse().map_err(|_| TranscriptError::ConfigError {
        message: format!("Invalid number: {s}"),
    })
}
