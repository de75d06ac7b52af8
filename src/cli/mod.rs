//! Command-line interface for chat-transcript.
//!
//! Three commands:
//! - `render`: Render a channel archive to an HTML transcript
//! - `roster`: Print the participant aggregates as JSON
//! - `config`: View and modify configuration

mod commands;

pub use commands::*;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::error::Result;
use crate::source::MessageWindow;
use crate::time::parse_timestamp;

/// Render chat channel history into a self-contained HTML transcript.
#[derive(Debug, Parser)]
#[command(name = "transcript")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress non-essential output.
    #[arg(short = 'q', long, global = true, env = "TRANSCRIPT_QUIET")]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn", env = "TRANSCRIPT_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format (text, json, compact, pretty).
    #[arg(long, global = true, default_value = "text", env = "TRANSCRIPT_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Path to custom configuration file.
    #[arg(long, global = true, env = "TRANSCRIPT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Log level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Errors, warnings, and informational messages.
    Info,
    /// All of the above plus debug messages.
    Debug,
    /// All messages including trace-level details.
    Trace,
}

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// Structured JSON format for machine consumption.
    Json,
    /// Compact single-line format.
    Compact,
    /// Pretty format with full details.
    Pretty,
}

impl LogLevel {
    /// Convert to tracing filter level.
    #[must_use]
    pub fn to_filter_string(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a channel archive to HTML.
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Print per-author aggregates as JSON.
    Roster(RosterArgs),

    /// View and modify configuration.
    #[command(alias = "cfg")]
    Config(ConfigArgs),
}

/// Message selection shared by commands that read an archive.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WindowArgs {
    /// Keep only the N most recent messages.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Keep messages sent before this time (RFC 3339, or naive as UTC).
    #[arg(long)]
    pub before: Option<String>,

    /// Keep messages sent after this time (RFC 3339, or naive as UTC).
    #[arg(long)]
    pub after: Option<String>,
}

impl WindowArgs {
    /// Parse the arguments into a [`MessageWindow`].
    pub fn window(&self) -> Result<MessageWindow> {
        let parse = |value: &Option<String>| -> Result<Option<DateTime<Utc>>> {
            value.as_deref().map(parse_timestamp).transpose()
        };
        Ok(MessageWindow {
            limit: self.limit,
            before: parse(&self.before)?,
            after: parse(&self.after)?,
        })
    }
}

/// Arguments for the render command.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Channel archive (JSON).
    pub archive: PathBuf,

    /// Output file (default: stdout, or the configured output directory).
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Display timezone (IANA name, overrides config).
    #[arg(long = "tz")]
    pub timezone: Option<String>,

    /// Use a 12-hour clock.
    #[arg(long)]
    pub twelve_hour: bool,

    /// Emit only the message markup, without the page wrapper.
    #[arg(long)]
    pub fragment: bool,

    /// Message selection.
    #[command(flatten)]
    pub window: WindowArgs,
}

/// Arguments for the roster command.
#[derive(Debug, Parser)]
pub struct RosterArgs {
    /// Channel archive (JSON).
    pub archive: PathBuf,

    /// Message selection.
    #[command(flatten)]
    pub window: WindowArgs,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Config action to perform.
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommand actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show all configuration values.
    Show,

    /// Get a specific configuration value.
    Get {
        /// Configuration key (e.g., "render.timezone").
        key: String,
    },

    /// Set a configuration value.
    Set {
        /// Configuration key (e.g., "render.timezone").
        key: String,
        /// Value to set.
        value: String,
    },

    /// Show configuration file path.
    Path,

    /// Initialize configuration file with defaults.
    Init,

    /// Reset configuration to defaults.
    Reset,
}

/// Initialize tracing/logging based on CLI options.
fn init_logging(cli: &Cli) {
    use tracing_subscriber::{
        fmt::{self, format::FmtSpan},
        layer::SubscriberExt,
        util::SubscriberInitExt,
        EnvFilter,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_string()));

    let result = match cli.log_format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
}

/// Load the effective configuration.
///
/// An explicit `--config` file replaces the global one; otherwise the global
/// file is merged with `.chat-transcript.toml` from the working directory.
fn load_config(cli: &Cli) -> Config {
    match &cli.config {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path.display(), e);
            Config::default()
        }),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::load_for_dir(&cwd).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load directory config: {e}");
                Config::default()
            })
        }
    }
}

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    match &cli.command {
        Commands::Render(args) => commands::render::run(&cli, &load_config(&cli), args),
        Commands::Roster(args) => commands::roster::run(&load_config(&cli), args),
        Commands::Config(args) => commands::config::run(&cli, args),
    }
}
