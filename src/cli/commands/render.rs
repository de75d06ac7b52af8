//! Render command implementation.
//!
//! Renders a channel archive to a full HTML page or a bare fragment.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use crate::cli::{Cli, RenderArgs};
use crate::config::Config;
use crate::error::{Result, TranscriptError};
use crate::time::parse_timezone;
use crate::transcript::{DocumentContext, RenderOptions};
use crate::util::atomic_write;

use super::render_archive;

/// Run the render command.
pub fn run(cli: &Cli, config: &Config, args: &RenderArgs) -> Result<()> {
    let options = options_for(config, args)?;
    let (archive, transcript) = render_archive(&args.archive, &args.window, &options)?;

    let output = if args.fragment {
        transcript.html
    } else {
        transcript.to_document(&DocumentContext {
            guild: &archive.guild,
            channel: &archive.channel,
            title_prefix: &config.document.title_prefix,
            include_roster: config.document.include_roster,
            exported_at: Utc::now(),
            options,
        })
    };

    match output_path(config, args, &archive.channel.name) {
        Some(path) => {
            atomic_write(&path, output.as_bytes())?;
            info!(path = %path.display(), bytes = output.len(), "Wrote transcript");
            if !cli.quiet {
                eprintln!("Wrote {} messages to {}", transcript.message_count, path.display());
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| TranscriptError::io("Failed to write transcript to stdout", e))?;
        }
    }

    Ok(())
}

/// Configured options with command-line overrides applied.
fn options_for(config: &Config, args: &RenderArgs) -> Result<RenderOptions> {
    let mut options = config.render_options()?;
    if let Some(zone) = &args.timezone {
        options.timezone = parse_timezone(zone)?;
    }
    if args.twelve_hour {
        options.military_time = false;
    }
    Ok(options)
}

/// Where to write: `-o`, else the configured directory, else stdout.
fn output_path(config: &Config, args: &RenderArgs, channel_name: &str) -> Option<PathBuf> {
    args.output.clone().or_else(|| {
        config
            .output
            .directory
            .as_ref()
            .map(|dir| dir.join(config.output_file_name(channel_name)))
    })
}
