//! CLI command implementations.
//!
//! Each command is implemented in its own module with a `run` function
//! that handles the command logic.

pub mod config;
pub mod render;
pub mod roster;

use std::path::Path;

use tokio::runtime::Runtime;

use crate::error::{Result, TranscriptError};
use crate::model::Message;
use crate::source::{ArchiveSource, ChannelArchive};
use crate::transcript::{render_transcript, RenderOptions, Transcript};

use super::WindowArgs;

/// Single-threaded runtime for driving the async renderer.
pub fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| TranscriptError::io("Failed to start async runtime", e))
}

/// Load an archive, select its messages and render them.
pub fn render_archive(
    path: &Path,
    window: &WindowArgs,
    options: &RenderOptions,
) -> Result<(ChannelArchive, Transcript)> {
    let archive = ChannelArchive::load(path)?;
    let messages: Vec<Message> = window.window()?.apply(&archive.messages);
    let source = ArchiveSource::new(&archive);

    let transcript = runtime()?.block_on(render_transcript(
        &messages,
        &archive.guild,
        &source,
        options,
    ))?;
    Ok((archive, transcript))
}
