//! chat-transcript: render chat channel history into a self-contained HTML transcript.
//!
//! The renderer reproduces the structure a chat client shows: consecutive
//! messages from one author grouped into blocks, reply banners, embeds,
//! attachments, reactions, interactive components, and notices for pins,
//! threads and membership changes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chat_transcript::source::{ArchiveSource, ChannelArchive};
//! use chat_transcript::transcript::{render_transcript, RenderOptions};
//!
//! #[tokio::main]
//! async fn main() -> chat_transcript::Result<()> {
//!     let archive = ChannelArchive::load("general.json")?;
//!     let source = ArchiveSource::new(&archive);
//!     let options = RenderOptions::new("Europe/Paris")?;
//!
//!     let transcript =
//!         render_transcript(&archive.messages, &archive.guild, &source, &options).await?;
//!     println!("{} authors", transcript.authors.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`model`]: messages, users, guilds and their attached assets
//! - [`source`]: the [`ChannelSource`](source::ChannelSource) collaborator and an offline archive
//! - [`template`]: placeholder fill engine, markdown renderer and HTML templates
//! - [`render`]: embed, attachment, component and reaction markup
//! - [`resolve`]: author name colour and role icon lookup
//! - [`builder`]: per-message state machine and block grouping
//! - [`transcript`]: assembly of the full transcript and page wrapper
//! - [`cli`]: command-line interface
//! - [`config`]: configuration management
//! - [`error`]: error types and exit codes

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod resolve;
pub mod source;
pub mod template;
pub mod time;
pub mod transcript;
pub mod util;

// Re-export commonly used types at the crate root
pub use error::{FetchError, Result, TranscriptError};
pub use transcript::{render_transcript, RenderOptions, Transcript};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::{AuthorAggregate, AuthorRoster};
    pub use crate::error::{FetchError, Result, TranscriptError};
    pub use crate::model::{Channel, Guild, Member, Message, User};
    pub use crate::source::{ArchiveSource, ChannelArchive, ChannelSource, MessageWindow};
    pub use crate::transcript::{render_transcript, DocumentContext, RenderOptions, Transcript};
}
