//! Offline source backed by a JSON channel snapshot.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{ChannelSource, FetchError};
use crate::error::{Result, TranscriptError};
use crate::model::{Channel, Guild, Member, Message};

/// Snapshot of one channel's history and the context needed to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelArchive {
    /// Guild the channel belongs to.
    pub guild: Guild,
    /// The exported channel.
    pub channel: Channel,
    /// Other channels reachable from this one (thread parents, ...).
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Current guild members.
    #[serde(default)]
    pub members: Vec<Member>,
    /// The history to render.
    pub messages: Vec<Message>,
    /// Messages outside the history that may be fetched, such as reply targets.
    #[serde(default)]
    pub extra_messages: Vec<Message>,
}

impl ChannelArchive {
    /// Parse an archive from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| TranscriptError::parse_with_source("Failed to parse channel archive", e))
    }

    /// Read and parse an archive file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TranscriptError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|e| {
            TranscriptError::io(format!("Failed to read archive: {}", path.display()), e)
        })?;
        let archive = Self::from_json(&text)?;
        debug!(
            path = %path.display(),
            messages = archive.messages.len(),
            "Loaded channel archive"
        );
        Ok(archive)
    }
}

/// [`ChannelSource`] answering from a [`ChannelArchive`].
#[derive(Debug, Clone, Default)]
pub struct ArchiveSource {
    messages: HashMap<(String, String), Message>,
    channels: HashMap<String, Channel>,
    members: HashMap<String, Member>,
}

impl ArchiveSource {
    /// Index an archive.
    #[must_use]
    pub fn new(archive: &ChannelArchive) -> Self {
        let mut source = Self::default();

        for channel in archive
            .guild
            .channels
            .iter()
            .chain(&archive.channels)
            .chain(std::iter::once(&archive.channel))
        {
            source.channels.insert(channel.id.clone(), channel.clone());
        }
        for member in archive.guild.members.iter().chain(&archive.members) {
            source.members.insert(member.user.id.clone(), member.clone());
        }
        for message in archive.messages.iter().chain(&archive.extra_messages) {
            source.insert_message(message.clone());
        }
        source
    }

    /// Add or replace a message.
    pub fn insert_message(&mut self, message: Message) {
        self.messages
            .insert((message.channel_id.clone(), message.id.clone()), message);
    }

    /// Add or replace a channel.
    pub fn insert_channel(&mut self, channel: Channel) {
        self.channels.insert(channel.id.clone(), channel);
    }

    /// Add or replace a member.
    pub fn insert_member(&mut self, member: Member) {
        self.members.insert(member.user.id.clone(), member);
    }

    /// Remove a message so later fetches report it as deleted.
    pub fn remove_message(&mut self, channel_id: &str, message_id: &str) -> Option<Message> {
        self.messages
            .remove(&(channel_id.to_string(), message_id.to_string()))
    }
}

#[async_trait]
impl ChannelSource for ArchiveSource {
    #[instrument(level = "trace", skip(self))]
    async fn fetch_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> std::result::Result<Message, FetchError> {
        self.messages
            .get(&(channel_id.to_string(), message_id.to_string()))
            .cloned()
            .ok_or_else(|| FetchError::not_found("message", message_id))
    }

    async fn fetch_member(&self, _guild: &Guild, user_id: &str) -> Option<Member> {
        self.members.get(user_id).cloned()
    }

    async fn fetch_channel(&self, channel_id: &str) -> std::result::Result<Channel, FetchError> {
        self.channels
            .get(channel_id)
            .cloned()
            .ok_or_else(|| FetchError::not_found("channel", channel_id))
    }
}
