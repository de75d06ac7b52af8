//! The external collaborator that supplies messages, members and channels.
//!
//! Rendering never talks to a platform directly. Anything it cannot find in
//! the caller-supplied message list goes through a [`ChannelSource`]; the
//! crate ships [`ArchiveSource`], which answers from a JSON snapshot.

mod archive;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use archive::{ArchiveSource, ChannelArchive};
pub use crate::error::FetchError;

use crate::model::{Channel, Guild, Member, Message};

/// Lookups the renderer needs from the outside world.
///
/// Implementations own timeouts and retries. Every failure is reported once
/// and the renderer decides whether it is fatal.
#[async_trait]
pub trait ChannelSource: Send + Sync {
    /// Fetch a single message from a channel.
    async fn fetch_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Message, FetchError>;

    /// Fetch a user's current membership in a guild, if they are still a member.
    async fn fetch_member(&self, guild: &Guild, user_id: &str) -> Option<Member>;

    /// Fetch a channel by id.
    async fn fetch_channel(&self, channel_id: &str) -> Result<Channel, FetchError>;
}

/// Caller-side message selection: time bounds and a record limit.
///
/// Bounds are exclusive. The limit keeps the most recent messages, and the
/// result is always in chronological order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageWindow {
    /// Maximum number of messages to keep.
    pub limit: Option<usize>,
    /// Keep messages created strictly before this instant.
    pub before: Option<DateTime<Utc>>,
    /// Keep messages created strictly after this instant.
    pub after: Option<DateTime<Utc>>,
}

impl MessageWindow {
    /// Select messages from a history.
    #[must_use]
    pub fn apply(&self, messages: &[Message]) -> Vec<Message> {
        let mut selected: Vec<Message> = messages
            .iter()
            .filter(|m| self.before.map_or(true, |before| m.created_at < before))
            .filter(|m| self.after.map_or(true, |after| m.created_at > after))
            .cloned()
            .collect();
        selected.sort_by_key(|m| m.created_at);

        if let Some(limit) = self.limit {
            let skip = selected.len().saturating_sub(limit);
            selected.drain(..skip);
        }
        selected
    }
}
