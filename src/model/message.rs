//! Message records.
//!
//! A [`Message`] is supplied whole by the caller and never modified by the
//! renderer. Anything derived from it (rendered reply banners, resolved
//! colours) lives in builder output instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assets::{Attachment, Component, Embed, Reaction};
use super::guild::User;
use super::Snowflake;

/// Message type tag.
///
/// Aliases accept the platform's own type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Regular user-authored content.
    #[default]
    #[serde(alias = "default", alias = "reply", alias = "chat_input_command")]
    Normal,
    /// "X pinned a message" notice.
    #[serde(alias = "channel_pinned_message")]
    PinNotice,
    /// "X started a thread" notice.
    ThreadCreated,
    /// "X added Y to the thread" notice.
    #[serde(alias = "recipient_add")]
    MemberAdded,
    /// "X removed Y from the thread" notice.
    #[serde(alias = "recipient_remove")]
    MemberRemoved,
}

impl MessageKind {
    /// Get the message kind as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::PinNotice => "pin_notice",
            Self::ThreadCreated => "thread_created",
            Self::MemberAdded => "member_added",
            Self::MemberRemoved => "member_removed",
        }
    }

    /// Channel-level audit events always start their own block.
    #[must_use]
    pub const fn is_notice(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Pointer from a message to an earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReference {
    /// Referenced message.
    pub message_id: Snowflake,
    /// Channel holding the referenced message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// Guild holding the referenced message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
}

/// Slash-command invocation that produced a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Interaction ID.
    pub id: Snowflake,
    /// Command name without the leading slash.
    pub name: String,
    /// Invoking user.
    pub user: User,
}

/// Guild-specific author data captured with the message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMember {
    /// Guild nickname at the time of the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// When the author joined the guild.
    #[serde(default, with = "crate::time::timestamp_opt", skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message ID.
    pub id: Snowflake,
    /// Channel the message was posted in.
    pub channel_id: Snowflake,
    /// Author account.
    pub author: User,
    /// Author guild membership, when posted in a guild.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<MessageMember>,
    /// Raw text content.
    #[serde(default)]
    pub content: String,
    /// Creation time.
    #[serde(rename = "timestamp", with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last edit time.
    #[serde(
        default,
        rename = "edited_timestamp",
        with = "crate::time::timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub edited_at: Option<DateTime<Utc>>,
    /// Type tag.
    #[serde(default, rename = "type")]
    pub kind: MessageKind,
    /// Reply reference.
    #[serde(default, rename = "message_reference", skip_serializing_if = "Option::is_none")]
    pub reference: Option<MessageReference>,
    /// Slash-command invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    /// Rich embeds.
    #[serde(default)]
    pub embeds: Vec<Embed>,
    /// File attachments.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Interactive components.
    #[serde(default)]
    pub components: Vec<Component>,
    /// Reactions.
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    /// Ids of mentioned users, in mention order.
    #[serde(default)]
    pub mention_ids: Vec<Snowflake>,
    /// Webhook that posted the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<Snowflake>,
}

impl Message {
    /// Create a plain message with no assets.
    pub fn new(
        id: impl Into<Snowflake>,
        channel_id: impl Into<Snowflake>,
        author: User,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            author,
            member: None,
            content: content.into(),
            created_at,
            edited_at: None,
            kind: MessageKind::Normal,
            reference: None,
            interaction: None,
            embeds: Vec::new(),
            attachments: Vec::new(),
            components: Vec::new(),
            reactions: Vec::new(),
            mention_ids: Vec::new(),
            webhook_id: None,
        }
    }

    /// Nickname at posting time, falling back to the account's display name.
    #[must_use]
    pub fn author_display_name(&self) -> &str {
        self.member
            .as_ref()
            .and_then(|m| m.nick.as_deref())
            .unwrap_or_else(|| self.author.display_name())
    }

    /// When the author joined the guild, if known.
    #[must_use]
    pub fn author_joined_at(&self) -> Option<DateTime<Utc>> {
        self.member.as_ref().and_then(|m| m.joined_at)
    }

    /// Whether a webhook posted this message.
    #[must_use]
    pub fn is_webhook(&self) -> bool {
        self.webhook_id.is_some()
    }

    /// Whether the message carries any embed or attachment.
    #[must_use]
    pub fn has_media(&self) -> bool {
        !self.embeds.is_empty() || !self.attachments.is_empty()
    }
}
