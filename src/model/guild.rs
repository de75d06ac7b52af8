//! Users, guild members, roles, guilds and channels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{snowflake_timestamp, Snowflake};

/// CDN root for default avatars.
const DEFAULT_AVATAR_BASE: &str = "https://cdn.discordapp.com/embed/avatars";
/// CDN root for custom emoji.
pub const EMOJI_CDN_BASE: &str = "https://cdn.discordapp.com/emojis";

/// A chat account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: Snowflake,
    /// Account name, not unique.
    pub username: String,
    /// Legacy 4-digit tag; `"0"` for accounts on unique usernames.
    #[serde(default = "default_discriminator")]
    pub discriminator: String,
    /// Global display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    /// Resolved avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Whether the account is a bot.
    #[serde(default)]
    pub bot: bool,
    /// Whether the bot account is verified.
    #[serde(default)]
    pub verified_bot: bool,
}

fn default_discriminator() -> String {
    "0".to_string()
}

impl User {
    /// Create a plain user account.
    pub fn new(id: impl Into<Snowflake>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            discriminator: default_discriminator(),
            global_name: None,
            avatar_url: None,
            bot: false,
            verified_bot: false,
        }
    }

    /// `name#1234`, or just the username for accounts without a discriminator.
    #[must_use]
    pub fn tag(&self) -> String {
        if self.discriminator.is_empty() || self.discriminator == "0" {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }

    /// Global display name, falling back to the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }

    /// Avatar URL, falling back to the default avatar for this account.
    #[must_use]
    pub fn display_avatar_url(&self) -> String {
        if let Some(url) = &self.avatar_url {
            return url.clone();
        }
        let index = match self.discriminator.parse::<u64>() {
            Ok(disc) if disc != 0 => disc % 5,
            _ => self.id.parse::<u64>().map(|id| (id >> 22) % 6).unwrap_or(0),
        };
        format!("{DEFAULT_AVATAR_BASE}/{index}.png")
    }

    /// Account creation instant, decoded from the id.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        snowflake_timestamp(&self.id)
    }
}

/// Icon attached to a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoleIcon {
    /// Uploaded image.
    Asset {
        /// Image URL.
        url: String,
    },
    /// Custom emoji used as the icon.
    Emoji {
        /// Emoji id.
        id: Snowflake,
    },
}

impl RoleIcon {
    /// Image URL for the icon.
    #[must_use]
    pub fn url(&self) -> String {
        match self {
            Self::Asset { url } => url.clone(),
            Self::Emoji { id } => format!("{EMOJI_CDN_BASE}/{id}.png"),
        }
    }
}

/// A guild role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Role ID. The default role shares the guild's id.
    pub id: Snowflake,
    /// Role name.
    #[serde(default)]
    pub name: String,
    /// RGB colour; `0` means the role does not colour names.
    #[serde(default)]
    pub color: u32,
    /// Position in the role hierarchy, higher ranks higher.
    #[serde(default)]
    pub position: i64,
    /// Optional role icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<RoleIcon>,
}

impl Role {
    /// Hierarchy key: position first, then id.
    ///
    /// Ids compare numerically when both parse, matching platform ordering.
    #[must_use]
    pub fn rank(&self) -> (i64, u64) {
        (self.position, self.id.parse::<u64>().unwrap_or(0))
    }

    /// Hex colour string, e.g. `#1ABC9C`.
    #[must_use]
    pub fn hex_color(&self) -> String {
        format!("#{:06X}", self.color & 0x00FF_FFFF)
    }
}

/// A user's membership in a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// The account.
    pub user: User,
    /// Guild nickname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// When the user joined the guild.
    #[serde(default, with = "crate::time::timestamp_opt", skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    /// Roles held by the member.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Member {
    /// Nickname, then global name, then username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nick.as_deref().unwrap_or_else(|| self.user.display_name())
    }
}

/// Kind of channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Regular text channel.
    #[default]
    Text,
    /// Voice channel.
    Voice,
    /// Announcement channel.
    Announcement,
    /// Thread under an announcement channel.
    AnnouncementThread,
    /// Public thread.
    PublicThread,
    /// Private thread.
    PrivateThread,
    /// Forum channel.
    Forum,
    /// Direct message.
    Direct,
}

impl ChannelKind {
    /// Whether channels of this kind are threads.
    #[must_use]
    pub const fn is_thread(self) -> bool {
        matches!(
            self,
            Self::AnnouncementThread | Self::PublicThread | Self::PrivateThread
        )
    }
}

/// A channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel ID.
    pub id: Snowflake,
    /// Channel name.
    #[serde(default)]
    pub name: String,
    /// Channel kind.
    #[serde(default, rename = "type")]
    pub kind: ChannelKind,
    /// Parent channel for threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    /// Channel topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl Channel {
    /// Create a text channel.
    pub fn text(id: impl Into<Snowflake>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ChannelKind::Text,
            parent_id: None,
            topic: None,
        }
    }

    /// Whether this channel is a thread.
    #[must_use]
    pub const fn is_thread(&self) -> bool {
        self.kind.is_thread()
    }
}

/// Snapshot of the guild a transcript is exported from.
///
/// `members` is a cache used for mention names only; authoritative member
/// lookups go through [`ChannelSource::fetch_member`](crate::source::ChannelSource::fetch_member).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    /// Guild ID, also the id of the default role.
    pub id: Snowflake,
    /// Guild name.
    #[serde(default)]
    pub name: String,
    /// Guild icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Known roles.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Known channels.
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Cached members.
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Guild {
    /// Create an empty guild snapshot.
    pub fn new(id: impl Into<Snowflake>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon_url: None,
            roles: Vec::new(),
            channels: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Look up a role by id.
    #[must_use]
    pub fn role(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Look up a channel by id.
    #[must_use]
    pub fn channel(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    /// Look up a cached member by user id.
    #[must_use]
    pub fn cached_member(&self, user_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.user.id == user_id)
    }

    /// Whether `role_id` is the guild's default role.
    #[must_use]
    pub fn is_default_role(&self, role_id: &str) -> bool {
        self.id == role_id
    }
}
