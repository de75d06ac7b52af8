//! Message assets: embeds, attachments, components and reactions.
//!
//! Every field that the platform may omit is defaulted so a partial asset
//! still deserializes and can be rendered best-effort.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::guild::EMOJI_CDN_BASE;
use super::Snowflake;

/// Rich embed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Embed {
    /// Title text.
    pub title: Option<String>,
    /// Markdown description.
    pub description: Option<String>,
    /// Link applied to the title.
    pub url: Option<String>,
    /// Sidebar colour.
    pub color: Option<u32>,
    /// Footer timestamp.
    #[serde(with = "crate::time::timestamp_opt")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Author line.
    pub author: Option<EmbedAuthor>,
    /// Fields.
    pub fields: Vec<EmbedField>,
    /// Footer line.
    pub footer: Option<EmbedFooter>,
    /// Large image.
    pub image: Option<EmbedMedia>,
    /// Thumbnail image.
    pub thumbnail: Option<EmbedMedia>,
}

/// Embed author line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedAuthor {
    /// Author name.
    pub name: Option<String>,
    /// Author link.
    pub url: Option<String>,
    /// Author icon.
    pub icon_url: Option<String>,
}

/// Embed footer line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedFooter {
    /// Footer text.
    pub text: String,
    /// Footer icon.
    pub icon_url: Option<String>,
}

/// Embed field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedField {
    /// Field name.
    pub name: String,
    /// Field value (markdown).
    pub value: String,
    /// Whether the field sits beside its neighbours.
    pub inline: bool,
}

/// Embed image or thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedMedia {
    /// Image URL.
    pub url: String,
    /// Pixel width.
    pub width: Option<u32>,
    /// Pixel height.
    pub height: Option<u32>,
}

/// Uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    /// Attachment ID.
    pub id: Snowflake,
    /// Original file name.
    pub filename: String,
    /// Download URL.
    pub url: String,
    /// Proxied URL used for previews.
    pub proxy_url: Option<String>,
    /// Size in bytes.
    pub size: u64,
    /// MIME type.
    pub content_type: Option<String>,
    /// Pixel width for images and video.
    pub width: Option<u32>,
    /// Pixel height for images and video.
    pub height: Option<u32>,
    /// Alt text.
    pub description: Option<String>,
}

/// Emoji reference used by reactions, buttons and select options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emoji {
    /// Custom emoji id; absent for unicode emoji.
    pub id: Option<Snowflake>,
    /// Emoji name, or the unicode character itself.
    pub name: Option<String>,
    /// Whether a custom emoji is animated.
    pub animated: bool,
}

impl Emoji {
    /// Image URL for custom emoji.
    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        let ext = if self.animated { "gif" } else { "png" };
        self.id
            .as_ref()
            .map(|id| format!("{EMOJI_CDN_BASE}/{id}.{ext}"))
    }
}

/// A reaction on a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    /// Reacted emoji.
    pub emoji: Emoji,
    /// Number of users who reacted.
    pub count: u32,
}

/// Button colour style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Blurple.
    Primary,
    /// Grey.
    #[default]
    Secondary,
    /// Green.
    Success,
    /// Red.
    Danger,
    /// Grey, navigates to a URL.
    Link,
}

/// A button component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    /// Colour style.
    pub style: ButtonStyle,
    /// Button text.
    pub label: Option<String>,
    /// Leading emoji.
    pub emoji: Option<Emoji>,
    /// Target for link buttons.
    pub url: Option<String>,
    /// Developer-defined id.
    pub custom_id: Option<String>,
    /// Whether the button was disabled.
    pub disabled: bool,
}

/// Option inside a select menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    /// Option text.
    pub label: String,
    /// Submitted value.
    pub value: String,
    /// Secondary text.
    pub description: Option<String>,
    /// Leading emoji.
    pub emoji: Option<Emoji>,
}

/// A select menu component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectMenu {
    /// Text shown when nothing is selected.
    pub placeholder: Option<String>,
    /// Choices.
    pub options: Vec<SelectOption>,
    /// Developer-defined id.
    pub custom_id: Option<String>,
}

/// Interactive component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    /// Row of child components.
    ActionRow {
        /// Children.
        #[serde(default)]
        components: Vec<Component>,
    },
    /// Button.
    Button(Button),
    /// Select menu.
    SelectMenu(SelectMenu),
    /// Any component this renderer does not know.
    #[serde(other)]
    Unknown,
}
