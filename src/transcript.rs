//! Transcript assembly.
//!
//! [`render_transcript`] drives the [`MessageBuilder`] over a message list in
//! order, threading the state from one step into the next, and closes the
//! last block. [`Transcript::to_document`] wraps the result in a complete
//! HTML page.

use std::borrow::Cow;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::builder::{AuthorRoster, MessageBuilder, TranscriptState};
use crate::error::{Result, TranscriptError};
use crate::model::{Channel, Guild, Message};
use crate::source::ChannelSource;
use crate::template::{html, Substitution, Templater};
use crate::time::{parse_timezone, TimeFormatter};
use crate::util::escape_html;

/// Default reply preview length in characters.
pub const DEFAULT_PREVIEW_LENGTH: usize = 100;

/// Display settings for a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Zone timestamps are shown in.
    pub timezone: Tz,
    /// 24-hour clock when true.
    pub military_time: bool,
    /// Characters kept in reply previews.
    pub reference_preview_length: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::UTC,
            military_time: true,
            reference_preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

impl RenderOptions {
    /// Options for an IANA zone name, other settings at their defaults.
    pub fn new(timezone: &str) -> Result<Self> {
        Ok(Self {
            timezone: parse_timezone(timezone)?,
            ..Self::default()
        })
    }

    /// Set the clock style.
    #[must_use]
    pub fn with_military_time(mut self, military_time: bool) -> Self {
        self.military_time = military_time;
        self
    }

    /// Set the reply preview length.
    #[must_use]
    pub fn with_preview_length(mut self, length: usize) -> Self {
        self.reference_preview_length = length;
        self
    }

    /// Timestamp formatter for these options.
    #[must_use]
    pub const fn formatter(&self) -> TimeFormatter {
        TimeFormatter::new(self.timezone, self.military_time)
    }
}

/// A rendered transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    /// Message markup, every block closed.
    pub html: String,
    /// Per-author aggregates in order of first appearance.
    pub authors: AuthorRoster,
    /// Number of messages rendered.
    pub message_count: usize,
}

/// Render a message list.
///
/// Messages are processed strictly in order. Failures that cannot be
/// rendered around (see [`TranscriptError`]) abort the whole transcript.
#[instrument(skip_all, fields(guild = %guild.id, messages = messages.len()))]
pub async fn render_transcript<S>(
    messages: &[Message],
    guild: &Guild,
    source: &S,
    options: &RenderOptions,
) -> Result<Transcript>
where
    S: ChannelSource + ?Sized,
{
    let Some((first, rest)) = messages.split_first() else {
        debug!("No messages to render");
        return Ok(Transcript {
            html: String::new(),
            authors: AuthorRoster::new(),
            message_count: 0,
        });
    };

    let loaded: HashMap<&str, &Message> = messages.iter().map(|m| (m.id.as_str(), m)).collect();
    let templater = Templater::for_guild(guild, options.formatter(), options.reference_preview_length);
    let builder = MessageBuilder::new(guild, source, templater, &loaded);

    let first = anchor_thread(first, source).await?;

    let mut html = String::new();
    let mut state = TranscriptState::default();
    for message in std::iter::once(first.as_ref()).chain(rest) {
        let (built, next) = builder.build(message, state).await?;
        html.push_str(&built.html);
        state = next;
    }
    if state.block_open {
        html.push_str(html::END_MESSAGE.body);
    }

    info!(
        messages = messages.len(),
        authors = state.authors.len(),
        bytes = html.len(),
        "Rendered transcript"
    );
    Ok(Transcript {
        html,
        authors: state.authors,
        message_count: messages.len(),
    })
}

/// Replace a thread's opening reply with the message that spawned the thread.
///
/// Only applies when the first message has a reference and lives in a
/// thread. Failing to read the parent channel or message is an error. The substitute has its own reference cleared so it renders as a
/// plain message.
async fn anchor_thread<'m, S>(first: &'m Message, source: &S) -> Result<Cow<'m, Message>>
where
    S: ChannelSource + ?Sized,
{
    let Some(reference) = &first.reference else {
        return Ok(Cow::Borrowed(first));
    };

    // Only a confirmed thread is anchored; an unreadable own channel is
    // treated as a plain one.
    let channel = match source.fetch_channel(&first.channel_id).await {
        Ok(channel) => channel,
        Err(err) => {
            warn!(channel_id = %first.channel_id, error = %err, "Could not read channel, not anchoring");
            return Ok(Cow::Borrowed(first));
        }
    };
    if !channel.is_thread() {
        return Ok(Cow::Borrowed(first));
    }

    let parent_id = reference.channel_id.as_deref().unwrap_or(first.channel_id.as_str());
    let parent_channel = source
        .fetch_channel(parent_id)
        .await
        .map_err(|err| TranscriptError::ChannelFetch {
            channel_id: parent_id.to_string(),
            source: err,
        })?;
    let mut parent = source
        .fetch_message(&parent_channel.id, &reference.message_id)
        .await
        .map_err(|err| TranscriptError::MessageFetch {
            channel_id: parent_channel.id.clone(),
            message_id: reference.message_id.clone(),
            source: err,
        })?;
    parent.reference = None;

    debug!(
        thread = %channel.id,
        parent = %parent.id,
        "Anchored thread transcript to its parent message"
    );
    Ok(Cow::Owned(parent))
}

/// Page-level context for [`Transcript::to_document`].
#[derive(Debug, Clone)]
pub struct DocumentContext<'a> {
    /// Guild the channel belongs to.
    pub guild: &'a Guild,
    /// Exported channel.
    pub channel: &'a Channel,
    /// Prefix for the page title.
    pub title_prefix: &'a str,
    /// Whether to include the participant roster.
    pub include_roster: bool,
    /// Export instant.
    pub exported_at: DateTime<Utc>,
    /// Display settings.
    pub options: RenderOptions,
}

impl Transcript {
    /// Wrap the markup in the full HTML page.
    #[must_use]
    pub fn to_document(&self, ctx: &DocumentContext<'_>) -> String {
        let formatter = ctx.options.formatter();
        let templater = Templater::for_guild(ctx.guild, formatter, ctx.options.reference_preview_length);

        let title = format!("{} - #{}", ctx.title_prefix, ctx.channel.name);
        let guild_icon = ctx.guild.icon_url.as_deref().map_or_else(String::new, |url| {
            templater.fill(&html::GUILD_ICON, &[Substitution::none("ICON_URL", escape_html(url))])
        });
        let roster = if ctx.include_roster {
            self.roster(&templater)
        } else {
            String::new()
        };

        templater.fill(
            &html::BASE_DOCUMENT,
            &[
                Substitution::none("GENERATOR", format!("chat-transcript {}", crate::VERSION)),
                Substitution::none("TITLE", escape_html(&title)),
                Substitution::none("GUILD_ICON", guild_icon),
                Substitution::none("GUILD_NAME", escape_html(&ctx.guild.name)),
                Substitution::none("CHANNEL_NAME", escape_html(&ctx.channel.name)),
                Substitution::none(
                    "CHANNEL_TOPIC",
                    escape_html(ctx.channel.topic.as_deref().unwrap_or_default()),
                ),
                Substitution::none("MESSAGES", self.html.as_str()),
                Substitution::none("ROSTER", roster),
                Substitution::none("MESSAGE_COUNT", self.message_count.to_string()),
                Substitution::none("EXPORTED_AT", formatter.full(&ctx.exported_at)),
                Substitution::none("TIMEZONE", formatter.timezone().name()),
            ],
        )
    }

    /// Participant roster markup.
    fn roster(&self, templater: &Templater<'_>) -> String {
        let formatter = templater.formatter();
        let date = |ts: Option<DateTime<Utc>>| ts.map_or_else(|| "Unknown".to_string(), |t| formatter.date(&t));

        let users: String = self
            .authors
            .iter()
            .map(|(id, author)| {
                templater.fill(
                    &html::META_USER,
                    &[
                        Substitution::none("USER_ID", escape_html(id)),
                        Substitution::none("AVATAR_URL", escape_html(&author.avatar_url)),
                        Substitution::none("NAME_TAG", escape_html(&author.tag)),
                        Substitution::none("BOT_TAG", author.bot_tag.as_str()),
                        Substitution::none("DISPLAY_NAME", author.display_name.as_str()),
                        Substitution::none("MESSAGE_COUNT", author.message_count.to_string()),
                        Substitution::none("CREATED_AT", date(author.created_at)),
                        Substitution::none("JOINED_AT", date(author.joined_at)),
                    ],
                )
            })
            .collect();

        templater.fill(
            &html::ROSTER,
            &[
                Substitution::none("AUTHOR_COUNT", self.authors.len().to_string()),
                Substitution::none("USERS", users),
            ],
        )
    }
}
