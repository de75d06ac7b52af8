//! Per-message markup construction.
//!
//! [`MessageBuilder::build`] turns one input message into a markup fragment.
//! Everything that depends on earlier messages travels in a
//! [`TranscriptState`] that is passed in and handed back, so the builder
//! itself holds no mutable state and never touches its input.
//!
//! # Blocks
//!
//! Consecutive messages are grouped into blocks that share one header. A
//! block opens a container that stays open until the next block starts;
//! [`TranscriptState::block_open`] records whether there is one to close.

use std::borrow::Cow;
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::{Result, TranscriptError};
use crate::model::{Guild, Message, MessageKind, Snowflake, User};
use crate::render::AssetMarkup;
use crate::resolve::{self, css_colour};
use crate::source::ChannelSource;
use crate::template::{html, icons, Substitution, Templater};
use crate::util::escape_html;

/// Messages further apart than this always start a new block.
pub const CONTINUATION_WINDOW_SECS: i64 = 4 * 60;

/// Preview text for replies to messages without text.
pub const ATTACHMENT_PREVIEW: &str = "Click to see attachment";
/// Preview text for replies to command output without text.
pub const COMMAND_PREVIEW: &str = "Click to see command";

/// What the next message needs to know about the one before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousMessage {
    /// Author of the previous message.
    pub author_id: Snowflake,
    /// Type tag of the previous message.
    pub kind: MessageKind,
    /// Creation time of the previous message.
    pub created_at: DateTime<Utc>,
}

impl From<&Message> for PreviousMessage {
    fn from(message: &Message) -> Self {
        Self {
            author_id: message.author.id.clone(),
            kind: message.kind,
            created_at: message.created_at,
        }
    }
}

/// Facts about the current message the block predicate looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInputs<'m> {
    /// Author of the message.
    pub author_id: &'m str,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Whether a reply banner (resolved or deleted) is shown.
    pub has_reference: bool,
    /// Whether the message came from a command invocation.
    pub has_interaction: bool,
    /// Whether a webhook posted the message.
    pub is_webhook: bool,
}

impl<'m> BlockInputs<'m> {
    /// Inputs for a message whose reply banner state is already known.
    #[must_use]
    pub fn new(message: &'m Message, has_reference: bool) -> Self {
        Self {
            author_id: &message.author.id,
            created_at: message.created_at,
            has_reference,
            has_interaction: message.interaction.is_some(),
            is_webhook: message.is_webhook(),
        }
    }
}

/// Whether a message starts a new block.
///
/// True for the first message, for replies and command output, after any
/// non-normal message, on an author change, for webhook messages, and when
/// more than [`CONTINUATION_WINDOW_SECS`] have passed.
#[must_use]
pub fn starts_new_block(previous: Option<&PreviousMessage>, current: &BlockInputs<'_>) -> bool {
    let Some(previous) = previous else {
        return true;
    };

    current.has_reference
        || current.has_interaction
        || previous.kind != MessageKind::Normal
        || previous.author_id != current.author_id
        || current.is_webhook
        || current.created_at > previous.created_at + Duration::seconds(CONTINUATION_WINDOW_SECS)
}

/// Per-author roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorAggregate {
    /// `name#1234` or the bare username.
    pub tag: String,
    /// Account creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Bot badge markup, or empty.
    pub bot_tag: String,
    /// Avatar URL.
    pub avatar_url: String,
    /// Messages by this author in the transcript so far.
    pub message_count: u64,
    /// When the author joined the guild.
    pub joined_at: Option<DateTime<Utc>>,
    /// Display name markup when it differs from the username, else empty.
    pub display_name: String,
}

impl AuthorAggregate {
    /// Entry for an author's first message.
    #[must_use]
    pub fn first(message: &Message) -> Self {
        let author = &message.author;
        let shown = message.author_display_name();
        let display_name = if shown == author.username {
            String::new()
        } else {
            format!("<div class=\"meta__display-name\">{}</div>", escape_html(shown))
        };

        Self {
            tag: author.tag(),
            created_at: author.created_at(),
            bot_tag: bot_tag(author).to_string(),
            avatar_url: author.display_avatar_url(),
            message_count: 1,
            joined_at: message.author_joined_at(),
            display_name,
        }
    }
}

/// Roster keyed by author id, in order of first appearance.
pub type AuthorRoster = IndexMap<Snowflake, AuthorAggregate>;

/// Accumulator threaded through every build step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptState {
    /// Aggregates for every author seen so far.
    pub authors: AuthorRoster,
    /// The message processed last.
    pub previous: Option<PreviousMessage>,
    /// Whether a block container is open.
    pub block_open: bool,
}

impl TranscriptState {
    /// Count a message against its author.
    fn record_author(&mut self, message: &Message) {
        self.authors
            .entry(message.author.id.clone())
            .and_modify(|a| a.message_count += 1)
            .or_insert_with(|| AuthorAggregate::first(message));
    }

    /// Markup closing the open block, if any, and mark a new one open.
    fn open_block(&mut self) -> &'static str {
        let close = if self.block_open {
            html::END_MESSAGE.body
        } else {
            ""
        };
        self.block_open = true;
        close
    }
}

/// Reply banner state of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBanner {
    /// No reference, or the reference could not be resolved.
    Absent,
    /// The referenced message no longer exists.
    Deleted,
    /// Rendered banner for the referenced message.
    Resolved(String),
}

impl ReplyBanner {
    /// Whether a banner is shown.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Banner markup.
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Self::Absent => "",
            Self::Deleted => html::MESSAGE_REFERENCE_UNKNOWN.body,
            Self::Resolved(markup) => markup,
        }
    }
}

/// Output of one build step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltMessage {
    /// Markup to append to the transcript.
    pub html: String,
    /// Whether this message opened a new block.
    pub started_block: bool,
    /// Reply banner state.
    pub reply: ReplyBanner,
}

/// Bot badge for an account.
#[must_use]
pub fn bot_tag(user: &User) -> &'static str {
    match (user.bot, user.verified_bot) {
        (true, true) => html::BOT_TAG_VERIFIED,
        (true, false) => html::BOT_TAG,
        (false, _) => "",
    }
}

/// Builds message markup for one transcript.
pub struct MessageBuilder<'a, S: ?Sized> {
    guild: &'a Guild,
    source: &'a S,
    templater: Templater<'a>,
    loaded: &'a HashMap<&'a str, &'a Message>,
}

impl<'a, S> MessageBuilder<'a, S>
where
    S: ChannelSource + ?Sized,
{
    /// Create a builder.
    ///
    /// `loaded` maps message ids to the messages of this transcript and is
    /// consulted before the source when resolving replies.
    #[must_use]
    pub const fn new(
        guild: &'a Guild,
        source: &'a S,
        templater: Templater<'a>,
        loaded: &'a HashMap<&'a str, &'a Message>,
    ) -> Self {
        Self {
            guild,
            source,
            templater,
            loaded,
        }
    }

    /// Build one message, returning its markup and the updated state.
    #[instrument(level = "debug", skip_all, fields(message_id = %message.id, kind = message.kind.as_str()))]
    pub async fn build(
        &self,
        message: &Message,
        mut state: TranscriptState,
    ) -> Result<(BuiltMessage, TranscriptState)> {
        let built = match message.kind {
            MessageKind::Normal => self.build_normal(message, &mut state).await,
            MessageKind::PinNotice => self.build_pin(message, &mut state).await,
            MessageKind::ThreadCreated => self.build_thread(message, &mut state).await,
            MessageKind::MemberAdded | MessageKind::MemberRemoved => {
                self.build_membership(message, &mut state).await?
            }
        };

        state.record_author(message);
        state.previous = Some(PreviousMessage::from(message));

        debug!(started_block = built.started_block, reply = built.reply.is_shown(), "Built message");
        Ok((built, state))
    }

    async fn build_normal(&self, message: &Message, state: &mut TranscriptState) -> BuiltMessage {
        let content = self.content(message);
        let reply = self.resolve_reference(message).await;
        let interaction = self.interaction_banner(message).await;
        let assets = AssetMarkup::render(message, &self.templater);

        let started_block = starts_new_block(
            state.previous.as_ref(),
            &BlockInputs::new(message, reply.is_shown()),
        );
        let formatter = self.templater.formatter();
        let timestamp = formatter.full(&message.created_at);
        let [embeds, attachments, components, reactions] = assets.substitutions();

        let html = if started_block {
            let close = state.open_block();
            let author = &message.author;
            let style = resolve::resolve_style(self.source, self.guild, &author.id, &self.templater).await;
            let banner = if reply.is_shown() {
                reply.html()
            } else {
                interaction.as_str()
            };
            let symbol = if reply.is_shown() || message.interaction.is_some() {
                html::FOLLOWUP_SYMBOL
            } else {
                ""
            };

            let header = self.templater.fill(
                &html::START_MESSAGE,
                &[
                    Substitution::none("REFERENCE_SYMBOL", symbol),
                    Substitution::none("REFERENCE", banner),
                    Substitution::none("AVATAR_URL", escape_html(&author.display_avatar_url())),
                    Substitution::none("NAME_TAG", escape_html(&author.tag())),
                    Substitution::none("USER_ID", escape_html(&author.id)),
                    Substitution::none("USER_COLOUR", style.css()),
                    Substitution::none("USER_ICON", style.icon.as_str()),
                    Substitution::none("NAME", escape_html(message.author_display_name())),
                    Substitution::none("BOT_TAG", bot_tag(author)),
                    Substitution::none("TIMESTAMP", timestamp.as_str()),
                    Substitution::none("DEFAULT_TIMESTAMP", formatter.header(&message.created_at)),
                    Substitution::none("MESSAGE_ID", escape_html(&message.id)),
                    Substitution::none("MESSAGE_CONTENT", content.as_str()),
                    embeds,
                    attachments,
                    components,
                    reactions,
                ],
            );
            format!("{close}{header}")
        } else {
            self.templater.fill(
                &html::MESSAGE_BODY,
                &[
                    Substitution::none("MESSAGE_ID", escape_html(&message.id)),
                    Substitution::none("MESSAGE_CONTENT", content.as_str()),
                    embeds,
                    attachments,
                    components,
                    reactions,
                    Substitution::none("TIMESTAMP", timestamp.as_str()),
                    Substitution::none("TIME", formatter.time_of_day(&message.created_at)),
                ],
            )
        };

        BuiltMessage {
            html,
            started_block,
            reply,
        }
    }

    /// Rendered text with its edit marker; empty for messages without text.
    fn content(&self, message: &Message) -> String {
        if message.content.is_empty() {
            return String::new();
        }
        self.templater.fill(
            &html::MESSAGE_CONTENT,
            &[
                Substitution::markdown("MESSAGE_CONTENT", message.content.as_str()),
                Substitution::none("EDIT", self.edited_marker(message)),
            ],
        )
    }

    fn edited_marker(&self, message: &Message) -> String {
        message.edited_at.map_or_else(String::new, |edited| {
            self.templater.fill(
                &html::EDITED,
                &[Substitution::none("EDIT_TIMESTAMP", self.templater.formatter().full(&edited))],
            )
        })
    }

    /// Resolve and render the reply banner.
    ///
    /// Messages of this transcript are used directly. Anything else costs
    /// one fetch; "not found" shows the deleted banner and any other failure
    /// drops the banner.
    async fn resolve_reference(&self, message: &Message) -> ReplyBanner {
        let Some(reference) = &message.reference else {
            return ReplyBanner::Absent;
        };

        let original: Cow<'_, Message> = match self.loaded.get(reference.message_id.as_str()) {
            Some(found) => Cow::Borrowed(*found),
            None => {
                let channel_id = reference
                    .channel_id
                    .as_deref()
                    .unwrap_or(message.channel_id.as_str());
                match self.source.fetch_message(channel_id, &reference.message_id).await {
                    Ok(fetched) => Cow::Owned(fetched),
                    Err(err) if err.is_not_found() => {
                        debug!(reference = %reference.message_id, "Referenced message was deleted");
                        return ReplyBanner::Deleted;
                    }
                    Err(err) => {
                        warn!(
                            reference = %reference.message_id,
                            error = %err,
                            "Could not fetch referenced message, dropping reply banner"
                        );
                        return ReplyBanner::Absent;
                    }
                }
            }
        };

        let author = &original.author;
        let colour = resolve::resolve_color(self.source, self.guild, &author.id).await;

        let preview = match (original.content.is_empty(), original.interaction.is_some()) {
            (false, _) => original.content.as_str(),
            (true, false) => ATTACHMENT_PREVIEW,
            (true, true) => COMMAND_PREVIEW,
        };
        let icon = if original.interaction.is_none() && original.has_media() {
            icons::REFERENCE_ATTACHMENT
        } else if original.interaction.is_some() {
            icons::INTERACTION_COMMAND
        } else {
            ""
        };

        let banner = self.templater.fill(
            &html::MESSAGE_REFERENCE,
            &[
                Substitution::none("AVATAR_URL", escape_html(&author.display_avatar_url())),
                Substitution::none("BOT_TAG", bot_tag(author)),
                Substitution::none("NAME_TAG", escape_html(&author.tag())),
                Substitution::none("NAME", escape_html(original.author_display_name())),
                Substitution::none("USER_COLOUR", css_colour(&colour)),
                Substitution::reference("CONTENT", preview),
                Substitution::none("EDIT", self.edited_marker(&original)),
                Substitution::none("ICON", icon),
                Substitution::none("USER_ID", escape_html(&author.id)),
                Substitution::none("MESSAGE_ID", escape_html(&reference.message_id)),
            ],
        );
        ReplyBanner::Resolved(banner)
    }

    /// Slash-command banner, or empty.
    async fn interaction_banner(&self, message: &Message) -> String {
        let Some(interaction) = &message.interaction else {
            return String::new();
        };
        let user = &interaction.user;
        let colour = resolve::resolve_color(self.source, self.guild, &user.id).await;

        self.templater.fill(
            &html::MESSAGE_INTERACTION,
            &[
                Substitution::none("AVATAR_URL", escape_html(&user.display_avatar_url())),
                Substitution::none("BOT_TAG", bot_tag(user)),
                Substitution::none("NAME_TAG", escape_html(&user.tag())),
                Substitution::none("NAME", escape_html(user.display_name())),
                Substitution::none("USER_COLOUR", css_colour(&colour)),
                Substitution::none("FILLER", "used "),
                Substitution::none("COMMAND", format!("/{}", escape_html(&interaction.name))),
                Substitution::none("USER_ID", escape_html(&user.id)),
                Substitution::none("INTERACTION_ID", escape_html(&interaction.id)),
            ],
        )
    }

    /// Name, tag and colour substitutions for a notice's acting user.
    async fn actor(&self, message: &Message) -> [Substitution<'static>; 3] {
        let colour = resolve::resolve_color(self.source, self.guild, &message.author.id).await;
        [
            Substitution::none("USER_COLOUR", css_colour(&colour)),
            Substitution::none("NAME", escape_html(message.author_display_name())),
            Substitution::none("NAME_TAG", escape_html(&message.author.tag())),
        ]
    }

    async fn build_pin(&self, message: &Message, state: &mut TranscriptState) -> BuiltMessage {
        let close = state.open_block();
        let [colour, name, tag] = self.actor(message).await;
        let pinned = message
            .reference
            .as_ref()
            .map(|r| r.message_id.as_str())
            .unwrap_or_default();

        let notice = self.templater.fill(
            &html::MESSAGE_PIN,
            &[
                Substitution::none("PIN_URL", icons::PINNED_MESSAGE),
                colour,
                name,
                tag,
                Substitution::none("MESSAGE_ID", escape_html(&message.id)),
                Substitution::none("REF_MESSAGE_ID", escape_html(pinned)),
                Substitution::none("TIMESTAMP", self.templater.formatter().full(&message.created_at)),
            ],
        );
        notice_output(close, &notice)
    }

    async fn build_thread(&self, message: &Message, state: &mut TranscriptState) -> BuiltMessage {
        let close = state.open_block();
        let [colour, name, tag] = self.actor(message).await;

        let notice = self.templater.fill(
            &html::MESSAGE_THREAD,
            &[
                Substitution::none("THREAD_URL", icons::THREAD_CHANNEL),
                Substitution::none("THREAD_NAME", escape_html(&message.content)),
                colour,
                name,
                tag,
                Substitution::none("MESSAGE_ID", escape_html(&message.id)),
                Substitution::none("TIMESTAMP", self.templater.formatter().full(&message.created_at)),
            ],
        );
        notice_output(close, &notice)
    }

    /// Member added/removed notices.
    ///
    /// The target member is required: a missing mention or a member that can
    /// no longer be fetched fails the whole transcript.
    async fn build_membership(
        &self,
        message: &Message,
        state: &mut TranscriptState,
    ) -> Result<BuiltMessage> {
        let (template, icon) = match message.kind {
            MessageKind::MemberRemoved => (&html::MESSAGE_THREAD_REMOVE, icons::THREAD_REMOVE_RECIPIENT),
            _ => (&html::MESSAGE_THREAD_ADD, icons::THREAD_ADD_RECIPIENT),
        };

        let target_id = message
            .mention_ids
            .first()
            .ok_or_else(|| TranscriptError::MissingMention {
                message_id: message.id.clone(),
            })?;
        let target = self
            .source
            .fetch_member(self.guild, target_id)
            .await
            .ok_or_else(|| TranscriptError::MemberNotFound {
                user_id: target_id.clone(),
                message_id: message.id.clone(),
            })?;

        let close = state.open_block();
        let [colour, name, tag] = self.actor(message).await;
        let target_colour = resolve::colour_for(Some(&target), self.guild);

        let notice = self.templater.fill(
            template,
            &[
                Substitution::none("THREAD_URL", icon),
                colour,
                name,
                tag,
                Substitution::none("RECIPIENT_USER_COLOUR", css_colour(&target_colour)),
                Substitution::none("RECIPIENT_NAME", escape_html(target.display_name())),
                Substitution::none("RECIPIENT_NAME_TAG", escape_html(&target.user.tag())),
                Substitution::none("MESSAGE_ID", escape_html(&message.id)),
                Substitution::none("TIMESTAMP", self.templater.formatter().full(&message.created_at)),
            ],
        );
        Ok(notice_output(close, &notice))
    }
}

fn notice_output(close: &str, notice: &str) -> BuiltMessage {
    BuiltMessage {
        html: format!("{close}{notice}"),
        started_block: true,
        reply: ReplyBanner::Absent,
    }
}
