//! Synthetic chat data and a scripted source for tests.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chat_transcript::model::{
    Channel, ChannelKind, Guild, Member, Message, MessageKind, MessageReference, Role, User,
};
use chat_transcript::source::{ChannelSource, FetchError};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Channel every generated message is posted in.
pub const CHANNEL_ID: &str = "100";

/// Instant `secs` seconds after a fixed epoch.
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::seconds(secs)
}

/// The guild snapshot used throughout.
pub fn guild() -> Guild {
    Guild::new("1", "Test Guild")
}

/// A plain account.
pub fn user(id: &str, name: &str) -> User {
    User::new(id, name)
}

/// A plain text message in [`CHANNEL_ID`].
pub fn message(id: &str, author: &User, content: &str, secs: i64) -> Message {
    Message::new(id, CHANNEL_ID, author.clone(), content, at(secs))
}

/// A reply to `target` in [`CHANNEL_ID`].
pub fn reply(id: &str, author: &User, content: &str, secs: i64, target: &str) -> Message {
    let mut msg = message(id, author, content, secs);
    msg.reference = Some(MessageReference {
        message_id: target.to_string(),
        channel_id: Some(CHANNEL_ID.to_string()),
        guild_id: None,
    });
    msg
}

/// A notice of `kind` authored by `author`.
pub fn notice(id: &str, author: &User, kind: MessageKind, secs: i64) -> Message {
    let mut msg = message(id, author, "", secs);
    msg.kind = kind;
    msg
}

/// A member holding a single coloured role.
pub fn member(user: &User, colour: u32) -> Member {
    Member {
        user: user.clone(),
        nick: None,
        joined_at: Some(at(-86_400)),
        roles: vec![Role {
            id: format!("role-{}", user.id),
            name: "Regular".to_string(),
            color: colour,
            position: 1,
            icon: None,
        }],
    }
}

/// A thread channel under `parent`.
pub fn thread(id: &str, parent: &str) -> Channel {
    Channel {
        id: id.to_string(),
        name: "help-thread".to_string(),
        kind: ChannelKind::PublicThread,
        parent_id: Some(parent.to_string()),
        topic: None,
    }
}

/// Alternating history: `runs` runs of `run_len` messages per author, each
/// run by the next author in `authors`.
pub fn history(authors: &[User], runs: usize, run_len: usize) -> Vec<Message> {
    let mut messages = Vec::new();
    for run in 0..runs {
        let author = &authors[run % authors.len()];
        for i in 0..run_len {
            let n = messages.len();
            messages.push(message(&n.to_string(), author, &format!("message {run}.{i}"), n as i64 * 30));
        }
    }
    messages
}

/// [`ChannelSource`] with scripted answers that counts its fetches.
///
/// Unscripted messages and channels are reported as not found.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    messages: HashMap<(String, String), Result<Message, FetchError>>,
    channels: HashMap<String, Channel>,
    members: HashMap<String, Member>,
    message_fetches: AtomicUsize,
    channel_fetches: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages
            .insert((message.channel_id.clone(), message.id.clone()), Ok(message));
        self
    }

    pub fn with_message_error(mut self, channel_id: &str, message_id: &str, err: FetchError) -> Self {
        self.messages
            .insert((channel_id.to_string(), message_id.to_string()), Err(err));
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.insert(channel.id.clone(), channel);
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.insert(member.user.id.clone(), member);
        self
    }

    pub fn message_fetches(&self) -> usize {
        self.message_fetches.load(Ordering::SeqCst)
    }

    pub fn channel_fetches(&self) -> usize {
        self.channel_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChannelSource for ScriptedSource {
    async fn fetch_message(&self, channel_id: &str, message_id: &str) -> Result<Message, FetchError> {
        self.message_fetches.fetch_add(1, Ordering::SeqCst);
        self.messages
            .get(&(channel_id.to_string(), message_id.to_string()))
            .cloned()
            .unwrap_or_else(|| Err(FetchError::not_found("message", message_id)))
    }

    async fn fetch_member(&self, _guild: &Guild, user_id: &str) -> Option<Member> {
        self.members.get(user_id).cloned()
    }

    async fn fetch_channel(&self, channel_id: &str) -> Result<Channel, FetchError> {
        self.channel_fetches.fetch_add(1, Ordering::SeqCst);
        self.channels
            .get(channel_id)
            .cloned()
            .ok_or_else(|| FetchError::not_found("channel", channel_id))
    }
}
