//! Data model for chat channel history.
//!
//! These types are the immutable input of the renderer: messages with their
//! assets, the users and members who wrote them, and the guild/channel
//! context they were posted in. All of them deserialize from the JSON shape
//! used by [`ChannelArchive`](crate::source::ChannelArchive).

pub mod assets;
pub mod guild;
pub mod message;

pub use assets::*;
pub use guild::*;
pub use message::*;

/// Identifier type used for every entity.
pub type Snowflake = String;

/// Milliseconds between the Unix epoch and the first snowflake instant (2015-01-01).
pub const SNOWFLAKE_EPOCH_MS: i64 = 1_420_070_400_000;

/// Decode the creation instant embedded in a snowflake id.
#[must_use]
pub fn snowflake_timestamp(id: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let raw = id.parse::<u64>().ok()?;
    let millis = i64::try_from(raw >> 22).ok()? + SNOWFLAKE_EPOCH_MS;
    chrono::DateTime::from_timestamp_millis(millis)
}
