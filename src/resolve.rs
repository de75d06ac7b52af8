//! Author colour and role icon resolution.
//!
//! Both lookups fetch the author's current membership. A missing member is
//! not an error: the name renders white and without an icon.

use tracing::trace;

use crate::model::{Guild, Member, Role};
use crate::source::ChannelSource;
use crate::template::{html, Substitution, Templater};
use crate::util::escape_html;

/// Name colour used when no coloured role applies.
pub const DEFAULT_COLOUR: &str = "#FFFFFF";

/// Resolved display styling for one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorStyle {
    /// Hex colour, e.g. `#1ABC9C`.
    pub colour: String,
    /// Role icon markup, or empty.
    pub icon: String,
}

impl AuthorStyle {
    /// Inline CSS for the author's name.
    #[must_use]
    pub fn css(&self) -> String {
        css_colour(&self.colour)
    }
}

/// Inline CSS declaration for a name colour.
#[must_use]
pub fn css_colour(colour: &str) -> String {
    format!("color: {colour};")
}

/// The member's roles, default role excluded, highest rank first.
fn ranked_roles<'m>(member: &'m Member, guild: &Guild) -> Vec<&'m Role> {
    let mut roles: Vec<&Role> = member
        .roles
        .iter()
        .filter(|r| !guild.is_default_role(&r.id))
        .collect();
    roles.sort_by(|a, b| b.rank().cmp(&a.rank()));
    roles
}

/// Colour of the highest-ranked coloured role.
#[must_use]
pub fn colour_for(member: Option<&Member>, guild: &Guild) -> String {
    member
        .and_then(|m| ranked_roles(m, guild).into_iter().find(|r| r.color != 0).map(Role::hex_color))
        .unwrap_or_else(|| DEFAULT_COLOUR.to_string())
}

/// Icon markup for the highest-ranked role with an icon.
#[must_use]
pub fn icon_for(member: Option<&Member>, guild: &Guild, templater: &Templater<'_>) -> String {
    let Some(icon) = member.and_then(|m| ranked_roles(m, guild).into_iter().find_map(|r| r.icon.as_ref()))
    else {
        return String::new();
    };
    templater.fill(&html::ROLE_ICON, &[Substitution::none("ICON_URL", escape_html(&icon.url()))])
}

/// Resolve an author's name colour.
pub async fn resolve_color<S>(source: &S, guild: &Guild, user_id: &str) -> String
where
    S: ChannelSource + ?Sized,
{
    let member = source.fetch_member(guild, user_id).await;
    colour_for(member.as_ref(), guild)
}

/// Resolve an author's role icon markup.
pub async fn resolve_icon<S>(
    source: &S,
    guild: &Guild,
    user_id: &str,
    templater: &Templater<'_>,
) -> String
where
    S: ChannelSource + ?Sized,
{
    let member = source.fetch_member(guild, user_id).await;
    icon_for(member.as_ref(), guild, templater)
}

/// Resolve colour and icon with a single membership lookup.
pub async fn resolve_style<S>(
    source: &S,
    guild: &Guild,
    user_id: &str,
    templater: &Templater<'_>,
) -> AuthorStyle
where
    S: ChannelSource + ?Sized,
{
    let member = source.fetch_member(guild, user_id).await;
    if member.is_none() {
        trace!(user_id, "Author is not a guild member, using default style");
    }
    AuthorStyle {
        colour: colour_for(member.as_ref(), guild),
        icon: icon_for(member.as_ref(), guild, templater),
    }
}
