//! Reaction renderer.

use crate::model::Reaction;
use crate::template::{html, Substitution, Templater};
use crate::util::escape_html;

/// Render one reaction: custom emoji as an image, unicode emoji as text.
#[must_use]
pub fn render(reaction: &Reaction, templater: &Templater<'_>) -> String {
    let name = reaction.emoji.name.as_deref().unwrap_or_default();
    let count = reaction.count.to_string();

    match reaction.emoji.image_url() {
        Some(url) => templater.fill(
            &html::CUSTOM_EMOJI,
            &[
                Substitution::none("EMOJI", escape_html(&url)),
                Substitution::none("EMOJI_COUNT", count),
                Substitution::none("NAME", format!(":{}:", escape_html(name))),
            ],
        ),
        None if name.is_empty() => String::new(),
        None => templater.fill(
            &html::EMOJI,
            &[
                Substitution::none("EMOJI", escape_html(name)),
                Substitution::none("EMOJI_COUNT", count),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Emoji, Guild};
    use crate::time::TimeFormatter;
    use pretty_assertions::assert_eq;

    fn render_with(reaction: &Reaction) -> String {
        let guild = Guild::new("1", "Guild");
        let templater = Templater::for_guild(&guild, TimeFormatter::new(chrono_tz::UTC, true), 100);
        render(reaction, &templater)
    }

    #[test]
    fn test_unicode_reaction() {
        let html = render_with(&Reaction {
            emoji: Emoji {
                id: None,
                name: Some("🎉".to_string()),
                animated: false,
            },
            count: 3,
        });
        assert_eq!(
            html,
            "<div class=\"chatlog__reaction\"><span class=\"chatlog__reaction-emoji\">🎉</span><span class=\"chatlog__reaction-count\">3</span></div>"
        );
    }

    #[test]
    fn test_custom_reaction() {
        let html = render_with(&Reaction {
            emoji: Emoji {
                id: Some("77".to_string()),
                name: Some("blob".to_string()),
                animated: false,
            },
            count: 1,
        });
        assert!(html.contains("src=\"https://cdn.discordapp.com/emojis/77.png\""));
        assert!(html.contains("title=\":blob:\""));
    }

    #[test]
    fn test_nameless_unicode_reaction_is_skipped() {
        assert_eq!(render_with(&Reaction::default()), "");
    }

    #[test]
    fn test_custom_emoji_id_cannot_break_out_of_src() {
        let html = render_with(&Reaction {
            emoji: Emoji {
                id: Some("1\"><script>alert(1)</script>".to_string()),
                name: Some("x".to_string()),
                animated: false,
            },
            count: 1,
        });
        assert!(!html.contains("<script>"));
        assert!(html.contains("src=\"https://cdn.discordapp.com/emojis/1&quot;&gt;&lt;script&gt;"));
    }
}
