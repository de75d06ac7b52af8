//! Embed renderer.

use crate::model::{Embed, EmbedField};
use crate::template::{html, Substitution, Templater};
use crate::util::escape_html;

/// Sidebar colour used when an embed carries none.
pub const DEFAULT_EMBED_COLOUR: &str = "rgba(79, 84, 92, 1)";

/// Render one embed.
#[must_use]
pub fn render(embed: &Embed, templater: &Templater<'_>) -> String {
    let colour = embed
        .color
        .map_or_else(|| DEFAULT_EMBED_COLOUR.to_string(), |c| format!("#{:06X}", c & 0x00FF_FFFF));

    templater.fill(
        &html::EMBED_BODY,
        &[
            Substitution::none("EMBED_COLOUR", colour),
            Substitution::none("EMBED_AUTHOR", author(embed, templater)),
            Substitution::none("EMBED_TITLE", title(embed, templater)),
            Substitution::none("EMBED_DESC", description(embed, templater)),
            Substitution::none("EMBED_FIELDS", fields(&embed.fields, templater)),
            Substitution::none("EMBED_THUMBNAIL", thumbnail(embed, templater)),
            Substitution::none("EMBED_IMAGE", image(embed, templater)),
            Substitution::none("EMBED_FOOTER", footer(embed, templater)),
        ],
    )
}

fn link(url: &str, text: String, templater: &Templater<'_>) -> String {
    templater.fill(
        &html::EMBED_LINK,
        &[
            Substitution::none("URL", escape_html(url)),
            Substitution::none("TEXT", text),
        ],
    )
}

fn author(embed: &Embed, templater: &Templater<'_>) -> String {
    let Some(author) = &embed.author else {
        return String::new();
    };
    let Some(name) = author.name.as_deref().filter(|n| !n.is_empty()) else {
        return String::new();
    };

    let name = escape_html(name);
    let name = match &author.url {
        Some(url) => link(url, name, templater),
        None => name,
    };
    let icon = author.icon_url.as_deref().map_or_else(String::new, |url| {
        templater.fill(
            &html::EMBED_AUTHOR_ICON,
            &[Substitution::none("AUTHOR_ICON_URL", escape_html(url))],
        )
    });

    templater.fill(
        &html::EMBED_AUTHOR,
        &[
            Substitution::none("AUTHOR_ICON", icon),
            Substitution::none("AUTHOR", name),
        ],
    )
}

fn title(embed: &Embed, templater: &Templater<'_>) -> String {
    let Some(text) = embed.title.as_deref().filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let rendered = templater.markdown().render(text);
    let rendered = match &embed.url {
        Some(url) => link(url, rendered, templater),
        None => rendered,
    };
    templater.fill(&html::EMBED_TITLE, &[Substitution::none("EMBED_TITLE", rendered)])
}

fn description(embed: &Embed, templater: &Templater<'_>) -> String {
    match embed.description.as_deref() {
        Some(text) if !text.is_empty() => {
            templater.fill(&html::EMBED_DESCRIPTION, &[Substitution::markdown("EMBED_DESC", text)])
        }
        _ => String::new(),
    }
}

fn fields(fields: &[EmbedField], templater: &Templater<'_>) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let rendered: String = fields
        .iter()
        .map(|field| {
            let template = if field.inline {
                &html::EMBED_FIELD_INLINE
            } else {
                &html::EMBED_FIELD
            };
            templater.fill(
                template,
                &[
                    Substitution::markdown("FIELD_NAME", field.name.as_str()),
                    Substitution::markdown("FIELD_VALUE", field.value.as_str()),
                ],
            )
        })
        .collect();

    templater.fill(&html::EMBED_FIELDS, &[Substitution::none("FIELDS", rendered)])
}

fn thumbnail(embed: &Embed, templater: &Templater<'_>) -> String {
    match &embed.thumbnail {
        Some(media) if !media.url.is_empty() => templater.fill(
            &html::EMBED_THUMBNAIL,
            &[Substitution::none("EMBED_THUMBNAIL", escape_html(&media.url))],
        ),
        _ => String::new(),
    }
}

fn image(embed: &Embed, templater: &Templater<'_>) -> String {
    match &embed.image {
        Some(media) if !media.url.is_empty() => templater.fill(
            &html::EMBED_IMAGE,
            &[Substitution::none("EMBED_IMAGE", escape_html(&media.url))],
        ),
        _ => String::new(),
    }
}

fn footer(embed: &Embed, templater: &Templater<'_>) -> String {
    let text = embed
        .footer
        .as_ref()
        .map(|f| escape_html(&f.text))
        .filter(|t| !t.is_empty());
    let stamp = embed.timestamp.map(|ts| templater.formatter().full(&ts));

    let text = match (text, stamp) {
        (Some(text), Some(stamp)) => format!("{text} • {stamp}"),
        (Some(text), None) => text,
        (None, Some(stamp)) => stamp,
        (None, None) => return String::new(),
    };

    let icon = embed
        .footer
        .as_ref()
        .and_then(|f| f.icon_url.as_deref())
        .map_or_else(String::new, |url| {
            templater.fill(
                &html::EMBED_FOOTER_ICON,
                &[Substitution::none("EMBED_FOOTER_ICON", escape_html(url))],
            )
        });

    templater.fill(
        &html::EMBED_FOOTER,
        &[
            Substitution::none("EMBED_FOOTER_ICON", icon),
            Substitution::none("EMBED_FOOTER", text),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmbedAuthor, EmbedFooter, EmbedMedia, Guild};
    use crate::time::TimeFormatter;
    use chrono::{TimeZone, Utc};

    fn render_with(embed: &Embed) -> String {
        let guild = Guild::new("1", "Guild");
        let templater = Templater::for_guild(&guild, TimeFormatter::new(chrono_tz::UTC, true), 100);
        render(embed, &templater)
    }

    #[test]
    fn test_empty_embed_uses_default_colour() {
        let html = render_with(&Embed::default());
        assert!(html.contains(DEFAULT_EMBED_COLOUR));
        assert!(!html.contains("chatlog__embed-title"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_full_embed() {
        let embed = Embed {
            title: Some("Release **1.0**".to_string()),
            url: Some("https://example.com/r".to_string()),
            description: Some("Notes <here>".to_string()),
            color: Some(0x1ABC9C),
            author: Some(EmbedAuthor {
                name: Some("Bot & Co".to_string()),
                url: None,
                icon_url: Some("https://example.com/i.png".to_string()),
            }),
            fields: vec![
                EmbedField {
                    name: "A".to_string(),
                    value: "1".to_string(),
                    inline: true,
                },
                EmbedField {
                    name: "B".to_string(),
                    value: "2".to_string(),
                    inline: false,
                },
            ],
            footer: Some(EmbedFooter {
                text: "footer".to_string(),
                icon_url: None,
            }),
            timestamp: Some(Utc.with_ymd_and_hms(2024, 2, 5, 13, 45, 0).unwrap()),
            image: Some(EmbedMedia {
                url: "https://example.com/big.png".to_string(),
                width: None,
                height: None,
            }),
            thumbnail: None,
        };

        let html = render_with(&embed);
        assert!(html.contains("background-color: #1ABC9C;"));
        assert!(html.contains("<a class=\"chatlog__embed-link\" href=\"https://example.com/r\">Release <strong>1.0</strong></a>"));
        assert!(html.contains("Notes &lt;here&gt;"));
        assert!(html.contains("Bot &amp; Co"));
        assert!(html.contains("chatlog__embed-field--inline"));
        assert_eq!(html.matches("chatlog__embed-field-name").count(), 2);
        assert!(html.contains("footer • Monday,  5 February 2024 13:45"));
        assert!(html.contains("https://example.com/big.png"));
        assert!(!html.contains("chatlog__embed-thumbnail"));
    }
}
