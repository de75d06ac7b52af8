//! Chat-flavoured markdown to HTML.
//!
//! Input is raw user text. Output is safe inline markup: everything is
//! HTML-escaped before any markup is introduced, and code spans are lifted
//! out first so nothing inside them is transformed.
//!
//! Transformed fragments are parked in a stash and replaced by an opaque
//! placeholder until the end, so later passes (bold, italic, ...) never see
//! the inside of links, mentions or code.

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::model::{Guild, EMOJI_CDN_BASE};
use crate::time::TimeFormatter;
use crate::util::{escape_html, truncate_chars};

const MARK: char = '\u{1A}';

static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:([A-Za-z0-9_+\-]+)\n)?\n?(.*?)\n?```").expect("valid regex"));
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"``([^`]+?)``|`([^`\n]+)`").expect("valid regex"));
static MASKED_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]\n]+)\]\((https?://(?:[^\s)<&]|&amp;)+)\)").expect("valid regex")
});
static SUPPRESSED_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&lt;(https?://(?:[^\s<&]|&amp;)+)&gt;").expect("valid regex"));
static BARE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://(?:[^\s<&\x1A]|&amp;)+").expect("valid regex"));
static USER_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"&lt;@!?(\d+)&gt;").expect("valid regex"));
static ROLE_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"&lt;@&amp;(\d+)&gt;").expect("valid regex"));
static CHANNEL_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"&lt;#(\d+)&gt;").expect("valid regex"));
static CUSTOM_EMOJI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&lt;(a?):(\w+):(\d+)&gt;").expect("valid regex"));
static UNIX_TIMESTAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&lt;t:(-?\d+)(?::([tTdDfFR]))?&gt;").expect("valid regex"));
static EVERYONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(everyone|here)\b").expect("valid regex"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));
static UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").expect("valid regex"));
static ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\s][^*]*?)\*").expect("valid regex"));
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b_([^_]+?)_\b").expect("valid regex"));
static STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").expect("valid regex"));
static SPOILER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|\|(.+?)\|\|").expect("valid regex"));
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,3}) (.+)$").expect("valid regex"));
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1A(\d+)\x1A").expect("valid regex"));

/// Renders message text for a given guild.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer<'a> {
    guild: &'a Guild,
    formatter: TimeFormatter,
    preview_length: usize,
}

/// Stash of already-rendered fragments.
#[derive(Default)]
struct Stash(Vec<String>);

impl Stash {
    fn park(&mut self, html: String) -> String {
        self.0.push(html);
        format!("{MARK}{}{MARK}", self.0.len() - 1)
    }

    fn restore(&self, mut text: String) -> String {
        // Entries may themselves contain placeholders for earlier entries.
        for _ in 0..=self.0.len() {
            if !text.contains(MARK) {
                break;
            }
            text = PLACEHOLDER
                .replace_all(&text, |caps: &Captures<'_>| {
                    caps[1]
                        .parse::<usize>()
                        .ok()
                        .and_then(|i| self.0.get(i))
                        .cloned()
                        .unwrap_or_default()
                })
                .into_owned();
        }
        text
    }
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a renderer.
    #[must_use]
    pub const fn new(guild: &'a Guild, formatter: TimeFormatter, preview_length: usize) -> Self {
        Self {
            guild,
            formatter,
            preview_length,
        }
    }

    /// Guild used for mention lookups.
    #[must_use]
    pub const fn guild(&self) -> &'a Guild {
        self.guild
    }

    /// Formatter used for timestamp tags.
    #[must_use]
    pub const fn formatter(&self) -> TimeFormatter {
        self.formatter
    }

    /// Full message rendering: blocks, quotes, headings and inline markup.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut stash = Stash::default();
        let text = text.replace(MARK, "");

        let text = CODE_BLOCK.replace_all(&text, |caps: &Captures<'_>| {
            let lang = caps.get(1).map_or("", |m| m.as_str());
            let class = if lang.is_empty() {
                String::new()
            } else {
                format!(" language-{}", escape_html(lang))
            };
            stash.park(format!(
                "<div class=\"pre pre--multiline{class}\">{}</div>",
                escape_html(&caps[2])
            ))
        });
        let text = self.stash_inline_code(&text, &mut stash);
        let text = escape_html(&text);
        let text = self.stash_links(&text, &mut stash);
        let text = self.stash_entities(&text, &mut stash);
        let text = Self::apply_inline(&text);
        let text = Self::apply_blocks(&text);

        stash.restore(text)
    }

    /// Single-line preview used in reply banners.
    ///
    /// Newlines are dropped, the raw text is cut to the preview length and
    /// links stay plain text since the whole banner is already a link.
    #[must_use]
    pub fn render_reference(&self, text: &str) -> String {
        let mut stash = Stash::default();
        let flat: String = text
            .replace(MARK, "")
            .replace("```", "`")
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let flat = truncate_chars(&flat, self.preview_length);

        let text = self.stash_inline_code(&flat, &mut stash);
        let text = escape_html(&text);
        let text = self.stash_entities(&text, &mut stash);
        let text = Self::apply_inline(&text);

        stash.restore(text)
    }

    fn stash_inline_code(&self, text: &str, stash: &mut Stash) -> String {
        INLINE_CODE
            .replace_all(text, |caps: &Captures<'_>| {
                let code = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                stash.park(format!("<span class=\"pre pre--inline\">{}</span>", escape_html(code)))
            })
            .into_owned()
    }

    fn stash_links(&self, text: &str, stash: &mut Stash) -> String {
        let text = MASKED_LINK.replace_all(text, |caps: &Captures<'_>| {
            stash.park(format!("<a href=\"{}\" title=\"{}\">{}</a>", &caps[2], &caps[2], &caps[1]))
        });
        let text = SUPPRESSED_URL.replace_all(&text, |caps: &Captures<'_>| {
            stash.park(format!("<a href=\"{0}\">{0}</a>", &caps[1]))
        });
        BARE_URL
            .replace_all(&text, |caps: &Captures<'_>| {
                let (url, trailing) = split_trailing_punctuation(&caps[0]);
                format!("{}{trailing}", stash.park(format!("<a href=\"{url}\">{url}</a>")))
            })
            .into_owned()
    }

    fn stash_entities(&self, text: &str, stash: &mut Stash) -> String {
        let text = ROLE_MENTION.replace_all(text, |caps: &Captures<'_>| {
            let id = &caps[1];
            let html = match self.guild.role(id) {
                Some(role) if role.color != 0 => format!(
                    "<span class=\"mention\" style=\"color: {};\" title=\"{id}\">@{}</span>",
                    role.hex_color(),
                    escape_html(&role.name)
                ),
                Some(role) => format!(
                    "<span class=\"mention\" title=\"{id}\">@{}</span>",
                    escape_html(&role.name)
                ),
                None => format!("<span class=\"mention\" title=\"{id}\">@{id}</span>"),
            };
            stash.park(html)
        });
        let text = USER_MENTION.replace_all(&text, |caps: &Captures<'_>| {
            let id = &caps[1];
            let name = self
                .guild
                .cached_member(id)
                .map_or_else(|| id.to_string(), |m| escape_html(m.display_name()));
            stash.park(format!("<span class=\"mention\" title=\"{id}\">@{name}</span>"))
        });
        let text = CHANNEL_MENTION.replace_all(&text, |caps: &Captures<'_>| {
            let id = &caps[1];
            let name = self
                .guild
                .channel(id)
                .map_or_else(|| id.to_string(), |c| escape_html(&c.name));
            stash.park(format!("<span class=\"mention\" title=\"{id}\">#{name}</span>"))
        });
        let text = CUSTOM_EMOJI.replace_all(&text, |caps: &Captures<'_>| {
            let ext = if caps[1].is_empty() { "png" } else { "gif" };
            stash.park(format!(
                "<img class=\"emoji emoji--small\" src=\"{EMOJI_CDN_BASE}/{}.{ext}\" alt=\":{name}:\" title=\":{name}:\">",
                &caps[3],
                name = &caps[2]
            ))
        });
        let text = UNIX_TIMESTAMP.replace_all(&text, |caps: &Captures<'_>| {
            let Some(ts) = caps[1].parse::<i64>().ok().and_then(|s| DateTime::from_timestamp(s, 0)) else {
                return caps[0].to_string();
            };
            let shown = match caps.get(2).map(|m| m.as_str()) {
                Some("t" | "T") => self.formatter.time_of_day(&ts),
                Some("d" | "D") => self.formatter.date(&ts),
                _ => self.formatter.full(&ts),
            };
            stash.park(format!(
                "<span class=\"unix-timestamp\" data-timestamp=\"{}\">{shown}</span>",
                &caps[1]
            ))
        });
        EVERYONE
            .replace_all(&text, |caps: &Captures<'_>| {
                stash.park(format!("<span class=\"mention\">@{}</span>", &caps[1]))
            })
            .into_owned()
    }

    fn apply_inline(text: &str) -> String {
        let text = BOLD.replace_all(text, "<strong>$1</strong>");
        let text = UNDERLINE.replace_all(&text, "<u>$1</u>");
        let text = ITALIC_STAR.replace_all(&text, "<em>$1</em>");
        let text = ITALIC_UNDERSCORE.replace_all(&text, "<em>$1</em>");
        let text = STRIKE.replace_all(&text, "<s>$1</s>");
        SPOILER
            .replace_all(&text, "<span class=\"spoiler-text\">$1</span>")
            .into_owned()
    }

    fn apply_blocks(text: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        let mut quote: Vec<&str> = Vec::new();

        fn flush(quote: &mut Vec<&str>, out: &mut Vec<String>) {
            if !quote.is_empty() {
                out.push(format!("<div class=\"quote\">{}</div>", quote.join("<br>")));
                quote.clear();
            }
        }

        for line in text.split('\n') {
            if let Some(rest) = line.strip_prefix("&gt; ") {
                quote.push(rest);
                continue;
            }
            flush(&mut quote, &mut out);
            if let Some(caps) = HEADING.captures(line) {
                let level = caps[1].len();
                out.push(format!("<h{level}>{}</h{level}>", &caps[2]));
            } else {
                out.push(line.to_string());
            }
        }
        flush(&mut quote, &mut out);

        let mut html = String::new();
        for (i, part) in out.iter().enumerate() {
            html.push_str(part);
            let is_block = part.starts_with("<div class=\"quote\">") || part.starts_with("<h");
            if i + 1 < out.len() && !is_block {
                html.push_str("<br>");
            }
        }
        html
    }
}

/// Split sentence punctuation glued to the end of a bare URL.
/// Formatting markers are included so `**https://x.io**` keeps its closing `**`.
fn split_trailing_punctuation(url: &str) -> (&str, &str) {
    let trimmed = url.trim_end_matches(['.', ',', ')', '!', '?', ';', ':', '\'', '*', '_', '~', '|']);
    url.split_at(trimmed.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Channel, Member, Role, User};
    use pretty_assertions::assert_eq;

    fn guild() -> Guild {
        let mut guild = Guild::new("1", "Test Guild");
        guild.roles.push(Role {
            id: "50".to_string(),
            name: "Mods".to_string(),
            color: 0x00FF00,
            position: 3,
            icon: None,
        });
        guild.channels.push(Channel::text("60", "general"));
        guild.members.push(Member {
            user: User::new("70", "dave"),
            nick: Some("Davey".to_string()),
            joined_at: None,
            roles: Vec::new(),
        });
        guild
    }

    fn render(text: &str) -> String {
        let guild = guild();
        MarkdownRenderer::new(&guild, TimeFormatter::new(chrono_tz::UTC, true), 20).render(text)
    }

    fn reference(text: &str) -> String {
        let guild = guild();
        MarkdownRenderer::new(&guild, TimeFormatter::new(chrono_tz::UTC, true), 20)
            .render_reference(text)
    }

    #[test]
    fn test_escapes_html() {
        assert_eq!(render("<script>alert(1)</script>"), "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_inline_formatting() {
        assert_eq!(render("**bold** and *it*"), "<strong>bold</strong> and <em>it</em>");
        assert_eq!(render("__under__ ~~gone~~"), "<u>under</u> <s>gone</s>");
        assert_eq!(render("||secret||"), "<span class=\"spoiler-text\">secret</span>");
        assert_eq!(render("snake_case_name"), "snake_case_name");
    }

    #[test]
    fn test_code_is_not_formatted() {
        assert_eq!(
            render("`**x** <b>`"),
            "<span class=\"pre pre--inline\">**x** &lt;b&gt;</span>"
        );
        assert_eq!(
            render("```rust\nfn main() {}\n```"),
            "<div class=\"pre pre--multiline language-rust\">fn main() {}</div>"
        );
    }

    #[test]
    fn test_links() {
        assert_eq!(
            render("see https://example.com/a_b_c."),
            "see <a href=\"https://example.com/a_b_c\">https://example.com/a_b_c</a>."
        );
        assert_eq!(
            render("[docs](https://example.com)"),
            "<a href=\"https://example.com\" title=\"https://example.com\">docs</a>"
        );
        assert_eq!(
            render("**https://a.io**"),
            "<strong><a href=\"https://a.io\">https://a.io</a></strong>"
        );
        assert_eq!(
            render("||https://a.io/x_y||"),
            "<span class=\"spoiler-text\"><a href=\"https://a.io/x_y\">https://a.io/x_y</a></span>"
        );
    }

    #[test]
    fn test_mentions() {
        assert_eq!(
            render("hi <@70>"),
            "hi <span class=\"mention\" title=\"70\">@Davey</span>"
        );
        assert_eq!(
            render("<@!99>"),
            "<span class=\"mention\" title=\"99\">@99</span>"
        );
        assert_eq!(
            render("<@&50>"),
            "<span class=\"mention\" style=\"color: #00FF00;\" title=\"50\">@Mods</span>"
        );
        assert_eq!(
            render("<#60>"),
            "<span class=\"mention\" title=\"60\">#general</span>"
        );
    }

    #[test]
    fn test_custom_emoji() {
        assert_eq!(
            render("<a:dance:12>"),
            "<img class=\"emoji emoji--small\" src=\"https://cdn.discordapp.com/emojis/12.gif\" alt=\":dance:\" title=\":dance:\">"
        );
    }

    #[test]
    fn test_quotes_and_newlines() {
        assert_eq!(
            render("> quoted\n> more\nafter\nend"),
            "<div class=\"quote\">quoted<br>more</div>after<br>end"
        );
        assert_eq!(render("# Title\nbody"), "<h1>Title</h1>body");
    }

    #[test]
    fn test_unix_timestamp() {
        assert_eq!(
            render("<t:0:d>"),
            "<span class=\"unix-timestamp\" data-timestamp=\"0\">Jan 01, 1970</span>"
        );
    }

    #[test]
    fn test_reference_is_single_line_and_truncated() {
        assert_eq!(reference("line one\nline two"), "line one line two");
        assert_eq!(reference("abcdefghijklmnopqrstuvwxyz"), "abcdefghijklmnopqrst...");
        assert_eq!(reference("**x** https://a.io"), "<strong>x</strong> https://a.io");
    }

    #[test]
    fn test_placeholder_marker_is_stripped() {
        assert_eq!(render("a\u{1A}0\u{1A}b"), "a0b");
    }
}
