//! Template fill engine.
//!
//! Templates are static HTML strings with `{{KEY}}` placeholders. A fill
//! takes an ordered list of [`Substitution`]s, processes each value according
//! to its [`ParseMode`] and replaces every occurrence of its key in one pass
//! over the template, so substituted text is never rescanned for keys.
//!
//! Placeholders with no matching substitution are left untouched.

pub mod html;
pub mod icons;
pub mod markdown;

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

pub use markdown::MarkdownRenderer;

use crate::model::Guild;
use crate::time::TimeFormatter;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Z0-9_]+)\}\}").expect("valid regex"));

/// A named static template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Name used in trace output.
    pub name: &'static str,
    /// Markup with `{{KEY}}` placeholders.
    pub body: &'static str,
}

impl Template {
    /// Declare a template.
    #[must_use]
    pub const fn new(name: &'static str, body: &'static str) -> Self {
        Self { name, body }
    }

    /// Keys referenced by this template, in order of first appearance.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(self.body) {
            if let Some(m) = caps.get(1) {
                if !keys.contains(&m.as_str()) {
                    keys.push(m.as_str());
                }
            }
        }
        keys
    }
}

/// How a substituted value is processed before insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Inserted verbatim. The value must already be safe markup.
    #[default]
    None,
    /// User-authored text rendered as chat markdown.
    Markdown,
    /// Single-line truncated markdown preview for reply banners.
    Reference,
}

/// One `(key, value, mode)` entry of a fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution<'v> {
    /// Placeholder name without braces.
    pub key: &'static str,
    /// Raw value.
    pub value: Cow<'v, str>,
    /// Processing mode.
    pub mode: ParseMode,
}

impl<'v> Substitution<'v> {
    /// Verbatim substitution.
    pub fn none(key: &'static str, value: impl Into<Cow<'v, str>>) -> Self {
        Self {
            key,
            value: value.into(),
            mode: ParseMode::None,
        }
    }

    /// Markdown-rendered substitution.
    pub fn markdown(key: &'static str, value: impl Into<Cow<'v, str>>) -> Self {
        Self {
            key,
            value: value.into(),
            mode: ParseMode::Markdown,
        }
    }

    /// Reply-preview substitution.
    pub fn reference(key: &'static str, value: impl Into<Cow<'v, str>>) -> Self {
        Self {
            key,
            value: value.into(),
            mode: ParseMode::Reference,
        }
    }
}

/// Fills templates for one guild.
#[derive(Debug, Clone, Copy)]
pub struct Templater<'a> {
    markdown: MarkdownRenderer<'a>,
}

impl<'a> Templater<'a> {
    /// Wrap a markdown renderer.
    #[must_use]
    pub const fn new(markdown: MarkdownRenderer<'a>) -> Self {
        Self { markdown }
    }

    /// Templater for a guild with the given display settings.
    #[must_use]
    pub const fn for_guild(guild: &'a Guild, formatter: TimeFormatter, preview_length: usize) -> Self {
        Self::new(MarkdownRenderer::new(guild, formatter, preview_length))
    }

    /// Markdown renderer used for `Markdown` and `Reference` values.
    #[must_use]
    pub const fn markdown(&self) -> &MarkdownRenderer<'a> {
        &self.markdown
    }

    /// Timestamp formatter shared with the markdown renderer.
    #[must_use]
    pub const fn formatter(&self) -> TimeFormatter {
        self.markdown.formatter()
    }

    /// Process one value according to its mode.
    #[must_use]
    pub fn process(&self, value: &str, mode: ParseMode) -> String {
        match mode {
            ParseMode::None => value.to_string(),
            ParseMode::Markdown => self.markdown.render(value),
            ParseMode::Reference => self.markdown.render_reference(value),
        }
    }

    /// Fill a template.
    ///
    /// When a key appears in several substitutions the first one wins.
    #[must_use]
    pub fn fill(&self, template: &Template, substitutions: &[Substitution<'_>]) -> String {
        let processed: Vec<(&str, String)> = substitutions
            .iter()
            .map(|s| (s.key, self.process(&s.value, s.mode)))
            .collect();

        let mut missing = 0usize;
        let filled = PLACEHOLDER.replace_all(template.body, |caps: &Captures<'_>| {
            let key = &caps[1];
            match processed.iter().find(|(k, _)| *k == key) {
                Some((_, value)) => value.clone(),
                None => {
                    missing += 1;
                    caps[0].to_string()
                }
            }
        });

        trace!(
            template = template.name,
            substitutions = substitutions.len(),
            unresolved = missing,
            "Filled template"
        );
        filled.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GREETING: Template = Template::new("greeting", "<p>{{NAME}} says {{TEXT}}{{NAME}}</p>");

    fn with_templater<R>(f: impl FnOnce(&Templater<'_>) -> R) -> R {
        let guild = Guild::new("1", "Guild");
        let templater = Templater::for_guild(&guild, TimeFormatter::new(chrono_tz::UTC, true), 10);
        f(&templater)
    }

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let out = with_templater(|t| {
            t.fill(
                &GREETING,
                &[
                    Substitution::none("NAME", "ann"),
                    Substitution::markdown("TEXT", "**hi**"),
                ],
            )
        });
        assert_eq!(out, "<p>ann says <strong>hi</strong>ann</p>");
    }

    #[test]
    fn test_unknown_placeholders_are_left_alone() {
        let out = with_templater(|t| t.fill(&GREETING, &[Substitution::none("NAME", "ann")]));
        assert_eq!(out, "<p>ann says {{TEXT}}ann</p>");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let out = with_templater(|t| {
            t.fill(
                &GREETING,
                &[
                    Substitution::none("NAME", "{{TEXT}}"),
                    Substitution::none("TEXT", "x"),
                ],
            )
        });
        assert_eq!(out, "<p>{{TEXT}} says x{{TEXT}}</p>");
    }

    #[test]
    fn test_reference_mode_truncates() {
        let out = with_templater(|t| t.process("a very long reply preview", ParseMode::Reference));
        assert_eq!(out, "a very lon...");
    }

    #[test]
    fn test_none_mode_is_verbatim() {
        let out = with_templater(|t| t.process("<b>&amp;</b>", ParseMode::None));
        assert_eq!(out, "<b>&amp;</b>");
    }

    #[test]
    fn test_template_keys() {
        assert_eq!(GREETING.keys(), vec!["NAME", "TEXT"]);
    }
}
