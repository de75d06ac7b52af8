//! Component renderer.
//!
//! Buttons and select menus become inert facsimiles: everything is rendered
//! disabled-looking and nothing carries behaviour.

use crate::model::{Button, ButtonStyle, Component, Emoji, SelectMenu};
use crate::template::{html, icons, Substitution, Templater};
use crate::util::escape_html;

impl ButtonStyle {
    /// Background colour for the button.
    #[must_use]
    pub const fn colour(self) -> &'static str {
        match self {
            Self::Primary => "#5865F2",
            Self::Secondary | Self::Link => "#4F545C",
            Self::Success => "#2D7D46",
            Self::Danger => "#D83C3E",
        }
    }
}

/// Render one top-level component.
#[must_use]
pub fn render(component: &Component, templater: &Templater<'_>) -> String {
    match component {
        Component::ActionRow { components } => {
            let row: String = components.iter().map(|c| render_child(c, templater)).collect();
            if row.is_empty() {
                return String::new();
            }
            templater.fill(&html::COMPONENT_ROW, &[Substitution::none("ROW", row)])
        }
        // A bare child gets its own row.
        Component::Button(_) | Component::SelectMenu(_) => {
            let row = render_child(component, templater);
            templater.fill(&html::COMPONENT_ROW, &[Substitution::none("ROW", row)])
        }
        Component::Unknown => String::new(),
    }
}

fn render_child(component: &Component, templater: &Templater<'_>) -> String {
    match component {
        Component::Button(button) => render_button(button, templater),
        Component::SelectMenu(menu) => render_menu(menu, templater),
        // Rows do not nest.
        Component::ActionRow { .. } | Component::Unknown => String::new(),
    }
}

fn render_emoji(emoji: Option<&Emoji>, templater: &Templater<'_>) -> String {
    let Some(emoji) = emoji else {
        return String::new();
    };
    match emoji.image_url() {
        Some(url) => templater.fill(
            &html::COMPONENT_EMOJI,
            &[
                Substitution::none("EMOJI_URL", escape_html(&url)),
                Substitution::none("NAME", escape_html(emoji.name.as_deref().unwrap_or_default())),
            ],
        ),
        None => escape_html(emoji.name.as_deref().unwrap_or_default()),
    }
}

fn render_button(button: &Button, templater: &Templater<'_>) -> String {
    let is_link = button.style == ButtonStyle::Link;
    let url = if is_link {
        button.url.as_deref().map(escape_html).unwrap_or_default()
    } else {
        String::new()
    };
    let icon = if is_link { icons::BUTTON_EXTERNAL_LINK } else { "" };
    let disabled = if button.disabled {
        " chatlog__component-button--disabled"
    } else {
        ""
    };

    templater.fill(
        &html::COMPONENT_BUTTON,
        &[
            Substitution::none("DISABLED", disabled),
            Substitution::none("URL", url),
            Substitution::none("BUTTON_COLOUR", button.style.colour()),
            Substitution::none("LABEL", escape_html(button.label.as_deref().unwrap_or_default())),
            Substitution::none("EMOJI", render_emoji(button.emoji.as_ref(), templater)),
            Substitution::none("ICON", icon),
        ],
    )
}

fn render_menu(menu: &SelectMenu, templater: &Templater<'_>) -> String {
    let options: String = menu
        .options
        .iter()
        .map(|option| {
            templater.fill(
                &html::COMPONENT_MENU_OPTION,
                &[
                    Substitution::none("EMOJI", render_emoji(option.emoji.as_ref(), templater)),
                    Substitution::none("TITLE", escape_html(&option.label)),
                    Substitution::none(
                        "DESCRIPTION",
                        escape_html(option.description.as_deref().unwrap_or_default()),
                    ),
                ],
            )
        })
        .collect();

    templater.fill(
        &html::COMPONENT_MENU,
        &[
            Substitution::none("DISABLED", " chatlog__component-dropdown--disabled"),
            Substitution::none("ID", escape_html(menu.custom_id.as_deref().unwrap_or_default())),
            Substitution::none(
                "PLACEHOLDER",
                escape_html(menu.placeholder.as_deref().unwrap_or("Make a selection")),
            ),
            Substitution::none("CONTENT", options),
        ],
    )
}
