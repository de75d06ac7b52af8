//! Asset renderers.
//!
//! Each renderer turns one asset into a markup fragment and never fails:
//! missing fields simply drop the markup that would have shown them.

pub mod attachment;
pub mod component;
pub mod embed;
pub mod reaction;

use crate::model::Message;
use crate::template::{html, Substitution, Templater};

/// Concatenated asset fragments for one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMarkup {
    /// Embed blocks.
    pub embeds: String,
    /// Attachment blocks.
    pub attachments: String,
    /// Component rows.
    pub components: String,
    /// Reactions, wrapped in their container when any exist.
    pub reactions: String,
}

impl AssetMarkup {
    /// Render every asset of a message, in input order per kind.
    #[must_use]
    pub fn render(message: &Message, templater: &Templater<'_>) -> Self {
        let embeds = message
            .embeds
            .iter()
            .map(|e| embed::render(e, templater))
            .collect::<String>();
        let attachments = message
            .attachments
            .iter()
            .map(|a| attachment::render(a, templater))
            .collect::<String>();
        let components = message
            .components
            .iter()
            .map(|c| component::render(c, templater))
            .collect::<String>();
        let reactions = message
            .reactions
            .iter()
            .map(|r| reaction::render(r, templater))
            .collect::<String>();

        let reactions = if reactions.is_empty() {
            reactions
        } else {
            templater.fill(&html::REACTIONS, &[Substitution::none("REACTIONS", reactions)])
        };

        Self {
            embeds,
            attachments,
            components,
            reactions,
        }
    }

    /// Whether the message had no renderable assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.embeds.is_empty()
            && self.attachments.is_empty()
            && self.components.is_empty()
            && self.reactions.is_empty()
    }

    /// The four fragments as template substitutions.
    #[must_use]
    pub fn substitutions(&self) -> [Substitution<'_>; 4] {
        [
            Substitution::none("EMBEDS", self.embeds.as_str()),
            Substitution::none("ATTACHMENTS", self.attachments.as_str()),
            Substitution::none("COMPONENTS", self.components.as_str()),
            Substitution::none("EMOJI", self.reactions.as_str()),
        ]
    }
}
