//! Attachment renderer.

use crate::model::Attachment;
use crate::template::{html, icons, Substitution, Templater};
use crate::util::{escape_html, format_size};

/// How an attachment is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    /// Inline image preview.
    Image,
    /// Inline video player.
    Video,
    /// Audio player plus download block.
    Audio,
    /// Download block only.
    File,
}

impl AttachmentKind {
    /// Classify by MIME type, falling back to the file extension.
    #[must_use]
    pub fn of(attachment: &Attachment) -> Self {
        if let Some(content_type) = attachment.content_type.as_deref() {
            let top = content_type.split('/').next().unwrap_or_default();
            return match top {
                "image" => Self::Image,
                "video" => Self::Video,
                "audio" => Self::Audio,
                _ => Self::File,
            };
        }

        let ext = attachment
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => Self::Image,
            "mp4" | "webm" | "mov" | "mkv" => Self::Video,
            "mp3" | "wav" | "ogg" | "flac" | "m4a" => Self::Audio,
            _ => Self::File,
        }
    }
}

/// Render one attachment.
#[must_use]
pub fn render(attachment: &Attachment, templater: &Templater<'_>) -> String {
    let url = escape_html(&attachment.url);
    let file = escape_html(if attachment.filename.is_empty() {
        "attachment"
    } else {
        attachment.filename.as_str()
    });

    if url.is_empty() {
        return templater.fill(
            &html::MSG_ATTACHMENT,
            &[
                Substitution::none("ATTACH_ICON", icons::FILE_UNKNOWN),
                Substitution::none("ATTACH_URL", "#"),
                Substitution::none("ATTACH_FILE", file),
                Substitution::none("ATTACH_BYTES", format_size(attachment.size)),
            ],
        );
    }

    match AttachmentKind::of(attachment) {
        AttachmentKind::Image => {
            let thumb = attachment
                .proxy_url
                .as_deref()
                .map_or_else(|| url.clone(), escape_html);
            let alt = attachment
                .description
                .as_deref()
                .map_or_else(|| file.clone(), escape_html);
            templater.fill(
                &html::IMG_ATTACHMENT,
                &[
                    Substitution::none("ATTACH_URL", url.as_str()),
                    Substitution::none("ATTACH_URL_THUMB", thumb),
                    Substitution::none("ALT", alt),
                ],
            )
        }
        AttachmentKind::Video => templater.fill(
            &html::VIDEO_ATTACHMENT,
            &[
                Substitution::none("ATTACH_URL", url.as_str()),
                Substitution::none("ATTACH_FILE", file),
            ],
        ),
        AttachmentKind::Audio => templater.fill(
            &html::AUDIO_ATTACHMENT,
            &[
                Substitution::none("ATTACH_ICON", icons::file_icon(&attachment.filename)),
                Substitution::none("ATTACH_URL", url.as_str()),
                Substitution::none("ATTACH_FILE", file),
                Substitution::none("ATTACH_BYTES", format_size(attachment.size)),
            ],
        ),
        AttachmentKind::File => templater.fill(
            &html::MSG_ATTACHMENT,
            &[
                Substitution::none("ATTACH_ICON", icons::file_icon(&attachment.filename)),
                Substitution::none("ATTACH_URL", url.as_str()),
                Substitution::none("ATTACH_FILE", file),
                Substitution::none("ATTACH_BYTES", format_size(attachment.size)),
            ],
        ),
    }
}
