//! HTML template assets.
//!
//! Block templates open a `chatlog__message-group` container and leave it
//! open. The builder closes it with [`END_MESSAGE`] when the next block
//! starts, and the assembler closes the last one.

use super::Template;

/// Opens a block: group container, banner, header and the first message.
pub const START_MESSAGE: Template = Template::new(
    "start_message",
    r#"<div class="chatlog__message-group">
{{REFERENCE_SYMBOL}}{{REFERENCE}}<div class="chatlog__message-container" id="chatlog__message-container-{{MESSAGE_ID}}" data-message-id="{{MESSAGE_ID}}">
<div class="chatlog__message">
<div class="chatlog__message-aside">
<img class="chatlog__avatar" src="{{AVATAR_URL}}" alt="Avatar" loading="lazy">
</div>
<div class="chatlog__message-primary">
<div class="chatlog__header">
<span class="chatlog__author" style="{{USER_COLOUR}}" title="{{NAME_TAG}}" data-user-id="{{USER_ID}}">{{NAME}}</span>{{USER_ICON}}{{BOT_TAG}}
<span class="chatlog__timestamp" title="{{TIMESTAMP}}">{{DEFAULT_TIMESTAMP}}</span>
</div>
<div class="chatlog__content chatlog__markdown">{{MESSAGE_CONTENT}}</div>
{{ATTACHMENTS}}{{EMBEDS}}{{COMPONENTS}}{{EMOJI}}
</div>
</div>
</div>
"#,
);

/// A continuation row inside an open block.
pub const MESSAGE_BODY: Template = Template::new(
    "message_body",
    r#"<div class="chatlog__message-container" id="chatlog__message-container-{{MESSAGE_ID}}" data-message-id="{{MESSAGE_ID}}">
<div class="chatlog__message">
<div class="chatlog__message-aside">
<div class="chatlog__short-timestamp" title="{{TIMESTAMP}}">{{TIME}}</div>
</div>
<div class="chatlog__message-primary">
<div class="chatlog__content chatlog__markdown">{{MESSAGE_CONTENT}}</div>
{{ATTACHMENTS}}{{EMBEDS}}{{COMPONENTS}}{{EMOJI}}
</div>
</div>
</div>
"#,
);

/// Rendered message text with its optional edit marker.
pub const MESSAGE_CONTENT: Template = Template::new(
    "message_content",
    r#"<span class="chatlog__markdown-preserve">{{MESSAGE_CONTENT}}</span>{{EDIT}}"#,
);

/// "(edited)" marker.
pub const EDITED: Template = Template::new(
    "edited",
    r#" <span class="chatlog__edited-timestamp" title="{{EDIT_TIMESTAMP}}">(edited)</span>"#,
);

/// Closes the open block.
pub const END_MESSAGE: Template = Template::new("end_message", "</div>\n");

/// One-line reply banner.
pub const MESSAGE_REFERENCE: Template = Template::new(
    "message_reference",
    r#"<div class="chatlog__reference">
<img class="chatlog__reference-avatar" src="{{AVATAR_URL}}" alt="Avatar" loading="lazy">
<span class="chatlog__reference-name" style="{{USER_COLOUR}}" title="{{NAME_TAG}}" data-user-id="{{USER_ID}}">{{NAME}}</span>{{BOT_TAG}}
<div class="chatlog__reference-content">
<span class="chatlog__reference-link" data-goto="{{MESSAGE_ID}}">{{CONTENT}}{{ICON}}</span>{{EDIT}}
</div>
</div>
"#,
);

/// Banner for replies whose original message no longer exists.
pub const MESSAGE_REFERENCE_UNKNOWN: Template = Template::new(
    "message_reference_unknown",
    r#"<div class="chatlog__reference">
<div class="chatlog__reference-unknown">
<span class="chatlog__reference-link">Original message was deleted.</span>
</div>
</div>
"#,
);

/// Slash-command invocation banner.
pub const MESSAGE_INTERACTION: Template = Template::new(
    "message_interaction",
    r#"<div class="chatlog__reference" data-interaction-id="{{INTERACTION_ID}}">
<img class="chatlog__reference-avatar" src="{{AVATAR_URL}}" alt="Avatar" loading="lazy">
<span class="chatlog__reference-name" style="{{USER_COLOUR}}" title="{{NAME_TAG}}" data-user-id="{{USER_ID}}">{{NAME}}</span>{{BOT_TAG}}
<span class="chatlog__reference-filler">{{FILLER}}</span><span class="chatlog__reference-command">{{COMMAND}}</span>
</div>
"#,
);

/// Curved connector drawn above a banner.
pub const FOLLOWUP_SYMBOL: &str = "<div class='chatlog__followup-symbol'></div>";

/// Bot badge.
pub const BOT_TAG: &str = r#"<span class="chatlog__bot-tag">BOT</span>"#;

/// Verified bot badge.
pub const BOT_TAG_VERIFIED: &str = r#"<span class="chatlog__bot-tag"><svg class="chatlog__bot-tag-verified" aria-label="Verified Bot" width="16" height="16" viewBox="0 0 16 15.2"><path d="M7.4,11.17,4,8.62,5,7.26l2,1.53L10.64,4l1.36,1Z" fill="currentColor"/></svg>BOT</span>"#;

/// Role icon beside an author name.
pub const ROLE_ICON: Template = Template::new(
    "role_icon",
    "<img class='chatlog__role-icon' src='{{ICON_URL}}' alt='Role Icon'>",
);

/// "X pinned a message" notice.
pub const MESSAGE_PIN: Template = Template::new(
    "message_pin",
    r#"<div class="chatlog__message-group">
<div class="chatlog__message-container chatlog__message-container--notice" id="chatlog__message-container-{{MESSAGE_ID}}" data-message-id="{{MESSAGE_ID}}">
<div class="chatlog__message">
<div class="chatlog__message-aside"><img class="chatlog__system-icon" src="{{PIN_URL}}" alt="Pin"></div>
<div class="chatlog__message-primary">
<span class="chatlog__system-notification-author" style="{{USER_COLOUR}}" title="{{NAME_TAG}}">{{NAME}}</span>
<span class="chatlog__system-notification-content"> pinned <span class="chatlog__reference-link" data-goto="{{REF_MESSAGE_ID}}">a message</span> to this channel.</span>
<span class="chatlog__system-notification-timestamp">{{TIMESTAMP}}</span>
</div>
</div>
</div>
"#,
);

/// "X started a thread" notice.
pub const MESSAGE_THREAD: Template = Template::new(
    "message_thread",
    r#"<div class="chatlog__message-group">
<div class="chatlog__message-container chatlog__message-container--notice" id="chatlog__message-container-{{MESSAGE_ID}}" data-message-id="{{MESSAGE_ID}}">
<div class="chatlog__message">
<div class="chatlog__message-aside"><img class="chatlog__system-icon" src="{{THREAD_URL}}" alt="Thread"></div>
<div class="chatlog__message-primary">
<span class="chatlog__system-notification-author" style="{{USER_COLOUR}}" title="{{NAME_TAG}}">{{NAME}}</span>
<span class="chatlog__system-notification-content"> started a thread: <span class="chatlog__system-notification-link">{{THREAD_NAME}}</span></span>
<span class="chatlog__system-notification-timestamp">{{TIMESTAMP}}</span>
</div>
</div>
</div>
"#,
);

/// "X added Y to the thread" notice.
pub const MESSAGE_THREAD_ADD: Template = Template::new(
    "message_thread_add",
    r#"<div class="chatlog__message-group">
<div class="chatlog__message-container chatlog__message-container--notice" id="chatlog__message-container-{{MESSAGE_ID}}" data-message-id="{{MESSAGE_ID}}">
<div class="chatlog__message">
<div class="chatlog__message-aside"><img class="chatlog__system-icon" src="{{THREAD_URL}}" alt="Added"></div>
<div class="chatlog__message-primary">
<span class="chatlog__system-notification-author" style="{{USER_COLOUR}}" title="{{NAME_TAG}}">{{NAME}}</span>
<span class="chatlog__system-notification-content"> added </span>
<span class="chatlog__system-notification-author" style="{{RECIPIENT_USER_COLOUR}}" title="{{RECIPIENT_NAME_TAG}}">{{RECIPIENT_NAME}}</span>
<span class="chatlog__system-notification-content"> to the thread.</span>
<span class="chatlog__system-notification-timestamp">{{TIMESTAMP}}</span>
</div>
</div>
</div>
"#,
);

/// "X removed Y from the thread" notice.
pub const MESSAGE_THREAD_REMOVE: Template = Template::new(
    "message_thread_remove",
    r#"<div class="chatlog__message-group">
<div class="chatlog__message-container chatlog__message-container--notice" id="chatlog__message-container-{{MESSAGE_ID}}" data-message-id="{{MESSAGE_ID}}">
<div class="chatlog__message">
<div class="chatlog__message-aside"><img class="chatlog__system-icon" src="{{THREAD_URL}}" alt="Removed"></div>
<div class="chatlog__message-primary">
<span class="chatlog__system-notification-author" style="{{USER_COLOUR}}" title="{{NAME_TAG}}">{{NAME}}</span>
<span class="chatlog__system-notification-content"> removed </span>
<span class="chatlog__system-notification-author" style="{{RECIPIENT_USER_COLOUR}}" title="{{RECIPIENT_NAME_TAG}}">{{RECIPIENT_NAME}}</span>
<span class="chatlog__system-notification-content"> from the thread.</span>
<span class="chatlog__system-notification-timestamp">{{TIMESTAMP}}</span>
</div>
</div>
</div>
"#,
);

// Embeds

/// Embed container.
pub const EMBED_BODY: Template = Template::new(
    "embed_body",
    r#"<div class="chatlog__embed">
<div class="chatlog__embed-color-pill" style="background-color: {{EMBED_COLOUR}};"></div>
<div class="chatlog__embed-content-container">
<div class="chatlog__embed-content">
<div class="chatlog__embed-text">
{{EMBED_AUTHOR}}{{EMBED_TITLE}}{{EMBED_DESC}}{{EMBED_FIELDS}}
</div>
{{EMBED_THUMBNAIL}}
</div>
{{EMBED_IMAGE}}{{EMBED_FOOTER}}
</div>
</div>
"#,
);

/// Embed author line.
pub const EMBED_AUTHOR: Template = Template::new(
    "embed_author",
    r#"<div class="chatlog__embed-author">{{AUTHOR_ICON}}<span class="chatlog__embed-author-name">{{AUTHOR}}</span></div>
"#,
);

/// Embed author icon.
pub const EMBED_AUTHOR_ICON: Template = Template::new(
    "embed_author_icon",
    r#"<img class="chatlog__embed-author-icon" src="{{AUTHOR_ICON_URL}}" alt="Author icon" loading="lazy">"#,
);

/// Link inside an embed.
pub const EMBED_LINK: Template = Template::new(
    "embed_link",
    r#"<a class="chatlog__embed-link" href="{{URL}}">{{TEXT}}</a>"#,
);

/// Embed title.
pub const EMBED_TITLE: Template = Template::new(
    "embed_title",
    r#"<div class="chatlog__embed-title"><div class="chatlog__markdown-preserve">{{EMBED_TITLE}}</div></div>
"#,
);

/// Embed description.
pub const EMBED_DESCRIPTION: Template = Template::new(
    "embed_description",
    r#"<div class="chatlog__embed-description"><div class="chatlog__markdown-preserve">{{EMBED_DESC}}</div></div>
"#,
);

/// Field container.
pub const EMBED_FIELDS: Template = Template::new(
    "embed_fields",
    r#"<div class="chatlog__embed-fields">{{FIELDS}}</div>
"#,
);

/// Full-width field.
pub const EMBED_FIELD: Template = Template::new(
    "embed_field",
    r#"<div class="chatlog__embed-field">
<div class="chatlog__embed-field-name">{{FIELD_NAME}}</div>
<div class="chatlog__embed-field-value">{{FIELD_VALUE}}</div>
</div>
"#,
);

/// Field sharing a row with its neighbours.
pub const EMBED_FIELD_INLINE: Template = Template::new(
    "embed_field_inline",
    r#"<div class="chatlog__embed-field chatlog__embed-field--inline">
<div class="chatlog__embed-field-name">{{FIELD_NAME}}</div>
<div class="chatlog__embed-field-value">{{FIELD_VALUE}}</div>
</div>
"#,
);

/// Embed thumbnail.
pub const EMBED_THUMBNAIL: Template = Template::new(
    "embed_thumbnail",
    r#"<div class="chatlog__embed-thumbnail-container">
<a class="chatlog__embed-thumbnail-link" href="{{EMBED_THUMBNAIL}}"><img class="chatlog__embed-thumbnail" src="{{EMBED_THUMBNAIL}}" alt="Thumbnail" loading="lazy"></a>
</div>
"#,
);

/// Embed image.
pub const EMBED_IMAGE: Template = Template::new(
    "embed_image",
    r#"<div class="chatlog__embed-image-container">
<a class="chatlog__embed-image-link" href="{{EMBED_IMAGE}}"><img class="chatlog__embed-image" src="{{EMBED_IMAGE}}" alt="Image" loading="lazy"></a>
</div>
"#,
);

/// Embed footer.
pub const EMBED_FOOTER: Template = Template::new(
    "embed_footer",
    r#"<div class="chatlog__embed-footer">{{EMBED_FOOTER_ICON}}<span class="chatlog__embed-footer-text">{{EMBED_FOOTER}}</span></div>
"#,
);

/// Embed footer icon.
pub const EMBED_FOOTER_ICON: Template = Template::new(
    "embed_footer_icon",
    r#"<img class="chatlog__embed-footer-icon" src="{{EMBED_FOOTER_ICON}}" alt="Footer icon" loading="lazy">"#,
);

// Attachments

/// Inline image.
pub const IMG_ATTACHMENT: Template = Template::new(
    "img_attachment",
    r#"<div class="chatlog__attachment">
<a href="{{ATTACH_URL}}"><img class="chatlog__attachment-media" src="{{ATTACH_URL_THUMB}}" alt="{{ALT}}" title="{{ALT}}" loading="lazy"></a>
</div>
"#,
);

/// Inline video.
pub const VIDEO_ATTACHMENT: Template = Template::new(
    "video_attachment",
    r#"<div class="chatlog__attachment">
<video class="chatlog__attachment-media" src="{{ATTACH_URL}}" controls></video>
<a class="chatlog__attachment-fallback" href="{{ATTACH_URL}}">{{ATTACH_FILE}}</a>
</div>
"#,
);

/// Inline audio player with a download link.
pub const AUDIO_ATTACHMENT: Template = Template::new(
    "audio_attachment",
    r#"<div class="chatlog__attachment">
<div class="chatlog__attachment-generic">
<img class="chatlog__attachment-icon" src="{{ATTACH_ICON}}" alt="File">
<div class="chatlog__attachment-generic-name"><a href="{{ATTACH_URL}}">{{ATTACH_FILE}}</a></div>
<div class="chatlog__attachment-generic-size">{{ATTACH_BYTES}}</div>
<audio class="chatlog__attachment-audio" src="{{ATTACH_URL}}" controls></audio>
</div>
</div>
"#,
);

/// Download block for any other file.
pub const MSG_ATTACHMENT: Template = Template::new(
    "msg_attachment",
    r#"<div class="chatlog__attachment">
<div class="chatlog__attachment-generic">
<img class="chatlog__attachment-icon" src="{{ATTACH_ICON}}" alt="File">
<div class="chatlog__attachment-generic-name"><a href="{{ATTACH_URL}}">{{ATTACH_FILE}}</a></div>
<div class="chatlog__attachment-generic-size">{{ATTACH_BYTES}}</div>
</div>
</div>
"#,
);

// Components

/// Row of components.
pub const COMPONENT_ROW: Template = Template::new(
    "component_row",
    r#"<div class="chatlog__components">{{ROW}}</div>
"#,
);

/// Inert button.
pub const COMPONENT_BUTTON: Template = Template::new(
    "component_button",
    r#"<div class="chatlog__component-button{{DISABLED}}" style="background-color: {{BUTTON_COLOUR}};" data-url="{{URL}}">{{EMOJI}}<span class="chatlog__button-label">{{LABEL}}</span>{{ICON}}</div>"#,
);

/// Inert select menu.
pub const COMPONENT_MENU: Template = Template::new(
    "component_menu",
    r#"<div class="chatlog__component-dropdown{{DISABLED}}" data-custom-id="{{ID}}">
<div class="chatlog__component-dropdown-placeholder">{{PLACEHOLDER}}</div>
<div class="chatlog__component-dropdown-options">{{CONTENT}}</div>
</div>
"#,
);

/// One select menu option.
pub const COMPONENT_MENU_OPTION: Template = Template::new(
    "component_menu_option",
    r#"<div class="chatlog__component-dropdown-option">{{EMOJI}}<span class="chatlog__component-dropdown-option-title">{{TITLE}}</span><span class="chatlog__component-dropdown-option-description">{{DESCRIPTION}}</span></div>"#,
);

/// Emoji inside a button or menu option.
pub const COMPONENT_EMOJI: Template = Template::new(
    "component_emoji",
    r#"<img class="chatlog__component-emoji" src="{{EMOJI_URL}}" alt="{{NAME}}">"#,
);

// Reactions

/// Container for a message's reactions.
pub const REACTIONS: Template = Template::new(
    "reactions",
    r#"<div class="chatlog__reactions">{{REACTIONS}}</div>
"#,
);

/// Unicode emoji reaction.
pub const EMOJI: Template = Template::new(
    "emoji",
    r#"<div class="chatlog__reaction"><span class="chatlog__reaction-emoji">{{EMOJI}}</span><span class="chatlog__reaction-count">{{EMOJI_COUNT}}</span></div>"#,
);

/// Custom emoji reaction.
pub const CUSTOM_EMOJI: Template = Template::new(
    "custom_emoji",
    r#"<div class="chatlog__reaction" title="{{NAME}}"><img class="emoji emoji--small" src="{{EMOJI}}" alt="{{NAME}}"><span class="chatlog__reaction-count">{{EMOJI_COUNT}}</span></div>"#,
);

// Document

/// One roster entry.
pub const META_USER: Template = Template::new(
    "meta_user",
    r#"<div class="meta__user" data-user-id="{{USER_ID}}">
<img class="meta__avatar" src="{{AVATAR_URL}}" alt="Avatar" loading="lazy">
<div class="meta__details">
<div class="meta__name-tag">{{NAME_TAG}}{{BOT_TAG}}</div>
{{DISPLAY_NAME}}<div class="meta__field">Messages: {{MESSAGE_COUNT}}</div>
<div class="meta__field">Created: {{CREATED_AT}}</div>
<div class="meta__field">Joined: {{JOINED_AT}}</div>
</div>
</div>
"#,
);

/// Participant roster sidebar.
pub const ROSTER: Template = Template::new(
    "roster",
    r#"<aside class="meta">
<div class="meta__header">Participants ({{AUTHOR_COUNT}})</div>
{{USERS}}</aside>
"#,
);

/// Complete document around the message markup.
pub const BASE_DOCUMENT: Template = Template::new(
    "base_document",
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta name="generator" content="{{GENERATOR}}">
<title>{{TITLE}}</title>
<style>
:root {
  --background: #36393e;
  --background-secondary: #2f3136;
  --text: #dcddde;
  --text-muted: #a3a6aa;
  --link: #00aff4;
  --mention-bg: rgba(88, 101, 242, 0.3);
  --code-bg: #2f3136;
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--background); color: var(--text); font-family: "Whitney", "Helvetica Neue", Helvetica, Arial, sans-serif; font-size: 16px; line-height: 1.375; }
a { color: var(--link); text-decoration: none; }
a:hover { text-decoration: underline; }
.layout { display: flex; }
.chatlog { flex: 1; padding: 1rem 0; min-width: 0; }
.preamble { display: flex; align-items: center; gap: 1rem; padding: 1rem; }
.preamble__guild-icon { width: 64px; height: 64px; border-radius: 50%; }
.preamble__entry { font-size: 1.2rem; }
.preamble__entry--small { font-size: 0.9rem; color: var(--text-muted); }
.chatlog__message-group { margin: 1rem 0 0; }
.chatlog__message-container { padding: 0.1rem 1rem; }
.chatlog__message-container:hover { background: rgba(4, 4, 5, 0.07); }
.chatlog__message { display: grid; grid-template-columns: auto 1fr; }
.chatlog__message-aside { grid-column: 1; width: 72px; padding-top: 0.15rem; }
.chatlog__message-primary { grid-column: 2; min-width: 0; }
.chatlog__avatar { width: 40px; height: 40px; border-radius: 50%; }
.chatlog__short-timestamp { display: none; font-size: 0.7rem; color: var(--text-muted); }
.chatlog__message-container:hover .chatlog__short-timestamp { display: block; }
.chatlog__author { font-weight: 500; }
.chatlog__role-icon { width: 20px; height: 20px; margin-left: 0.25rem; vertical-align: middle; }
.chatlog__timestamp { margin-left: 0.3rem; font-size: 0.75rem; color: var(--text-muted); }
.chatlog__edited-timestamp { font-size: 0.7rem; color: var(--text-muted); }
.chatlog__bot-tag { margin-left: 0.3rem; padding: 0.05rem 0.3rem; border-radius: 3px; background: #5865f2; color: #fff; font-size: 0.625rem; font-weight: 500; vertical-align: middle; }
.chatlog__bot-tag-verified { width: 12px; height: 12px; vertical-align: middle; }
.chatlog__followup-symbol { height: 10px; margin: 4px 4px 0 36px; border-left: 2px solid #4f545c; border-top: 2px solid #4f545c; border-radius: 8px 0 0 0; width: 36px; float: left; }
.chatlog__reference { display: flex; align-items: center; gap: 0.25rem; margin: 0 0 0.15rem 72px; font-size: 0.875rem; color: var(--text-muted); overflow: hidden; white-space: nowrap; }
.chatlog__reference-avatar { width: 16px; height: 16px; border-radius: 50%; }
.chatlog__reference-name { font-weight: 600; }
.chatlog__reference-content { overflow: hidden; text-overflow: ellipsis; }
.chatlog__reference-link { cursor: pointer; }
.chatlog__reference-icon { width: 16px; height: 16px; margin-left: 0.25rem; vertical-align: middle; }
.chatlog__reference-unknown { font-style: italic; }
.chatlog__reference-command { color: var(--link); }
.chatlog__system-icon { width: 18px; height: 18px; margin-left: 22px; }
.chatlog__system-notification-author { font-weight: 500; }
.chatlog__system-notification-content, .chatlog__system-notification-timestamp { color: var(--text-muted); }
.chatlog__system-notification-timestamp { margin-left: 0.3rem; font-size: 0.75rem; }
.chatlog__markdown-preserve { white-space: pre-wrap; }
.pre { font-family: Consolas, "Courier New", monospace; background: var(--code-bg); border-radius: 3px; }
.pre--inline { padding: 0.1rem 0.2rem; font-size: 0.85rem; }
.pre--multiline { display: block; margin-top: 0.25rem; padding: 0.5rem; border: 2px solid #282b30; white-space: pre-wrap; }
.quote { margin: 0.1rem 0; padding-left: 0.6rem; border-left: 4px solid #4f545c; }
.mention { padding: 0 2px; border-radius: 3px; background: var(--mention-bg); font-weight: 500; }
.spoiler-text { background: #202225; color: transparent; border-radius: 3px; }
.spoiler-text:hover { color: inherit; }
.emoji { width: 1.375rem; height: 1.375rem; vertical-align: -0.4em; }
.unix-timestamp { padding: 0 2px; border-radius: 3px; background: rgba(255, 255, 255, 0.06); }
.chatlog__attachment { margin-top: 0.3rem; }
.chatlog__attachment-media { max-width: 45vw; max-height: 350px; border-radius: 3px; }
.chatlog__attachment-generic { display: inline-grid; grid-template-columns: auto 1fr; gap: 0 0.5rem; padding: 0.6rem; max-width: 520px; border: 1px solid #292b2f; border-radius: 3px; background: var(--background-secondary); }
.chatlog__attachment-icon { grid-row: span 2; width: 30px; height: 40px; }
.chatlog__attachment-generic-size { font-size: 0.8rem; color: var(--text-muted); }
.chatlog__attachment-audio { grid-column: span 2; margin-top: 0.4rem; }
.chatlog__embed { display: flex; margin-top: 0.3rem; max-width: 520px; }
.chatlog__embed-color-pill { flex-shrink: 0; width: 0.25rem; border-radius: 3px 0 0 3px; }
.chatlog__embed-content-container { display: flex; flex-direction: column; padding: 0.5rem 0.6rem; border-radius: 0 3px 3px 0; background: var(--background-secondary); }
.chatlog__embed-content { display: flex; }
.chatlog__embed-text { flex: 1; }
.chatlog__embed-author { display: flex; align-items: center; margin-bottom: 0.3rem; font-size: 0.875rem; font-weight: 600; }
.chatlog__embed-author-icon { width: 20px; height: 20px; margin-right: 0.5rem; border-radius: 50%; }
.chatlog__embed-title { margin-bottom: 0.2rem; font-weight: 600; }
.chatlog__embed-description { font-size: 0.875rem; }
.chatlog__embed-fields { display: flex; flex-wrap: wrap; gap: 0 0.5rem; }
.chatlog__embed-field { flex: 0 0 100%; margin-top: 0.3rem; font-size: 0.875rem; }
.chatlog__embed-field--inline { flex: 1; min-width: 150px; }
.chatlog__embed-field-name { font-weight: 600; }
.chatlog__embed-thumbnail { max-width: 80px; max-height: 80px; margin-left: 1rem; border-radius: 3px; }
.chatlog__embed-image { max-width: 500px; max-height: 400px; margin-top: 0.6rem; border-radius: 3px; }
.chatlog__embed-footer { display: flex; align-items: center; margin-top: 0.5rem; font-size: 0.75rem; color: var(--text-muted); }
.chatlog__embed-footer-icon { width: 20px; height: 20px; margin-right: 0.5rem; border-radius: 50%; }
.chatlog__components { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.3rem; }
.chatlog__component-button { display: inline-flex; align-items: center; gap: 0.3rem; padding: 0.15rem 1rem; min-height: 32px; border-radius: 3px; color: #fff; font-size: 0.875rem; }
.chatlog__component-button--disabled { opacity: 0.5; cursor: not-allowed; }
.chatlog__button-launch { width: 16px; height: 16px; }
.chatlog__component-emoji { width: 18px; height: 18px; }
.chatlog__component-dropdown { min-width: 300px; border: 1px solid #202225; border-radius: 3px; background: var(--background-secondary); }
.chatlog__component-dropdown-placeholder { padding: 0.5rem; color: var(--text-muted); }
.chatlog__component-dropdown-options { display: none; }
.chatlog__component-dropdown:hover .chatlog__component-dropdown-options { display: block; }
.chatlog__component-dropdown-option { display: flex; gap: 0.4rem; padding: 0.4rem 0.5rem; }
.chatlog__component-dropdown-option-description { color: var(--text-muted); font-size: 0.8rem; }
.chatlog__reactions { display: flex; flex-wrap: wrap; gap: 0.25rem; margin-top: 0.3rem; }
.chatlog__reaction { display: flex; align-items: center; gap: 0.35rem; padding: 0.125rem 0.375rem; border-radius: 8px; background: var(--background-secondary); }
.chatlog__reaction-count { font-size: 0.875rem; color: var(--text-muted); }
.meta { width: 280px; padding: 1rem; background: var(--background-secondary); }
.meta__header { margin-bottom: 0.75rem; font-weight: 600; text-transform: uppercase; font-size: 0.75rem; color: var(--text-muted); }
.meta__user { display: flex; gap: 0.6rem; margin-bottom: 0.9rem; }
.meta__avatar { width: 32px; height: 32px; border-radius: 50%; }
.meta__name-tag { font-weight: 600; }
.meta__display-name { color: var(--text-muted); }
.meta__field { font-size: 0.75rem; color: var(--text-muted); }
.postamble { padding: 1rem; font-size: 0.8rem; color: var(--text-muted); }
</style>
</head>
<body>
<div class="preamble">
{{GUILD_ICON}}<div>
<div class="preamble__entry">{{GUILD_NAME}}</div>
<div class="preamble__entry">#{{CHANNEL_NAME}}</div>
<div class="preamble__entry preamble__entry--small">{{CHANNEL_TOPIC}}</div>
</div>
</div>
<div class="layout">
<main class="chatlog">
{{MESSAGES}}</main>
{{ROSTER}}</div>
<div class="postamble">Exported {{MESSAGE_COUNT}} message(s) on {{EXPORTED_AT}} ({{TIMEZONE}}).</div>
</body>
</html>
"#,
);

/// Guild icon in the document header.
pub const GUILD_ICON: Template = Template::new(
    "guild_icon",
    r#"<img class="preamble__guild-icon" src="{{ICON_URL}}" alt="Guild icon">"#,
);
