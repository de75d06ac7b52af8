//! Static icon assets referenced by the templates.

/// CDN root hosting the transcript icon set.
pub const ICON_BASE: &str = "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master";

/// Shown beside pin notices.
pub const PINNED_MESSAGE: &str =
    "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master/discord-pinned.svg";
/// Shown beside thread-created notices.
pub const THREAD_CHANNEL: &str =
    "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master/discord-thread.svg";
/// Shown beside member-added notices.
pub const THREAD_ADD_RECIPIENT: &str =
    "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master/discord-thread-add.svg";
/// Shown beside member-removed notices.
pub const THREAD_REMOVE_RECIPIENT: &str =
    "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master/discord-thread-remove.svg";

/// Generic file icons, chosen by extension.
pub const FILE_ACROBAT: &str =
    "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master/discord-acrobat.svg";
/// Web source files.
pub const FILE_WEBCODE: &str =
    "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master/discord-webcode.svg";
/// Program source files.
pub const FILE_CODE: &str =
    "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master/discord-code.svg";
/// Office documents and text.
pub const FILE_DOCUMENT: &str =
    "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master/discord-document.svg";
/// Archives.
pub const FILE_ARCHIVE: &str =
    "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master/discord-archive.svg";
/// Anything else.
pub const FILE_UNKNOWN: &str =
    "https://cdn.jsdelivr.net/gh/mahtoid/DiscordUtils@master/discord-unknown.svg";

/// Reply banner marker for messages whose content is an attachment or embed.
pub const REFERENCE_ATTACHMENT: &str = r#"<svg class="chatlog__reference-icon" aria-hidden="true" width="20" height="20" viewBox="0 0 24 24"><path fill="currentColor" d="M6 2C4.9 2 4 2.9 4 4v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V8l-6-6H6zm7 7V3.5L18.5 9H13z"/></svg>"#;

/// Reply banner marker for messages produced by a command.
pub const INTERACTION_COMMAND: &str = r#"<svg class="chatlog__reference-icon" aria-hidden="true" width="20" height="20" viewBox="0 0 24 24"><path fill="currentColor" d="M5 3c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2H5zm3.5 14L7 15.5 10.5 12 7 8.5 8.5 7l5 5-5 5zm3.5 0v-2h5v2h-5z"/></svg>"#;

/// Glyph appended to link buttons.
pub const BUTTON_EXTERNAL_LINK: &str = r#"<svg class="chatlog__button-launch" aria-hidden="true" width="16" height="16" viewBox="0 0 24 24"><path fill="currentColor" d="M10 5V3H5.375C4.06519 3 3 4.06519 3 5.375V18.625C3 19.936 4.06519 21 5.375 21H18.625C19.936 21 21 19.936 21 18.625V14H19V19H5V5H10Z"/><path fill="currentColor" d="M21 2.99902H14V4.99902H17.586L9.29297 13.292L10.707 14.706L19 6.41302V9.99902H21V2.99902Z"/></svg>"#;

/// Pick a generic file icon for an attachment's extension.
#[must_use]
pub fn file_icon(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => FILE_ACROBAT,
        "html" | "htm" | "css" | "rss" | "xhtml" | "xml" => FILE_WEBCODE,
        "py" | "cs" | "java" | "vb" | "c" | "cpp" | "rs" | "js" | "ts" | "go" | "rb" | "sh"
        | "php" | "json" | "toml" | "yaml" | "yml" => FILE_CODE,
        "txt" | "doc" | "docx" | "rtf" | "xls" | "xlsx" | "ppt" | "pptx" | "odt" | "odp"
        | "ods" | "odg" | "odf" | "swx" | "sxi" | "sxc" | "sxd" | "stw" | "md" | "csv" => {
            FILE_DOCUMENT
        }
        "br" | "rpm" | "dcm" | "epub" | "zip" | "tar" | "rar" | "gz" | "bz2" | "7z" | "deb"
        | "arc" | "arj" | "cab" | "lzma" => FILE_ARCHIVE,
        _ => FILE_UNKNOWN,
    }
}
