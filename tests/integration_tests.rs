//! Integration tests for chat-transcript.
//!
//! These drive the full assembler against a scripted source and check the
//! block structure, reply banners, notices and thread anchoring.

use chat_transcript::model::{Attachment, Channel, Interaction, Message, MessageKind, MessageReference};
use chat_transcript::source::{ArchiveSource, ChannelArchive, FetchError};
use chat_transcript::template::html;
use chat_transcript::transcript::{render_transcript, DocumentContext, RenderOptions, Transcript};
use chat_transcript::TranscriptError;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

mod generators;

use generators::*;

const GROUP: &str = r#"<div class="chatlog__message-group">"#;

async fn render(messages: &[Message], source: &ScriptedSource) -> chat_transcript::Result<Transcript> {
    render_transcript(messages, &guild(), source, &RenderOptions::default()).await
}

fn groups(html: &str) -> usize {
    html.matches(GROUP).count()
}

fn assert_balanced(html: &str) {
    assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
}

/// Get the path to a fixture file.
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

mod grouping {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[tokio::test]
    async fn test_consecutive_messages_share_a_block() {
        let amy = user("10", "amy");
        let bob = user("20", "bob");
        let messages = vec![
            message("1", &amy, "hello", 0),
            message("2", &amy, "still me", 60),
            message("3", &bob, "hi amy", 120),
        ];

        let transcript = render(&messages, &ScriptedSource::new()).await.unwrap();

        assert_eq!(groups(&transcript.html), 2);
        assert_balanced(&transcript.html);
        assert_eq!(transcript.message_count, 3);

        let counts: Vec<(&str, u64)> = transcript
            .authors
            .iter()
            .map(|(id, a)| (id.as_str(), a.message_count))
            .collect();
        assert_eq!(counts, [("10", 2), ("20", 1)]);
    }

    #[tokio::test]
    async fn test_single_message_is_one_closed_block() {
        let amy = user("10", "amy");
        let transcript = render(&[message("1", &amy, "<b>hi</b>", 0)], &ScriptedSource::new())
            .await
            .unwrap();

        assert!(transcript.html.starts_with(GROUP));
        assert!(transcript.html.ends_with(html::END_MESSAGE.body));
        assert_eq!(groups(&transcript.html), 1);
        assert_balanced(&transcript.html);

        assert!(transcript.html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!transcript.html.contains("<b>"));
        for fragment in [
            "chatlog__reference",
            "data-interaction-id",
            "chatlog__embed",
            "chatlog__attachment",
            "chatlog__reactions",
            "chatlog__edited-timestamp",
        ] {
            assert!(!transcript.html.contains(fragment), "unexpected {fragment}");
        }
    }

    #[tokio::test]
    async fn test_edited_message_shows_marker() {
        let amy = user("10", "amy");
        let mut first = message("1", &amy, "typo fixed", 0);
        first.edited_at = Some(at(90));
        let second = message("2", &amy, "untouched", 30);

        let transcript = render(&[first, second], &ScriptedSource::new()).await.unwrap();

        assert_eq!(transcript.html.matches("(edited)</span>").count(), 1);
        assert!(transcript
            .html
            .contains(r#"<span class="chatlog__edited-timestamp" title="Friday,  1 March 2024 12:01">(edited)</span>"#));
    }

    #[tokio::test]
    async fn test_timestamps_use_configured_zone() {
        let amy = user("10", "amy");
        let messages = vec![message("1", &amy, "bonjour", 0), message("2", &amy, "encore", 60)];
        let options = RenderOptions::new("Europe/Paris").unwrap();

        let transcript = render_transcript(&messages, &guild(), &ScriptedSource::new(), &options)
            .await
            .unwrap();

        assert!(transcript.html.contains(">01-03-2024 13:00</span>"));
        assert!(transcript.html.contains(r#"title="Friday,  1 March 2024 13:00""#));
        assert!(transcript.html.contains(">13:01</div>"));
        assert!(!transcript.html.contains("12:00"));
    }

    #[tokio::test]
    async fn test_ids_are_escaped_in_attributes() {
        let odd = user("7\" onclick=\"x", "odd");
        let transcript = render(&[message("1\"><i>", &odd, "hi", 0)], &ScriptedSource::new())
            .await
            .unwrap();

        assert!(!transcript.html.contains("onclick=\"x"));
        assert!(!transcript.html.contains("<i>"));
        assert!(transcript.html.contains(r#"data-user-id="7&quot; onclick=&quot;x""#));
        assert!(transcript.html.contains(r#"data-message-id="1&quot;&gt;&lt;i&gt;""#));
    }

    #[rstest]
    #[case::at_the_limit(240, 1)]
    #[case::past_the_limit(241, 2)]
    #[tokio::test]
    async fn test_continuation_window(#[case] gap: i64, #[case] expected: usize) {
        let amy = user("10", "amy");
        let messages = vec![message("1", &amy, "one", 0), message("2", &amy, "two", gap)];

        let transcript = render(&messages, &ScriptedSource::new()).await.unwrap();
        assert_eq!(groups(&transcript.html), expected);
        assert_balanced(&transcript.html);
    }

    #[tokio::test]
    async fn test_webhook_and_interaction_messages_start_blocks() {
        let amy = user("10", "amy");
        let mut hook = message("2", &amy, "from a hook", 10);
        hook.webhook_id = Some("900".to_string());
        let mut command = message("3", &amy, "command output", 20);
        command.interaction = Some(Interaction {
            id: "901".to_string(),
            name: "roll".to_string(),
            user: user("20", "bob"),
        });

        let messages = vec![message("1", &amy, "plain", 0), hook, command];
        let transcript = render(&messages, &ScriptedSource::new()).await.unwrap();

        assert_eq!(groups(&transcript.html), 3);
        assert!(transcript.html.contains("/roll"));
        assert!(transcript.html.contains(html::FOLLOWUP_SYMBOL));
        assert_balanced(&transcript.html);
    }

    #[tokio::test]
    async fn test_member_colour_applies_to_names() {
        let amy = user("10", "amy");
        let bob = user("20", "bob");
        let source = ScriptedSource::new().with_member(member(&amy, 0xFF0000));
        let messages = vec![message("1", &amy, "red", 0), message("2", &bob, "white", 10)];

        let transcript = render(&messages, &source).await.unwrap();
        assert!(transcript.html.contains("color: #FF0000;"));
        assert!(transcript.html.contains("color: #FFFFFF;"));
    }
}

mod replies {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_reply_to_loaded_message_needs_no_fetch() {
        let amy = user("10", "amy");
        let source = ScriptedSource::new();
        let messages = vec![
            message("1", &amy, "question", 0),
            reply("2", &amy, "answer", 10, "1"),
        ];

        let transcript = render(&messages, &source).await.unwrap();

        assert_eq!(source.message_fetches(), 0);
        assert!(transcript.html.contains(r#"data-goto="1""#));
        assert!(transcript.html.contains("question"));
        // A shown reply banner always starts a block, even for the same author.
        assert_eq!(groups(&transcript.html), 2);
        assert_balanced(&transcript.html);
    }

    #[tokio::test]
    async fn test_reply_outside_transcript_is_fetched_once() {
        let amy = user("10", "amy");
        let carol = user("30", "carol");
        let source = ScriptedSource::new().with_message(message("50", &carol, "from earlier", -600));

        let transcript = render(&[reply("2", &amy, "answer", 0, "50")], &source)
            .await
            .unwrap();

        assert_eq!(source.message_fetches(), 1);
        assert!(transcript.html.contains("from earlier"));
        assert!(transcript.html.contains("carol"));
    }

    #[tokio::test]
    async fn test_deleted_reply_shows_placeholder() {
        let amy = user("10", "amy");
        let source = ScriptedSource::new();

        let transcript = render(&[reply("2", &amy, "answer", 0, "404")], &source)
            .await
            .unwrap();

        assert_eq!(source.message_fetches(), 1);
        assert!(transcript.html.contains("Original message was deleted."));
        assert_balanced(&transcript.html);
    }

    #[tokio::test]
    async fn test_failed_reply_fetch_drops_banner() {
        let amy = user("10", "amy");
        let source = ScriptedSource::new().with_message_error(
            CHANNEL_ID,
            "77",
            FetchError::Http {
                status: 503,
                message: "Service Unavailable".to_string(),
            },
        );
        let messages = vec![message("1", &amy, "before", 0), reply("2", &amy, "answer", 10, "77")];

        let transcript = render(&messages, &source).await.unwrap();

        assert!(!transcript.html.contains("chatlog__reference-link"));
        assert!(!transcript.html.contains("Original message was deleted."));
        // Without a banner the reply continues the open block.
        assert_eq!(groups(&transcript.html), 1);
        assert!(transcript.html.contains("answer"));
    }

    #[tokio::test]
    async fn test_reply_previews_for_media_and_commands() {
        let amy = user("10", "amy");
        let bot = user("40", "dicebot");

        let mut upload = message("60", &amy, "", -120);
        upload.attachments.push(Attachment {
            filename: "plan.pdf".to_string(),
            url: "https://cdn.example.com/plan.pdf".to_string(),
            size: 2048,
            ..Attachment::default()
        });
        let mut command = message("61", &bot, "", -60);
        command.interaction = Some(Interaction {
            id: "902".to_string(),
            name: "roll".to_string(),
            user: amy.clone(),
        });
        let source = ScriptedSource::new().with_message(upload).with_message(command);

        let messages = vec![
            reply("1", &amy, "see the file", 0, "60"),
            reply("2", &amy, "nice roll", 10, "61"),
        ];
        let transcript = render(&messages, &source).await.unwrap();

        assert!(transcript.html.contains("Click to see attachment"));
        assert!(transcript.html.contains("Click to see command"));
        assert_eq!(source.message_fetches(), 2);
    }

    #[tokio::test]
    async fn test_reply_preview_is_truncated() {
        let amy = user("10", "amy");
        let long = "word ".repeat(100);
        let source = ScriptedSource::new().with_message(message("50", &amy, &long, -60));
        let options = RenderOptions::default().with_preview_length(20);

        let transcript = render_transcript(&[reply("2", &amy, "ok", 0, "50")], &guild(), &source, &options)
            .await
            .unwrap();

        assert!(transcript.html.contains("..."));
        assert!(!transcript.html.contains(long.trim()));
    }
}

mod notices {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_pin_notice_is_its_own_block() {
        let amy = user("10", "amy");
        let mut pin = notice("2", &amy, MessageKind::PinNotice, 10);
        pin.reference = Some(MessageReference {
            message_id: "1".to_string(),
            channel_id: None,
            guild_id: None,
        });
        let messages = vec![message("1", &amy, "pin me", 0), pin, message("3", &amy, "after", 20)];

        let transcript = render(&messages, &ScriptedSource::new()).await.unwrap();

        assert_eq!(groups(&transcript.html), 3);
        assert!(transcript.html.contains(" pinned "));
        assert!(transcript.html.contains(r#"data-goto="1""#));
        assert_balanced(&transcript.html);
        assert_eq!(transcript.authors["10"].message_count, 3);
    }

    #[tokio::test]
    async fn test_thread_notice_escapes_name() {
        let amy = user("10", "amy");
        let mut created = notice("1", &amy, MessageKind::ThreadCreated, 0);
        created.content = "Plans <b>".to_string();

        let transcript = render(&[created], &ScriptedSource::new()).await.unwrap();

        assert!(transcript.html.contains("started a thread"));
        assert!(transcript.html.contains("Plans &lt;b&gt;"));
        assert_balanced(&transcript.html);
    }

    #[tokio::test]
    async fn test_member_added_uses_recipient_colour() {
        let amy = user("10", "amy");
        let carol = user("30", "carol");
        let mut added = notice("1", &amy, MessageKind::MemberAdded, 0);
        added.mention_ids = vec![carol.id.clone()];
        let source = ScriptedSource::new().with_member(member(&carol, 0x00FF00));

        let transcript = render(&[added], &source).await.unwrap();

        assert!(transcript.html.contains(" added "));
        assert!(transcript.html.contains("color: #00FF00;"));
        assert!(transcript.html.contains("carol"));
    }

    #[tokio::test]
    async fn test_member_removed_without_member_fails() {
        let amy = user("10", "amy");
        let mut removed = notice("1", &amy, MessageKind::MemberRemoved, 0);
        removed.mention_ids = vec!["30".to_string()];

        let err = render(&[removed], &ScriptedSource::new()).await.unwrap_err();
        assert!(matches!(
            err,
            TranscriptError::MemberNotFound { ref user_id, ref message_id } if user_id == "30" && message_id == "1"
        ));
    }

    #[tokio::test]
    async fn test_member_notice_without_mention_fails() {
        let amy = user("10", "amy");
        let added = notice("1", &amy, MessageKind::MemberAdded, 0);

        let err = render(&[added], &ScriptedSource::new()).await.unwrap_err();
        assert!(matches!(err, TranscriptError::MissingMention { .. }));
    }
}

mod threads {
    use super::*;
    use pretty_assertions::assert_eq;

    fn thread_reply(id: &str, content: &str, secs: i64) -> Message {
        let mut msg = Message::new(id, "300", user("20", "bob"), content, at(secs));
        msg.reference = Some(MessageReference {
            message_id: "150".to_string(),
            channel_id: Some(CHANNEL_ID.to_string()),
            guild_id: None,
        });
        msg
    }

    fn thread_source() -> ScriptedSource {
        ScriptedSource::new()
            .with_channel(thread("300", CHANNEL_ID))
            .with_channel(Channel::text(CHANNEL_ID, "general"))
    }

    #[tokio::test]
    async fn test_thread_transcript_starts_at_parent_message() {
        let amy = user("10", "amy");
        let source = thread_source().with_message(message("150", &amy, "Let's discuss", -60));
        let second = Message::new("201", "300", user("20", "bob"), "second", at(20));
        let messages = vec![thread_reply("200", "first reply", 0), second];

        let transcript = render(&messages, &source).await.unwrap();

        assert!(transcript.html.contains("Let's discuss"));
        assert!(!transcript.html.contains("first reply"));
        assert!(!transcript.html.contains("chatlog__reference-link"));
        assert!(transcript.html.contains("second"));
        assert_eq!(source.message_fetches(), 1);

        let ids: Vec<&str> = transcript.authors.keys().map(String::as_str).collect();
        assert_eq!(ids, ["10", "20"]);
        assert_balanced(&transcript.html);
    }

    #[tokio::test]
    async fn test_reply_in_plain_channel_is_not_anchored() {
        let amy = user("10", "amy");
        let source = ScriptedSource::new().with_channel(Channel::text(CHANNEL_ID, "general"));

        let transcript = render(&[reply("2", &amy, "answer", 0, "404")], &source)
            .await
            .unwrap();

        assert_eq!(source.channel_fetches(), 1);
        assert!(transcript.html.contains("answer"));
        assert!(transcript.html.contains("Original message was deleted."));
    }

    #[tokio::test]
    async fn test_unreadable_own_channel_is_not_anchored() {
        let source = ScriptedSource::new();

        let transcript = render(&[thread_reply("200", "first reply", 0)], &source)
            .await
            .unwrap();

        assert_eq!(source.channel_fetches(), 1);
        assert!(transcript.html.contains("first reply"));
        assert!(transcript.html.contains("Original message was deleted."));
    }

    #[tokio::test]
    async fn test_unknown_parent_channel_aborts() {
        let source = ScriptedSource::new().with_channel(thread("300", CHANNEL_ID));
        let err = render(&[thread_reply("200", "first reply", 0)], &source)
            .await
            .unwrap_err();
        assert!(matches!(err, TranscriptError::ChannelFetch { ref channel_id, .. } if channel_id == CHANNEL_ID));
    }

    #[tokio::test]
    async fn test_missing_parent_message_aborts() {
        let err = render(&[thread_reply("200", "first reply", 0)], &thread_source())
            .await
            .unwrap_err();
        assert!(matches!(err, TranscriptError::MessageFetch { ref message_id, .. } if message_id == "150"));
    }
}

mod styles {
    use super::*;
    use pretty_assertions::assert_eq;
    use chat_transcript::model::RoleIcon;
    use chat_transcript::resolve::{resolve_color, resolve_icon, resolve_style};
    use chat_transcript::template::Templater;
    use chat_transcript::time::TimeFormatter;

    #[tokio::test]
    async fn test_resolvers_share_member_lookup_rules() {
        let amy = user("10", "amy");
        let mut iconed = member(&amy, 0x3498DB);
        iconed.roles[0].icon = Some(RoleIcon::Emoji { id: "42".to_string() });
        let source = ScriptedSource::new().with_member(iconed);
        let guild = guild();
        let templater = Templater::for_guild(&guild, TimeFormatter::new(chrono_tz::UTC, true), 100);

        assert_eq!(resolve_color(&source, &guild, "10").await, "#3498DB");
        assert_eq!(
            resolve_icon(&source, &guild, "10", &templater).await,
            "<img class='chatlog__role-icon' src='https://cdn.discordapp.com/emojis/42.png' alt='Role Icon'>"
        );

        assert_eq!(resolve_color(&source, &guild, "20").await, "#FFFFFF");
        assert_eq!(resolve_icon(&source, &guild, "20", &templater).await, "");

        let style = resolve_style(&source, &guild, "10", &templater).await;
        assert_eq!(style.css(), "color: #3498DB;");
        assert!(style.icon.contains("emojis/42.png"));
    }
}

mod archive {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_render_fixture_archive() {
        let archive = ChannelArchive::load(fixture_path("general.json")).unwrap();
        let source = ArchiveSource::new(&archive);

        let transcript = render_transcript(
            &archive.messages,
            &archive.guild,
            &source,
            &RenderOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(transcript.message_count, archive.messages.len());
        assert!(transcript.html.contains("Welcome everyone"));
        assert!(transcript.html.contains("Original message was deleted."));
        assert!(transcript.html.contains("Kick-off notes"));
        assert_balanced(&transcript.html);

        let page = transcript.to_document(&DocumentContext {
            guild: &archive.guild,
            channel: &archive.channel,
            title_prefix: "Transcript",
            include_roster: true,
            exported_at: at(0),
            options: RenderOptions::default(),
        });
        assert!(page.contains("<title>Transcript - #general</title>"));
        assert!(page.contains("<aside class=\"meta\">"));
        assert!(!page.contains("{{"));
    }
}
