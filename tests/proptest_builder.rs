//! Property-based tests for block grouping and author aggregates.
//!
//! Uses proptest to generate message sequences and checks the grouping
//! rules and roster counts hold for all of them.

use chat_transcript::builder::{starts_new_block, BlockInputs, PreviousMessage, CONTINUATION_WINDOW_SECS};
use chat_transcript::model::{Message, MessageKind};
use chat_transcript::template::{html, Substitution, Templater};
use chat_transcript::time::TimeFormatter;
use chat_transcript::transcript::{render_transcript, RenderOptions};
use proptest::prelude::*;

mod generators;

use generators::*;

/// (author index, seconds since the previous message) pairs.
fn sequence() -> impl Strategy<Value = Vec<(usize, i64)>> {
    prop::collection::vec((0usize..3, 0i64..600), 1..40)
}

fn build(steps: &[(usize, i64)]) -> Vec<Message> {
    let authors = [user("10", "amy"), user("20", "bob"), user("30", "carol")];
    let mut elapsed = 0;
    steps
        .iter()
        .enumerate()
        .map(|(i, &(author, gap))| {
            elapsed += gap;
            message(&i.to_string(), &authors[author], &format!("line {i}"), elapsed)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every message is counted against exactly one author.
    #[test]
    fn aggregate_counts_sum_to_message_count(steps in sequence()) {
        let messages = build(&steps);
        let source = ScriptedSource::new();
        let transcript = tokio_test::block_on(
            render_transcript(&messages, &guild(), &source, &RenderOptions::default())
        ).unwrap();

        let total: u64 = transcript.authors.values().map(|a| a.message_count).sum();
        prop_assert_eq!(total, messages.len() as u64);
    }

    /// Blocks open exactly where the author changes or the gap is too long,
    /// and every block is closed.
    #[test]
    fn blocks_follow_author_and_gap(steps in sequence()) {
        let messages = build(&steps);
        let source = ScriptedSource::new();
        let transcript = tokio_test::block_on(
            render_transcript(&messages, &guild(), &source, &RenderOptions::default())
        ).unwrap();

        let expected = 1 + steps
            .windows(2)
            .filter(|w| w[0].0 != w[1].0 || w[1].1 > CONTINUATION_WINDOW_SECS)
            .count();
        let opened = transcript.html.matches(r#"<div class="chatlog__message-group">"#).count();
        prop_assert_eq!(opened, expected);
        prop_assert_eq!(
            transcript.html.matches("<div").count(),
            transcript.html.matches("</div>").count()
        );
        prop_assert!(transcript.html.ends_with(html::END_MESSAGE.body));
    }

    /// Anything after a notice starts a new block.
    #[test]
    fn notices_always_break_blocks(gap in 0i64..600, kind_index in 0usize..4) {
        let kinds = [
            MessageKind::PinNotice,
            MessageKind::ThreadCreated,
            MessageKind::MemberAdded,
            MessageKind::MemberRemoved,
        ];
        let previous = PreviousMessage {
            author_id: "10".to_string(),
            kind: kinds[kind_index],
            created_at: at(0),
        };
        let current = message("2", &user("10", "amy"), "after", gap);
        prop_assert!(starts_new_block(Some(&previous), &BlockInputs::new(&current, false)));
    }

    /// Filling never panics and leaves unknown placeholders alone.
    #[test]
    fn fill_handles_arbitrary_values(value in ".*") {
        let guild = guild();
        let templater = Templater::for_guild(&guild, TimeFormatter::new(chrono_tz::UTC, true), 100);
        let out = templater.fill(&html::EDITED, &[Substitution::none("NOT_A_KEY", value)]);
        prop_assert!(out.contains("{{EDIT_TIMESTAMP}}"));
    }
}
