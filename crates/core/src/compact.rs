//! History compaction via summarization.
//!
//! When a conversation tail outgrows its bound, everything but the most
//! recent entries is collapsed into one synthesized summary entry. The
//! summarization call goes through the same completion backend as normal
//! replies and degrades to a fixed placeholder on failure.

use crate::{Completion, Message};
use anyhow::Result;

/// Instruction for the summarization call.
const SUMMARIZE_PROMPT: &str = "Condense this dialogue into 1-2 sentences.";

/// Prefix of the synthesized summary entry.
pub const SUMMARY_PREFIX: &str = "Summary of prior dialogue: ";

/// Placeholder used when the summarization call fails.
pub const SUMMARY_FALLBACK: &str = "The user previously discussed various topics.";

/// Bound a history tail by collapsing everything but the `keep` most
/// recent entries into one summary entry.
///
/// A tail of `keep` entries or fewer is returned unchanged. Exactly the
/// `keep` most recent entries survive verbatim; everything older becomes
/// a single assistant entry, regardless of how many entries collapsed.
/// The summarization call never propagates its error.
pub async fn compact<C: Completion>(
    provider: &C,
    model: &str,
    tail: Vec<Message>,
    keep: usize,
) -> Vec<Message> {
    if tail.len() <= keep {
        return tail;
    }

    let (old, recent) = tail.split_at(tail.len() - keep);
    let summary = match summarize(provider, model, old).await {
        Ok(Some(summary)) => summary,
        Ok(None) => SUMMARY_FALLBACK.to_owned(),
        Err(e) => {
            tracing::warn!("history summarization failed: {e:#}");
            SUMMARY_FALLBACK.to_owned()
        }
    };

    let mut compacted = Vec::with_capacity(keep + 1);
    compacted.push(Message::assistant(format!("{SUMMARY_PREFIX}{summary}")));
    compacted.extend_from_slice(recent);
    compacted
}

async fn summarize<C: Completion>(
    provider: &C,
    model: &str,
    old: &[Message],
) -> Result<Option<String>> {
    let messages = vec![
        Message::system(SUMMARIZE_PROMPT),
        Message::user(render_dialogue(old)),
    ];
    provider.complete(model, &messages).await
}

/// Render entries as `[role] content` lines for the summarization call.
fn render_dialogue(entries: &[Message]) -> String {
    entries
        .iter()
        .map(|message| format!("[{}] {}", message.role.as_str(), message.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoopCompletion;

    struct Canned(&'static str);

    impl Completion for Canned {
        async fn complete(&self, _model: &str, _messages: &[Message]) -> Result<Option<String>> {
            Ok(Some(self.0.to_owned()))
        }
    }

    struct Failing;

    impl Completion for Failing {
        async fn complete(&self, _model: &str, _messages: &[Message]) -> Result<Option<String>> {
            anyhow::bail!("service down")
        }
    }

    struct Empty;

    impl Completion for Empty {
        async fn complete(&self, _model: &str, _messages: &[Message]) -> Result<Option<String>> {
            Ok(None)
        }
    }

    fn tail(len: usize) -> Vec<Message> {
        (0..len).map(|i| Message::user(format!("m{i}"))).collect()
    }

    #[tokio::test]
    async fn short_tail_is_identity() {
        // Never reaches the provider.
        let out = compact(&NoopCompletion, "m", tail(3), 10).await;
        assert_eq!(out, tail(3));
    }

    #[tokio::test]
    async fn exact_bound_is_identity() {
        let out = compact(&NoopCompletion, "m", tail(10), 10).await;
        assert_eq!(out, tail(10));
    }

    #[tokio::test]
    async fn collapses_to_keep_plus_one() {
        let original = tail(15);
        let out = compact(&Canned("they talked"), "m", original.clone(), 10).await;
        assert_eq!(out.len(), 11);
        assert_eq!(out[0].content, format!("{SUMMARY_PREFIX}they talked"));
        // The ten most recent entries survive verbatim.
        assert_eq!(&out[1..], &original[5..]);
    }

    #[tokio::test]
    async fn single_excess_entry_collapses() {
        let out = compact(&Canned("s"), "m", tail(11), 10).await;
        assert_eq!(out.len(), 11);
        assert_eq!(out[1].content, "m1");
    }

    #[tokio::test]
    async fn failure_falls_back() {
        let out = compact(&Failing, "m", tail(12), 10).await;
        assert_eq!(out.len(), 11);
        assert_eq!(out[0].content, format!("{SUMMARY_PREFIX}{SUMMARY_FALLBACK}"));
    }

    #[tokio::test]
    async fn empty_content_falls_back() {
        let out = compact(&Empty, "m", tail(12), 10).await;
        assert_eq!(out[0].content, format!("{SUMMARY_PREFIX}{SUMMARY_FALLBACK}"));
    }

    #[test]
    fn dialogue_rendering() {
        let entries = vec![Message::user("hi"), Message::assistant("hello")];
        assert_eq!(render_dialogue(&entries), "[user] hi\n[assistant] hello");
    }
}
