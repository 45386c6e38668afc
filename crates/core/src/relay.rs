//! Message relay — the per-message control flow.
//!
//! [`Relay`] wires the session store, rate limiter, compactor, and the
//! completion backend: rate-limit check, profile bootstrap, mode
//! short-circuit, history append, conditional compaction, prompt
//! assembly, completion call, reply append.

use crate::{
    Completion, Message, RateLimiter, ReplyMode, SessionStore, UserProfile, compact, prompt,
};
use compact_str::CompactString;
use std::time::Duration;

/// Fallback reply when the completion service errors.
pub const UNAVAILABLE_REPLY: &str = "I'm currently unavailable, try again later.";

/// Fallback reply when the service answers without usable content.
pub const EMPTY_REPLY: &str = "I could not obtain a reply, please try again.";

/// Relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Model identifier passed to the completion service.
    pub model: CompactString,

    /// Leading system directive for every conversation.
    pub system_prompt: String,

    /// Number of most-recent tail entries kept verbatim by compaction.
    pub keep_recent: usize,

    /// Minimum interval between accepted messages per user.
    pub min_interval: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".into(),
            system_prompt: prompt::PERSONA.to_owned(),
            keep_recent: 10,
            min_interval: Duration::from_secs(1),
        }
    }
}

/// What a handled message produced, for the transport to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The message arrived too soon after the previous one and was dropped.
    RateLimited,
    /// The message was consumed as a mode selection.
    ModeChanged(ReplyMode),
    /// The completion reply (or a fixed fallback) to deliver.
    Reply(String),
}

/// The conversational relay.
///
/// Holds the injected completion backend together with the session store
/// and rate limiter; one instance serves all users.
pub struct Relay<C> {
    config: RelayConfig,
    provider: C,
    store: SessionStore,
    limiter: RateLimiter,
}

impl<C: Completion> Relay<C> {
    /// Create a relay over the given completion backend.
    pub fn new(config: RelayConfig, provider: C) -> Self {
        let store = SessionStore::new(config.system_prompt.as_str());
        let limiter = RateLimiter::new(config.min_interval);
        Self {
            config,
            provider,
            store,
            limiter,
        }
    }

    /// The session store, for transport-level commands.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handle one inbound text message from a user.
    ///
    /// Two in-flight calls for the same user can interleave around the
    /// completion await: both read the pre-call history and both append
    /// afterwards. Per-user ordering is not guaranteed there.
    pub async fn handle(&self, user: i64, name: Option<&str>, text: &str) -> Outcome {
        if !self.limiter.check(user) {
            tracing::debug!("rate limited user {user}");
            return Outcome::RateLimited;
        }

        let profile = self.store.get_or_create_profile(user, name);

        // A bare mode code is consumed: no history entry, no completion call.
        if let Some(mode) = ReplyMode::from_code(text) {
            self.store.set_mode(user, mode);
            return Outcome::ModeChanged(mode);
        }

        self.store.append_history(user, Message::user(text));
        let mut tail = self.store.tail(user);

        if tail.len() > self.config.keep_recent {
            tail = compact(
                &self.provider,
                &self.config.model,
                tail,
                self.config.keep_recent,
            )
            .await;
            self.store.replace_tail(user, tail.clone());
        }

        let messages = prompt::assemble(&self.config.system_prompt, &profile, &tail);
        let reply = match self.provider.complete(&self.config.model, &messages).await {
            Ok(Some(reply)) => reply,
            Ok(None) => EMPTY_REPLY.to_owned(),
            Err(e) => {
                tracing::error!("completion failed for user {user}: {e:#}");
                UNAVAILABLE_REPLY.to_owned()
            }
        };

        self.store.append_history(user, Message::assistant(reply.clone()));
        Outcome::Reply(reply)
    }

    /// Switch the user's reply mode (interactive-menu path).
    pub fn select_mode(&self, user: i64, mode: ReplyMode) -> UserProfile {
        self.store.set_mode(user, mode)
    }

    /// Drop the user's conversation history; the profile persists.
    pub fn clear(&self, user: i64) {
        self.store.clear_history(user);
    }
}
