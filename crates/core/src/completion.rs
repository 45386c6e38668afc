//! Completion backend abstraction.

use crate::Message;
use anyhow::Result;

/// A hosted chat-completion backend.
///
/// Implementations take an ordered message list and a model identifier
/// and return the generated reply text. `Ok(None)` means the service
/// answered without usable content.
pub trait Completion: Send + Sync {
    /// Request a completion for the given messages.
    fn complete(
        &self,
        model: &str,
        messages: &[Message],
    ) -> impl Future<Output = Result<Option<String>>> + Send;
}

/// A completion backend that panics on any call.
///
/// # Panics
///
/// `complete` panics if called. Only use this backend in tests that
/// never reach the completion service.
#[derive(Clone, Copy)]
pub struct NoopCompletion;

impl Completion for NoopCompletion {
    async fn complete(&self, _model: &str, _messages: &[Message]) -> Result<Option<String>> {
        panic!("NoopCompletion::complete called — not intended for real completion calls");
    }
}
