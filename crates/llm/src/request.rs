//! Chat completions request body.

use ocore::Message;
use serde::Serialize;

/// OpenAI-compatible chat completions request body.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,

    /// The ordered conversation messages.
    pub messages: Vec<Message>,
}

impl Request {
    /// Build a request for the given model and messages.
    pub fn new(model: impl Into<String>, messages: &[Message]) -> Self {
        Self {
            model: model.into(),
            messages: messages.to_vec(),
        }
    }
}
