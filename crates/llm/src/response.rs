//! Chat completions response body.

use serde::Deserialize;

/// Chat completions response.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// The completion choices (usually one).
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChoiceMessage,
}

/// The generated message of a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// The generated text; absent for refusals and tool calls.
    #[serde(default)]
    pub content: Option<String>,
}

impl Response {
    /// Extract the first choice's text, if any usable content came back.
    pub fn reply(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
    }
}
