//! Prompt assembly for completion calls.

use crate::{Message, UserProfile};

/// The fixed persona directive leading every completion call.
pub const PERSONA: &str = include_str!("../prompts/persona.md");

/// Trailing formatting hint appended after the history tail.
const FORMAT_HINT: &str = "Use lists or numbered steps when they help.";

/// Assemble the ordered message list for a completion call.
///
/// Leading system directive, optional user-name directive, mode
/// description, the tail in order, then the formatting hint. Earlier
/// system directives carry higher-priority context for the completion
/// service; nothing is reordered or deduplicated.
pub fn assemble(system: &str, profile: &UserProfile, tail: &[Message]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(tail.len() + 4);
    messages.push(Message::system(system));
    if let Some(name) = &profile.name {
        messages.push(Message::system(format!("The user's name is {name}.")));
    }
    messages.push(Message::system(format!(
        "Current reply mode: {}",
        profile.mode.describe()
    )));
    messages.extend_from_slice(tail);
    messages.push(Message::system(FORMAT_HINT));
    messages
}
