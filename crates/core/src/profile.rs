//! Per-user profile.

use crate::ReplyMode;
use compact_str::CompactString;

/// A user's profile: display name and active reply mode.
///
/// Created on first contact and never deleted; clearing the
/// conversation history leaves the profile in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// The platform user identifier.
    pub id: i64,

    /// Display name, if the transport supplied one.
    pub name: Option<CompactString>,

    /// Active reply mode.
    pub mode: ReplyMode,
}

impl UserProfile {
    /// Create a profile with the default mode.
    pub fn new(id: i64, name: Option<&str>) -> Self {
        Self {
            id,
            name: name.map(Into::into),
            mode: ReplyMode::default(),
        }
    }
}
