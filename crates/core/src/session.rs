//! Session store — per-user profiles and conversation histories.
//!
//! Profiles and histories are independent maps keyed by the platform
//! user id; clearing a history leaves the profile in place. The store is
//! constructed at startup and injected where needed, with thread-safe
//! interior mutability. Locks are never held across await points.

use crate::{Message, ReplyMode, UserProfile};
use std::{collections::BTreeMap, sync::Mutex};

/// In-memory session store.
///
/// State lives only in process memory and is lost on restart.
pub struct SessionStore {
    system_prompt: String,
    profiles: Mutex<BTreeMap<i64, UserProfile>>,
    histories: Mutex<BTreeMap<i64, Vec<Message>>>,
}

impl SessionStore {
    /// Create an empty store; each history is seeded with `system_prompt`.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            profiles: Mutex::new(BTreeMap::new()),
            histories: Mutex::new(BTreeMap::new()),
        }
    }

    /// Get the user's profile, creating one with defaults on first contact.
    ///
    /// The first supplied display name sticks; later values are ignored.
    pub fn get_or_create_profile(&self, user: i64, name: Option<&str>) -> UserProfile {
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles
            .entry(user)
            .or_insert_with(|| UserProfile::new(user, None));
        if profile.name.is_none() {
            profile.name = name.map(Into::into);
        }
        profile.clone()
    }

    /// Switch the user's reply mode, creating the profile if absent.
    ///
    /// Selecting the already-active mode reapplies the same value.
    pub fn set_mode(&self, user: i64, mode: ReplyMode) -> UserProfile {
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles
            .entry(user)
            .or_insert_with(|| UserProfile::new(user, None));
        profile.mode = mode;
        profile.clone()
    }

    /// Append an entry to the user's history, seeding it on first use.
    ///
    /// No upper bound is enforced here; bounding is the compactor's job.
    pub fn append_history(&self, user: i64, message: Message) {
        let mut histories = self.histories.lock().unwrap();
        histories
            .entry(user)
            .or_insert_with(|| vec![Message::system(self.system_prompt.as_str())])
            .push(message);
    }

    /// The user's history without its leading system directive.
    pub fn tail(&self, user: i64) -> Vec<Message> {
        let histories = self.histories.lock().unwrap();
        histories
            .get(&user)
            .and_then(|history| history.get(1..))
            .map(<[Message]>::to_vec)
            .unwrap_or_default()
    }

    /// Replace the user's tail, keeping the leading system directive.
    pub fn replace_tail(&self, user: i64, tail: Vec<Message>) {
        let mut histories = self.histories.lock().unwrap();
        let history = histories
            .entry(user)
            .or_insert_with(|| vec![Message::system(self.system_prompt.as_str())]);
        history.truncate(1);
        history.extend(tail);
    }

    /// Drop the user's history entirely; a no-op for unknown users.
    pub fn clear_history(&self, user: i64) {
        self.histories.lock().unwrap().remove(&user);
    }

    /// Full history snapshot, if the user has one.
    pub fn history(&self, user: i64) -> Option<Vec<Message>> {
        self.histories.lock().unwrap().get(&user).cloned()
    }
}
