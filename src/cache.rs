//! The last message seen from each identity in each channel.

use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;

use crate::tokenize::strip_punctuation;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Key {
    identity: String,
    channel: String,
}

impl Key {
    fn new(identity: &str, channel: &str) -> Self {
        Self {
            identity: normalize_identity(identity),
            channel: channel.to_string(),
        }
    }
}

/// `normalize_identity` turns a nick as typed in a message (`alice,`) into a cache key (`alice`).
///
/// Case is preserved.
#[must_use]
pub fn normalize_identity(identity: &str) -> String {
    strip_punctuation(identity.trim())
}

/// `LastMessageCache` keeps the most recent message per (identity, channel).
///
/// The cache is internally synchronized and shared by reference between concurrent handlers.
/// With a capacity, recording a new key beyond it evicts the key that was recorded least
/// recently.
#[derive(Debug, Default)]
pub struct LastMessageCache {
    capacity: Option<usize>,
    entries: Mutex<IndexMap<Key, String>>,
}

impl LastMessageCache {
    /// `new` creates an unbounded cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `with_capacity` creates a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            entries: Mutex::new(IndexMap::with_capacity(capacity.min(1024))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<Key, String>> {
        // No critical section leaves the map half-updated, so poisoning is ignored.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// `record` stores `text` as the latest message from `identity` in `channel`.
    ///
    /// Without a capacity the entry is replaced in place. With one, the key is moved to the
    /// newest position, which shifts the entries behind it and costs up to `capacity` moves.
    ///
    /// # Example
    ///
    /// ```
    /// use chatspell::LastMessageCache;
    ///
    /// let cache = LastMessageCache::new();
    /// cache.record("alice", "#c", "hello wrold");
    /// cache.record("alice", "#c", "second");
    /// assert_eq!(cache.get("alice", "#c").as_deref(), Some("second"));
    /// assert_eq!(cache.get("alice", "#other"), None);
    /// ```
    pub fn record(&self, identity: &str, channel: &str, text: &str) {
        let key = Key::new(identity, channel);
        let mut entries = self.lock();

        let Some(capacity) = self.capacity else {
            entries.insert(key, text.to_string());
            return;
        };

        entries.shift_remove(&key);
        entries.insert(key, text.to_string());
        while entries.len() > capacity {
            if let Some((old, _)) = entries.shift_remove_index(0) {
                log::debug!("evicted last message of {} in {}", old.identity, old.channel);
            }
        }
    }

    /// `get` returns the latest message from `identity` in `channel`, if any.
    #[must_use]
    pub fn get(&self, identity: &str, channel: &str) -> Option<String> {
        self.lock().get(&Key::new(identity, channel)).cloned()
    }

    /// Number of (identity, channel) pairs stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
