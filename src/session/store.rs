//! The session-store capability.
//!
//! A store maps an external session key to one `SessionState` value with
//! plain read / overwrite / delete semantics. The only consistency guarantee
//! is last-write-wins: two callers racing a read-modify-write cycle on the
//! same key can lose an update. Serializing operations per session key is
//! the caller's concern, not the engine's.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::state::SessionState;

/// Failure inside a session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored blob could not be encoded or decoded.
    #[error("session state codec failure: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Key-value store holding one session state per session key.
pub trait SessionStore {
    /// Fetch the state for a key, or `None` if the session is unknown.
    fn get(&self, key: &str) -> Result<Option<SessionState>, StoreError>;

    /// Overwrite the state for a key. Last write wins.
    fn put(&mut self, key: &str, state: &SessionState) -> Result<(), StoreError>;

    /// Drop the state for a key. Unknown keys are a no-op.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory reference store.
///
/// Holds each state as an opaque JSON blob, exactly the shape an external
/// KV store would see, so every get/put exercises the full serde round trip.
/// The codec must be self-describing since card attributes deserialize
/// untagged.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blobs: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<SessionState>, StoreError> {
        match self.blobs.get(key) {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    fn put(&mut self, key: &str, state: &SessionState) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(state)?;
        self.blobs.insert(key.to_string(), bytes);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.blobs.remove(key);
        Ok(())
    }
}
