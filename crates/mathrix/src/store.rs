//! Key/value persistence and the locally cached session.
//!
//! The browser build backs [`KeyValueStore`] with `localStorage`; [`MemoryStore`]
//! stands in for it natively.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::SESSION_KEY;
use crate::data::Participant;
use crate::errors::StoreError;

/// Synchronous string storage, single device, no cross-tab coordination.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// In-memory [`KeyValueStore`]. Clones share the same entries, so a clone
/// behaves like the same storage seen after a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// The signed-in participant, cached as JSON under [`SESSION_KEY`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the cached participant. A record that no longer parses is dropped.
    pub fn load(&self) -> Option<Participant> {
        let raw = self.store.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(participant) => Some(participant),
            Err(err) => {
                tracing::warn!("Discarding unreadable session record: {err}");
                self.store.remove(SESSION_KEY);
                None
            }
        }
    }

    pub fn save(&self, participant: &Participant) -> Result<(), StoreError> {
        let raw = serde_json::to_string(participant)?;
        self.store.set(SESSION_KEY, &raw)
    }

    pub fn clear(&self) {
        self.store.remove(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant() -> Participant {
        serde_json::from_str(
            r#"{"participant_id":"p1","name":"Ada","email":"ada@x.com","team_id":null}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_session_round_trips_through_store() {
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone());
        session.save(&participant()).unwrap();

        let reloaded = SessionStore::new(store.clone()).load();
        assert_eq!(reloaded, Some(participant()));
        assert!(store.get(SESSION_KEY).is_some());
    }

    #[test]
    fn test_clear_removes_record() {
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone());
        session.save(&participant()).unwrap();
        session.clear();
        assert!(session.load().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_record_is_dropped() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json").unwrap();
        let session = SessionStore::new(store.clone());
        assert!(session.load().is_none());
        assert!(store.get(SESSION_KEY).is_none());
    }
}
