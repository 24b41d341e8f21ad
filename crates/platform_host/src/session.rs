//! Session-scoped storage contracts and the in-memory store.
//!
//! Session storage survives page navigation within one webview session and is discarded with
//! it. Values are plain strings, matching the browser `sessionStorage` model.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

/// Reserved session slot holding the most recently loaded raw text content.
pub const FILE_CONTENT_SLOT: &str = "fileContent";

/// Host service for session-scoped string key/value storage.
pub trait SessionStore {
    /// Reads the value stored under `key`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;

    /// Removes `key`. Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), String>;

    /// Removes every key in the store, including keys owned by other components.
    fn clear(&self) -> Result<(), String>;

    /// Lists stored keys.
    fn keys(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory session store. Clones share the same underlying map.
pub struct MemorySessionStore {
    inner: Rc<RefCell<BTreeMap<String, String>>>,
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        self.inner.borrow_mut().clear();
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.inner.borrow().keys().cloned().collect()
    }
}

thread_local! {
    static GLOBAL_SESSION_STORE: MemorySessionStore = MemorySessionStore::default();
}

/// Returns the process-local session store instance.
pub fn session_store() -> MemorySessionStore {
    GLOBAL_SESSION_STORE.with(|store| store.clone())
}
