use std::{fmt, rc::Rc};

use platform_host::{SessionStore, FILE_CONTENT_SLOT};

use crate::TableSyncError;

#[derive(Clone)]
/// Single-slot cache for the most recently loaded raw content.
///
/// The slot lives in a session store shared with other components. An unscoped cache uses
/// the `fileContent` key; a scoped cache uses `<scope>.fileContent`.
pub struct SessionCache {
    store: Rc<dyn SessionStore>,
    scope: Option<String>,
    key: String,
}

impl fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCache")
            .field("scope", &self.scope)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl SessionCache {
    /// Creates a cache over the shared `fileContent` slot.
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            store,
            scope: None,
            key: FILE_CONTENT_SLOT.to_string(),
        }
    }

    /// Creates a cache whose slot is namespaced under `scope`.
    pub fn scoped(store: Rc<dyn SessionStore>, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        let key = format!("{scope}.{FILE_CONTENT_SLOT}");
        Self {
            store,
            scope: Some(scope),
            key,
        }
    }

    /// Session store key of the slot.
    pub fn slot_key(&self) -> &str {
        &self.key
    }

    /// Stores `text`, replacing the previous content.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::Session`] when the store rejects the write.
    pub fn put(&self, text: &str) -> Result<(), TableSyncError> {
        self.store
            .set_item(&self.key, text)
            .map_err(TableSyncError::Session)
    }

    /// Returns the cached content, if any.
    pub fn get(&self) -> Option<String> {
        self.store.get_item(&self.key)
    }

    /// Clears the whole session store.
    ///
    /// Every other session entry is removed along with the slot, including entries owned by
    /// other components. Use [`SessionCache::forget`] or [`SessionCache::clear_scope`] to
    /// leave them alone.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::Session`] when the store cannot be cleared.
    pub fn clear(&self) -> Result<(), TableSyncError> {
        self.store.clear().map_err(TableSyncError::Session)
    }

    /// Removes only this cache's slot.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::Session`] when the store rejects the removal.
    pub fn forget(&self) -> Result<(), TableSyncError> {
        self.store
            .remove_item(&self.key)
            .map_err(TableSyncError::Session)
    }

    /// Removes every key under this cache's scope. An unscoped cache removes only its slot.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::Session`] when the store rejects a removal.
    pub fn clear_scope(&self) -> Result<(), TableSyncError> {
        let Some(scope) = &self.scope else {
            return self.forget();
        };
        let prefix = format!("{scope}.");
        for key in self
            .store
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(&prefix))
        {
            self.store
                .remove_item(&key)
                .map_err(TableSyncError::Session)?;
        }
        Ok(())
    }
}
