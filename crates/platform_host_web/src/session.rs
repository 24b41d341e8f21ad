//! `sessionStorage`-backed session store implementation.
//!
//! Outside wasm32 the store falls back to the process-local in-memory session store, so
//! native builds and tests keep working session semantics.

use platform_host::SessionStore;

#[derive(Debug, Clone, Copy, Default)]
/// Browser session store backed by `window.sessionStorage`.
pub struct WebSessionStore;

#[cfg(target_arch = "wasm32")]
fn storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or_else(|| "sessionStorage unavailable".to_string())
}

impl SessionStore for WebSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            storage().ok()?.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            platform_host::session_store().get_item(key)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|e| format!("sessionStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            platform_host::session_store().set_item(key, value)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?
                .remove_item(key)
                .map_err(|e| format!("sessionStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            platform_host::session_store().remove_item(key)
        }
    }

    fn clear(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?
                .clear()
                .map_err(|e| format!("sessionStorage clear failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            platform_host::session_store().clear()
        }
    }

    fn keys(&self) -> Vec<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let Ok(storage) = storage() else {
                return Vec::new();
            };
            let len = storage.length().unwrap_or(0);
            (0..len)
                .filter_map(|index| storage.key(index).ok().flatten())
                .collect()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            platform_host::session_store().keys()
        }
    }
}
