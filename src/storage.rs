//! `localStorage`-backed preference store.

use page::theme::{PreferenceStore, StoreError};
use web_sys::{Storage, Window};

use crate::error::js_message;

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Bind to the window's `localStorage`. Private browsing modes may deny
    /// access; reads then return nothing and writes fail.
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", js_message(&err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Write(js_message(&err)))
    }
}
