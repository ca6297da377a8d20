use std::cell::RefCell;
use std::collections::HashMap;

use crate::shared::errors::{AppError, Result};

/// Key/value persistence for user preferences.
pub trait ThemeStorage {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`. Reports `StorageUnavailable` off the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or(AppError::StorageUnavailable)?
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or(AppError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeStorage for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeStorage for BrowserStorage {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Err(AppError::StorageUnavailable)
    }

    fn save(&self, _key: &str, _value: &str) -> Result<()> {
        Err(AppError::StorageUnavailable)
    }
}

/// Where the theme preference lives on this target.
#[cfg(target_arch = "wasm32")]
pub type PreferenceStorage = BrowserStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PreferenceStorage = MemoryStorage;

/// In-memory storage for tests and native targets.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
