//! Persistent key-value storage behind the session store.
//!
//! In the browser this is `localStorage` ([`BrowserStorage`]). [`MemoryStorage`]
//! keeps values for the lifetime of the process and is what tests use; clones of
//! a `MemoryStorage` share the same map, which lets a test stand in for a page
//! reload by restoring a second session store from a clone.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::error::storage::StorageError;

/// Synchronous string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
    failing_key: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes to `key` fail as if the quota were exceeded.
    pub fn with_failing_key(key: &str) -> Self {
        Self {
            values: Rc::default(),
            failing_key: Some(key.to_string()),
        }
    }

    /// A handle onto the same values that writes without failing.
    pub fn healthy(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
            failing_key: None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    fn check_write(&self, key: &str) -> Result<(), StorageError> {
        match &self.failing_key {
            Some(failing) if failing == key => {
                Err(StorageError::Backend(format!("write to {} refused", key)))
            }
            _ => Ok(()),
        }
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.values.borrow_mut().remove(key);

        Ok(())
    }
}

/// The page's `localStorage`.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "web")]
impl BrowserStorage {
    fn area() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;

        window
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "web")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::area()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::area()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::area()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}
