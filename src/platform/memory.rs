//! In-memory storage backend

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::KeyValueStorage;
use crate::error::StorageError;

#[derive(Debug, Default)]
struct Inner {
    items: HashMap<String, String>,
    /// Reject writes as a full or disabled LocalStorage would
    fail_writes: bool,
    fail_reads: bool,
    fail_removes: bool,
}

/// Key-value storage held in memory.
///
/// Clones share the same map, so a caller can keep a handle and inspect what
/// the store wrote after handing a clone to the persistence adapter.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. a record written by an older version
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.inner
            .borrow_mut()
            .items
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `set_item` fail (quota exceeded simulation)
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Make every subsequent `get_item` fail (blocked storage access)
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    pub fn set_fail_removes(&self, fail: bool) {
        self.inner.borrow_mut().fail_removes = fail;
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.borrow().items.contains_key(key)
    }

    /// Raw stored string for a key
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().items.get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.inner.borrow().fail_reads {
            return Err(StorageError::Read {
                key: key.to_string(),
                reason: "access denied".to_string(),
            });
        }
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        inner.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_removes {
            return Err(StorageError::Remove {
                key: key.to_string(),
                reason: "access denied".to_string(),
            });
        }
        inner.items.remove(key);
        Ok(())
    }
}
