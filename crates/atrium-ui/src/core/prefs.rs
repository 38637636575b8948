//! Key/value preference storage seam.
//!
//! # Design
//! - Browser builds back this with `localStorage`; host tests use [`MemoryPreferences`].
//! - Writes are best-effort: callers decide whether a failure matters.

use std::cell::RefCell;
use std::collections::HashMap;

/// Failure raised by a preference backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// The backing store is not reachable (private mode, disabled storage).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The store refused the write (quota, security policy).
    #[error("preference write rejected: {0}")]
    Rejected(String),
}

/// Minimal string store used for persisted UI preferences.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the backend cannot persist the value.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory preference store with an optional write failure switch.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryPreferences {
    /// Empty store that accepts writes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Store that rejects every write with [`PreferenceError::Unavailable`].
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            values: RefCell::new(HashMap::new()),
            fail_writes: true,
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.fail_writes {
            return Err(PreferenceError::Unavailable);
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryPreferences::new();
        assert_eq!(store.get("k"), None);
        assert_eq!(store.set("k", "v"), Ok(()));
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let store = MemoryPreferences::read_only();
        assert_eq!(store.set("k", "v"), Err(PreferenceError::Unavailable));
        assert_eq!(store.get("k"), None);
        assert_eq!(
            PreferenceError::Rejected("quota".into()).to_string(),
            "preference write rejected: quota"
        );
    }
}
