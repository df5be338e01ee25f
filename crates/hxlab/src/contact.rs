//! The click-to-edit contact record.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Jane Doe";
pub const DEFAULT_EMAIL: &str = "jane.doe@example.com";

/// Current known state of the single demo contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_EMAIL)
    }
}

/// Shared, lock-guarded contact record.
///
/// The record is only ever replaced whole under the write lock, so readers see
/// either the previous or the new field set. Locks are never held across an
/// `.await`.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    inner: Arc<RwLock<Contact>>,
}

impl ContactStore {
    pub fn new(contact: Contact) -> Self {
        Self {
            inner: Arc::new(RwLock::new(contact)),
        }
    }

    /// Returns a copy of the current record.
    pub fn snapshot(&self) -> Contact {
        // A panicking writer cannot leave a torn record behind, so a poisoned
        // lock still guards a consistent value.
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the record and returns the value that was written.
    pub fn replace(&self, contact: Contact) -> Contact {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = contact;
        guard.clone()
    }

    /// Restores the default record.
    pub fn reset(&self) -> Contact {
        self.replace(Contact::default())
    }
}
