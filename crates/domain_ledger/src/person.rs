//! Participant entity

use serde::{Deserialize, Serialize};

use core_kernel::PersonId;

/// A participant in the shared ledger
///
/// Names are stored trimmed and must be unique case-insensitively across
/// the store; both rules are enforced by [`LedgerStore`](crate::LedgerStore),
/// never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier, stable for the person's lifetime
    pub id: PersonId,
    /// Display name, non-empty after trimming
    pub name: String,
}

impl Person {
    /// Creates a person with a freshly generated identifier
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
        }
    }

    /// The name folded for case-insensitive uniqueness comparison
    pub(crate) fn name_key(&self) -> String {
        normalized_name_key(&self.name)
    }
}

/// Folds a name for duplicate detection: trimmed, lowercased.
pub(crate) fn normalized_name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
