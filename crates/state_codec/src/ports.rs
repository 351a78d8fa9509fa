//! Persistence and sharing collaborator ports
//!
//! The engine does not know where tokens live. A host supplies a
//! [`PersistencePort`] (durable storage, e.g. browser local storage or a
//! file) and a [`SharePort`] (something that can embed a token into a
//! retrievable reference, e.g. a URL parameter). Both are best-effort from
//! the engine's perspective: their failures are recoverable conditions that
//! must never corrupt or roll back in-memory state.

use std::collections::HashMap;

use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// Durable storage refused the write (e.g. quota exhaustion)
    #[error("storage unavailable: {message}")]
    StorageUnavailable { message: String },

    /// The sharing medium could not produce or resolve a reference
    #[error("share failure: {message}")]
    ShareFailure { message: String },
}

impl PortError {
    /// Creates a StorageUnavailable error
    pub fn storage(message: impl Into<String>) -> Self {
        PortError::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Creates a ShareFailure error
    pub fn share(message: impl Into<String>) -> Self {
        PortError::ShareFailure {
            message: message.into(),
        }
    }
}

/// Durable token storage supplied by the host
///
/// `save` is best-effort and may fail; `load` returns the most recently
/// saved token, if any.
pub trait PersistencePort {
    /// Stores a token, replacing any previous one
    fn save(&mut self, token: &str) -> Result<(), PortError>;

    /// Returns the stored token, or None if nothing was ever saved
    fn load(&self) -> Result<Option<String>, PortError>;
}

/// Token sharing supplied by the host
///
/// The port embeds a token into a reference it can later resolve; the
/// resolved token must come back unchanged.
pub trait SharePort {
    /// Embeds a token into a retrievable reference
    fn embed(&mut self, token: &str) -> Result<String, PortError>;

    /// Returns the token embedded in a reference, or None if unknown
    fn retrieve(&self, reference: &str) -> Result<Option<String>, PortError>;
}

/// In-memory persistence adapter
///
/// Holds at most one token. `failing` simulates quota exhaustion so tests
/// can exercise the engine's never-corrupt-on-save-failure guarantee.
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    token: Option<String>,
    failing: bool,
}

impl InMemoryPersistence {
    /// Creates an empty adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter whose saves always fail
    pub fn failing() -> Self {
        Self {
            token: None,
            failing: true,
        }
    }

    /// Toggles save failure
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }
}

impl PersistencePort for InMemoryPersistence {
    fn save(&mut self, token: &str) -> Result<(), PortError> {
        if self.failing {
            return Err(PortError::storage("quota exhausted"));
        }
        self.token = Some(token.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, PortError> {
        Ok(self.token.clone())
    }
}

/// In-memory share adapter
///
/// Hands out `share-N` references and returns embedded tokens verbatim.
#[derive(Debug, Default)]
pub struct InMemoryShare {
    published: HashMap<String, String>,
    next: u64,
}

impl InMemoryShare {
    /// Creates an empty adapter
    pub fn new() -> Self {
        Self::default()
    }
}

impl SharePort for InMemoryShare {
    fn embed(&mut self, token: &str) -> Result<String, PortError> {
        let reference = format!("share-{}", self.next);
        self.next += 1;
        self.published.insert(reference.clone(), token.to_string());
        Ok(reference)
    }

    fn retrieve(&self, reference: &str) -> Result<Option<String>, PortError> {
        Ok(self.published.get(reference).cloned())
    }
}
