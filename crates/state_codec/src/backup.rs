//! Fire-and-forget persistence and sharing glue
//!
//! These helpers wire a [`LedgerStore`] snapshot through the codec to the
//! host's ports. The host owns the scheduling (startup restore, periodic
//! backup, explicit share); the helpers own the degradation rules: a failed
//! save or share is logged and reported as a boolean/None, never an error,
//! and an absent or corrupt token restores to an empty store.

use tracing::warn;

use domain_ledger::LedgerStore;

use crate::codec;
use crate::ports::{PersistencePort, SharePort};

/// Saves the store's current snapshot to durable storage.
///
/// Returns false if the save failed; in-memory state is unaffected either
/// way.
pub fn persist(store: &LedgerStore, port: &mut dyn PersistencePort) -> bool {
    let token = codec::serialize(&store.snapshot());
    match port.save(&token) {
        Ok(()) => true,
        Err(error) => {
            warn!(%error, "ledger backup failed, in-memory state unaffected");
            false
        }
    }
}

/// Rebuilds a store from durable storage.
///
/// An absent token, a load failure, or a corrupt token all yield an empty
/// store.
pub fn restore(port: &dyn PersistencePort) -> LedgerStore {
    match port.load() {
        Ok(Some(token)) => LedgerStore::from_state(codec::deserialize(&token)),
        Ok(None) => LedgerStore::new(),
        Err(error) => {
            warn!(%error, "ledger restore failed, starting empty");
            LedgerStore::new()
        }
    }
}

/// Publishes the store's current snapshot through the sharing port.
///
/// Returns the retrievable reference, or None if publishing failed.
pub fn share(store: &LedgerStore, port: &mut dyn SharePort) -> Option<String> {
    let token = codec::serialize(&store.snapshot());
    match port.embed(&token) {
        Ok(reference) => Some(reference),
        Err(error) => {
            warn!(%error, "ledger share failed");
            None
        }
    }
}

/// Rebuilds a store from a shared reference.
///
/// Returns None if the reference is unknown or the port failed; a corrupt
/// embedded token adopts as an empty store (codec degradation).
pub fn adopt(port: &dyn SharePort, reference: &str) -> Option<LedgerStore> {
    match port.retrieve(reference) {
        Ok(Some(token)) => Some(LedgerStore::from_state(codec::deserialize(&token))),
        Ok(None) => None,
        Err(error) => {
            warn!(%error, "ledger adopt failed");
            None
        }
    }
}
