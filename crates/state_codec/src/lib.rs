//! State Codec - Persistence and sharing for the expense ledger
//!
//! This crate owns the boundary between the in-memory ledger and the outside
//! world:
//!
//! - [`codec`]: pure `serialize`/`deserialize` between a [`LedgerState`]
//!   snapshot and an opaque, URL-safe text token. The only boundary contract
//!   is the roundtrip law: decoding an encoded state is content-equal to the
//!   original, and any undecodable input degrades to the empty state.
//! - [`ports`]: the persistence and sharing collaborators the host supplies,
//!   plus in-memory adapters.
//! - [`backup`]: fire-and-forget glue the host schedules. A failed save is
//!   logged and reported, never an error, and never touches in-memory state.
//!
//! [`LedgerState`]: domain_ledger::LedgerState

pub mod backup;
pub mod codec;
pub mod ports;

pub use backup::{adopt, persist, restore, share};
pub use codec::{deserialize, serialize};
pub use ports::{InMemoryPersistence, InMemoryShare, PersistencePort, PortError, SharePort};
