//! Test Utilities Crate
//!
//! Shared test infrastructure for the expense ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: pre-built names, dates, and drafts
//! - `builders`: builder for populated ledger stores
//! - `generators`: property-based test data generators
//! - `assertions`: tolerance-aware assertion helpers

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
