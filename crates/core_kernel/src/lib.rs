//! Core Kernel - Foundational types for the expense ledger
//!
//! This crate provides the building blocks used across the ledger domain:
//! - Currency-scale decimal arithmetic (rounding, settlement tolerances)
//! - Strongly-typed identifiers for people and expenses

pub mod identifiers;
pub mod money;

pub use identifiers::{ExpenseId, PersonId};
pub use money::{balance_sum_tolerance, is_settled, round2, settlement_tolerance};
