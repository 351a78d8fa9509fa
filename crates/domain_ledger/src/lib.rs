//! Ledger Domain - Shared expenses and settlement
//!
//! This crate implements the engine behind a shared expense ledger: who
//! participates, what was paid, who owes whom, and how to close the books.
//!
//! # Components
//!
//! - [`LedgerStore`]: the only component permitted to mutate the ledger.
//!   Every mutation is validated up front and applied atomically; a rejected
//!   call leaves the store unchanged.
//! - [`balance`]: pure derivation of per-person net positions from the
//!   current people and expenses.
//! - [`settlement`]: pure greedy planner turning net positions into an
//!   ordered list of directed payments.
//!
//! # Settlement semantics
//!
//! The planner deliberately emits the raw greedy pairing of largest debtor
//! against largest creditor. It does not minimize the number of transfers;
//! the output is deterministic and reproducible instead.
//!
//! # Example
//!
//! ```rust
//! use domain_ledger::{ExpenseDraft, LedgerStore};
//! use rust_decimal::Decimal;
//! use chrono::NaiveDate;
//!
//! let mut store = LedgerStore::new();
//! let anna = store.add_person("Anna").unwrap();
//! let ben = store.add_person("Ben").unwrap();
//!
//! store
//!     .add_expense(
//!         ExpenseDraft::new("Dinner", Decimal::from(60u64))
//!             .with_category("Food")
//!             .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
//!             .with_payer(anna.id)
//!             .with_split([anna.id, ben.id]),
//!     )
//!     .unwrap();
//!
//! let plan = store.settlements();
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan[0].from, ben.id);
//! assert_eq!(plan[0].to, anna.id);
//! ```

pub mod balance;
pub mod error;
pub mod expense;
pub mod person;
pub mod settlement;
pub mod store;

pub use balance::{Balance, BalanceSheet};
pub use error::LedgerError;
pub use expense::{Expense, ExpenseDraft};
pub use person::Person;
pub use settlement::Settlement;
pub use store::{LedgerState, LedgerStore};
