//! Ledger domain errors
//!
//! Two kinds of error surface from mutating operations: validation failures
//! (rejected input) and not-found failures (referenced id absent). Either
//! way the store is left unchanged.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{ExpenseId, PersonId};

/// Errors that can occur in the ledger domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Person name is empty after trimming
    #[error("person name cannot be empty")]
    EmptyName,

    /// Another person already uses this name (case-insensitive)
    #[error("a person named \"{0}\" already exists")]
    DuplicateName(String),

    /// Person with the given id was not found
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    /// Expense with the given id was not found
    #[error("expense not found: {0}")]
    ExpenseNotFound(ExpenseId),

    /// Expense description is empty after trimming
    #[error("expense description cannot be empty")]
    EmptyDescription,

    /// Expense amount is zero or negative
    #[error("expense amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Expense category label is empty after trimming
    #[error("expense category cannot be empty")]
    MissingCategory,

    /// Expense date was not supplied
    #[error("expense date is required")]
    MissingDate,

    /// Payer id does not resolve to an existing person
    #[error("payer not found: {0}")]
    UnknownPayer(PersonId),

    /// Split set is empty
    #[error("an expense must be split between at least one person")]
    EmptySplit,

    /// A split member id does not resolve to an existing person
    #[error("split member not found: {0}")]
    UnknownSplitMember(PersonId),

    /// Two people in a snapshot share an id
    #[error("duplicate person id: {0}")]
    DuplicatePersonId(PersonId),

    /// Two expenses in a snapshot share an id
    #[error("duplicate expense id: {0}")]
    DuplicateExpenseId(ExpenseId),

    /// A split member appears more than once in a stored expense
    #[error("duplicate split member: {0}")]
    DuplicateSplitMember(PersonId),
}

impl LedgerError {
    /// Returns true if this error rejects caller input
    pub fn is_validation(&self) -> bool {
        !self.is_not_found()
    }

    /// Returns true if this error reports an absent record
    ///
    /// An unknown payer or split member is a validation failure against the
    /// current people set, not a lookup of the record being mutated.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LedgerError::PersonNotFound(_) | LedgerError::ExpenseNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kinds_are_classified() {
        assert!(LedgerError::PersonNotFound(PersonId::new()).is_not_found());
        assert!(LedgerError::ExpenseNotFound(ExpenseId::new()).is_not_found());
        assert!(!LedgerError::EmptyName.is_not_found());
    }

    #[test]
    fn validation_kinds_are_classified() {
        assert!(LedgerError::EmptyName.is_validation());
        assert!(LedgerError::DuplicateName("Anna".to_string()).is_validation());
        assert!(LedgerError::UnknownPayer(PersonId::new()).is_validation());
        assert!(LedgerError::DuplicatePersonId(PersonId::new()).is_validation());
        assert!(LedgerError::DuplicateSplitMember(PersonId::new()).is_validation());
        assert!(!LedgerError::PersonNotFound(PersonId::new()).is_validation());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = LedgerError::DuplicateName("Anna".to_string());
        assert!(err.to_string().contains("Anna"));

        let err = LedgerError::NonPositiveAmount(Decimal::ZERO);
        assert!(err.to_string().contains('0'));
    }
}
