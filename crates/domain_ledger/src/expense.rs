//! Expense record and caller-facing draft

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ExpenseId, PersonId};

/// A recorded shared expense
///
/// Records are immutable from the caller's point of view: edits through the
/// store replace the whole record atomically, so a partially-updated expense
/// is never observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, generated by the store
    pub id: ExpenseId,
    /// What the money was spent on, non-empty
    pub description: String,
    /// Positive amount at currency scale
    pub amount: Decimal,
    /// Category label, non-empty (e.g. "Food", "Rent")
    pub category: String,
    /// Calendar date of the expense
    pub date: NaiveDate,
    /// The person who paid the full amount
    pub paid_by: PersonId,
    /// The people sharing the cost equally; non-empty, no duplicates
    pub split_between: Vec<PersonId>,
}

impl Expense {
    /// Returns true if the given person is the payer or a split member
    pub fn involves(&self, person_id: PersonId) -> bool {
        self.paid_by == person_id || self.split_between.contains(&person_id)
    }
}

/// Input for creating or editing an expense
///
/// Drafts mirror what a form submits: every field is caller-supplied and the
/// date may be absent. The store validates a draft in a fixed order and
/// rejects it on the first violation.
///
/// # Example
///
/// ```rust
/// use domain_ledger::ExpenseDraft;
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
/// use core_kernel::PersonId;
///
/// let payer = PersonId::new();
/// let draft = ExpenseDraft::new("Groceries", Decimal::from(40u64))
///     .with_category("Food")
///     .with_date(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap())
///     .with_payer(payer)
///     .with_split([payer]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    /// Proposed description
    pub description: String,
    /// Proposed amount
    pub amount: Decimal,
    /// Proposed category label
    pub category: String,
    /// Proposed date; None is rejected at validation
    pub date: Option<NaiveDate>,
    /// Proposed payer
    pub paid_by: PersonId,
    /// Proposed split members
    pub split_between: Vec<PersonId>,
}

impl ExpenseDraft {
    /// Creates a draft with the given description and amount
    ///
    /// The payer defaults to a fresh id that matches nobody, so a draft
    /// without an explicit payer fails validation rather than silently
    /// charging someone.
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount,
            category: String::new(),
            date: None,
            paid_by: PersonId::new(),
            split_between: Vec::new(),
        }
    }

    /// Sets the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the expense date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the payer
    pub fn with_payer(mut self, paid_by: PersonId) -> Self {
        self.paid_by = paid_by;
        self
    }

    /// Sets the split members
    pub fn with_split(mut self, split: impl IntoIterator<Item = PersonId>) -> Self {
        self.split_between = split.into_iter().collect();
        self
    }
}
