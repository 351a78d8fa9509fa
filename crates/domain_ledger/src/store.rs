//! The ledger store
//!
//! `LedgerStore` owns the authoritative people and expense collections and is
//! the only component permitted to mutate them. Every mutation validates its
//! input completely before touching state, so a rejected call has zero
//! observable side effects.
//!
//! The store is an explicit object owned by the caller; there is no ambient
//! global ledger. It is fully synchronous: a concurrent host must serialize
//! mutating calls on one instance (single-writer discipline), since balance
//! and settlement derivation assume a consistent snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{ExpenseId, PersonId};

use crate::balance::{self, BalanceSheet};
use crate::error::LedgerError;
use crate::expense::{Expense, ExpenseDraft};
use crate::person::{normalized_name_key, Person};
use crate::settlement::{self, Settlement};

/// A serializable snapshot of the ledger's contents
///
/// `Default` is the canonical empty state that corrupt or absent persisted
/// tokens decode to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerState {
    /// People in insertion order
    pub people: Vec<Person>,
    /// Expenses in insertion order
    pub expenses: Vec<Expense>,
}

impl LedgerState {
    /// Checks the invariants every store-produced snapshot upholds.
    ///
    /// Decoded tokens are untrusted: input can be shape-valid JSON while
    /// violating the data model (an empty split, a dangling payer id, a
    /// duplicated name). Rebuilding a store from such a snapshot would break
    /// derivation, so the codec rejects it before it gets that far.
    ///
    /// # Errors
    ///
    /// The first violation found, as the same [`LedgerError`] kind a live
    /// mutation would have produced.
    pub fn validate(&self) -> Result<(), LedgerError> {
        let mut person_ids = HashSet::with_capacity(self.people.len());
        let mut name_keys = HashSet::with_capacity(self.people.len());
        for person in &self.people {
            if person.name.trim().is_empty() {
                return Err(LedgerError::EmptyName);
            }
            if !person_ids.insert(person.id) {
                return Err(LedgerError::DuplicatePersonId(person.id));
            }
            if !name_keys.insert(person.name_key()) {
                return Err(LedgerError::DuplicateName(person.name.clone()));
            }
        }

        let mut expense_ids = HashSet::with_capacity(self.expenses.len());
        for expense in &self.expenses {
            if !expense_ids.insert(expense.id) {
                return Err(LedgerError::DuplicateExpenseId(expense.id));
            }
            if expense.description.trim().is_empty() {
                return Err(LedgerError::EmptyDescription);
            }
            if expense.amount <= rust_decimal::Decimal::ZERO {
                return Err(LedgerError::NonPositiveAmount(expense.amount));
            }
            if expense.category.trim().is_empty() {
                return Err(LedgerError::MissingCategory);
            }
            if !person_ids.contains(&expense.paid_by) {
                return Err(LedgerError::UnknownPayer(expense.paid_by));
            }
            if expense.split_between.is_empty() {
                return Err(LedgerError::EmptySplit);
            }
            let mut members = HashSet::with_capacity(expense.split_between.len());
            for member in &expense.split_between {
                if !person_ids.contains(member) {
                    return Err(LedgerError::UnknownSplitMember(*member));
                }
                if !members.insert(*member) {
                    return Err(LedgerError::DuplicateSplitMember(*member));
                }
            }
        }

        Ok(())
    }
}

/// The authoritative store of people and expenses
///
/// # Invariants
///
/// - Person names are non-empty (trimmed) and unique case-insensitively
/// - Every expense's payer and split members reference existing people
/// - Expense split sets are non-empty and duplicate-free
/// - Insertion order of both collections is preserved; it feeds the
///   settlement planner's tie-break and the serialization contract
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    people: Vec<Person>,
    expenses: Vec<Expense>,
}

impl LedgerStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from a decoded snapshot
    ///
    /// Snapshots are trusted: they are only produced from stores whose
    /// invariants already held, and the codec degrades undecodable or
    /// invariant-violating input (per [`LedgerState::validate`]) to the
    /// empty state before it gets here.
    pub fn from_state(state: LedgerState) -> Self {
        Self {
            people: state.people,
            expenses: state.expenses,
        }
    }

    // ------------------------------------------------------------------
    // Person operations
    // ------------------------------------------------------------------

    /// Adds a person
    ///
    /// The name is stored trimmed. On success the store gains exactly one
    /// person and nothing else changes.
    ///
    /// # Errors
    ///
    /// In check order: [`LedgerError::EmptyName`] if the name is empty after
    /// trimming, [`LedgerError::DuplicateName`] if another person already
    /// uses it case-insensitively.
    pub fn add_person(&mut self, name: impl Into<String>) -> Result<Person, LedgerError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        if self.name_taken(trimmed, None) {
            return Err(LedgerError::DuplicateName(trimmed.to_string()));
        }

        let person = Person::new(trimmed);
        debug!(person_id = %person.id, name = %person.name, "added person");
        self.people.push(person.clone());
        Ok(person)
    }

    /// Renames a person
    ///
    /// On success only that person's name changes.
    ///
    /// # Errors
    ///
    /// In check order: [`LedgerError::PersonNotFound`],
    /// [`LedgerError::EmptyName`], [`LedgerError::DuplicateName`] (the
    /// duplicate check excludes the person being renamed).
    pub fn rename_person(
        &mut self,
        id: PersonId,
        new_name: impl Into<String>,
    ) -> Result<Person, LedgerError> {
        if !self.people.iter().any(|p| p.id == id) {
            return Err(LedgerError::PersonNotFound(id));
        }
        let new_name = new_name.into();
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        if self.name_taken(trimmed, Some(id)) {
            return Err(LedgerError::DuplicateName(trimmed.to_string()));
        }

        let person = self
            .people
            .iter_mut()
            .find(|p| p.id == id)
            .expect("presence checked above");
        person.name = trimmed.to_string();
        debug!(person_id = %id, name = %person.name, "renamed person");
        Ok(person.clone())
    }

    /// Deletes a person and every expense that references them
    ///
    /// Deletion cascades destructively: expenses where the person is payer
    /// or split member are removed in the same atomic step. Remaining
    /// records are untouched.
    ///
    /// # Errors
    ///
    /// [`LedgerError::PersonNotFound`] if the id is absent.
    pub fn delete_person(&mut self, id: PersonId) -> Result<(), LedgerError> {
        if !self.people.iter().any(|p| p.id == id) {
            return Err(LedgerError::PersonNotFound(id));
        }

        let before = self.expenses.len();
        self.people.retain(|p| p.id != id);
        self.expenses.retain(|e| !e.involves(id));
        debug!(
            person_id = %id,
            cascaded_expenses = before - self.expenses.len(),
            "deleted person"
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Expense operations
    // ------------------------------------------------------------------

    /// Records a new expense from a validated draft
    ///
    /// The id is generated by the store; callers never supply one. Duplicate
    /// split members in the draft are dropped (first occurrence wins).
    ///
    /// # Errors
    ///
    /// Checks run in a fixed order and reject on the first violation:
    /// [`LedgerError::EmptyDescription`], [`LedgerError::NonPositiveAmount`],
    /// [`LedgerError::MissingCategory`], [`LedgerError::MissingDate`],
    /// [`LedgerError::UnknownPayer`], [`LedgerError::EmptySplit`],
    /// [`LedgerError::UnknownSplitMember`].
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<Expense, LedgerError> {
        let expense = self.validate_draft(ExpenseId::new(), draft)?;
        debug!(expense_id = %expense.id, amount = %expense.amount, "added expense");
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Replaces an expense wholesale, keeping its id
    ///
    /// The draft goes through the same validation as [`add_expense`]
    /// (existence of the record is checked first). On success the record is
    /// replaced in place; no partial-field update is ever observable.
    ///
    /// # Errors
    ///
    /// [`LedgerError::ExpenseNotFound`] if the id is absent, otherwise the
    /// same validation errors as [`add_expense`].
    ///
    /// [`add_expense`]: LedgerStore::add_expense
    pub fn edit_expense(
        &mut self,
        id: ExpenseId,
        draft: ExpenseDraft,
    ) -> Result<Expense, LedgerError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::ExpenseNotFound(id))?;

        let expense = self.validate_draft(id, draft)?;
        debug!(expense_id = %id, amount = %expense.amount, "edited expense");
        self.expenses[index] = expense.clone();
        Ok(expense)
    }

    /// Deletes exactly one expense
    ///
    /// # Errors
    ///
    /// [`LedgerError::ExpenseNotFound`] if the id is absent.
    pub fn delete_expense(&mut self, id: ExpenseId) -> Result<(), LedgerError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::ExpenseNotFound(id))?;
        self.expenses.remove(index);
        debug!(expense_id = %id, "deleted expense");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// People in insertion order
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Looks up one person
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Looks up one expense
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Derives the current balance sheet
    pub fn balances(&self) -> BalanceSheet {
        balance::derive(&self.people, &self.expenses)
    }

    /// Derives the current settlement plan
    ///
    /// Repeated calls without intervening mutation return identical output.
    pub fn settlements(&self) -> Vec<Settlement> {
        settlement::plan(&self.balances())
    }

    /// Copies the current contents into a serializable snapshot
    pub fn snapshot(&self) -> LedgerState {
        LedgerState {
            people: self.people.clone(),
            expenses: self.expenses.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Validation helpers
    // ------------------------------------------------------------------

    fn name_taken(&self, candidate: &str, exclude: Option<PersonId>) -> bool {
        let key = normalized_name_key(candidate);
        self.people
            .iter()
            .filter(|p| Some(p.id) != exclude)
            .any(|p| p.name_key() == key)
    }

    /// Validates a draft against the current people set and materializes it.
    ///
    /// Runs every constraint in the documented order; the store is untouched
    /// until the caller applies the returned record.
    fn validate_draft(
        &self,
        id: ExpenseId,
        draft: ExpenseDraft,
    ) -> Result<Expense, LedgerError> {
        let description = draft.description.trim().to_string();
        if description.is_empty() {
            return Err(LedgerError::EmptyDescription);
        }
        if draft.amount <= rust_decimal::Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(draft.amount));
        }
        let category = draft.category.trim().to_string();
        if category.is_empty() {
            return Err(LedgerError::MissingCategory);
        }
        let date = draft.date.ok_or(LedgerError::MissingDate)?;
        if self.person(draft.paid_by).is_none() {
            return Err(LedgerError::UnknownPayer(draft.paid_by));
        }
        if draft.split_between.is_empty() {
            return Err(LedgerError::EmptySplit);
        }

        // Set semantics: drop duplicates, first occurrence wins.
        let mut split_between: Vec<PersonId> = Vec::with_capacity(draft.split_between.len());
        for member in draft.split_between {
            if self.person(member).is_none() {
                return Err(LedgerError::UnknownSplitMember(member));
            }
            if !split_between.contains(&member) {
                split_between.push(member);
            }
        }

        Ok(Expense {
            id,
            description,
            amount: draft.amount,
            category,
            date,
            paid_by: draft.paid_by,
            split_between,
        })
    }
}
