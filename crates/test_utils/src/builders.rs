//! Test Data Builders
//!
//! Builder for populated ledger stores so tests can specify only the
//! structure they care about.

use core_kernel::PersonId;
use domain_ledger::{ExpenseDraft, LedgerStore, Person};
use rust_decimal::Decimal;

use crate::fixtures::DraftFixtures;

/// Builds a [`LedgerStore`] with people and expenses already in place
///
/// Expenses reference people by their index in the order they were added,
/// which keeps scenario tests readable:
///
/// ```rust
/// use test_utils::LedgerBuilder;
/// use rust_decimal_macros::dec;
///
/// let (store, people) = LedgerBuilder::new()
///     .with_people(["Anna", "Ben"])
///     .with_expense(dec!(100), 0, &[0, 1])
///     .build();
///
/// assert_eq!(people.len(), 2);
/// assert_eq!(store.expenses().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LedgerBuilder {
    names: Vec<String>,
    expenses: Vec<(Decimal, usize, Vec<usize>)>,
}

impl LedgerBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds people by name, in order
    pub fn with_people<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds an expense paid by `payer` (people index) split between
    /// `split` (people indices)
    pub fn with_expense(mut self, amount: Decimal, payer: usize, split: &[usize]) -> Self {
        self.expenses.push((amount, payer, split.to_vec()));
        self
    }

    /// Materializes the store, returning it with the created people
    ///
    /// # Panics
    ///
    /// Panics if any name or draft is invalid; builders construct valid
    /// scenarios by definition.
    pub fn build(self) -> (LedgerStore, Vec<Person>) {
        let mut store = LedgerStore::new();
        let people: Vec<Person> = self
            .names
            .into_iter()
            .map(|name| store.add_person(name).expect("builder names are valid"))
            .collect();

        for (amount, payer, split) in self.expenses {
            let split_ids: Vec<PersonId> = split.iter().map(|&i| people[i].id).collect();
            let draft: ExpenseDraft =
                DraftFixtures::valid_with_amount(amount, people[payer].id, split_ids);
            store
                .add_expense(draft)
                .expect("builder expenses are valid");
        }

        (store, people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn builder_wires_indices_to_ids() {
        let (store, people) = LedgerBuilder::new()
            .with_people(["Anna", "Ben", "Cleo"])
            .with_expense(dec!(60), 0, &[0, 1, 2])
            .build();

        let expense = &store.expenses()[0];
        assert_eq!(expense.paid_by, people[0].id);
        assert_eq!(expense.split_between.len(), 3);
    }
}
