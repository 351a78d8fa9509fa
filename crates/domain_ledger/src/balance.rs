//! Balance derivation
//!
//! Balances are derived, never stored: a pure function of the current people
//! and expense sets. A positive balance means the person is owed money, a
//! negative balance means they owe.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{round2, PersonId};

use crate::expense::Expense;
use crate::person::Person;

/// One person's net position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// The person this balance belongs to
    pub person_id: PersonId,
    /// Net amount, rounded to 2 decimal places
    pub amount: Decimal,
}

/// The derived net position of every person, in people-list order
///
/// Preserving the people list's original order matters: the settlement
/// planner breaks magnitude ties by this order, which keeps its output
/// deterministic.
///
/// # Invariant
///
/// The rounded balances sum to zero within
/// [`balance_sum_tolerance`](core_kernel::balance_sum_tolerance) of the
/// person count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    entries: Vec<Balance>,
}

impl BalanceSheet {
    /// The balances, one per person, in people-list order
    pub fn entries(&self) -> &[Balance] {
        &self.entries
    }

    /// The balance for one person, if they are on the sheet
    pub fn amount_for(&self, person_id: PersonId) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|b| b.person_id == person_id)
            .map(|b| b.amount)
    }

    /// Sum of all rounded balances (approximately zero by invariant)
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|b| b.amount).sum()
    }

    /// Number of people on the sheet
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nobody is on the sheet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives every person's net balance from the expense set.
///
/// For each expense the payer is credited the full amount and every split
/// member is debited an equal share (`amount / |split|`, ordinary decimal
/// division with no remainder redistribution). Rounding to 2 decimal places
/// happens exactly once per person, after all expenses are accumulated, so
/// per-expense rounding error never compounds.
///
/// People referenced by no expense get a zero balance; no people or no
/// expenses yields an all-zero (or empty) sheet.
pub fn derive(people: &[Person], expenses: &[Expense]) -> BalanceSheet {
    let mut net: HashMap<PersonId, Decimal> = HashMap::with_capacity(people.len());

    for expense in expenses {
        *net.entry(expense.paid_by).or_insert(Decimal::ZERO) += expense.amount;

        let share = expense.amount / Decimal::from(expense.split_between.len() as u64);
        for member in &expense.split_between {
            *net.entry(*member).or_insert(Decimal::ZERO) -= share;
        }
    }

    let entries = people
        .iter()
        .map(|person| Balance {
            person_id: person.id,
            amount: round2(net.get(&person.id).copied().unwrap_or(Decimal::ZERO)),
        })
        .collect();

    BalanceSheet { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{balance_sum_tolerance, ExpenseId};
    use rust_decimal_macros::dec;

    fn person(name: &str) -> Person {
        Person::new(name)
    }

    fn expense(amount: Decimal, paid_by: PersonId, split: Vec<PersonId>) -> Expense {
        Expense {
            id: ExpenseId::new(),
            description: "test".to_string(),
            amount,
            category: "Misc".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            paid_by,
            split_between: split,
        }
    }

    #[test]
    fn payer_gains_full_amount_members_lose_equal_shares() {
        let a = person("A");
        let b = person("B");
        let c = person("C");
        let people = vec![a.clone(), b.clone(), c.clone()];
        let expenses = vec![expense(dec!(60), a.id, vec![a.id, b.id, c.id])];

        let sheet = derive(&people, &expenses);
        assert_eq!(sheet.amount_for(a.id), Some(dec!(40.00)));
        assert_eq!(sheet.amount_for(b.id), Some(dec!(-20.00)));
        assert_eq!(sheet.amount_for(c.id), Some(dec!(-20.00)));
    }

    #[test]
    fn rounding_happens_once_after_accumulation() {
        let a = person("A");
        let b = person("B");
        let c = person("C");
        let people = vec![a.clone(), b.clone(), c.clone()];
        // Three 0.10 expenses split three ways: each share is 0.0333...;
        // per-expense rounding would distort the accumulated total.
        let expenses = vec![
            expense(dec!(0.10), a.id, vec![a.id, b.id, c.id]),
            expense(dec!(0.10), a.id, vec![a.id, b.id, c.id]),
            expense(dec!(0.10), a.id, vec![a.id, b.id, c.id]),
        ];

        let sheet = derive(&people, &expenses);
        assert_eq!(sheet.amount_for(b.id), Some(dec!(-0.10)));
        assert_eq!(sheet.amount_for(a.id), Some(dec!(0.20)));
    }

    #[test]
    fn uninvolved_people_balance_to_zero() {
        let a = person("A");
        let b = person("B");
        let people = vec![a.clone(), b.clone()];
        let expenses = vec![expense(dec!(10), a.id, vec![a.id])];

        let sheet = derive(&people, &expenses);
        assert_eq!(sheet.amount_for(b.id), Some(Decimal::ZERO));
    }

    #[test]
    fn empty_inputs_yield_empty_or_zero_sheets() {
        assert!(derive(&[], &[]).is_empty());

        let a = person("A");
        let sheet = derive(&[a.clone()], &[]);
        assert_eq!(sheet.amount_for(a.id), Some(Decimal::ZERO));
    }

    #[test]
    fn total_stays_within_sum_tolerance() {
        let a = person("A");
        let b = person("B");
        let c = person("C");
        let people = vec![a.clone(), b.clone(), c.clone()];
        let expenses = vec![
            expense(dec!(100), a.id, vec![a.id, b.id, c.id]),
            expense(dec!(7.77), b.id, vec![a.id, c.id]),
        ];

        let sheet = derive(&people, &expenses);
        assert!(sheet.total().abs() <= balance_sum_tolerance(people.len()));
    }
}
