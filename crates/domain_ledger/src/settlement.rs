//! Greedy settlement planning
//!
//! Turns a balance sheet into an ordered list of directed payments. The
//! output is the raw greedy pairing of largest debtor against largest
//! creditor. It is not a minimum-transaction-count plan; determinism and
//! reproducibility are the contract here, not optimality.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{is_settled, round2, PersonId};

use crate::balance::BalanceSheet;

/// One directed payment instruction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// The debtor making the payment
    pub from: PersonId,
    /// The creditor receiving it
    pub to: PersonId,
    /// Payment amount, always greater than the settlement tolerance
    pub amount: Decimal,
}

/// Plans the payments that drive every balance to (approximately) zero.
///
/// People within the settlement tolerance of zero are already settled and
/// excluded. Debtors and creditors are sorted by descending magnitude; ties
/// keep the balance sheet's people order (stable sort), which makes the plan
/// reproducible for a given sheet. The two lists are then merged greedily:
/// the current largest debtor pays the current largest creditor
/// `min(debt, credit)`, and any side whose remainder falls within tolerance
/// is advanced past.
///
/// Applying every emitted settlement (add the amount to `from`'s balance,
/// subtract it from `to`'s) leaves all balances within tolerance of zero.
pub fn plan(sheet: &BalanceSheet) -> Vec<Settlement> {
    let mut debtors: Vec<(PersonId, Decimal)> = sheet
        .entries()
        .iter()
        .filter(|b| b.amount < Decimal::ZERO && !is_settled(b.amount))
        .map(|b| (b.person_id, -b.amount))
        .collect();
    let mut creditors: Vec<(PersonId, Decimal)> = sheet
        .entries()
        .iter()
        .filter(|b| b.amount > Decimal::ZERO && !is_settled(b.amount))
        .map(|b| (b.person_id, b.amount))
        .collect();

    // Stable sorts: equal magnitudes keep people-list order.
    debtors.sort_by(|a, b| b.1.cmp(&a.1));
    creditors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut settlements = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let transfer = debtors[i].1.min(creditors[j].1);

        if !is_settled(transfer) {
            settlements.push(Settlement {
                from: debtors[i].0,
                to: creditors[j].0,
                amount: round2(transfer),
            });
        }

        debtors[i].1 -= transfer;
        creditors[j].1 -= transfer;

        if is_settled(debtors[i].1) {
            i += 1;
        }
        if is_settled(creditors[j].1) {
            j += 1;
        }
    }

    settlements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance;
    use crate::expense::Expense;
    use crate::person::Person;
    use chrono::NaiveDate;
    use core_kernel::ExpenseId;
    use rust_decimal_macros::dec;

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
    fn dinner_split_three_ways_pays_the_payer_back() {
        let a = Person::new("A");
        let b = Person::new("B");
        let c = Person::new("C");
        let people = vec![a.clone(), b.clone(), c.clone()];
        let expenses = vec![expense(dec!(60), a.id, vec![a.id, b.id, c.id])];

        let plan = plan(&balance::derive(&people, &expenses));
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].from, b.id);
        assert_eq!(plan[0].to, a.id);
        assert_eq!(plan[0].amount, dec!(20.00));
        assert_eq!(plan[1].from, c.id);
        assert_eq!(plan[1].to, a.id);
        assert_eq!(plan[1].amount, dec!(20.00));
    }

    #[test]
    fn offsetting_expenses_collapse_to_one_net_transfer() {
        let a = Person::new("A");
        let b = Person::new("B");
        let people = vec![a.clone(), b.clone()];
        let expenses = vec![
            expense(dec!(100), a.id, vec![a.id, b.id]),
            expense(dec!(40), b.id, vec![a.id, b.id]),
        ];

        let plan = plan(&balance::derive(&people, &expenses));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].from, b.id);
        assert_eq!(plan[0].to, a.id);
        assert_eq!(plan[0].amount, dec!(30.00));
    }

    #[test]
    fn exactly_canceling_debts_need_no_settlements() {
        let a = Person::new("A");
        let b = Person::new("B");
        let people = vec![a.clone(), b.clone()];
        let expenses = vec![
            expense(dec!(50), a.id, vec![a.id, b.id]),
            expense(dec!(50), b.id, vec![a.id, b.id]),
        ];

        assert!(plan(&balance::derive(&people, &expenses)).is_empty());
    }

    #[test]
    fn equal_magnitudes_keep_people_list_order() {
        let a = Person::new("A");
        let b = Person::new("B");
        let c = Person::new("C");
        let people = vec![a.clone(), b.clone(), c.clone()];
        // B and C each owe A exactly 20.
        let expenses = vec![expense(dec!(60), a.id, vec![a.id, b.id, c.id])];

        let sheet = balance::derive(&people, &expenses);
        let first = plan(&sheet);
        let second = plan(&sheet);
        assert_eq!(first, second);
        assert_eq!(first[0].from, b.id, "B precedes C in the people list");
    }

    #[test]
    fn empty_sheet_yields_empty_plan() {
        assert!(plan(&BalanceSheet::default()).is_empty());
    }

    #[test]
    fn single_person_never_settles() {
        let a = Person::new("A");
        let people = vec![a.clone()];
        let expenses = vec![expense(dec!(25), a.id, vec![a.id])];

        assert!(plan(&balance::derive(&people, &expenses)).is_empty());
    }

    #[test]
    fn applying_the_plan_settles_every_balance() {
        let a = Person::new("A");
        let b = Person::new("B");
        let c = Person::new("C");
        let d = Person::new("D");
        let people = vec![a.clone(), b.clone(), c.clone(), d.clone()];
        let expenses = vec![
            expense(dec!(90), a.id, vec![a.id, b.id, c.id]),
            expense(dec!(45.5), b.id, vec![b.id, c.id, d.id]),
            expense(dec!(12.30), d.id, vec![a.id, d.id]),
        ];

        let sheet = balance::derive(&people, &expenses);
        let plan = plan(&sheet);

        let mut remaining: Vec<(PersonId, Decimal)> = sheet
            .entries()
            .iter()
            .map(|e| (e.person_id, e.amount))
            .collect();
        for s in &plan {
            for (id, amount) in remaining.iter_mut() {
                if *id == s.from {
                    *amount += s.amount;
                }
                if *id == s.to {
                    *amount -= s.amount;
                }
            }
        }

        for (_, amount) in remaining {
            assert!(
                amount.abs() <= dec!(0.02),
                "unsettled remainder: {amount}"
            );
        }
    }
}
