//! Pre-built test data
//!
//! Fixed names, dates, and draft shapes so tests only spell out the fields
//! they actually care about.

use chrono::NaiveDate;
use core_kernel::PersonId;
use domain_ledger::ExpenseDraft;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Well-known participant names
pub struct NameFixtures;

impl NameFixtures {
    /// Three distinct, case-distinct names
    pub fn trio() -> [&'static str; 3] {
        ["Anna", "Ben", "Cleo"]
    }

    /// A larger household
    pub fn household() -> [&'static str; 5] {
        ["Anna", "Ben", "Cleo", "Dmitri", "Ezra"]
    }
}

/// Well-known dates
pub struct DateFixtures;

impl DateFixtures {
    /// An arbitrary fixed expense date
    pub fn expense_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    /// A leap-day date for serialization edge cases
    pub fn leap_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Ready-made expense drafts
pub struct DraftFixtures;

impl DraftFixtures {
    /// A fully valid draft: description, positive amount, category, date,
    /// the given payer and split.
    pub fn valid(payer: PersonId, split: Vec<PersonId>) -> ExpenseDraft {
        Self::valid_with_amount(dec!(60), payer, split)
    }

    /// A valid draft with a custom amount
    pub fn valid_with_amount(
        amount: Decimal,
        payer: PersonId,
        split: Vec<PersonId>,
    ) -> ExpenseDraft {
        ExpenseDraft::new("Dinner", amount)
            .with_category("Food")
            .with_date(DateFixtures::expense_date())
            .with_payer(payer)
            .with_split(split)
    }
}
