//! Expense record and amount helpers
//!
//! This module defines the record kept by the ledger and the two-decimal
//! formatting and text parsing rules shared by persistence, presentation and
//! the command loop.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// A single recorded expense
///
/// There is no identifier: two expenses with the same category and amount
/// are distinct entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Free-text category, stored as entered
    pub category: String,

    /// Amount spent
    ///
    /// Always strictly positive for expenses added through the validator.
    /// Expenses reloaded from the ledger file are trusted as written.
    pub amount: Decimal,
}

impl Expense {
    /// Create an expense without validating it
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Expense {
            category: category.into(),
            amount,
        }
    }
}

/// Format an amount with exactly two decimal places
///
/// Midpoints round away from zero, so `1.005` becomes `1.01`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Parse an amount typed by the user or read from the ledger file
///
/// Surrounding whitespace is ignored. Plain decimals (`12.50`) and
/// scientific notation (`1.25e1`) are accepted. Values outside the range of
/// `Decimal` (magnitude above `Decimal::MAX`, about 7.9e28) are rejected.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
