//! Input validation for new expenses
//!
//! Every expense added interactively passes through [`validate`] before it
//! reaches the store. Rules are checked in order and the first failing rule
//! decides the reported reason:
//!
//! 1. category empty or amount zero
//! 2. category shorter than three characters once trimmed
//! 3. amount not strictly positive

use crate::types::{Expense, LedgerError};
use rust_decimal::Decimal;

/// Minimum number of characters in a trimmed category
pub const MIN_CATEGORY_LEN: usize = 3;

/// Validate a candidate expense
///
/// # Arguments
///
/// * `category` - The category as entered by the user
/// * `amount` - The parsed amount
///
/// # Returns
///
/// * `Ok(Expense)` - The accepted record, category kept as given
/// * `Err(LedgerError::BadInput)` - The reason for rejection
pub fn validate(category: &str, amount: Decimal) -> Result<Expense, LedgerError> {
    if category.is_empty() || amount.is_zero() {
        return Err(LedgerError::bad_input(
            "Category and amount cannot be empty.",
        ));
    }

    if category.trim().chars().count() < MIN_CATEGORY_LEN {
        return Err(LedgerError::bad_input(
            "Category should contain at least three characters.",
        ));
    }

    if amount <= Decimal::ZERO {
        return Err(LedgerError::bad_input(
            "Amount should be strictly greater than zero.",
        ));
    }

    Ok(Expense::new(category, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("Food", Decimal::new(1000, 2))]
    #[case::exactly_three("Gas", Decimal::new(1, 2))]
    #[case::inner_spaces("House Materials", Decimal::new(242469, 2))]
    #[case::padded_category("  Rent  ", Decimal::new(900, 0))]
    fn test_validate_accepts(#[case] category: &str, #[case] amount: Decimal) {
        let expense = validate(category, amount).unwrap();
        assert_eq!(expense.category, category);
        assert_eq!(expense.amount, amount);
    }

    #[rstest]
    #[case::empty_category("", Decimal::ONE, "cannot be empty")]
    #[case::zero_amount("Food", Decimal::ZERO, "cannot be empty")]
    #[case::empty_and_zero("", Decimal::ZERO, "cannot be empty")]
    #[case::short_category("Ab", Decimal::ONE, "at least three characters")]
    #[case::short_after_trim("  ab  ", Decimal::ONE, "at least three characters")]
    #[case::whitespace_only("     ", Decimal::ONE, "at least three characters")]
    #[case::negative_amount("Food", Decimal::new(-5, 0), "strictly greater than zero")]
    // The length rule is checked before the sign rule
    #[case::short_and_negative("Ab", Decimal::new(-5, 0), "at least three characters")]
    fn test_validate_rejects(
        #[case] category: &str,
        #[case] amount: Decimal,
        #[case] expected_reason: &str,
    ) {
        match validate(category, amount) {
            Err(LedgerError::BadInput { reason }) => {
                assert!(
                    reason.contains(expected_reason),
                    "unexpected reason: {}",
                    reason
                );
            }
            other => panic!("Expected BadInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        assert!(validate("日本語", Decimal::ONE).is_ok());
        assert!(validate("日本", Decimal::ONE).is_err());
    }
}
