//! In-memory expense store
//!
//! This module provides the ExpenseStore that holds every expense recorded
//! during a session, in insertion order. The store is append-only: there is
//! no update or delete.
//!
//! # Queries
//!
//! - [`ExpenseStore::filter_by_category`] - exact, case-sensitive category match
//! - [`ExpenseStore::total`] - sum of all amounts

use crate::core::validator::validate;
use crate::types::{Expense, LedgerError};
use rust_decimal::Decimal;

/// Ordered, append-only collection of expenses
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create a new empty store
    pub fn new() -> Self {
        ExpenseStore {
            expenses: Vec::new(),
        }
    }

    /// Validate and append an expense
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the expense was appended
    /// * `Err(LedgerError::BadInput)` if validation failed; the store is unchanged
    pub fn add(&mut self, category: &str, amount: Decimal) -> Result<(), LedgerError> {
        let expense = validate(category, amount)?;
        self.expenses.push(expense);
        Ok(())
    }

    /// Append an expense without validation
    ///
    /// Used when reloading the ledger file, whose content is trusted.
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// All expenses whose category is exactly `category`, in insertion order
    pub fn filter_by_category(&self, category: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| expense.category == category)
            .collect()
    }

    /// Sum of all amounts; zero for an empty store
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::TotalOverflow` if the sum leaves the range of
    /// `Decimal`. The store itself is not affected.
    pub fn total(&self) -> Result<Decimal, LedgerError> {
        self.expenses
            .iter()
            .try_fold(Decimal::ZERO, |sum, expense| sum.checked_add(expense.amount))
            .ok_or(LedgerError::TotalOverflow {
                count: self.expenses.len(),
            })
    }

    /// All expenses, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether no expense has been recorded or loaded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExpenseStore {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}
