//! Ledger file format handling
//!
//! The ledger file holds one expense per line:
//!
//! ```text
//! Clothes,10.05
//! House Materials,2424.69
//! ```
//!
//! There is no header and no quoting. A category containing a comma is
//! written as-is and will not survive a reload.
//!
//! This module centralizes the line format:
//! - PersistedLine structure for (de)serialization
//! - Conversion between persisted lines and expenses
//! - Writing the whole store to a writer or a file

use crate::core::ExpenseStore;
use crate::types::{format_amount, parse_amount, Expense, LedgerError};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Default location of the ledger file
pub const DEFAULT_LEDGER_PATH: &str = "expenses.txt";

/// One line of the ledger file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PersistedLine {
    pub category: String,
    pub amount: String,
}

impl From<&Expense> for PersistedLine {
    fn from(expense: &Expense) -> Self {
        PersistedLine {
            category: expense.category.clone(),
            amount: format_amount(expense.amount),
        }
    }
}

/// Convert a persisted line into an expense
///
/// The category is kept as read (the reader already trims it). The amount
/// must parse as a decimal; no other validation is applied.
///
/// # Returns
///
/// * `Some(Expense)` if the amount parsed
/// * `None` otherwise
pub fn convert_persisted_line(line: PersistedLine) -> Option<Expense> {
    let amount = parse_amount(&line.amount)?;
    Some(Expense::new(line.category, amount))
}

/// Write every expense of the store, in order, to `output`
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(LedgerError::Io)` if a write error occurred
pub fn write_expenses(store: &ExpenseStore, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    for expense in store {
        writer.serialize(PersistedLine::from(expense))?;
    }

    writer.flush()?;
    Ok(())
}

/// Save the store to `path`, replacing any existing content
pub fn save(store: &ExpenseStore, path: &Path) -> Result<(), LedgerError> {
    let mut file = File::create(path)?;
    write_expenses(store, &mut file)?;
    info!(count = store.len(), path = %path.display(), "saved expenses");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use tempfile::NamedTempFile;

    fn store_with(entries: &[(&str, Decimal)]) -> ExpenseStore {
        let mut store = ExpenseStore::new();
        for (category, amount) in entries {
            store.push(Expense::new(*category, *amount));
        }
        store
    }

    #[rstest]
    #[case::empty(vec![], "")]
    #[case::single(vec![("Clothes", Decimal::new(1005, 2))], "Clothes,10.05\n")]
    #[case::pads_to_two_decimals(vec![("Food", Decimal::new(10, 0))], "Food,10.00\n")]
    #[case::rounds_to_two_decimals(vec![("Clothes", Decimal::new(55525, 4))], "Clothes,5.55\n")]
    #[case::keeps_order(
        vec![("Rent", Decimal::new(900, 0)), ("Food", Decimal::new(55, 1)), ("Rent", Decimal::new(900, 0))],
        "Rent,900.00\nFood,5.50\nRent,900.00\n"
    )]
    #[case::no_quoting(vec![("House Materials", Decimal::new(242469, 2))], "House Materials,2424.69\n")]
    #[case::embedded_comma_not_escaped(vec![("Food, drinks", Decimal::ONE)], "Food, drinks,1.00\n")]
    fn test_write_expenses(#[case] entries: Vec<(&str, Decimal)>, #[case] expected: &str) {
        let store = store_with(&entries);
        let mut output = Vec::new();

        write_expenses(&store, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[rstest]
    #[case::plain("Food", "10.50", Some(Decimal::new(1050, 2)))]
    #[case::untrusted_negative("Refund", "-2.00", Some(Decimal::new(-2, 0)))]
    #[case::bad_amount("Food", "ten", None)]
    #[case::empty_amount("Food", "", None)]
    fn test_convert_persisted_line(
        #[case] category: &str,
        #[case] amount: &str,
        #[case] expected: Option<Decimal>,
    ) {
        let line = PersistedLine {
            category: category.to_string(),
            amount: amount.to_string(),
        };

        let result = convert_persisted_line(line);
        assert_eq!(result.map(|expense| expense.amount), expected);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "Old,1.00\nOld,2.00\n").unwrap();

        let store = store_with(&[("New", Decimal::new(3, 0))]);
        save(&store, file.path()).unwrap();

        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "New,3.00\n");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("expenses.txt");

        let result = save(&ExpenseStore::new(), &path);
        assert!(matches!(result, Err(LedgerError::Io { .. })));
    }
}
