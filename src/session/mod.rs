//! Interactive command loop
//!
//! A [`Session`] owns the expense store for the lifetime of the program and
//! drives it from a menu:
//!
//! ```text
//! MenuPrompt -> AddExpense     -> MenuPrompt
//!            -> ViewByCategory -> MenuPrompt
//!            -> ShowTotal      -> MenuPrompt
//!            -> Exit (save, stop)
//! ```
//!
//! Input and output are generic so the loop can be driven by scripted input
//! in tests and by the terminal in the binary.

pub mod menu;
pub mod prompt;

pub use menu::{read_menu_choice, MenuChoice};

use crate::core::ExpenseStore;
use crate::io::{ledger_format, table};
use crate::types::{format_amount, parse_amount, LedgerError};
use prompt::read_value;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Message shown for any rejected expense, whatever the reason
pub const INVALID_VALUE: &str = "Invalid value!";

/// Message shown when the total cannot be represented
pub const TOTAL_TOO_LARGE: &str = "Total expenses is too large to display.";

/// A running ledger session
#[derive(Debug)]
pub struct Session {
    store: ExpenseStore,
    ledger_path: PathBuf,
}

impl Session {
    /// Create a session over an already-loaded store
    ///
    /// `ledger_path` is where the store is saved on exit.
    pub fn new(store: ExpenseStore, ledger_path: impl Into<PathBuf>) -> Self {
        Session {
            store,
            ledger_path: ledger_path.into(),
        }
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    /// Run the menu loop until the user exits
    ///
    /// # Errors
    ///
    /// - `LedgerError::InputClosed` if input ends before Exit; nothing is saved
    /// - `LedgerError::Io` if the console cannot be written or saving fails
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), LedgerError> {
        loop {
            match read_menu_choice(input, output)? {
                MenuChoice::AddExpense => self.add_expense(input, output)?,
                MenuChoice::ViewByCategory => self.view_by_category(input, output)?,
                MenuChoice::ShowTotal => self.show_total(output)?,
                MenuChoice::Exit => {
                    self.exit(output)?;
                    return Ok(());
                }
            }
        }
    }

    fn add_expense<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), LedgerError> {
        let category = read_value(input, output, "Expense Category: ")?;
        let amount = read_value(input, output, "Expense Amount: ")?;

        match self.try_add(&category, &amount) {
            Ok(()) => writeln!(output, "Expense {} added successfully!", category)?,
            Err(e) if e.is_recoverable() => {
                debug!(%category, %amount, "rejected expense: {}", e);
                writeln!(output, "{}", INVALID_VALUE)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn try_add(&mut self, category: &str, amount: &str) -> Result<(), LedgerError> {
        if amount.is_empty() {
            return Err(LedgerError::bad_input("Amount cannot be empty."));
        }
        let amount = parse_amount(amount)
            .ok_or_else(|| LedgerError::bad_input("Amount should be a number."))?;
        self.store.add(category, amount)
    }

    fn view_by_category<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), LedgerError> {
        let category = read_value(input, output, "Expense Category: ")?;
        let matches = self.store.filter_by_category(&category);
        table::write_table(matches, output)?;
        Ok(())
    }

    fn show_total<W: Write>(&self, output: &mut W) -> Result<(), LedgerError> {
        match self.store.total() {
            Ok(total) => writeln!(output, "Total expenses is: ${}", format_amount(total))?,
            Err(e) if e.is_recoverable() => {
                warn!("{}", e);
                writeln!(output, "{}", TOTAL_TOO_LARGE)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn exit<W: Write>(&self, output: &mut W) -> Result<(), LedgerError> {
        ledger_format::save(&self.store, &self.ledger_path)?;
        writeln!(output, "Expenses saved successfully.")?;
        writeln!(output, "Exiting the Expense Tracker Application....")?;
        output.flush()?;
        Ok(())
    }
}
