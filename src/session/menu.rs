//! Menu selection
//!
//! Reads the user's choice, re-displaying the menu until the input is an
//! integer between 1 and 4.

use crate::session::prompt::read_value;
use crate::types::LedgerError;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

/// Text shown before every selection
pub const MENU: &str = "Menu:\n\
                        1. Add an expense\n\
                        2. View expenses by category\n\
                        3. Calculate total expenses\n\
                        4. Exit\n";

/// Actions offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewByCategory,
    ShowTotal,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::AddExpense),
            2 => Ok(MenuChoice::ViewByCategory),
            3 => Ok(MenuChoice::ShowTotal),
            4 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// Prompt until a valid menu choice is entered
///
/// Invalid entries print a diagnostic and never fail the session.
///
/// # Errors
///
/// Returns `LedgerError::InputClosed` if input ends, or `LedgerError::Io`
/// if the console cannot be written.
pub fn read_menu_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<MenuChoice, LedgerError> {
    loop {
        write!(output, "{}", MENU)?;
        let entry = read_value(input, output, "Enter your choice: ")?;

        let choice = match entry.trim().parse::<i64>() {
            Ok(number) => MenuChoice::try_from(number).ok(),
            Err(e) => match e.kind() {
                // Too many digits is still a number, just not one on the menu
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => None,
                _ => {
                    writeln!(output, "Invalid input. Please enter a number.")?;
                    continue;
                }
            },
        };

        match choice {
            Some(choice) => return Ok(choice),
            None => writeln!(output, "Invalid choice. Please select a valid option.")?,
        }
    }
}
