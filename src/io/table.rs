//! Fixed-width rendering of expenses
//!
//! Each expense is shown as two 10-character, left-aligned columns:
//!
//! ```text
//! |Category  |Amount    |
//! ***********************
//! |Clothes   |$5.55     |
//! |House Mate|$2424.69  |
//! ```
//!
//! Longer values are cut at 10 characters, shorter ones padded with spaces.

use crate::types::{format_amount, Expense};
use std::io::Write;

/// Width of each column, in characters
pub const COLUMN_WIDTH: usize = 10;

/// Header row printed above a listing
pub const HEADER: &str = "|Category  |Amount    |";

/// Divider printed under the header
pub const DIVIDER: &str = "***********************";

/// Render one expense as a table row
pub fn render(expense: &Expense) -> String {
    let amount = format!("${}", format_amount(expense.amount));
    format!(
        "|{:<width$.width$}|{:<width$.width$}|",
        expense.category,
        amount,
        width = COLUMN_WIDTH
    )
}

/// Write the header, the divider and one row per expense
pub fn write_table<'a, I>(expenses: I, output: &mut dyn Write) -> std::io::Result<()>
where
    I: IntoIterator<Item = &'a Expense>,
{
    writeln!(output, "{}", HEADER)?;
    writeln!(output, "{}", DIVIDER)?;
    for expense in expenses {
        writeln!(output, "{}", render(expense))?;
    }
    Ok(())
}
