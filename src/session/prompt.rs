//! Console prompts
//!
//! Every value the session asks for goes through [`read_value`], which
//! flushes the prompt before blocking on input.

use crate::types::LedgerError;
use std::io::{BufRead, Write};

/// Print `prompt`, flush, and read one line of input
///
/// Only the trailing line terminator is removed; other whitespace is kept.
///
/// # Errors
///
/// Returns `LedgerError::InputClosed` when the input has no more lines.
pub fn read_value<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, LedgerError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(LedgerError::InputClosed);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
