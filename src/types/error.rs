//! Error types for the expense ledger
//!
//! This module defines all error types that can occur while recording,
//! persisting and reloading expenses.
//!
//! # Error Categories
//!
//! - **Validation Errors**: empty fields, short categories, non-positive amounts
//! - **Ledger File Errors**: malformed lines found while reloading
//! - **I/O Errors**: permission denied, disk full, closed standard input

use thiserror::Error;

/// Main error type for the expense ledger
///
/// Each variant carries enough context to produce a readable message on
/// the console or in the logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A candidate expense was rejected before entering the store
    ///
    /// This is a recoverable error - the store is left unchanged and the
    /// command loop goes back to the menu.
    #[error("Invalid input: {reason}")]
    BadInput {
        /// Why the input was rejected
        reason: String,
    },

    /// A line of the ledger file could not be turned into an expense
    ///
    /// This is a recoverable error - the line is skipped and loading
    /// continues with the next one.
    #[error("Ignoring invalid line {line}: {content}")]
    MalformedLine {
        /// 1-based line number in the ledger file
        line: u64,
        /// Raw content of the offending line
        content: String,
    },

    /// Summing the stored amounts exceeded the representable range
    ///
    /// This is a recoverable error - the store is untouched and the total
    /// is simply not shown.
    #[error("Total of {count} expenses exceeds the largest supported amount")]
    TotalOverflow {
        /// Number of expenses in the store
        count: usize,
    },

    /// I/O error occurred while reading or writing files
    ///
    /// This is a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Standard input ended while the session was waiting for a value
    #[error("Input closed before the session was finished")]
    InputClosed,
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        match error.into_kind() {
            csv::ErrorKind::Io(io) => io.into(),
            other => LedgerError::Io {
                message: format!("{:?}", other),
            },
        }
    }
}

impl LedgerError {
    /// Create a BadInput error
    pub fn bad_input(reason: &str) -> Self {
        LedgerError::BadInput {
            reason: reason.to_string(),
        }
    }

    /// Create a MalformedLine error
    pub fn malformed_line(line: u64, content: &str) -> Self {
        LedgerError::MalformedLine {
            line,
            content: content.to_string(),
        }
    }

    /// Whether the session can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LedgerError::BadInput { .. }
                | LedgerError::MalformedLine { .. }
                | LedgerError::TotalOverflow { .. }
        )
    }
}
