//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `expense`: the expense record and amount formatting/parsing
//! - `error`: error types for the ledger

pub mod error;
pub mod expense;

pub use error::LedgerError;
pub use expense::{format_amount, parse_amount, Expense};
