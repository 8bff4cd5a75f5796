//! I/O module
//!
//! Handles the ledger file and console rendering.
//!
//! # Components
//!
//! - `ledger_format` - Line format of the ledger file and saving
//! - `reader` - Streaming ledger reader and loading into a store
//! - `table` - Fixed-width rendering of expenses

pub mod ledger_format;
pub mod reader;
pub mod table;

pub use ledger_format::{save, write_expenses, PersistedLine, DEFAULT_LEDGER_PATH};
pub use reader::{load, ExpenseReader, LoadSummary};
pub use table::{render, write_table};
