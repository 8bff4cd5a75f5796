//! Expense Ledger Library
//! # Overview
//!
//! This library provides a single-user expense ledger: expenses are recorded
//! in memory, reloaded from and saved to a flat text file, and queried through
//! a menu-driven command loop.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Expense, LedgerError)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Rules an expense must satisfy before it is stored
//!   - [`core::expense_store`] - Append-only store, category filter and total
//! - [`io`] - Ledger file format, loading, and fixed-width rendering
//! - [`session`] - The interactive menu loop
//!
//! # Ledger File
//!
//! One expense per line, `category,amount`, amount with exactly two decimals:
//!
//! ```text
//! Clothes,10.05
//! House Materials,2424.69
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use core::ExpenseStore;
pub use io::{load, render, save, LoadSummary};
pub use session::Session;
pub use types::{Expense, LedgerError};
