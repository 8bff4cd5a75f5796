//! Core business logic module
//!
//! - `validator` - Input rules an expense must satisfy before it is stored
//! - `expense_store` - In-memory, append-only expense collection and its queries

pub mod expense_store;
pub mod validator;

pub use expense_store::ExpenseStore;
pub use validator::validate;
