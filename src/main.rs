//! Expense Ledger CLI
//!
//! Interactive expense tracker. Expenses are loaded from the ledger file at
//! startup and written back when the user picks "Exit".
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --file ~/ledger.txt
//! cargo run -- --log-level info
//! ```
//!
//! # Exit Codes
//!
//! - 0: The user exited from the menu and the ledger was saved
//! - 1: Error (unreadable ledger file, save failure, input closed, etc.)

use expense_ledger::{cli, io, ExpenseStore, Session};
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args);

    let mut output = std::io::stdout();

    let mut store = ExpenseStore::new();
    match io::load(&mut store, &args.ledger_file) {
        Ok(summary) => {
            // Skipped-line notices share stdout with the menu
            if let Err(e) = summary.write_diagnostics(&mut output) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    let mut session = Session::new(store, args.ledger_file);
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    if let Err(e) = session.run(&mut input, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
