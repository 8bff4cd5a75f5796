//! Ledger file reader with iterator interface
//!
//! Provides a streaming iterator over the expenses stored in a ledger file,
//! and [`load`], which feeds that iterator into an [`ExpenseStore`].
//!
//! # Error Handling
//!
//! - A missing ledger file is not an error: [`load`] leaves the store untouched
//! - Malformed lines are yielded as `LedgerError::MalformedLine`; [`load`] skips
//!   them and hands them back in its [`LoadSummary`]
//! - Any other I/O failure is yielded once, after which the iterator is exhausted
//!
//! ```no_run
//! use expense_ledger::io::reader::ExpenseReader;
//! use std::path::Path;
//!
//! let reader = ExpenseReader::new(Path::new("expenses.txt")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(expense) => println!("{:?}", expense),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

use crate::core::ExpenseStore;
use crate::io::ledger_format::{convert_persisted_line, PersistedLine};
use crate::types::{Expense, LedgerError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Streaming reader over ledger lines
pub struct ExpenseReader<R: Read> {
    reader: csv::Reader<R>,
    record: StringRecord,
    done: bool,
}

impl ExpenseReader<File> {
    /// Open a ledger file for reading
    ///
    /// # Returns
    ///
    /// * `Ok(ExpenseReader)` if the file opened
    /// * `Err(std::io::Error)` otherwise, so callers can tell a missing file apart
    pub fn new(path: &Path) -> Result<Self, std::io::Error> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ExpenseReader<R> {
    /// Wrap any byte source holding ledger lines
    ///
    /// Fields are split on `,` only: quotes carry no meaning, each field is
    /// trimmed and lines may hold any number of fields (validated per line).
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source);

        ExpenseReader {
            reader,
            record: StringRecord::new(),
            done: false,
        }
    }

    fn convert_record(&self) -> Option<Result<Expense, LedgerError>> {
        let line = self.record.position().map(|pos| pos.line()).unwrap_or(0);

        // A whitespace-only line trims down to a single empty field
        if self.record.len() == 1 && self.record[0].is_empty() {
            return None;
        }

        let malformed = || {
            let content = self.record.iter().collect::<Vec<_>>().join(",");
            LedgerError::malformed_line(line, &content)
        };

        if self.record.len() != 2 {
            return Some(Err(malformed()));
        }

        let parsed = self
            .record
            .deserialize::<PersistedLine>(None)
            .ok()
            .and_then(convert_persisted_line);

        Some(parsed.ok_or_else(malformed))
    }
}

impl<R: Read> Iterator for ExpenseReader<R> {
    type Item = Result<Expense, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => self.done = true,
                Ok(true) => {
                    if let Some(result) = self.convert_record() {
                        return Some(result);
                    }
                }
                Err(e) if e.is_io_error() => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                Err(e) => {
                    // Undecodable bytes: skip the line, keep reading
                    let line = e.position().map(|pos| pos.line()).unwrap_or(0);
                    return Some(Err(LedgerError::malformed_line(line, "<invalid UTF-8>")));
                }
            }
        }
        None
    }
}

/// Outcome of a [`load`]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadSummary {
    /// Expenses appended to the store
    pub loaded: usize,
    /// Malformed lines that were skipped, in file order
    pub skipped: Vec<LedgerError>,
}

impl LoadSummary {
    /// Print one `Ignoring invalid line ...` notice per skipped line
    pub fn write_diagnostics(&self, output: &mut dyn Write) -> std::io::Result<()> {
        for error in &self.skipped {
            writeln!(output, "{}", error)?;
        }
        Ok(())
    }
}

/// Append the expenses stored at `path` to `store`
///
/// A missing file is the normal first-run state and yields an empty
/// summary. Malformed lines are skipped and returned in the summary so
/// the caller can report them on the console.
///
/// # Errors
///
/// Returns `LedgerError::Io` if the file exists but cannot be read.
pub fn load(store: &mut ExpenseStore, path: &Path) -> Result<LoadSummary, LedgerError> {
    let reader = match ExpenseReader::new(path) {
        Ok(reader) => reader,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "ledger file not found, no expenses read");
            return Ok(LoadSummary::default());
        }
        Err(e) => return Err(e.into()),
    };

    let summary = load_from(store, reader)?;
    info!(
        loaded = summary.loaded,
        skipped = summary.skipped.len(),
        path = %path.display(),
        "loaded expenses"
    );
    Ok(summary)
}

fn load_from<R: Read>(
    store: &mut ExpenseStore,
    reader: ExpenseReader<R>,
) -> Result<LoadSummary, LedgerError> {
    let mut summary = LoadSummary::default();

    for result in reader {
        match result {
            Ok(expense) => {
                store.push(expense);
                summary.loaded += 1;
            }
            Err(e) if e.is_recoverable() => {
                debug!("{}", e);
                summary.skipped.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ledger_format::save;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_ledger(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_all(content: &str) -> Vec<Result<Expense, LedgerError>> {
        ExpenseReader::from_reader(content.as_bytes()).collect()
    }

    #[rstest]
    #[case::simple("Clothes,10.05\n", "Clothes", Decimal::new(1005, 2))]
    #[case::trims_fields("  Food  ,  5.50  \n", "Food", Decimal::new(55, 1))]
    #[case::no_trailing_newline("Rent,900.00", "Rent", Decimal::new(900, 0))]
    #[case::crlf("Rent,900.00\r\n", "Rent", Decimal::new(900, 0))]
    #[case::quotes_are_literal("\"Gift\",12.00\n", "\"Gift\"", Decimal::new(12, 0))]
    fn test_reader_parses_line(
        #[case] content: &str,
        #[case] category: &str,
        #[case] amount: Decimal,
    ) {
        let results = read_all(content);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0], Ok(Expense::new(category, amount)));
    }

    #[rstest]
    #[case::single_field("badline\n", 1, "badline")]
    #[case::three_fields("Food, drinks,1.00\n", 1, "Food,drinks,1.00")]
    #[case::bad_amount("Food,ten\n", 1, "Food,ten")]
    #[case::empty_amount("Food,\n", 1, "Food,")]
    #[case::second_line("Food,1.00\nbadline\n", 2, "badline")]
    fn test_reader_reports_malformed_line(
        #[case] content: &str,
        #[case] line: u64,
        #[case] raw: &str,
    ) {
        let results = read_all(content);
        let error = results
            .into_iter()
            .find_map(Result::err)
            .expect("expected a malformed line");
        assert_eq!(error, LedgerError::malformed_line(line, raw));
    }

    #[test]
    fn test_reader_skips_blank_lines() {
        let results = read_all("Food,1.00\n\n   \nRent,2.00\n");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(Result::is_ok));
    }

    #[test]
    fn test_load_skips_only_malformed_line() {
        let file = create_temp_ledger("Food,10.00\nbadline\nRent,900.00\n");
        let mut store = ExpenseStore::new();

        let summary = load(&mut store, file.path()).unwrap();

        assert_eq!(
            summary,
            LoadSummary {
                loaded: 2,
                skipped: vec![LedgerError::malformed_line(2, "badline")],
            }
        );
        assert_eq!(
            store.expenses(),
            &[
                Expense::new("Food", Decimal::new(10, 0)),
                Expense::new("Rent", Decimal::new(900, 0)),
            ]
        );
    }

    #[test]
    fn test_load_summary_writes_one_notice_per_skipped_line() {
        let file = create_temp_ledger("badline\nFood,1.00\nFood,ten\n");
        let mut store = ExpenseStore::new();

        let summary = load(&mut store, file.path()).unwrap();
        let mut output = Vec::new();
        summary.write_diagnostics(&mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Ignoring invalid line 1: badline\nIgnoring invalid line 3: Food,ten\n"
        );
    }

    #[test]
    fn test_load_missing_file_leaves_store_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ExpenseStore::new();

        let summary = load(&mut store, &dir.path().join("nonexistent.txt")).unwrap();

        assert_eq!(summary, LoadSummary::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_appends_after_existing_entries() {
        let file = create_temp_ledger("Rent,900.00\n");
        let mut store = ExpenseStore::new();
        store.add("Food", Decimal::new(5, 0)).unwrap();

        load(&mut store, file.path()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.expenses()[1].category, "Rent");
    }

    #[test]
    fn test_load_trusts_persisted_values() {
        let file = create_temp_ledger("X,-1.00\n");
        let mut store = ExpenseStore::new();

        load(&mut store, file.path()).unwrap();

        assert_eq!(store.expenses(), &[Expense::new("X", Decimal::new(-1, 0))]);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut original = ExpenseStore::new();
        original.add("Clothes", Decimal::new(55525, 4)).unwrap();
        original.add("House Materials", Decimal::new(242469, 2)).unwrap();
        original.add("Food", Decimal::new(10, 0)).unwrap();
        original.add("Food", Decimal::new(10, 0)).unwrap();

        let file = NamedTempFile::new().unwrap();
        save(&original, file.path()).unwrap();

        let mut reloaded = ExpenseStore::new();
        let summary = load(&mut reloaded, file.path()).unwrap();

        assert_eq!(summary.loaded, 4);
        assert_eq!(
            reloaded.expenses(),
            &[
                Expense::new("Clothes", Decimal::new(555, 2)),
                Expense::new("House Materials", Decimal::new(242469, 2)),
                Expense::new("Food", Decimal::new(10, 0)),
                Expense::new("Food", Decimal::new(10, 0)),
            ]
        );
    }
}
