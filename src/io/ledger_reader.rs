//! Ledger CSV reader with iterator interface
//!
//! Provides an iterator over transaction records from a delimited ledger file.
//! Delegates field conversion to the csv_format module.
//!
//! # Design
//!
//! The LedgerReader reads raw `StringRecord`s with csv::Reader and maps them
//! by column position, so header names are irrelevant: the first line is
//! always discarded as a header.
//!
//! # Error Handling
//!
//! One malformed row must never lose the rest of the ledger:
//! - Fatal errors (file not found, unreadable file) are returned from `new()`
//! - A malformed numeric field is replaced by its default and logged; the row
//!   is still yielded
//! - A row the tokenizer cannot read at all (e.g. invalid UTF-8) is logged
//!   and skipped
//!
//! ```no_run
//! use fraud_ledger::io::ledger_reader::LedgerReader;
//! use std::path::Path;
//!
//! let reader = LedgerReader::new(Path::new("ledger.csv")).unwrap();
//! for record in reader {
//!     println!("{} -> {} : {}", record.sender, record.receiver, record.amount);
//! }
//! ```

use crate::io::csv_format::{convert_ledger_row, LedgerRow};
use crate::types::{AnalysisError, TransactionRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Ledger reader
///
/// Yields one TransactionRecord per readable data line.
#[derive(Debug)]
pub struct LedgerReader<R: Read = File> {
    reader: csv::Reader<R>,
    record: StringRecord,
    defaulted_fields: usize,
    skipped_rows: usize,
}

impl LedgerReader<File> {
    /// Open a ledger file
    ///
    /// # Errors
    ///
    /// * `AnalysisError::FileNotFound` if the path does not exist
    /// * `AnalysisError::IoError` if it cannot be opened for another reason
    pub fn new(path: &Path) -> Result<Self, AnalysisError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AnalysisError::file_not_found(&path.display().to_string()),
            _ => AnalysisError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        log::debug!("Opened ledger {}", path.display());
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> LedgerReader<R> {
    /// Read a ledger from any byte source
    ///
    /// The reader is configured to:
    /// - Treat the first line as a header and discard it
    /// - Trim whitespace from all fields
    /// - Allow rows with any number of fields
    /// - Treat `"` as an ordinary character, so every physical line is one row
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .quoting(false)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        LedgerReader {
            reader,
            record: StringRecord::new(),
            defaulted_fields: 0,
            skipped_rows: 0,
        }
    }

    /// Number of fields replaced by defaults so far
    pub fn defaulted_fields(&self) -> usize {
        self.defaulted_fields
    }

    /// Number of unreadable rows skipped so far
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

impl<R: Read> Iterator for LedgerReader<R> {
    type Item = TransactionRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) => {
                    let line = self.record.position().map_or(0, |p| p.line());
                    let row = LedgerRow::from_record(&self.record);
                    let (record, defaulted) = convert_ledger_row(row);

                    for field in &defaulted {
                        log::warn!(
                            "Line {}: malformed {} '{}', using default",
                            line,
                            field.column,
                            field.raw
                        );
                    }
                    self.defaulted_fields += defaulted.len();

                    return Some(record);
                }
                Err(e) => {
                    // csv errors other than I/O leave the reader positioned at the next row
                    if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                        log::error!("Ledger read aborted: {}", e);
                        return None;
                    }
                    log::warn!("Skipping unreadable row: {}", e);
                    self.skipped_rows += 1;
                }
            }
        }
    }
}

/// Load an entire ledger into memory
///
/// # Errors
///
/// Returns an error only if the file cannot be opened; in that case no
/// records are loaded at all.
pub fn load_ledger(path: &Path) -> Result<Vec<TransactionRecord>, AnalysisError> {
    let mut reader = LedgerReader::new(path)?;
    let records: Vec<_> = reader.by_ref().collect();

    log::info!(
        "Loaded {} records from {} ({} fields defaulted, {} rows skipped)",
        records.len(),
        path.display(),
        reader.defaulted_fields(),
        reader.skipped_rows()
    );

    Ok(records)
}
