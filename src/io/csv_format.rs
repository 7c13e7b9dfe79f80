//! CSV format handling for ledger rows, edge lists and ranked output
//!
//! This module centralizes all CSV format concerns, providing:
//! - LedgerRow, the positional view of one ledger line
//! - Tolerant conversion from LedgerRow to TransactionRecord
//! - EdgeRow for edge-list deserialization
//! - Ranked ledger serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{AnalysisError, Step, TransactionRecord};
use csv::StringRecord;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Raw ledger row, read by column position
///
/// Layout: `step, type, nameOrig, nameDest, amount, oldbalanceOrg,
/// newbalanceOrig, oldbalanceDest, newbalanceDest, isFraud, ...`.
/// The four balance columns are carried through untouched and never
/// interpreted; columns after `isFraud` are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerRow {
    pub step: String,
    pub kind: String,
    pub sender: String,
    pub receiver: String,
    pub amount: String,
    pub ignored_balances: [String; 4],
    pub fraud_flag: String,
}

impl LedgerRow {
    /// Column of the fraud flag, after four ignored balance columns
    pub const FRAUD_FLAG_COLUMN: usize = 9;

    /// Build a row from a CSV record; missing columns are empty
    pub fn from_record(record: &StringRecord) -> Self {
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();

        LedgerRow {
            step: field(0),
            kind: field(1),
            sender: field(2),
            receiver: field(3),
            amount: field(4),
            ignored_balances: [field(5), field(6), field(7), field(8)],
            fraud_flag: field(Self::FRAUD_FLAG_COLUMN),
        }
    }
}

/// A ledger field that could not be parsed and was replaced by its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultedField {
    /// Column name in the ledger header
    pub column: &'static str,
    /// The raw text that was rejected
    pub raw: String,
}

/// Convert a LedgerRow to a TransactionRecord
///
/// Never fails. Each numeric field that does not parse is replaced by its
/// default (`0`, zero amount, not fraudulent) and reported in the returned
/// list so the caller can log it:
/// - `step`: unsigned integer
/// - `amount`: non-negative decimal; negative values count as malformed
/// - `isFraud`: integer, non-zero means fraudulent
///
/// # Returns
///
/// The record plus the fields that were defaulted (empty for a clean row).
pub fn convert_ledger_row(row: LedgerRow) -> (TransactionRecord, Vec<DefaultedField>) {
    let mut defaulted = Vec::new();

    let step = parse_or_default::<Step>(&row.step, "step", &mut defaulted);

    let amount = match Decimal::from_str(row.amount.trim()) {
        Ok(amount) if amount >= Decimal::ZERO => amount,
        _ => {
            defaulted.push(DefaultedField {
                column: "amount",
                raw: row.amount.clone(),
            });
            Decimal::ZERO
        }
    };

    let is_fraud = parse_or_default::<i64>(&row.fraud_flag, "isFraud", &mut defaulted) != 0;

    let record = TransactionRecord {
        step,
        kind: row.kind,
        sender: row.sender,
        receiver: row.receiver,
        amount,
        is_fraud,
    };

    (record, defaulted)
}

fn parse_or_default<T>(raw: &str, column: &'static str, defaulted: &mut Vec<DefaultedField>) -> T
where
    T: FromStr + Default,
{
    raw.trim().parse().unwrap_or_else(|_| {
        defaulted.push(DefaultedField {
            column,
            raw: raw.to_string(),
        });
        T::default()
    })
}

/// Edge-list row: `from,to,weight`
///
/// The weight stays textual here so it is parsed as an exact decimal rather
/// than going through a float.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EdgeRow {
    pub from: usize,
    pub to: usize,
    pub weight: String,
}

impl EdgeRow {
    /// Parse the weight column
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ParseError` if the weight is not a decimal.
    pub fn parse_weight(&self, line: Option<u64>) -> Result<Decimal, AnalysisError> {
        Decimal::from_str(self.weight.trim()).map_err(|_| {
            AnalysisError::parse_error(line, &format!("Invalid weight '{}'", self.weight))
        })
    }
}

/// Write records as CSV, in the given order
///
/// Columns: `step,type,nameOrig,nameDest,amount,isFraud`.
///
/// # Errors
///
/// Returns an error if a record cannot be written or the output cannot be
/// flushed.
pub fn write_ranked_csv(
    records: &[TransactionRecord],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(output);

    if records.is_empty() {
        writer.write_record(["step", "type", "nameOrig", "nameDest", "amount", "isFraud"])?;
    }
    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(step: &str, amount: &str, fraud: &str) -> LedgerRow {
        LedgerRow {
            step: step.to_string(),
            kind: "TRANSFER".to_string(),
            sender: "C1".to_string(),
            receiver: "C2".to_string(),
            amount: amount.to_string(),
            fraud_flag: fraud.to_string(),
            ..LedgerRow::default()
        }
    }

    #[test]
    fn test_from_record_reads_by_position() {
        let record = StringRecord::from(vec![
            "1", "TRANSFER", "C1", "C2", "181.0", "181.0", "0.0", "0.0", "0.0", "1", "0",
        ]);
        let row = LedgerRow::from_record(&record);

        assert_eq!(row.step, "1");
        assert_eq!(row.kind, "TRANSFER");
        assert_eq!(row.sender, "C1");
        assert_eq!(row.receiver, "C2");
        assert_eq!(row.amount, "181.0");
        assert_eq!(row.ignored_balances, ["181.0", "0.0", "0.0", "0.0"].map(String::from));
        assert_eq!(row.fraud_flag, "1");
    }

    #[test]
    fn test_from_record_short_row_leaves_fields_empty() {
        let record = StringRecord::from(vec!["3", "PAYMENT", "C9"]);
        let row = LedgerRow::from_record(&record);

        assert_eq!(row.sender, "C9");
        assert_eq!(row.receiver, "");
        assert_eq!(row.amount, "");
        assert_eq!(row.fraud_flag, "");
    }

    #[test]
    fn test_convert_clean_row() {
        let (record, defaulted) = convert_ledger_row(row("7", " 9839.64 ", "1"));

        assert!(defaulted.is_empty());
        assert_eq!(record.step, 7);
        assert_eq!(record.amount, Decimal::new(983964, 2));
        assert!(record.is_fraud);
        assert_eq!(record.kind, "TRANSFER");
    }

    #[rstest]
    #[case::non_numeric_amount("1", "abc", "0", vec!["amount"])]
    #[case::negative_amount("1", "-5.0", "0", vec!["amount"])]
    #[case::empty_amount("1", "", "0", vec!["amount"])]
    #[case::bad_step("x", "10", "0", vec!["step"])]
    #[case::negative_step("-1", "10", "0", vec!["step"])]
    #[case::bad_flag("1", "10", "yes", vec!["isFraud"])]
    #[case::everything_bad("?", "?", "?", vec!["step", "amount", "isFraud"])]
    fn test_convert_defaults_malformed_fields(
        #[case] step: &str,
        #[case] amount: &str,
        #[case] fraud: &str,
        #[case] expected_columns: Vec<&str>,
    ) {
        let (record, defaulted) = convert_ledger_row(row(step, amount, fraud));

        let columns: Vec<_> = defaulted.iter().map(|d| d.column).collect();
        assert_eq!(columns, expected_columns);
        for field in &defaulted {
            match field.column {
                "step" => assert_eq!(record.step, 0),
                "amount" => assert_eq!(record.amount, Decimal::ZERO),
                "isFraud" => assert!(!record.is_fraud),
                other => panic!("unexpected column {}", other),
            }
        }
    }

    #[rstest]
    #[case::zero("0", false)]
    #[case::one("1", true)]
    #[case::other_non_zero("2", true)]
    #[case::padded(" 1 ", true)]
    fn test_fraud_flag(#[case] raw: &str, #[case] expected: bool) {
        let (record, defaulted) = convert_ledger_row(row("1", "1", raw));
        assert!(defaulted.is_empty());
        assert_eq!(record.is_fraud, expected);
    }

    #[test]
    fn test_write_ranked_csv() {
        let records = vec![
            TransactionRecord::new(1, "PAYMENT", "C1", "M1", Decimal::new(1050, 2)),
            TransactionRecord::new(2, "TRANSFER", "C2", "C3", Decimal::from(300))
                .with_fraud_flag(true),
        ];
        let mut output = Vec::new();

        write_ranked_csv(&records, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "step,type,nameOrig,nameDest,amount,isFraud\n\
             1,PAYMENT,C1,M1,10.50,0\n\
             2,TRANSFER,C2,C3,300,1\n"
        );
    }

    #[test]
    fn test_write_ranked_csv_empty_still_has_header() {
        let mut output = Vec::new();
        write_ranked_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "step,type,nameOrig,nameDest,amount,isFraud\n"
        );
    }
}
