//! Transaction-related types for the fraud ledger
//!
//! This module defines the in-memory record every analysis pass operates on.

use rust_decimal::Decimal;
use serde::Serialize;

/// Simulation time tick of a transaction
pub type Step = u32;

/// Opaque account identifier (e.g. `C1231006815`, `M1979787155`)
///
/// The core never resolves identifiers into anything else; they are compared
/// only for equality.
pub type AccountId = String;

/// A single ledger entry
///
/// Records are immutable once loaded. The ledger owns them for the duration of
/// a run; analysis passes borrow them and return new collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    /// Time tick of the transaction
    pub step: Step,

    /// Symbolic category (`PAYMENT`, `TRANSFER`, `CASH_OUT`, ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Originating account
    #[serde(rename = "nameOrig")]
    pub sender: AccountId,

    /// Destination account
    #[serde(rename = "nameDest")]
    pub receiver: AccountId,

    /// Transferred value, never negative
    pub amount: Decimal,

    /// Whether the source marked the transaction as fraudulent
    #[serde(rename = "isFraud", serialize_with = "serialize_flag")]
    pub is_fraud: bool,
}

impl TransactionRecord {
    /// Create a record with the fraud flag cleared
    pub fn new(
        step: Step,
        kind: impl Into<String>,
        sender: impl Into<AccountId>,
        receiver: impl Into<AccountId>,
        amount: Decimal,
    ) -> Self {
        TransactionRecord {
            step,
            kind: kind.into(),
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
            is_fraud: false,
        }
    }

    /// Same record with the fraud flag set to `is_fraud`
    pub fn with_fraud_flag(mut self, is_fraud: bool) -> Self {
        self.is_fraud = is_fraud;
        self
    }
}

// The ledger format carries the flag as 0/1, not true/false.
fn serialize_flag<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}
