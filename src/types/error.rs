//! Error types for the fraud ledger
//!
//! This module defines every error the library can report.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Ledger or edge file not found, unreadable
//! - **CSV Parsing Errors**: Malformed edge lists, unwritable output
//! - **Graph Errors**: Out-of-range nodes, negative weights
//! - **Configuration Errors**: Invalid hash parameters, unknown accounts, bad options
//!
//! Malformed fields in ledger rows are not errors: the reader substitutes a
//! default and keeps going.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the fraud ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents the run from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A node index does not exist in the graph
    #[error("Node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending index
        node: usize,
        /// Number of nodes in the graph
        node_count: usize,
    },

    /// An edge weight is negative
    ///
    /// Shortest paths are only defined here for non-negative weights, so such
    /// edges are rejected when the graph is built.
    #[error("Negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        /// Edge origin
        from: usize,
        /// Edge destination
        to: usize,
        /// The rejected weight
        weight: Decimal,
    },

    /// Rolling hash parameters are unusable
    #[error("Invalid rolling hash parameters: base {base}, modulus {modulus} (both must be in 2..=4294967295)")]
    InvalidHashParameters {
        /// Alphabet radix
        base: u64,
        /// Hash modulus
        modulus: u64,
    },

    /// An account identifier does not appear in the ledger
    #[error("Unknown account '{name}'")]
    UnknownAccount {
        /// The identifier that was looked up
        name: String,
    },

    /// A configuration value is out of its allowed range
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration
        message: String,
    },
}

impl From<std::io::Error> for AnalysisError {
    fn from(error: std::io::Error) -> Self {
        AnalysisError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        AnalysisError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl AnalysisError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        AnalysisError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: &str) -> Self {
        AnalysisError::ParseError {
            line,
            message: message.to_string(),
        }
    }

    /// Create a NodeOutOfRange error
    pub fn node_out_of_range(node: usize, node_count: usize) -> Self {
        AnalysisError::NodeOutOfRange { node, node_count }
    }

    /// Create a NegativeWeight error
    pub fn negative_weight(from: usize, to: usize, weight: Decimal) -> Self {
        AnalysisError::NegativeWeight { from, to, weight }
    }

    /// Create an InvalidHashParameters error
    pub fn invalid_hash_parameters(base: u64, modulus: u64) -> Self {
        AnalysisError::InvalidHashParameters { base, modulus }
    }

    /// Create an UnknownAccount error
    pub fn unknown_account(name: &str) -> Self {
        AnalysisError::UnknownAccount {
            name: name.to_string(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(message: &str) -> Self {
        AnalysisError::InvalidConfig {
            message: message.to_string(),
        }
    }
}
