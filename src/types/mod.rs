//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Ledger records and identifiers
//! - `graph`: Weighted directed account graph
//! - `distance`: Shortest-path distance table
//! - `error`: Error types for the fraud ledger

pub mod distance;
pub mod error;
pub mod graph;
pub mod transaction;

pub use distance::{Distance, DistanceTable};
pub use error::AnalysisError;
pub use graph::{Edge, NodeIndex, WeightedDirectedGraph};
pub use transaction::{AccountId, Step, TransactionRecord};
