//! Fraud Ledger Library
//! # Overview
//!
//! This library loads a ledger of money-transfer records from CSV and runs
//! three independent analysis passes over it:
//!
//! - **Ranking**: stable merge sort of transactions by amount, reported as the
//!   top N highest-value transfers
//! - **Pattern scan**: Rabin-Karp search for every occurrence of a literal
//!   pattern in a symbolic text
//! - **Shortest paths**: Dijkstra over a weighted directed graph, either read
//!   from an edge list or built from the ledger's sender/receiver pairs
//!
//! # Architecture
//!
//! - [`types`] - Core data types (TransactionRecord, WeightedDirectedGraph, DistanceTable, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - The analysis passes:
//!   - [`core::ranker`] - Stable ranking by amount
//!   - [`core::pattern_matcher`] - Rolling-hash substring search
//!   - [`core::shortest_path`] - Single-source shortest paths
//! - [`io`] - Tolerant ledger reader, edge-list reader and report writers
//! - [`pipeline`] - Run configuration and orchestration of the passes
//!
//! # Ledger Tolerance
//!
//! Loading never fails on bad content. A numeric field that does not parse
//! becomes 0 and the row is kept; a row that is not valid CSV is skipped.
//! Both are logged as warnings with their line number.

pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{find_pattern_offsets, rank, shortest_paths, top_by_amount, PatternMatcher};
pub use io::{load_graph, load_ledger, write_ranked_csv};
pub use pipeline::{AnalysisConfig, AnalysisOutcome, AnalysisPipeline, GraphSource};
pub use types::{
    AccountId, AnalysisError, Distance, DistanceTable, NodeIndex, Step, TransactionRecord,
    WeightedDirectedGraph,
};
