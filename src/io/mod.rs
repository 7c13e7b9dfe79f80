//! I/O module
//!
//! Handles ledger and graph input plus report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, ranked output serialization)
//! - `ledger_reader` - Tolerant ledger reader with iterator interface
//! - `graph_reader` - Strict edge-list reader
//! - `report` - Plain-text report sections

pub mod csv_format;
pub mod graph_reader;
pub mod ledger_reader;
pub mod report;

pub use csv_format::{convert_ledger_row, write_ranked_csv, EdgeRow, LedgerRow};
pub use graph_reader::{load_graph, read_graph};
pub use ledger_reader::{load_ledger, LedgerReader};
