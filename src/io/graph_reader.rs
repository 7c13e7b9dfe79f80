//! Edge-list CSV reader
//!
//! Loads a [`WeightedDirectedGraph`] from a CSV file with the header
//! `from,to,weight`. Unlike the ledger reader this one is strict: a graph with
//! a silently dropped or zeroed edge would produce wrong distances, so any
//! malformed row aborts the load with its line number.

use crate::io::csv_format::EdgeRow;
use crate::types::{AnalysisError, WeightedDirectedGraph};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Largest accepted node count; any index must be below it
pub const MAX_NODES: usize = 1 << 24;

/// Load a graph from an edge-list file
///
/// The node count is one more than the largest index mentioned by any edge.
/// Indices at or above [`MAX_NODES`] are rejected.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - A row is malformed (`ParseError` with its line)
/// - A weight is negative (`NegativeWeight`)
pub fn load_graph(path: &Path) -> Result<WeightedDirectedGraph, AnalysisError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalysisError::file_not_found(&path.display().to_string()),
        _ => AnalysisError::from(e),
    })?;

    let graph = read_graph(file)?;
    log::info!(
        "Loaded graph from {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Read a graph from any CSV byte source
///
/// # Errors
///
/// See [`load_graph`].
pub fn read_graph<R: Read>(source: R) -> Result<WeightedDirectedGraph, AnalysisError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);
    let headers = reader.headers()?.clone();

    let mut edges = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map(|pos| pos.line());
        let row: EdgeRow = record
            .deserialize(Some(&headers))
            .map_err(|e| AnalysisError::parse_error(line, &e.to_string()))?;

        for node in [row.from, row.to] {
            if node >= MAX_NODES {
                return Err(AnalysisError::parse_error(
                    line,
                    &format!("Node index {} exceeds the limit of {} nodes", node, MAX_NODES),
                ));
            }
        }

        let weight = row.parse_weight(line)?;
        edges.push((row.from, row.to, weight));
    }

    // Indices are below MAX_NODES, so the increment cannot overflow
    let node_count = edges
        .iter()
        .map(|&(from, to, _)| from.max(to) + 1)
        .max()
        .unwrap_or(0);

    let mut graph = WeightedDirectedGraph::new(node_count);
    for (from, to, weight) in edges {
        graph.add_edge(from, to, weight)?;
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_chain_graph() {
        let csv_content = "from,to,weight\n0,1,10\n1,2,5\n2,3,8\n3,4,3\n";
        let graph = read_graph(csv_content.as_bytes()).unwrap();

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edges(2)[0].to, 3);
        assert_eq!(graph.edges(2)[0].weight, Decimal::from(8));
    }

    #[test]
    fn test_node_count_from_largest_index() {
        let graph = read_graph("from,to,weight\n7,2,1.5\n".as_bytes()).unwrap();
        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.edges(7)[0].weight, Decimal::new(15, 1));
    }

    #[test]
    fn test_header_only_is_empty_graph() {
        let graph = read_graph("from,to,weight\n".as_bytes()).unwrap();
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let graph = read_graph("from,to,weight\n 0 , 1 , 2.25 \n".as_bytes()).unwrap();
        assert_eq!(graph.edges(0)[0].weight, Decimal::new(225, 2));
    }

    #[rstest]
    #[case::bad_index("from,to,weight\n0,1,1\nx,1,1\n")]
    #[case::negative_index("from,to,weight\n-1,1,1\n")]
    #[case::missing_column("from,to,weight\n0,1\n")]
    #[case::index_overflows("from,to,weight\n0,18446744073709551615,1\n")]
    #[case::index_too_large("from,to,weight\n0,4000000000,1\n")]
    fn test_malformed_rows_are_parse_errors(#[case] content: &str) {
        let result = read_graph(content.as_bytes());
        assert!(
            matches!(result, Err(AnalysisError::ParseError { .. })),
            "expected parse error, got {:?}",
            result
        );
    }

    #[test]
    fn test_bad_weight_reports_line() {
        let result = read_graph("from,to,weight\n0,1,1\n1,2,heavy\n".as_bytes());
        assert_eq!(
            result,
            Err(AnalysisError::ParseError {
                line: Some(3),
                message: "Invalid weight 'heavy'".to_string()
            })
        );
    }

    #[test]
    fn test_oversized_index_reports_line() {
        let result = read_graph("from,to,weight\n0,1,1\n16777216,0,1\n".as_bytes());
        assert_eq!(
            result,
            Err(AnalysisError::ParseError {
                line: Some(3),
                message: "Node index 16777216 exceeds the limit of 16777216 nodes".to_string()
            })
        );
    }

    #[test]
    fn test_line_number_follows_multiline_row() {
        // The quoted weight on line 3 spans two lines, so the bad row is line 5
        let content = "from,to,weight\n0,1,1\n1,2,\"2\n\"\n2,3,bad\n";
        let result = read_graph(content.as_bytes());
        assert_eq!(
            result,
            Err(AnalysisError::ParseError {
                line: Some(5),
                message: "Invalid weight 'bad'".to_string()
            })
        );
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let result = read_graph("from,to,weight\n0,1,-4\n".as_bytes());
        assert_eq!(
            result,
            Err(AnalysisError::NegativeWeight {
                from: 0,
                to: 1,
                weight: Decimal::from(-4)
            })
        );
    }

    #[test]
    fn test_load_graph_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"from,to,weight\n0,1,3\n")
            .expect("Failed to write to temp file");

        let graph = load_graph(file.path()).unwrap();
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_load_graph_missing_file() {
        assert!(matches!(
            load_graph(Path::new("missing-edges.csv")),
            Err(AnalysisError::FileNotFound { .. })
        ));
    }
}
