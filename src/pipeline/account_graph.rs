//! Account graph built from ledger records
//!
//! Interns account identifiers into dense node indices (first-seen order,
//! sender before receiver) and adds one edge `sender -> receiver` per record,
//! weighted by the record's amount.

use crate::types::{AnalysisError, NodeIndex, TransactionRecord, WeightedDirectedGraph};
use std::collections::HashMap;

/// Transfer graph between the accounts of a ledger
#[derive(Debug, Clone)]
pub struct AccountGraph {
    graph: WeightedDirectedGraph,
    names: Vec<String>,
    indices: HashMap<String, NodeIndex>,
}

impl AccountGraph {
    /// Build the graph for a set of records
    ///
    /// # Errors
    ///
    /// Cannot fail for records produced by the ledger reader; a record with a
    /// negative amount yields `AnalysisError::NegativeWeight`.
    pub fn from_records(records: &[TransactionRecord]) -> Result<Self, AnalysisError> {
        let mut names = Vec::new();
        let mut indices = HashMap::new();
        let mut edges = Vec::with_capacity(records.len());

        for record in records {
            let from = intern(&mut names, &mut indices, &record.sender);
            let to = intern(&mut names, &mut indices, &record.receiver);
            edges.push((from, to, record.amount));
        }

        let mut graph = WeightedDirectedGraph::new(names.len());
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }

        log::debug!(
            "Built account graph: {} accounts, {} transfers",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(AccountGraph {
            graph,
            names,
            indices,
        })
    }

    pub fn graph(&self) -> &WeightedDirectedGraph {
        &self.graph
    }

    /// Node index of an account
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    /// Account identifier of a node
    pub fn name_of(&self, node: NodeIndex) -> Option<&str> {
        self.names.get(node).map(String::as_str)
    }
}

fn intern(
    names: &mut Vec<String>,
    indices: &mut HashMap<String, NodeIndex>,
    name: &str,
) -> NodeIndex {
    if let Some(&index) = indices.get(name) {
        return index;
    }
    let index = names.len();
    names.push(name.to_string());
    indices.insert(name.to_string(), index);
    index
}
