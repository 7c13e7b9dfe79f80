//! Weighted directed graph of accounts
//!
//! Nodes are dense indices `0..V`. Each node owns an ordered adjacency list of
//! outgoing edges. Every weight is non-negative; `add_edge` enforces this so a
//! constructed graph always satisfies the shortest-path solver's precondition.

use super::error::AnalysisError;
use rust_decimal::Decimal;

/// Node identifier
pub type NodeIndex = usize;

/// Outgoing edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Destination node
    pub to: NodeIndex,

    /// Transfer cost, always `>= 0`
    pub weight: Decimal,
}

/// Directed graph with non-negative edge weights
///
/// The node set is fixed at construction. Edges are appended in insertion
/// order and parallel edges are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedDirectedGraph {
    adjacency: Vec<Vec<Edge>>,
}

impl WeightedDirectedGraph {
    /// Create a graph with `node_count` nodes and no edges
    pub fn new(node_count: usize) -> Self {
        WeightedDirectedGraph {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Add the edge `from -> to` with the given weight
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either endpoint is not a node of this graph
    /// - The weight is negative
    pub fn add_edge(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        weight: Decimal,
    ) -> Result<(), AnalysisError> {
        let node_count = self.node_count();
        if from >= node_count {
            return Err(AnalysisError::node_out_of_range(from, node_count));
        }
        if to >= node_count {
            return Err(AnalysisError::node_out_of_range(to, node_count));
        }
        if weight < Decimal::ZERO {
            return Err(AnalysisError::negative_weight(from, to, weight));
        }

        self.adjacency[from].push(Edge { to, weight });
        Ok(())
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `node` in insertion order
    ///
    /// Returns an empty slice for an index outside the graph.
    pub fn edges(&self, node: NodeIndex) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` is a node of this graph
    pub fn contains(&self, node: NodeIndex) -> bool {
        node < self.node_count()
    }
}
