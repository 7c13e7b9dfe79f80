//! Shortest-path results
//!
//! A [`DistanceTable`] holds, for every node of a graph, the best cumulative
//! weight from a single source, plus the predecessor used to reach it.

use super::graph::NodeIndex;
use rust_decimal::Decimal;
use std::fmt;

/// Cumulative cost from the source to one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    /// Node is reachable at this total weight
    Reachable(Decimal),

    /// No path from the source exists
    Unreachable,
}

impl Distance {
    /// The total weight, if reachable
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Distance::Reachable(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reachable(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reachable(d) => write!(f, "{}", d.normalize()),
            Distance::Unreachable => write!(f, "Unreachable"),
        }
    }
}

/// Distances from one source node to every node of a graph
///
/// Built by the shortest-path solver: entries only ever decrease while the
/// solver runs and are final once it returns.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    source: NodeIndex,
    distances: Vec<Distance>,
    predecessors: Vec<Option<NodeIndex>>,
}

impl DistanceTable {
    /// Table for `node_count` nodes where only `source` is reachable (at 0)
    pub(crate) fn new(node_count: usize, source: NodeIndex) -> Self {
        let mut distances = vec![Distance::Unreachable; node_count];
        if let Some(entry) = distances.get_mut(source) {
            *entry = Distance::Reachable(Decimal::ZERO);
        }

        DistanceTable {
            source,
            distances,
            predecessors: vec![None; node_count],
        }
    }

    /// Lower the distance of `node`, reached through `via`
    pub(crate) fn improve(&mut self, node: NodeIndex, distance: Decimal, via: NodeIndex) {
        self.distances[node] = Distance::Reachable(distance);
        self.predecessors[node] = Some(via);
    }

    /// The node all distances are measured from
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Number of nodes covered by the table
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `node`; nodes outside the graph are unreachable
    pub fn distance(&self, node: NodeIndex) -> Distance {
        self.distances
            .get(node)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// All distances indexed by node
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Iterate `(node, distance)` pairs in node order
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, Distance)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// Node sequence of a shortest path from the source to `node`
    ///
    /// Returns `None` if `node` is unreachable. The path to the source itself
    /// is `[source]`.
    pub fn path_to(&self, node: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.distance(node).is_reachable() {
            return None;
        }

        let mut path = vec![node];
        let mut current = node;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}
