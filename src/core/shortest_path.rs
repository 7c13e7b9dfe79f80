//! Single-source shortest paths (Dijkstra)
//!
//! The frontier is a binary heap of `(distance, node)` entries. Improving a
//! node pushes a fresh entry instead of updating the old one; when an entry is
//! popped whose distance is worse than the table's, it is stale and skipped.
//!
//! Every node is in one of three states while the solver runs:
//! - unvisited: distance unknown (infinite), never pushed
//! - frontier: has a best-known distance, at least one live heap entry
//! - settled: popped with its final distance, never improved again
//!
//! Correctness relies on non-negative weights, which
//! [`WeightedDirectedGraph::add_edge`] guarantees.

use crate::types::{AnalysisError, Distance, DistanceTable, NodeIndex, WeightedDirectedGraph};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry for a node at a tentative distance
///
/// Ordering is reversed so that `BinaryHeap` (a max-heap) pops the smallest
/// distance first. Ties break on the lower node index to keep runs
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    distance: Decimal,
    node: NodeIndex,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute shortest distances from `source` to every node of `graph`
///
/// # Returns
///
/// A [`DistanceTable`] where each node is either reachable at its minimum
/// total weight or unreachable. The source is always at distance 0.
///
/// # Errors
///
/// Returns `AnalysisError::NodeOutOfRange` if `source` is not a node of the
/// graph.
///
/// # Examples
///
/// ```
/// use fraud_ledger::core::shortest_path::shortest_paths;
/// use fraud_ledger::{Distance, WeightedDirectedGraph};
/// use rust_decimal::Decimal;
///
/// let mut graph = WeightedDirectedGraph::new(3);
/// graph.add_edge(0, 1, Decimal::from(4)).unwrap();
/// graph.add_edge(1, 2, Decimal::from(6)).unwrap();
///
/// let table = shortest_paths(&graph, 0).unwrap();
/// assert_eq!(table.distance(2), Distance::Reachable(Decimal::from(10)));
/// ```
pub fn shortest_paths(
    graph: &WeightedDirectedGraph,
    source: NodeIndex,
) -> Result<DistanceTable, AnalysisError> {
    if !graph.contains(source) {
        return Err(AnalysisError::node_out_of_range(source, graph.node_count()));
    }

    let mut table = DistanceTable::new(graph.node_count(), source);
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        distance: Decimal::ZERO,
        node: source,
    });

    let mut settled = 0usize;
    let mut stale = 0usize;

    while let Some(FrontierEntry { distance, node }) = frontier.pop() {
        if let Distance::Reachable(best) = table.distance(node) {
            if distance > best {
                stale += 1;
                continue;
            }
        }
        settled += 1;

        for edge in graph.edges(node) {
            // Overflow cannot be an improvement
            let Some(candidate) = distance.checked_add(edge.weight) else {
                log::warn!(
                    "Skipping edge {} -> {}: distance overflow",
                    node,
                    edge.to
                );
                continue;
            };

            let improves = match table.distance(edge.to) {
                Distance::Reachable(current) => candidate < current,
                Distance::Unreachable => true,
            };

            if improves {
                table.improve(edge.to, candidate, node);
                frontier.push(FrontierEntry {
                    distance: candidate,
                    node: edge.to,
                });
            }
        }
    }

    log::debug!(
        "Solved shortest paths from node {}: {} nodes settled, {} stale entries skipped",
        source,
        settled,
        stale
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal::prelude::ToPrimitive;

    fn graph(node_count: usize, edges: &[(usize, usize, i64)]) -> WeightedDirectedGraph {
        let mut graph = WeightedDirectedGraph::new(node_count);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, Decimal::from(weight)).unwrap();
        }
        graph
    }

    fn values(table: &DistanceTable) -> Vec<Option<i64>> {
        table
            .distances()
            .iter()
            .map(|d| d.value().and_then(|v| v.to_i64()))
            .collect()
    }

    /// Bellman–Ford reference: relax every edge V-1 times
    fn reference_distances(graph: &WeightedDirectedGraph, source: usize) -> Vec<Option<Decimal>> {
        let n = graph.node_count();
        let mut dist = vec![None; n];
        dist[source] = Some(Decimal::ZERO);
        for _ in 1..n.max(2) {
            for u in 0..n {
                let Some(du) = dist[u] else { continue };
                for edge in graph.edges(u) {
                    let candidate = du + edge.weight;
                    if dist[edge.to].map_or(true, |dv| candidate < dv) {
                        dist[edge.to] = Some(candidate);
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn test_transfer_chain() {
        let g = graph(5, &[(0, 1, 10), (1, 2, 5), (2, 3, 8), (3, 4, 3)]);
        let table = shortest_paths(&g, 0).unwrap();

        assert_eq!(
            values(&table),
            vec![Some(0), Some(10), Some(15), Some(23), Some(26)]
        );
        assert_eq!(table.path_to(4), Some(vec![0, 1, 2, 3, 4]));
    }

    #[rstest]
    #[case::shortcut_beats_direct(
        4,
        vec![(0, 3, 20), (0, 1, 2), (1, 2, 3), (2, 3, 4)],
        vec![Some(0), Some(2), Some(5), Some(9)]
    )]
    #[case::upstream_unreachable(
        3,
        vec![(1, 0, 1), (0, 2, 7)],
        vec![Some(0), None, Some(7)]
    )]
    #[case::isolated_source(3, vec![], vec![Some(0), None, None])]
    #[case::zero_weights(3, vec![(0, 1, 0), (1, 2, 0)], vec![Some(0), Some(0), Some(0)])]
    #[case::cycle(3, vec![(0, 1, 1), (1, 2, 1), (2, 0, 1)], vec![Some(0), Some(1), Some(2)])]
    #[case::self_loop(2, vec![(0, 0, 5), (0, 1, 1)], vec![Some(0), Some(1)])]
    #[case::parallel_edges(2, vec![(0, 1, 9), (0, 1, 4), (0, 1, 6)], vec![Some(0), Some(4)])]
    fn test_shortest_paths(
        #[case] node_count: usize,
        #[case] edges: Vec<(usize, usize, i64)>,
        #[case] expected: Vec<Option<i64>>,
    ) {
        let g = graph(node_count, &edges);
        let table = shortest_paths(&g, 0).unwrap();
        assert_eq!(values(&table), expected);
    }

    #[test]
    fn test_stale_entries_are_skipped() {
        // Node 2 is pushed at 10, then improved to 3 via node 1
        let g = graph(4, &[(0, 2, 10), (0, 1, 1), (1, 2, 2), (2, 3, 1)]);
        let table = shortest_paths(&g, 0).unwrap();

        assert_eq!(values(&table), vec![Some(0), Some(1), Some(3), Some(4)]);
        assert_eq!(table.path_to(3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_fractional_weights() {
        let mut g = WeightedDirectedGraph::new(3);
        g.add_edge(0, 1, Decimal::new(1025, 2)).unwrap();
        g.add_edge(1, 2, Decimal::new(75, 2)).unwrap();

        let table = shortest_paths(&g, 0).unwrap();
        assert_eq!(table.distance(2), Distance::Reachable(Decimal::from(11)));
    }

    #[test]
    fn test_source_out_of_range() {
        let g = graph(2, &[(0, 1, 1)]);
        assert_eq!(
            shortest_paths(&g, 2),
            Err(AnalysisError::NodeOutOfRange { node: 2, node_count: 2 })
        );
    }

    #[test]
    fn test_solver_is_idempotent() {
        let g = graph(4, &[(0, 1, 3), (1, 3, 3), (0, 2, 1), (2, 3, 4)]);
        assert_eq!(shortest_paths(&g, 0), shortest_paths(&g, 0));
    }

    #[test]
    fn test_overflowing_edge_is_not_taken() {
        let mut g = WeightedDirectedGraph::new(3);
        g.add_edge(0, 1, Decimal::MAX).unwrap();
        g.add_edge(1, 2, Decimal::MAX).unwrap();

        let table = shortest_paths(&g, 0).unwrap();
        assert_eq!(table.distance(1), Distance::Reachable(Decimal::MAX));
        assert_eq!(table.distance(2), Distance::Unreachable);
    }

    #[test]
    fn test_frontier_pops_smallest_distance_first() {
        let mut heap = BinaryHeap::new();
        for (distance, node) in [(5, 0), (1, 3), (1, 1), (9, 2)] {
            heap.push(FrontierEntry {
                distance: Decimal::from(distance),
                node,
            });
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.node).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    fn arb_graph() -> impl Strategy<Value = (WeightedDirectedGraph, usize)> {
        (1usize..8).prop_flat_map(|n| {
            (
                prop::collection::vec((0..n, 0..n, 0i64..50), 0..20),
                0..n,
            )
                .prop_map(move |(edges, source)| (graph(n, &edges), source))
        })
    }

    proptest! {
        #[test]
        fn prop_matches_bellman_ford((g, source) in arb_graph()) {
            let table = shortest_paths(&g, source).unwrap();
            let expected = reference_distances(&g, source);

            prop_assert_eq!(table.distance(source), Distance::Reachable(Decimal::ZERO));
            for node in 0..g.node_count() {
                prop_assert_eq!(table.distance(node).value(), expected[node]);
            }
        }

        #[test]
        fn prop_triangle_inequality((g, source) in arb_graph()) {
            let table = shortest_paths(&g, source).unwrap();

            for u in 0..g.node_count() {
                let Some(du) = table.distance(u).value() else { continue };
                for edge in g.edges(u) {
                    let dv = table.distance(edge.to).value();
                    prop_assert!(dv.is_some());
                    prop_assert!(dv.unwrap() <= du + edge.weight);
                }
            }
        }

        #[test]
        fn prop_paths_sum_to_distance((g, source) in arb_graph()) {
            let table = shortest_paths(&g, source).unwrap();

            for node in 0..g.node_count() {
                let Some(path) = table.path_to(node) else { continue };
                prop_assert_eq!(path[0], source);
                let total = path.windows(2).try_fold(Decimal::ZERO, |acc, hop| {
                    g.edges(hop[0])
                        .iter()
                        .filter(|e| e.to == hop[1])
                        .map(|e| e.weight)
                        .min()
                        .map(|w| acc + w)
                });
                prop_assert_eq!(total, table.distance(node).value());
            }
        }
    }
}
