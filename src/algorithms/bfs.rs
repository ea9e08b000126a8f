//! Breadth-first search functor (hop counts)
//!
//! A vertex is labelled the first time any edge reaches it. Every frontier
//! vertex of round `k` carries label `k`, so every offer into a vertex in
//! that round is `k + 1` and exactly one compare-exchange from `UNVISITED`
//! succeeds.

use crate::engine::{
    AlgorithmState, EdgeFunctor, Enactor, EnactorConfig, EnactorError, TraversalResult,
    VertexFunctor, INVALID_VERTEX,
};
use crate::metrics::EnactorStats;
use crate::storage::{CsrGraph, NodeId};

/// Unweighted BFS functor
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsFunctor;

impl EdgeFunctor for BfsFunctor {
    #[inline]
    fn cond_edge(&self, src: u32, dst: u32, _edge: usize, state: &AlgorithmState<'_>) -> bool {
        state.claim_unvisited(dst, state.label(src).saturating_add(1))
    }

    #[inline]
    fn apply_edge(&self, src: u32, dst: u32, _edge: usize, state: &AlgorithmState<'_>) {
        if let Some(preds) = state.predecessors() {
            preds.offer(dst, state.label(src).saturating_add(1), src);
        }
    }
}

impl VertexFunctor for BfsFunctor {
    #[inline]
    fn cond_filter(&self, node: u32, _state: &AlgorithmState<'_>) -> bool {
        node != INVALID_VERTEX
    }
}

/// Breadth-First Search from source node
///
/// Edge weights, if any, are ignored.
///
/// # Errors
///
/// Returns an error if the configuration is rejected, the source is out of
/// range, or a round fails.
///
/// # Example
///
/// ```
/// use frontier_graph::{bfs, CsrGraph, EnactorConfig, NodeId};
///
/// let edges = vec![(NodeId(0), NodeId(1)), (NodeId(1), NodeId(2))];
/// let graph = CsrGraph::from_unweighted_edges(&edges, 3).unwrap();
///
/// let (result, stats) = bfs(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
/// assert_eq!(result.distance(NodeId(2)), Some(2));
/// assert_eq!(stats.search_depth, 3);
/// ```
pub fn bfs(
    graph: &CsrGraph,
    source: NodeId,
    config: &EnactorConfig,
) -> Result<(TraversalResult, EnactorStats), EnactorError> {
    let mut enactor = Enactor::init(graph, BfsFunctor, config.clone())?;
    enactor.reset(source, config.queue_sizing)?;
    let stats = enactor.enact()?.clone();
    Ok((enactor.result()?, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::UNVISITED;

    #[test]
    fn test_bfs_simple() {
        let edges = vec![(NodeId(0), NodeId(1)), (NodeId(1), NodeId(2))];
        let graph = CsrGraph::from_unweighted_edges(&edges, 3).unwrap();

        let (result, _) = bfs(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
        assert_eq!(result.labels, vec![0, 1, 2]);
        assert_eq!(result.visited_count, 3);
    }

    #[test]
    fn test_bfs_disconnected() {
        let edges = vec![
            (NodeId(0), NodeId(1)),
            (NodeId(2), NodeId(3)), // Disconnected component
        ];
        let graph = CsrGraph::from_unweighted_edges(&edges, 4).unwrap();

        let (result, _) = bfs(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
        assert_eq!(result.labels, vec![0, 1, UNVISITED, UNVISITED]);
        assert!(!result.is_reachable(NodeId(2)));
    }

    #[test]
    fn test_bfs_ignores_weights() {
        let edges = vec![(NodeId(0), NodeId(1), 100), (NodeId(1), NodeId(2), 7)];
        let graph = CsrGraph::from_edge_list(&edges, 3).unwrap();

        let (result, _) = bfs(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
        assert_eq!(result.labels, vec![0, 1, 2]);
    }

    #[test]
    fn test_bfs_cycle_and_self_loop() {
        let edges = vec![
            (NodeId(0), NodeId(0)),
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(2), NodeId(0)),
        ];
        let graph = CsrGraph::from_unweighted_edges(&edges, 3).unwrap();

        let config = EnactorConfig::default().with_predecessors(true);
        let (result, stats) = bfs(&graph, NodeId(0), &config).unwrap();
        assert_eq!(result.labels, vec![0, 1, 2]);
        assert_eq!(result.predecessor(NodeId(0)), None);
        assert_eq!(result.predecessor(NodeId(2)), Some(NodeId(1)));
        assert_eq!(stats.search_depth, 3);
    }
}
