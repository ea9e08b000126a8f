//! Single-source shortest paths functor (non-negative integer weights)
//!
//! Frontier Bellman-Ford: a vertex re-enters the frontier every time its
//! label drops, and rounds continue until no label improves.

use crate::engine::{
    AlgorithmState, EdgeFunctor, Enactor, EnactorConfig, EnactorError, TraversalResult,
    VertexFunctor, INVALID_VERTEX,
};
use crate::metrics::EnactorStats;
use crate::storage::{CsrGraph, NodeId};

/// Weighted SSSP functor
#[derive(Debug, Clone, Copy, Default)]
pub struct SsspFunctor;

impl EdgeFunctor for SsspFunctor {
    #[inline]
    fn cond_edge(&self, src: u32, dst: u32, edge: usize, state: &AlgorithmState<'_>) -> bool {
        let candidate = state.label(src).saturating_add(state.weight(edge));
        state.relax_min(dst, candidate)
    }

    // `src` may have improved since `cond_edge`; the fresher offer is never
    // larger than the installed label, and `src` is requeued either way.
    #[inline]
    fn apply_edge(&self, src: u32, dst: u32, edge: usize, state: &AlgorithmState<'_>) {
        if let Some(preds) = state.predecessors() {
            let distance = state.label(src).saturating_add(state.weight(edge));
            preds.offer(dst, distance, src);
        }
    }
}

impl VertexFunctor for SsspFunctor {
    #[inline]
    fn cond_filter(&self, node: u32, _state: &AlgorithmState<'_>) -> bool {
        node != INVALID_VERTEX
    }
}

/// Compute single-source shortest paths over edge weights
///
/// Unweighted graphs use weight 1 on every edge.
///
/// # Errors
///
/// Returns an error if the configuration is rejected, the source is out of
/// range, or a round fails.
///
/// # Example
///
/// ```
/// use frontier_graph::{sssp, CsrGraph, EnactorConfig, NodeId};
///
/// let edges = vec![
///     (NodeId(0), NodeId(1), 4),
///     (NodeId(0), NodeId(2), 1),
///     (NodeId(2), NodeId(1), 2),
/// ];
/// let graph = CsrGraph::from_edge_list(&edges, 3).unwrap();
///
/// let (result, _) = sssp(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
/// // Shortest to node 1: 0→2→1 = 3 (not 0→1 = 4)
/// assert_eq!(result.distance(NodeId(1)), Some(3));
/// ```
pub fn sssp(
    graph: &CsrGraph,
    source: NodeId,
    config: &EnactorConfig,
) -> Result<(TraversalResult, EnactorStats), EnactorError> {
    let mut enactor = Enactor::init(graph, SsspFunctor, config.clone())?;
    enactor.reset(source, config.queue_sizing)?;
    let stats = enactor.enact()?.clone();
    Ok((enactor.result()?, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::UNVISITED;

    #[test]
    fn test_single_edge() {
        let edges = vec![(NodeId(0), NodeId(1), 5)];
        let graph = CsrGraph::from_edge_list(&edges, 2).unwrap();

        let (result, _) = sssp(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
        assert_eq!(result.labels, vec![0, 5]);
    }

    #[test]
    fn test_shorter_path_via_intermediate() {
        // Direct: 0 --5--> 2
        // Via 1:  0 --1--> 1 --2--> 2 (total: 3)
        let edges = vec![
            (NodeId(0), NodeId(1), 1),
            (NodeId(1), NodeId(2), 2),
            (NodeId(0), NodeId(2), 5),
        ];
        let graph = CsrGraph::from_edge_list(&edges, 3).unwrap();

        let config = EnactorConfig::default().with_predecessors(true);
        let (result, _) = sssp(&graph, NodeId(0), &config).unwrap();
        assert_eq!(result.distance(NodeId(2)), Some(3)); // Not 5
        assert_eq!(result.predecessor(NodeId(2)), Some(NodeId(1)));
        assert_eq!(
            result.path_to(NodeId(2)),
            Some(vec![NodeId(0), NodeId(1), NodeId(2)])
        );
    }

    #[test]
    fn test_cycle_in_graph() {
        // Cycle: 0 → 1 → 2 → 0, with 0 → 3
        let edges = vec![
            (NodeId(0), NodeId(1), 1),
            (NodeId(1), NodeId(2), 1),
            (NodeId(2), NodeId(0), 1),
            (NodeId(0), NodeId(3), 10),
        ];
        let graph = CsrGraph::from_edge_list(&edges, 4).unwrap();

        let (result, _) = sssp(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
        assert_eq!(result.labels, vec![0, 1, 2, 10]);
    }

    #[test]
    fn test_zero_weight_edges() {
        let edges = vec![(NodeId(0), NodeId(1), 0), (NodeId(1), NodeId(2), 0)];
        let graph = CsrGraph::from_edge_list(&edges, 3).unwrap();

        let (result, _) = sssp(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
        assert_eq!(result.labels, vec![0, 0, 0]);
    }

    #[test]
    fn test_unreachable_stays_unvisited() {
        let edges = vec![(NodeId(0), NodeId(1), 1), (NodeId(2), NodeId(3), 1)];
        let graph = CsrGraph::from_edge_list(&edges, 4).unwrap();

        let (result, _) = sssp(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
        assert_eq!(result.labels[2], UNVISITED);
        assert_eq!(result.labels[3], UNVISITED);
    }

    #[test]
    fn test_later_round_improves_label() {
        // 0 →(1) 1 →(1) 2 →(1) 3 and 0 →(10) 3: 3 is first reached at 10,
        // then lowered to 3 two rounds later
        let edges = vec![
            (NodeId(0), NodeId(1), 1),
            (NodeId(1), NodeId(2), 1),
            (NodeId(2), NodeId(3), 1),
            (NodeId(0), NodeId(3), 10),
        ];
        let graph = CsrGraph::from_edge_list(&edges, 4).unwrap();

        let config = EnactorConfig::default().with_predecessors(true);
        let (result, stats) = sssp(&graph, NodeId(0), &config).unwrap();
        assert_eq!(result.labels, vec![0, 1, 2, 3]);
        assert_eq!(result.predecessor(NodeId(3)), Some(NodeId(2)));
        assert_eq!(stats.search_depth, 4);
    }
}
