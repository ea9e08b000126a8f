//! Property-based tests for frontier-graph
//!
//! Parallel runs must agree with the sequential reference on arbitrary graphs

use frontier_graph::algorithms::reference::{bfs_levels, check_predecessors, dijkstra};
use frontier_graph::engine::{filter, AlgorithmState, FilterBitmap, UNVISITED};
use frontier_graph::{
    bfs, sssp, BfsFunctor, CsrGraph, Enactor, EnactorConfig, NodeId, SsspFunctor,
};
use proptest::prelude::*;

/// Node count plus a weighted edge list over it
fn prop_graph(
    max_nodes: u32,
    max_edges: usize,
) -> impl Strategy<Value = (u32, Vec<(NodeId, NodeId, u32)>)> {
    (1..=max_nodes).prop_flat_map(move |n| {
        let edge = (0..n, 0..n, 0u32..20).prop_map(|(s, d, w)| (NodeId(s), NodeId(d), w));
        (Just(n), prop::collection::vec(edge, 0..max_edges))
    })
}

fn config(threads: usize) -> EnactorConfig {
    EnactorConfig::default()
        .with_predecessors(true)
        .with_worker_threads(threads)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_csr_preserves_edges((n, edges) in prop_graph(30, 120)) {
        let graph = CsrGraph::from_edge_list(&edges, n as usize).unwrap();
        let (row_offsets, col_indices, weights) = graph.csr_components();

        prop_assert_eq!(row_offsets.len(), n as usize + 1);
        prop_assert_eq!(row_offsets[0], 0);
        prop_assert!(row_offsets.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(*row_offsets.last().unwrap() as usize, col_indices.len());
        prop_assert_eq!(weights.map(<[u32]>::len), Some(edges.len()));

        for node in 0..n {
            let expected: Vec<u32> = edges
                .iter()
                .filter(|(s, _, _)| s.0 == node)
                .map(|(_, d, _)| d.0)
                .collect();
            prop_assert_eq!(graph.outgoing_neighbors(NodeId(node)).unwrap(), expected.as_slice());
        }
    }

    #[test]
    fn prop_bfs_matches_reference(
        (n, edges) in prop_graph(40, 160),
        source in 0u32..40,
        threads in 1usize..4,
    ) {
        let source = NodeId(source % n);
        let graph = CsrGraph::from_edge_list(&edges, n as usize).unwrap();

        let (result, stats) = bfs(&graph, source, &config(threads)).unwrap();
        let expected = bfs_levels(&graph, source);
        prop_assert_eq!(&result.labels, &expected);
        prop_assert_eq!(result.labels[source.0 as usize], 0);

        // Eccentricity d terminates after d + 1 rounds
        let eccentricity = expected.iter().filter(|&&d| d != UNVISITED).max().copied().unwrap();
        prop_assert_eq!(stats.search_depth, eccentricity as usize + 1);

        let preds = result.predecessors.as_ref().unwrap();
        let check = check_predecessors(&graph, source, &result.labels, preds, false);
        prop_assert!(check.is_correct(), "{}", check);
    }

    #[test]
    fn prop_sssp_matches_dijkstra(
        (n, edges) in prop_graph(40, 160),
        source in 0u32..40,
        threads in 1usize..4,
    ) {
        let source = NodeId(source % n);
        let graph = CsrGraph::from_edge_list(&edges, n as usize).unwrap();

        let (result, _) = sssp(&graph, source, &config(threads)).unwrap();
        prop_assert_eq!(&result.labels, &dijkstra(&graph, source));

        let preds = result.predecessors.as_ref().unwrap();
        let check = check_predecessors(&graph, source, &result.labels, preds, true);
        prop_assert!(check.is_correct(), "{}", check);
    }

    #[test]
    fn prop_sssp_labels_monotone_per_round(
        (n, edges) in prop_graph(30, 120),
        source in 0u32..30,
    ) {
        let source = NodeId(source % n);
        let graph = CsrGraph::from_edge_list(&edges, n as usize).unwrap();
        let mut enactor = Enactor::init(&graph, SsspFunctor, config(2)).unwrap();
        enactor.reset(source, 1.3).unwrap();

        let mut previous = enactor.state().labels_snapshot();
        while enactor.step().unwrap() {
            let current = enactor.state().labels_snapshot();
            for (node, (c, p)) in current.iter().zip(&previous).enumerate() {
                prop_assert!(c <= p, "label of {} rose from {} to {}", node, p, c);
            }
            previous = current;
        }
        prop_assert_eq!(previous, dijkstra(&graph, source));
    }

    #[test]
    fn prop_edge_order_does_not_change_labels(
        (n, edges) in prop_graph(25, 100),
        seed in any::<u64>(),
    ) {
        let graph = CsrGraph::from_edge_list(&edges, n as usize).unwrap();

        // Deterministic shuffle (LCG keys)
        let mut keyed: Vec<(u64, (NodeId, NodeId, u32))> = edges
            .iter()
            .scan(seed, |state, &e| {
                *state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                Some((*state, e))
            })
            .collect();
        keyed.sort_by_key(|(k, _)| *k);
        let shuffled: Vec<_> = keyed.into_iter().map(|(_, e)| e).collect();
        let permuted = CsrGraph::from_edge_list(&shuffled, n as usize).unwrap();

        let a = sssp(&graph, NodeId(0), &EnactorConfig::default()).unwrap().0;
        let b = sssp(&permuted, NodeId(0), &EnactorConfig::default()).unwrap().0;
        prop_assert_eq!(a.labels, b.labels);
    }

    #[test]
    fn prop_filter_is_idempotent(
        n in 1usize..200,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..300),
    ) {
        let graph = CsrGraph::from_unweighted_edges(&[], n).unwrap();
        let state = AlgorithmState::allocate(&graph, false).unwrap();
        let bitmap = FilterBitmap::allocate(n).unwrap();

        let candidates: Vec<u32> = picks.iter().map(|i| i.index(n) as u32).collect();
        let once = filter(&candidates, &BfsFunctor, &state, &bitmap);

        let mut unique = once.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), once.len());

        let mut distinct = candidates.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(&unique, &distinct);

        let twice = filter(&once, &BfsFunctor, &state, &bitmap);
        prop_assert_eq!(twice, once);
    }
}
