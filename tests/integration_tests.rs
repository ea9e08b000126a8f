//! Integration tests for frontier-graph
//!
//! End-to-end runs through the public API: small reference scenarios,
//! enactor lifecycle, and loading Matrix-Market files from disk.

use frontier_graph::algorithms::reference::{
    bfs_levels, check_predecessors, compare_labels, dijkstra,
};
use frontier_graph::engine::{INVALID_VERTEX, UNVISITED};
use frontier_graph::{
    bfs, read_market, sssp, BfsFunctor, CsrGraph, Enactor, EnactorConfig, EnactorError,
    EnactorState, MarketOptions, NodeId, SsspFunctor,
};

fn diamond() -> CsrGraph {
    let edges = vec![
        (NodeId(0), NodeId(1)),
        (NodeId(0), NodeId(2)),
        (NodeId(1), NodeId(3)),
        (NodeId(2), NodeId(3)),
    ];
    CsrGraph::from_unweighted_edges(&edges, 4).unwrap()
}

#[test]
fn test_single_edge_frontier_sequence() {
    let graph = CsrGraph::from_unweighted_edges(&[(NodeId(0), NodeId(1))], 2).unwrap();
    let mut enactor = Enactor::init(&graph, BfsFunctor, EnactorConfig::default()).unwrap();
    enactor.reset(NodeId(0), 1.3).unwrap();

    assert_eq!(enactor.frontier().as_slice(), &[0]);
    assert!(enactor.step().unwrap());
    assert_eq!(enactor.frontier().as_slice(), &[1]);
    assert!(enactor.step().unwrap());
    assert!(enactor.frontier().is_empty());
    assert!(!enactor.step().unwrap());
    assert_eq!(enactor.phase(), EnactorState::Terminated);

    let mut labels = vec![0; 2];
    enactor.extract(&mut labels, None).unwrap();
    assert_eq!(labels, vec![0, 1]);
}

#[test]
fn test_source_without_outgoing_edges() {
    let graph = CsrGraph::from_unweighted_edges(&[(NodeId(1), NodeId(2))], 3).unwrap();

    let (result, stats) = bfs(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
    assert_eq!(result.labels, vec![0, UNVISITED, UNVISITED]);
    assert_eq!(result.visited_count, 1);
    assert_eq!(stats.search_depth, 1);
    assert_eq!(stats.edges_visited, 0);
}

#[test]
fn test_diamond_predecessor_is_either_parent() {
    let graph = diamond();
    let config = EnactorConfig::default().with_predecessors(true);

    for _ in 0..20 {
        let (result, _) = bfs(&graph, NodeId(0), &config).unwrap();
        assert_eq!(result.labels, vec![0, 1, 1, 2]);

        let pred = result.predecessor(NodeId(3)).unwrap();
        assert!(pred == NodeId(1) || pred == NodeId(2), "got {pred:?}");

        let preds = result.predecessors.as_ref().unwrap();
        assert_eq!(preds[0], INVALID_VERTEX);
        assert!(check_predecessors(&graph, NodeId(0), &result.labels, preds, false).is_correct());
    }
}

#[test]
fn test_direct_edge_beats_longer_path() {
    let edges = vec![
        (NodeId(0), NodeId(1), 5),
        (NodeId(1), NodeId(2), 3),
        (NodeId(0), NodeId(2), 2),
    ];
    let graph = CsrGraph::from_edge_list(&edges, 3).unwrap();

    for threads in [1, 2, 4] {
        let config = EnactorConfig::default()
            .with_predecessors(true)
            .with_worker_threads(threads);
        let (result, _) = sssp(&graph, NodeId(0), &config).unwrap();
        assert_eq!(result.labels, vec![0, 5, 2]);
        assert_eq!(result.predecessor(NodeId(2)), Some(NodeId(0)));
        assert_eq!(result.labels, dijkstra(&graph, NodeId(0)));
    }
}

#[test]
fn test_larger_graph_matches_reference() {
    // Grid 20x20 with right/down edges and a few long jumps
    let side = 20_u32;
    let id = |r: u32, c: u32| NodeId(r * side + c);
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            if c + 1 < side {
                edges.push((id(r, c), id(r, c + 1), 1 + (r + c) % 7));
            }
            if r + 1 < side {
                edges.push((id(r, c), id(r + 1, c), 1 + (r * c) % 5));
            }
        }
    }
    edges.push((id(0, 0), id(19, 19), 100));
    edges.push((id(0, 5), id(15, 0), 3));
    let graph = CsrGraph::from_edge_list(&edges, (side * side) as usize).unwrap();

    let config = EnactorConfig::default().with_predecessors(true);

    let (result, _) = bfs(&graph, NodeId(0), &config).unwrap();
    assert!(compare_labels(&bfs_levels(&graph, NodeId(0)), &result.labels).is_correct());
    let preds = result.predecessors.as_ref().unwrap();
    assert!(check_predecessors(&graph, NodeId(0), &result.labels, preds, false).is_correct());

    let (result, _) = sssp(&graph, NodeId(0), &config).unwrap();
    assert!(compare_labels(&dijkstra(&graph, NodeId(0)), &result.labels).is_correct());
    let preds = result.predecessors.as_ref().unwrap();
    assert!(check_predecessors(&graph, NodeId(0), &result.labels, preds, true).is_correct());
}

#[test]
fn test_enactor_reused_across_sources() {
    let graph = diamond();
    let config = EnactorConfig::default().with_predecessors(true);
    let mut enactor = Enactor::init(&graph, SsspFunctor, config).unwrap();

    for (source, expected) in [
        (0, vec![0, 1, 1, 2]),
        (1, vec![UNVISITED, 0, UNVISITED, 1]),
        (3, vec![UNVISITED, UNVISITED, UNVISITED, 0]),
    ] {
        enactor.reset(NodeId(source), 1.3).unwrap();
        enactor.enact().unwrap();
        let result = enactor.result().unwrap();
        assert_eq!(result.labels, expected);

        let preds = result.predecessors.as_ref().unwrap();
        assert_eq!(preds[source as usize], INVALID_VERTEX);
        assert!(check_predecessors(&graph, NodeId(source), &result.labels, preds, true)
            .is_correct());
    }
}

#[test]
fn test_source_out_of_range() {
    let graph = diamond();
    let err = bfs(&graph, NodeId(4), &EnactorConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        EnactorError::SourceOutOfRange {
            node: 4,
            num_nodes: 4
        }
    ));
}

#[test]
fn test_empty_graph_rejects_every_source() {
    let graph = CsrGraph::from_unweighted_edges(&[], 0).unwrap();
    assert!(bfs(&graph, NodeId(0), &EnactorConfig::default()).is_err());
}

#[tokio::test]
async fn test_market_file_end_to_end() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "%%MatrixMarket matrix coordinate integer general").unwrap();
    writeln!(file, "% diamond with a heavy shortcut").unwrap();
    writeln!(file, "4 4 5").unwrap();
    writeln!(file, "1 2 1").unwrap();
    writeln!(file, "1 3 4").unwrap();
    writeln!(file, "2 4 1").unwrap();
    writeln!(file, "3 4 1").unwrap();
    writeln!(file, "1 4 9").unwrap();
    file.flush().unwrap();

    let graph = read_market(file.path(), MarketOptions::default())
        .await
        .unwrap();
    assert_eq!(graph.num_nodes(), 4);
    assert_eq!(graph.num_edges(), 5);
    assert!(graph.is_weighted());

    let (result, _) = sssp(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
    assert_eq!(result.labels, vec![0, 1, 4, 2]);

    let (result, _) = bfs(&graph, NodeId(0), &EnactorConfig::default()).unwrap();
    assert_eq!(result.labels, vec![0, 1, 1, 1]);
}

#[tokio::test]
async fn test_market_undirected_option() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("chain.mtx");
    tokio::fs::write(&path, "3 3 2\n1 2\n2 3\n").await.unwrap();

    let directed = read_market(&path, MarketOptions::default()).await.unwrap();
    let (result, _) = bfs(&directed, NodeId(2), &EnactorConfig::default()).unwrap();
    assert_eq!(result.labels, vec![UNVISITED, UNVISITED, 0]);

    let undirected = read_market(&path, MarketOptions { undirected: true })
        .await
        .unwrap();
    assert_eq!(undirected.num_edges(), 4);
    let (result, _) = bfs(&undirected, NodeId(2), &EnactorConfig::default()).unwrap();
    assert_eq!(result.labels, vec![2, 1, 0]);
}

#[tokio::test]
async fn test_missing_market_file() {
    let err = read_market("/nonexistent/graph.mtx", MarketOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/graph.mtx"));
}
