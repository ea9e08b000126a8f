//! Sequential reference traversals and result checks
//!
//! Single-threaded BFS and Dijkstra used to validate parallel runs, plus
//! label comparison and a predecessor consistency check.

use crate::engine::{INVALID_VERTEX, UNVISITED};
use crate::storage::{CsrGraph, NodeId};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

/// State for Dijkstra's priority queue
#[derive(Clone, Copy, PartialEq, Eq)]
struct State {
    cost: u32,
    node: u32,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hop count from `source` to every node (`UNVISITED` if unreachable)
///
/// An out-of-range source yields all `UNVISITED`.
#[must_use]
pub fn bfs_levels(graph: &CsrGraph, source: NodeId) -> Vec<u32> {
    let mut levels = vec![UNVISITED; graph.num_nodes()];
    if source.0 as usize >= levels.len() {
        return levels;
    }

    let mut queue = VecDeque::new();
    levels[source.0 as usize] = 0;
    queue.push_back(source.0);

    while let Some(node) = queue.pop_front() {
        let next = levels[node as usize] + 1;
        for edge in graph.edge_range(NodeId(node)) {
            let dst = graph.edge_target(edge);
            if levels[dst as usize] == UNVISITED {
                levels[dst as usize] = next;
                queue.push_back(dst);
            }
        }
    }

    levels
}

/// Dijkstra shortest distances over integer weights (1 when unweighted)
///
/// # Complexity
///
/// O((V + E) log V) using a binary heap.
#[must_use]
pub fn dijkstra(graph: &CsrGraph, source: NodeId) -> Vec<u32> {
    let mut dist = vec![UNVISITED; graph.num_nodes()];
    if source.0 as usize >= dist.len() {
        return dist;
    }

    let mut heap = BinaryHeap::new();
    dist[source.0 as usize] = 0;
    heap.push(State {
        cost: 0,
        node: source.0,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Skip stale entries
        if cost > dist[node as usize] {
            continue;
        }

        for edge in graph.edge_range(NodeId(node)) {
            let dst = graph.edge_target(edge);
            let next = cost.saturating_add(graph.edge_weight(edge));
            if next < dist[dst as usize] {
                dist[dst as usize] = next;
                heap.push(State {
                    cost: next,
                    node: dst,
                });
            }
        }
    }

    dist
}

/// Outcome of a result check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    /// Indices that failed the check, ascending
    pub mismatches: Vec<usize>,

    /// Number of entries examined
    pub checked: usize,
}

impl Validation {
    /// True when nothing mismatched
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// First failing index, if any
    #[must_use]
    pub fn first_mismatch(&self) -> Option<usize> {
        self.mismatches.first().copied()
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_mismatch() {
            None => write!(f, "CORRECT"),
            Some(first) => write!(
                f,
                "INCORRECT ({} mismatches, first at {first})",
                self.mismatches.len()
            ),
        }
    }
}

/// Compare labels element-wise
///
/// A length difference counts every index past the shorter slice as a
/// mismatch.
#[must_use]
pub fn compare_labels(expected: &[u32], actual: &[u32]) -> Validation {
    let checked = expected.len().max(actual.len());
    let mismatches = (0..checked)
        .filter(|&i| expected.get(i) != actual.get(i))
        .collect();
    Validation {
        mismatches,
        checked,
    }
}

/// Check that predecessors describe shortest-path edges
///
/// For every reached node `v` other than `source`, `preds[v]` must be a node
/// `p` with an edge `p → v` such that `labels[p] + w(p, v) == labels[v]`,
/// where `w` is the edge weight when `weighted` and 1 otherwise. The source
/// and unreached nodes must carry `INVALID_VERTEX`.
#[must_use]
pub fn check_predecessors(
    graph: &CsrGraph,
    source: NodeId,
    labels: &[u32],
    preds: &[u32],
    weighted: bool,
) -> Validation {
    let num_nodes = graph.num_nodes();
    if labels.len() != num_nodes || preds.len() != num_nodes {
        return Validation {
            mismatches: (0..num_nodes).collect(),
            checked: num_nodes,
        };
    }

    let consistent = |node: usize| -> bool {
        let pred = preds[node];
        if node == source.0 as usize || labels[node] == UNVISITED {
            return pred == INVALID_VERTEX;
        }
        if pred as usize >= num_nodes || labels[pred as usize] == UNVISITED {
            return false;
        }

        let base = labels[pred as usize];
        graph.edge_range(NodeId(pred)).any(|edge| {
            let w = if weighted { graph.edge_weight(edge) } else { 1 };
            graph.edge_target(edge) as usize == node && base.saturating_add(w) == labels[node]
        })
    };

    Validation {
        mismatches: (0..num_nodes).filter(|&v| !consistent(v)).collect(),
        checked: num_nodes,
    }
}
