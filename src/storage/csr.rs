//! CSR (Compressed Sparse Row) graph topology
//!
//! Based on `GraphBLAST` (Yang et al., ACM `ToMS` 2022) for GPU-optimized sparse matrix operations.
//!
//! # CSR Format
//!
//! ```text
//! Graph: 0 → 1, 0 → 2, 1 → 2
//!
//! CSR:
//!   row_offsets: [0, 2, 3, 3]  // Node 0: edges [0..2), Node 1: [2..3), Node 2: [3..3)
//!   col_indices: [1, 2, 2]      // Edge 0 → node 1, edge 1 → node 2, edge 2 → node 2
//!   edge_weights: Some([5, 2, 3]) or None for unweighted traversal
//! ```
//!
//! The topology is immutable once built. Every traversal borrows it read-only.

use std::ops::Range;
use thiserror::Error;

/// Node identifier (zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Construction errors for [`CsrGraph`]
///
/// All of these are fatal: a run never starts on a malformed topology.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// `row_offsets` must hold at least the leading zero
    #[error("row_offsets is empty")]
    EmptyOffsets,

    /// `row_offsets[0]` must be zero
    #[error("row_offsets[0] is {0}, expected 0")]
    NonZeroFirstOffset(u32),

    /// Offsets must be non-decreasing
    #[error("row_offsets decreases at node {node}: {prev} > {next}")]
    DecreasingOffsets {
        /// Node whose end offset is smaller than its start offset
        node: usize,
        /// Offset at `node`
        prev: u32,
        /// Offset at `node + 1`
        next: u32,
    },

    /// Last offset must equal the number of edges
    #[error("row_offsets[n] is {last}, expected {num_edges}")]
    OffsetEdgeMismatch {
        /// Final offset
        last: u32,
        /// Length of `col_indices`
        num_edges: usize,
    },

    /// Column index does not name a node
    #[error("edge {edge} targets node {target}, graph has {num_nodes} nodes")]
    TargetOutOfRange {
        /// Edge position in `col_indices`
        edge: usize,
        /// Offending target
        target: u32,
        /// Number of nodes
        num_nodes: usize,
    },

    /// Edge endpoint outside the declared node count
    #[error("edge ({src}, {dst}) outside node range 0..{num_nodes}")]
    EndpointOutOfRange {
        /// Source node
        src: u32,
        /// Target node
        dst: u32,
        /// Number of nodes
        num_nodes: usize,
    },

    /// Weights array does not line up with edges
    #[error("edge_weights has {weights} entries, expected {num_edges}")]
    WeightLengthMismatch {
        /// Length of weights
        weights: usize,
        /// Length of `col_indices`
        num_edges: usize,
    },

    /// Graph exceeds the `u32` id space
    #[error("graph with {0} nodes or edges exceeds the u32 id space")]
    TooLarge(usize),

    /// Node lookup out of bounds
    #[error("Node ID {0} out of bounds")]
    NodeOutOfBounds(u32),

    /// A CSR array could not be reserved
    #[error("failed to allocate {len} entries for {what}")]
    Allocation {
        /// Array being built
        what: &'static str,
        /// Requested length
        len: usize,
    },
}

/// Zero-filled `Vec` of `len` entries, failing instead of aborting
fn try_zeroed<T: Copy + Default>(
    len: usize,
    what: &'static str,
) -> Result<Vec<T>, GraphError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| GraphError::Allocation { what, len })?;
    buf.resize(len, T::default());
    Ok(buf)
}

/// CSR (Compressed Sparse Row) graph
///
/// Optimized for:
/// - O(1) access to the outgoing edge range of a node
/// - Flat arrays that frontier operators index directly
///
/// # Example
///
/// ```
/// use frontier_graph::{CsrGraph, NodeId};
///
/// let edges = vec![(NodeId(0), NodeId(1), 1), (NodeId(0), NodeId(2), 1)];
/// let graph = CsrGraph::from_edge_list(&edges, 3).unwrap();
///
/// let neighbors = graph.outgoing_neighbors(NodeId(0)).unwrap();
/// assert_eq!(neighbors.len(), 2);
/// assert_eq!(graph.edge_range(NodeId(0)), 0..2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    /// Row offsets: node i's edges start at `row_offsets`[i]
    /// Length: `num_nodes` + 1
    row_offsets: Vec<u32>,

    /// Column indices (edge targets)
    /// Length: `num_edges`
    col_indices: Vec<u32>,

    /// Edge weights, `None` for unweighted graphs
    /// Length: `num_edges`
    edge_weights: Option<Vec<u32>>,
}

impl CsrGraph {
    /// Create graph directly from CSR arrays
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if any CSR invariant is violated.
    pub fn from_parts(
        row_offsets: Vec<u32>,
        col_indices: Vec<u32>,
        edge_weights: Option<Vec<u32>>,
    ) -> Result<Self, GraphError> {
        let first = *row_offsets.first().ok_or(GraphError::EmptyOffsets)?;
        if first != 0 {
            return Err(GraphError::NonZeroFirstOffset(first));
        }

        let num_nodes = row_offsets.len() - 1;
        let num_edges = col_indices.len();
        if u32::try_from(num_nodes).is_err() || u32::try_from(num_edges).is_err() {
            return Err(GraphError::TooLarge(num_nodes.max(num_edges)));
        }

        for (node, pair) in row_offsets.windows(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(GraphError::DecreasingOffsets {
                    node,
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }

        let last = row_offsets[num_nodes];
        if last as usize != num_edges {
            return Err(GraphError::OffsetEdgeMismatch { last, num_edges });
        }

        if let Some(edge) = col_indices.iter().position(|&t| t as usize >= num_nodes) {
            return Err(GraphError::TargetOutOfRange {
                edge,
                target: col_indices[edge],
                num_nodes,
            });
        }

        if let Some(weights) = &edge_weights {
            if weights.len() != num_edges {
                return Err(GraphError::WeightLengthMismatch {
                    weights: weights.len(),
                    num_edges,
                });
            }
        }

        Ok(Self {
            row_offsets,
            col_indices,
            edge_weights,
        })
    }

    /// Create weighted graph from edge list
    ///
    /// Edges are grouped by source; the relative order of a node's edges
    /// follows the input order.
    ///
    /// # Arguments
    ///
    /// * `edges` - List of (source, target, weight) tuples
    /// * `num_nodes` - Number of nodes; every endpoint must be below it
    ///
    /// # Errors
    ///
    /// Returns error if an endpoint is out of range
    pub fn from_edge_list(
        edges: &[(NodeId, NodeId, u32)],
        num_nodes: usize,
    ) -> Result<Self, GraphError> {
        let (row_offsets, col_indices, weights) = Self::build_rows(edges, num_nodes)?;
        Self::from_parts(row_offsets, col_indices, Some(weights))
    }

    /// Create unweighted graph from (source, target) pairs
    ///
    /// # Errors
    ///
    /// Returns error if an endpoint is out of range
    pub fn from_unweighted_edges(
        edges: &[(NodeId, NodeId)],
        num_nodes: usize,
    ) -> Result<Self, GraphError> {
        let weighted: Vec<_> = edges.iter().map(|&(s, d)| (s, d, 1)).collect();
        let (row_offsets, col_indices, _) = Self::build_rows(&weighted, num_nodes)?;
        Self::from_parts(row_offsets, col_indices, None)
    }

    fn build_rows(
        edges: &[(NodeId, NodeId, u32)],
        num_nodes: usize,
    ) -> Result<(Vec<u32>, Vec<u32>, Vec<u32>), GraphError> {
        if u32::try_from(edges.len()).is_err() {
            return Err(GraphError::TooLarge(edges.len()));
        }
        if u32::try_from(num_nodes).is_err() {
            return Err(GraphError::TooLarge(num_nodes));
        }

        // Counting sort by source keeps per-source input order
        let mut degree: Vec<u32> = try_zeroed(num_nodes, "degrees")?;
        for &(src, dst, _) in edges {
            if src.0 as usize >= num_nodes || dst.0 as usize >= num_nodes {
                return Err(GraphError::EndpointOutOfRange {
                    src: src.0,
                    dst: dst.0,
                    num_nodes,
                });
            }
            degree[src.0 as usize] += 1;
        }

        let mut row_offsets = Vec::new();
        row_offsets
            .try_reserve_exact(num_nodes + 1)
            .map_err(|_| GraphError::Allocation {
                what: "row_offsets",
                len: num_nodes + 1,
            })?;
        let mut offset = 0_u32;
        row_offsets.push(offset);
        for d in &degree {
            offset += d;
            row_offsets.push(offset);
        }

        let mut cursor: Vec<u32> = row_offsets[..num_nodes].to_vec();
        let mut col_indices: Vec<u32> = try_zeroed(edges.len(), "col_indices")?;
        let mut weights: Vec<u32> = try_zeroed(edges.len(), "edge_weights")?;
        for &(src, dst, weight) in edges {
            let slot = &mut cursor[src.0 as usize];
            col_indices[*slot as usize] = dst.0;
            weights[*slot as usize] = weight;
            *slot += 1;
        }

        Ok((row_offsets, col_indices, weights))
    }

    /// Edge range `[begin, end)` of a node into `col_indices` (O(1))
    ///
    /// Callers must pass a node below [`num_nodes`](Self::num_nodes); the
    /// frontier operators only ever hold validated ids.
    #[inline]
    #[must_use]
    pub fn edge_range(&self, node: NodeId) -> Range<usize> {
        let idx = node.0 as usize;
        self.row_offsets[idx] as usize..self.row_offsets[idx + 1] as usize
    }

    /// Get outgoing neighbors of a node
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn outgoing_neighbors(&self, node: NodeId) -> Result<&[u32], GraphError> {
        if (node.0 as usize) >= self.num_nodes() {
            return Err(GraphError::NodeOutOfBounds(node.0));
        }
        Ok(&self.col_indices[self.edge_range(node)])
    }

    /// Out-degree of a node (0 for out-of-range ids)
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        if (node.0 as usize) >= self.num_nodes() {
            return 0;
        }
        self.edge_range(node).len()
    }

    /// Target of edge `edge`
    #[inline]
    #[must_use]
    pub fn edge_target(&self, edge: usize) -> u32 {
        self.col_indices[edge]
    }

    /// Weight of edge `edge` (1 when the graph is unweighted)
    #[inline]
    #[must_use]
    pub fn edge_weight(&self, edge: usize) -> u32 {
        self.edge_weights.as_ref().map_or(1, |w| w[edge])
    }

    /// Edge weights, if any
    #[must_use]
    pub fn edge_weights(&self) -> Option<&[u32]> {
        self.edge_weights.as_deref()
    }

    /// Whether explicit weights are attached
    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        self.edge_weights.is_some()
    }

    /// Drop weights, turning the graph into a uniform-weight topology
    #[must_use]
    pub fn without_weights(mut self) -> Self {
        self.edge_weights = None;
        self
    }

    /// Get number of nodes
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.row_offsets.len() - 1
    }

    /// Get number of edges
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.col_indices.len()
    }

    /// Get CSR components (`row_offsets`, `col_indices`, `edge_weights`)
    #[must_use]
    pub fn csr_components(&self) -> (&[u32], &[u32], Option<&[u32]>) {
        (&self.row_offsets, &self.col_indices, self.edge_weights())
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            row_offsets: vec![0],
            col_indices: Vec::new(),
            edge_weights: None,
        }
    }
}
