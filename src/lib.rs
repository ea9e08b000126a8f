//! frontier-graph: frontier-driven parallel graph traversal
//!
//! # Overview
//!
//! Vertex-centric BFS and SSSP on a CSR topology. Each round expands the
//! active frontier across outgoing edges (Advance) and compacts the winners
//! into the next frontier (Filter), until the frontier is empty.
//!
//! # Quick Start
//!
//! ```
//! use frontier_graph::{sssp, CsrGraph, EnactorConfig, NodeId};
//!
//! let edges = vec![
//!     (NodeId(0), NodeId(1), 5),
//!     (NodeId(0), NodeId(2), 2),
//! ];
//! let graph = CsrGraph::from_edge_list(&edges, 3)?;
//!
//! let config = EnactorConfig::default().with_predecessors(true);
//! let (result, stats) = sssp(&graph, NodeId(0), &config)?;
//! assert_eq!(result.labels, vec![0, 5, 2]);
//! assert_eq!(result.predecessor(NodeId(2)), Some(NodeId(0)));
//! assert_eq!(stats.search_depth, 2);
//! # Ok::<(), frontier_graph::Error>(())
//! ```
//!
//! # Architecture
//!
//! - **Storage**: CSR topology, Matrix-Market loader
//! - **Engine**: atomic algorithm state, Advance/Filter operators, enactor
//! - **Algorithms**: BFS and SSSP functors, sequential reference
//! - **Parallelism**: `rayon` worker pool owned by each enactor

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod display;
pub mod engine;
pub mod logging;
pub mod metrics;
pub mod storage;

// Re-export core types
pub use algorithms::{bfs, sssp, BfsFunctor, SsspFunctor};
pub use engine::{Enactor, EnactorConfig, EnactorError, EnactorState, TraversalResult};
pub use metrics::EnactorStats;
pub use storage::{
    parse_market, read_market, CsrGraph, GraphError, MarketError, MarketOptions, NodeId,
};

// Error type
pub use anyhow::{Error, Result};
