//! Traversal algorithms expressed as functor pairs
//!
//! Each algorithm supplies an [`EdgeFunctor`](crate::engine::EdgeFunctor)
//! and [`VertexFunctor`](crate::engine::VertexFunctor) to the enactor.
//! `reference` holds the sequential versions used for validation.

pub mod bfs;
pub mod reference;
pub mod sssp;

pub use bfs::{bfs, BfsFunctor};
pub use reference::{bfs_levels, check_predecessors, compare_labels, dijkstra, Validation};
pub use sssp::{sssp, SsspFunctor};
