//! Algorithm-supplied functor contracts
//!
//! An algorithm plugs into the engine by implementing both traits. The
//! engine is generic over them, so each algorithm gets a monomorphised
//! Advance/Filter pair.

use super::state::AlgorithmState;

/// Per-edge predicate and action used by Advance
pub trait EdgeFunctor: Sync {
    /// Attempt to relax edge `src → dst`
    ///
    /// Must install the candidate distance into `dst`'s label with an atomic
    /// read-modify-write and return true iff this invocation won.
    fn cond_edge(&self, src: u32, dst: u32, edge: usize, state: &AlgorithmState<'_>) -> bool;

    /// Side effect for a winning relaxation
    ///
    /// Called only when `cond_edge` returned true for the same invocation.
    fn apply_edge(&self, src: u32, dst: u32, edge: usize, state: &AlgorithmState<'_>);
}

/// Per-vertex predicate and action used by Filter
pub trait VertexFunctor: Sync {
    /// Whether `node` belongs in the next frontier
    fn cond_filter(&self, node: u32, state: &AlgorithmState<'_>) -> bool;

    /// Side effect for a vertex admitted to the next frontier
    fn apply_filter(&self, _node: u32, _state: &AlgorithmState<'_>) {}
}
