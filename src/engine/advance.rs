//! Advance operator: expand the frontier across outgoing edges
//!
//! Based on Gunrock (Wang et al., ACM `ToPC` 2017) advance primitive.
//!
//! One candidate slot is emitted per visited edge: the destination when
//! `cond_edge` won, [`INVALID_VERTEX`] otherwise. Work is split over the
//! frontier and, nested, over each vertex's edge range, so one high-degree
//! vertex does not serialise a round.

use super::error::EnactorError;
use super::frontier::Frontier;
use super::functor::EdgeFunctor;
use super::state::{AlgorithmState, INVALID_VERTEX};
use crate::storage::{CsrGraph, NodeId};
use rayon::prelude::*;

/// Candidates produced by one Advance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvanceOutput {
    /// One slot per visited edge
    pub candidates: Vec<u32>,

    /// Edges visited this round
    pub edges_visited: usize,
}

/// Run Advance over `frontier`
///
/// Every edge of every frontier vertex is visited exactly once. Losing
/// invocations never reach `apply_edge`.
///
/// # Errors
///
/// Returns [`EnactorError::FrontierOverflow`] when the frontier's edges
/// exceed its capacity. The check runs before any label is touched.
pub fn advance<F: EdgeFunctor>(
    graph: &CsrGraph,
    frontier: &Frontier,
    functor: &F,
    state: &AlgorithmState<'_>,
    depth: usize,
) -> Result<AdvanceOutput, EnactorError> {
    if frontier.is_empty() {
        return Ok(AdvanceOutput::default());
    }

    let edges_visited: usize = frontier
        .as_slice()
        .par_iter()
        .map(|&src| graph.edge_range(NodeId(src)).len())
        .sum();

    if edges_visited > frontier.capacity() {
        return Err(EnactorError::FrontierOverflow {
            depth,
            required: edges_visited,
            capacity: frontier.capacity(),
        });
    }

    let candidates: Vec<u32> = frontier
        .as_slice()
        .par_iter()
        .flat_map(|&src| {
            graph.edge_range(NodeId(src)).into_par_iter().map(move |edge| {
                let dst = graph.edge_target(edge);
                if functor.cond_edge(src, dst, edge, state) {
                    functor.apply_edge(src, dst, edge, state);
                    dst
                } else {
                    INVALID_VERTEX
                }
            })
        })
        .collect();

    debug_assert_eq!(candidates.len(), edges_visited);

    Ok(AdvanceOutput {
        candidates,
        edges_visited,
    })
}
