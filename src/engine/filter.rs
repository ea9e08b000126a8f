//! Filter operator: validate and deduplicate Advance candidates

use super::error::EnactorError;
use super::functor::VertexFunctor;
use super::state::{try_filled, AlgorithmState};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

/// Reusable per-vertex claim bits for deduplication
///
/// All bits are clear between rounds.
#[derive(Debug)]
pub struct FilterBitmap {
    words: Vec<AtomicU64>,
}

impl FilterBitmap {
    /// Bitmap covering `num_nodes` vertices
    ///
    /// # Errors
    ///
    /// Returns [`EnactorError::Allocation`] if the words cannot be reserved.
    pub fn allocate(num_nodes: usize) -> Result<Self, EnactorError> {
        Ok(Self {
            words: try_filled(num_nodes.div_ceil(64), "filter bitmap", || AtomicU64::new(0))?,
        })
    }

    /// Set the bit for `node`; true iff this call set it
    #[inline]
    fn claim(&self, node: u32) -> bool {
        let mask = 1_u64 << (node % 64);
        self.words[(node / 64) as usize].fetch_or(mask, Ordering::Relaxed) & mask == 0
    }

    #[inline]
    fn release(&self, node: u32) {
        let mask = 1_u64 << (node % 64);
        self.words[(node / 64) as usize].fetch_and(!mask, Ordering::Relaxed);
    }
}

/// Run Filter over `candidates`
///
/// Drops sentinel and out-of-range ids, applies `cond_filter`, keeps the
/// first claim of each vertex and runs `apply_filter` on every survivor.
/// A duplicate-free, all-valid input comes back unchanged.
pub fn filter<F: VertexFunctor>(
    candidates: &[u32],
    functor: &F,
    state: &AlgorithmState<'_>,
    bitmap: &FilterBitmap,
) -> Vec<u32> {
    let num_nodes = state.num_nodes();

    let next: Vec<u32> = candidates
        .par_iter()
        .copied()
        .filter(|&node| {
            (node as usize) < num_nodes && functor.cond_filter(node, state) && bitmap.claim(node)
        })
        .collect();

    next.par_iter().for_each(|&node| {
        functor.apply_filter(node, state);
        bitmap.release(node);
    });

    next
}
