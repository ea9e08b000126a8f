//! Per-run algorithm state (labels, predecessors, edge weights)
//!
//! Every slot is an atomic so that many concurrent relaxations can target
//! the same vertex without locks. Inside a round all accesses are
//! `Relaxed`; the join at the end of each parallel operator orders rounds.

use super::error::EnactorError;
use crate::storage::CsrGraph;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Label of a vertex not reached yet
pub const UNVISITED: u32 = u32::MAX;

/// Placeholder id: "no vertex" in candidates and predecessor slots
pub const INVALID_VERTEX: u32 = u32::MAX;

/// Empty predecessor slot: distance `u32::MAX`, predecessor `INVALID_VERTEX`
const EMPTY_SLOT: u64 = u64::MAX;

pub(crate) fn try_filled<T>(
    len: usize,
    what: &'static str,
    make: impl Fn() -> T,
) -> Result<Vec<T>, EnactorError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(len)
        .map_err(|_| EnactorError::Allocation {
            what,
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    slots.extend((0..len).map(|_| make()));
    Ok(slots)
}

/// Predecessor slots
///
/// Each slot packs `(offered distance << 32) | predecessor`. An offer
/// replaces the slot only when its distance is strictly smaller, so the
/// surviving predecessor always belongs to the smallest distance offered.
/// Among equal offers the first to arrive keeps the slot.
#[derive(Debug)]
pub struct PredecessorSlots {
    slots: Vec<AtomicU64>,
}

impl PredecessorSlots {
    fn allocate(len: usize) -> Result<Self, EnactorError> {
        Ok(Self {
            slots: try_filled(len, "predecessors", || AtomicU64::new(EMPTY_SLOT))?,
        })
    }

    /// Offer `pred` as predecessor of `node` at `distance`
    ///
    /// Returns whether the slot changed.
    pub fn offer(&self, node: u32, distance: u32, pred: u32) -> bool {
        let packed = (u64::from(distance) << 32) | u64::from(pred);
        self.slots[node as usize]
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                (packed >> 32 < current >> 32).then_some(packed)
            })
            .is_ok()
    }

    /// Recorded predecessor of `node` (`INVALID_VERTEX` if none)
    #[must_use]
    pub fn get(&self, node: u32) -> u32 {
        #[allow(clippy::cast_possible_truncation)] // Low half holds the id
        let pred = self.slots[node as usize].load(Ordering::Relaxed) as u32;
        pred
    }

    /// Number of slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot.get_mut() = EMPTY_SLOT;
        }
    }
}

/// Mutable per-vertex state of one traversal run
///
/// Exclusively owned by one [`Enactor`](super::Enactor); operators and
/// functors receive it by shared reference and mutate it only through
/// atomic slot updates.
#[derive(Debug)]
pub struct AlgorithmState<'g> {
    labels: Vec<AtomicU32>,
    predecessors: Option<PredecessorSlots>,
    weights: Option<&'g [u32]>,
}

impl<'g> AlgorithmState<'g> {
    /// Allocate state sized to `graph`
    ///
    /// # Errors
    ///
    /// Returns [`EnactorError::Allocation`] if a per-vertex array cannot be
    /// reserved.
    pub fn allocate(graph: &'g CsrGraph, mark_predecessors: bool) -> Result<Self, EnactorError> {
        let n = graph.num_nodes();
        let labels = try_filled(n, "labels", || AtomicU32::new(UNVISITED))?;
        let predecessors = if mark_predecessors {
            Some(PredecessorSlots::allocate(n)?)
        } else {
            None
        };

        Ok(Self {
            labels,
            predecessors,
            weights: graph.edge_weights(),
        })
    }

    /// Reinitialise for a run from `source`
    pub(crate) fn reset(&mut self, source: u32) {
        for label in &mut self.labels {
            *label.get_mut() = UNVISITED;
        }
        *self.labels[source as usize].get_mut() = 0;
        if let Some(preds) = &mut self.predecessors {
            preds.clear();
        }
    }

    /// Number of vertices
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Current label of `node`
    #[inline]
    #[must_use]
    pub fn label(&self, node: u32) -> u32 {
        self.labels[node as usize].load(Ordering::Relaxed)
    }

    /// Install `candidate` into `labels[node]` if strictly smaller
    ///
    /// Returns true iff this call lowered the label.
    #[inline]
    pub fn relax_min(&self, node: u32, candidate: u32) -> bool {
        candidate < self.labels[node as usize].fetch_min(candidate, Ordering::Relaxed)
    }

    /// Install `candidate` into `labels[node]` only if it is still `UNVISITED`
    ///
    /// Returns true iff this call made the first visit.
    #[inline]
    pub fn claim_unvisited(&self, node: u32, candidate: u32) -> bool {
        self.labels[node as usize]
            .compare_exchange(UNVISITED, candidate, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok()
    }

    /// Weight of `edge` (1 for unweighted graphs)
    #[inline]
    #[must_use]
    pub fn weight(&self, edge: usize) -> u32 {
        self.weights.map_or(1, |w| w[edge])
    }

    /// Whether edge weights are attached
    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    /// Predecessor slots, when tracking is enabled
    #[must_use]
    pub const fn predecessors(&self) -> Option<&PredecessorSlots> {
        self.predecessors.as_ref()
    }

    /// Copy labels out
    #[must_use]
    pub fn labels_snapshot(&self) -> Vec<u32> {
        self.labels
            .iter()
            .map(|l| l.load(Ordering::Relaxed))
            .collect()
    }

    /// Copy predecessors out
    #[must_use]
    pub fn predecessors_snapshot(&self) -> Option<Vec<u32>> {
        self.predecessors.as_ref().map(|preds| {
            (0..preds.len())
                .map(|v| {
                    #[allow(clippy::cast_possible_truncation)] // Bounded by num_nodes
                    let node = v as u32;
                    preds.get(node)
                })
                .collect()
        })
    }
}
