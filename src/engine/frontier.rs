//! Frontier: the active vertex set handed between rounds
//!
//! Based on Ligra (Shun & Blelloch, `PPoPP` 2013) frontier-based traversal.

use super::error::EnactorError;

/// Active vertex set of the current round
///
/// Holds no duplicates once produced by Filter; element order carries no
/// meaning. `capacity` bounds the number of candidate slots one Advance
/// may emit and is fixed by the queue-sizing factor at reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    nodes: Vec<u32>,
    capacity: usize,
}

impl Frontier {
    /// Empty frontier sized for a graph
    ///
    /// Capacity is `ceil(max(num_nodes, num_edges) * queue_sizing)`, at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`EnactorError::InvalidQueueSizing`] unless `queue_sizing` is
    /// finite and positive.
    pub fn sized_for(
        num_nodes: usize,
        num_edges: usize,
        queue_sizing: f64,
    ) -> Result<Self, EnactorError> {
        if !queue_sizing.is_finite() || queue_sizing <= 0.0 {
            return Err(EnactorError::InvalidQueueSizing(queue_sizing));
        }

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let capacity = ((num_nodes.max(num_edges) as f64 * queue_sizing).ceil() as usize).max(1);

        Ok(Self {
            nodes: Vec::new(),
            capacity,
        })
    }

    /// Empty frontier with an explicit candidate capacity
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            capacity,
        }
    }

    /// Frontier holding exactly `nodes`
    #[must_use]
    pub fn from_nodes(nodes: Vec<u32>, capacity: usize) -> Self {
        Self { nodes, capacity }
    }

    /// Discard current contents and seed `{source}`
    pub fn seed(&mut self, source: u32) {
        self.nodes.clear();
        self.nodes.push(source);
    }

    /// Replace contents wholesale with the next round's set
    pub fn replace(&mut self, next: Vec<u32>) {
        self.nodes = next;
    }

    /// Drop all vertices
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Active vertices
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.nodes
    }

    /// Number of active vertices
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the traversal has converged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Candidate slots available to one Advance
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_from_factor() {
        let frontier = Frontier::sized_for(10, 20, 1.3).unwrap();
        assert_eq!(frontier.capacity(), 26);
        assert!(frontier.is_empty());

        let frontier = Frontier::sized_for(0, 0, 1.3).unwrap();
        assert_eq!(frontier.capacity(), 1);
    }

    #[test]
    fn test_invalid_factor() {
        assert!(matches!(
            Frontier::sized_for(4, 4, 0.0),
            Err(EnactorError::InvalidQueueSizing(_))
        ));
        assert!(Frontier::sized_for(4, 4, f64::NAN).is_err());
        assert!(Frontier::sized_for(4, 4, -1.0).is_err());
    }

    #[test]
    fn test_seed_and_replace() {
        let mut frontier = Frontier::with_capacity(8);
        frontier.seed(3);
        assert_eq!(frontier.as_slice(), &[3]);

        frontier.replace(vec![1, 2]);
        assert_eq!(frontier.len(), 2);

        frontier.seed(0);
        assert_eq!(frontier.as_slice(), &[0]);

        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(frontier.capacity(), 8);
    }
}
