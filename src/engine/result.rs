//! Extracted traversal result

use super::state::{INVALID_VERTEX, UNVISITED};
use crate::storage::NodeId;

/// Owned copy of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult {
    /// Source of the run
    pub source: NodeId,

    /// Distance from source to each node (`UNVISITED` for unreachable)
    pub labels: Vec<u32>,

    /// Predecessor of each node, when tracking was enabled
    pub predecessors: Option<Vec<u32>>,

    /// Number of nodes reached
    pub visited_count: usize,
}

impl TraversalResult {
    pub(crate) fn new(source: NodeId, labels: Vec<u32>, predecessors: Option<Vec<u32>>) -> Self {
        let visited_count = labels.iter().filter(|&&d| d != UNVISITED).count();
        Self {
            source,
            labels,
            predecessors,
            visited_count,
        }
    }

    /// Get distance to a specific node
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<u32> {
        self.labels
            .get(node.0 as usize)
            .copied()
            .filter(|&d| d != UNVISITED)
    }

    /// Get the recorded predecessor of a node
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors
            .as_ref()?
            .get(node.0 as usize)
            .copied()
            .filter(|&p| p != INVALID_VERTEX)
            .map(NodeId)
    }

    /// Check if node is reachable from source
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Walk predecessors back from `target`
    ///
    /// Returns the path `source ..= target`, or `None` if the target is
    /// unreachable or predecessors were not tracked.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.predecessors.as_ref()?;
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            if path.len() > self.labels.len() {
                return None;
            }
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_api() {
        let result = TraversalResult::new(
            NodeId(0),
            vec![0, 1, UNVISITED, 2],
            Some(vec![INVALID_VERTEX, 0, INVALID_VERTEX, 1]),
        );

        assert_eq!(result.visited_count, 3);
        assert_eq!(result.distance(NodeId(0)), Some(0));
        assert_eq!(result.distance(NodeId(2)), None);
        assert_eq!(result.distance(NodeId(9)), None);
        assert!(result.is_reachable(NodeId(3)));
        assert!(!result.is_reachable(NodeId(2)));

        assert_eq!(result.predecessor(NodeId(0)), None);
        assert_eq!(result.predecessor(NodeId(3)), Some(NodeId(1)));
        assert_eq!(
            result.path_to(NodeId(3)),
            Some(vec![NodeId(0), NodeId(1), NodeId(3)])
        );
        assert_eq!(result.path_to(NodeId(2)), None);
    }

    #[test]
    fn test_path_requires_predecessors() {
        let result = TraversalResult::new(NodeId(0), vec![0, 1], None);
        assert_eq!(result.predecessor(NodeId(1)), None);
        assert_eq!(result.path_to(NodeId(1)), None);
        assert_eq!(result.path_to(NodeId(0)), None);
    }
}
