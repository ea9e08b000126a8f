//! Enactor and operator errors

use super::enactor::EnactorState;
use thiserror::Error;

/// How an [`EnactorError`] should be treated by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input to `init`/`reset`; no round has run
    Argument,
    /// Allocation or worker-pool construction failed
    Construction,
    /// Operator failure mid-traversal; state is partially mutated
    Runtime,
    /// API called out of order or with mismatched buffers
    Usage,
}

/// Errors raised by the enactor and its operators
///
/// None of these are retried. Runtime errors leave the enactor in
/// [`EnactorState::Failed`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnactorError {
    /// Fallible reservation of a per-vertex array failed
    #[error("failed to allocate {bytes} bytes for {what}")]
    Allocation {
        /// Buffer being allocated
        what: &'static str,
        /// Requested size
        bytes: usize,
    },

    /// Worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    /// Only single-partition traversal is implemented
    #[error("{0} partitions requested, only single-partition runs are supported")]
    UnsupportedPartitions(usize),

    /// Device index unknown to the host executor
    #[error("device {requested} not available ({available} device(s) present)")]
    NoSuchDevice {
        /// Requested index
        requested: usize,
        /// Devices present
        available: usize,
    },

    /// Traversal source outside the graph
    #[error("source node {node} out of range for {num_nodes} nodes")]
    SourceOutOfRange {
        /// Requested source
        node: u32,
        /// Number of nodes
        num_nodes: usize,
    },

    /// Queue sizing factor must be finite and positive
    #[error("queue sizing factor {0} must be finite and positive")]
    InvalidQueueSizing(f64),

    /// Advance would emit more candidates than the frontier buffer holds
    #[error("frontier overflow at depth {depth}: {required} candidates exceed capacity {capacity}")]
    FrontierOverflow {
        /// Round that overflowed
        depth: usize,
        /// Candidate slots needed
        required: usize,
        /// Slots available
        capacity: usize,
    },

    /// Operation invoked in the wrong enactor state
    #[error("{operation} requires state {expected:?}, enactor is {actual:?}")]
    InvalidState {
        /// Operation name
        operation: &'static str,
        /// Required state
        expected: EnactorState,
        /// Current state
        actual: EnactorState,
    },

    /// Caller-owned output buffer has the wrong length
    #[error("output buffer {buffer} has length {actual}, expected {expected}")]
    BufferSize {
        /// Which buffer
        buffer: &'static str,
        /// Required length
        expected: usize,
        /// Provided length
        actual: usize,
    },

    /// Predecessors requested but tracking is off
    #[error("predecessor tracking is disabled")]
    PredecessorsDisabled,
}

impl EnactorError {
    /// Classify the error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedPartitions(_)
            | Self::NoSuchDevice { .. }
            | Self::SourceOutOfRange { .. }
            | Self::InvalidQueueSizing(_) => ErrorKind::Argument,
            Self::Allocation { .. } | Self::WorkerPool(_) => ErrorKind::Construction,
            Self::FrontierOverflow { .. } => ErrorKind::Runtime,
            Self::InvalidState { .. } | Self::BufferSize { .. } | Self::PredecessorsDisabled => {
                ErrorKind::Usage
            }
        }
    }

    /// Construction and runtime failures abort the run
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::Construction | ErrorKind::Runtime)
    }
}
