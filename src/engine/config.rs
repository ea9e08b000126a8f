//! Enactor configuration
//!
//! Replaces process-wide toggles with one value handed to [`Enactor::init`].
//!
//! [`Enactor::init`]: super::Enactor::init

/// Default frontier over-allocation factor
pub const DEFAULT_QUEUE_SIZING: f64 = 1.3;

/// Per-run engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EnactorConfig {
    /// Record predecessors during relaxation
    pub mark_predecessors: bool,

    /// Keep a per-round history in [`EnactorStats`](crate::metrics::EnactorStats)
    pub instrumented: bool,

    /// Number of graph partitions (only 1 is supported)
    pub num_partitions: usize,

    /// Device index on the host executor
    pub device: usize,

    /// Worker threads; `None` uses the pool default (one per core)
    pub worker_threads: Option<usize>,

    /// Frontier over-allocation factor used by the convenience runners
    pub queue_sizing: f64,
}

impl Default for EnactorConfig {
    fn default() -> Self {
        Self {
            mark_predecessors: false,
            instrumented: false,
            num_partitions: 1,
            device: 0,
            worker_threads: None,
            queue_sizing: DEFAULT_QUEUE_SIZING,
        }
    }
}

impl EnactorConfig {
    /// Enable or disable predecessor tracking
    #[must_use]
    pub const fn with_predecessors(mut self, enabled: bool) -> Self {
        self.mark_predecessors = enabled;
        self
    }

    /// Enable or disable per-round instrumentation
    #[must_use]
    pub const fn with_instrumentation(mut self, enabled: bool) -> Self {
        self.instrumented = enabled;
        self
    }

    /// Set the partition count
    #[must_use]
    pub const fn with_partitions(mut self, num_partitions: usize) -> Self {
        self.num_partitions = num_partitions;
        self
    }

    /// Select a device
    #[must_use]
    pub const fn with_device(mut self, device: usize) -> Self {
        self.device = device;
        self
    }

    /// Fix the worker thread count
    #[must_use]
    pub const fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    /// Set the frontier over-allocation factor
    #[must_use]
    pub fn with_queue_sizing(mut self, factor: f64) -> Self {
        self.queue_sizing = factor;
        self
    }
}
