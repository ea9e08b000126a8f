//! Enactor: drives Advance and Filter rounds to convergence
//!
//! # State machine
//!
//! ```text
//!   init ──► Idle ──reset──► Active ──enact──► Terminated
//!                              │                  │
//!                              └──(fatal)──► Failed
//!   reset is accepted from every state and starts a fresh run.
//! ```

use super::advance::advance;
use super::config::EnactorConfig;
use super::error::EnactorError;
use super::filter::{filter, FilterBitmap};
use super::frontier::Frontier;
use super::functor::{EdgeFunctor, VertexFunctor};
use super::result::TraversalResult;
use super::state::AlgorithmState;
use crate::metrics::{EnactorStats, RoundStats};
use crate::storage::{CsrGraph, NodeId};
use std::time::Instant;

/// Devices exposed by the host executor
const HOST_DEVICES: usize = 1;

/// Lifecycle of an [`Enactor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnactorState {
    /// Initialised, no source set
    Idle,
    /// Seeded, rounds pending
    Active,
    /// Frontier exhausted, results available
    Terminated,
    /// Aborted by a fatal operator error
    Failed,
}

/// Frontier-driven traversal driver
///
/// Owns the algorithm state, the frontier and a worker pool; borrows the
/// topology for its whole lifetime.
///
/// # Example
///
/// ```
/// use frontier_graph::algorithms::BfsFunctor;
/// use frontier_graph::engine::{Enactor, EnactorConfig, EnactorState};
/// use frontier_graph::{CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_unweighted_edges(&[(NodeId(0), NodeId(1))], 2).unwrap();
/// let mut enactor = Enactor::init(&graph, BfsFunctor, EnactorConfig::default()).unwrap();
/// enactor.reset(NodeId(0), 1.3).unwrap();
/// enactor.enact().unwrap();
/// assert_eq!(enactor.phase(), EnactorState::Terminated);
///
/// let mut labels = vec![0; 2];
/// enactor.extract(&mut labels, None).unwrap();
/// assert_eq!(labels, vec![0, 1]);
/// ```
#[derive(Debug)]
pub struct Enactor<'g, F> {
    graph: &'g CsrGraph,
    functor: F,
    config: EnactorConfig,
    state: AlgorithmState<'g>,
    frontier: Frontier,
    bitmap: FilterBitmap,
    pool: rayon::ThreadPool,
    phase: EnactorState,
    source: NodeId,
    depth: usize,
    stats: EnactorStats,
}

impl<'g, F> Enactor<'g, F>
where
    F: EdgeFunctor + VertexFunctor,
{
    /// Validate configuration and allocate state for `graph`
    ///
    /// # Errors
    ///
    /// - [`EnactorError::UnsupportedPartitions`] unless `num_partitions == 1`
    /// - [`EnactorError::NoSuchDevice`] for a device other than 0
    /// - [`EnactorError::Allocation`] / [`EnactorError::WorkerPool`] when
    ///   resources cannot be obtained
    pub fn init(
        graph: &'g CsrGraph,
        functor: F,
        config: EnactorConfig,
    ) -> Result<Self, EnactorError> {
        if config.num_partitions != 1 {
            return Err(EnactorError::UnsupportedPartitions(config.num_partitions));
        }
        if config.device >= HOST_DEVICES {
            return Err(EnactorError::NoSuchDevice {
                requested: config.device,
                available: HOST_DEVICES,
            });
        }

        let state = AlgorithmState::allocate(graph, config.mark_predecessors)?;
        let bitmap = FilterBitmap::allocate(graph.num_nodes())?;

        let mut builder = rayon::ThreadPoolBuilder::new()
            .thread_name(|i| format!("frontier-worker-{i}"));
        if let Some(threads) = config.worker_threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| EnactorError::WorkerPool(e.to_string()))?;

        tracing::debug!(
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            weighted = graph.is_weighted(),
            threads = pool.current_num_threads(),
            mark_predecessors = config.mark_predecessors,
            "enactor initialised"
        );

        Ok(Self {
            graph,
            functor,
            config,
            state,
            frontier: Frontier::default(),
            bitmap,
            pool,
            phase: EnactorState::Idle,
            source: NodeId(0),
            depth: 0,
            stats: EnactorStats::default(),
        })
    }

    /// Start a fresh run from `source`
    ///
    /// # Errors
    ///
    /// Returns [`EnactorError::SourceOutOfRange`] or
    /// [`EnactorError::InvalidQueueSizing`]; the enactor is left unchanged.
    pub fn reset(&mut self, source: NodeId, queue_sizing: f64) -> Result<(), EnactorError> {
        let num_nodes = self.graph.num_nodes();
        if source.0 as usize >= num_nodes {
            return Err(EnactorError::SourceOutOfRange {
                node: source.0,
                num_nodes,
            });
        }
        let mut frontier = Frontier::sized_for(num_nodes, self.graph.num_edges(), queue_sizing)?;

        self.state.reset(source.0);
        frontier.seed(source.0);
        self.frontier = frontier;
        self.source = source;
        self.depth = 0;
        self.stats = EnactorStats {
            vertices_queued: 1,
            ..EnactorStats::default()
        };
        self.phase = EnactorState::Active;
        Ok(())
    }

    /// Run rounds until the frontier is empty
    ///
    /// # Errors
    ///
    /// Returns [`EnactorError::InvalidState`] unless `Active`. Operator
    /// failures abort immediately, move the enactor to `Failed` and are
    /// returned as-is.
    pub fn enact(&mut self) -> Result<&EnactorStats, EnactorError> {
        self.require(EnactorState::Active, "enact")?;
        tracing::info!(source = self.source.0, "traversal started");

        while self.step()? {}
        Ok(&self.stats)
    }

    /// Run a single round
    ///
    /// Returns `false`, and moves to `Terminated`, once the frontier is
    /// empty.
    ///
    /// # Errors
    ///
    /// Same as [`Enactor::enact`].
    pub fn step(&mut self) -> Result<bool, EnactorError> {
        self.require(EnactorState::Active, "step")?;

        if self.frontier.is_empty() {
            self.stats.search_depth = self.depth;
            self.phase = EnactorState::Terminated;
            tracing::info!(
                depth = self.depth,
                edges_visited = self.stats.edges_visited,
                elapsed = ?self.stats.elapsed,
                "traversal finished"
            );
            return Ok(false);
        }

        if let Err(err) = self.round() {
            self.phase = EnactorState::Failed;
            tracing::warn!(depth = self.depth, error = %err, "traversal aborted");
            return Err(err);
        }
        Ok(true)
    }

    fn round(&mut self) -> Result<(), EnactorError> {
        let depth = self.depth;
        let start = Instant::now();
        let outcome = self.pool.install(|| {
            let advanced = advance(self.graph, &self.frontier, &self.functor, &self.state, depth)?;
            let next = filter(&advanced.candidates, &self.functor, &self.state, &self.bitmap);
            Ok::<_, EnactorError>((advanced, next))
        });
        self.stats.elapsed += start.elapsed();
        let (advanced, next) = outcome?;

        let num_nodes = self.graph.num_nodes();
        let round = RoundStats {
            depth,
            frontier_len: self.frontier.len(),
            edges_visited: advanced.edges_visited,
            winners: advanced
                .candidates
                .iter()
                .filter(|&&c| (c as usize) < num_nodes)
                .count(),
            next_len: next.len(),
        };
        tracing::debug!(
            depth = round.depth,
            frontier = round.frontier_len,
            edges = round.edges_visited,
            next = round.next_len,
            "round complete"
        );

        #[allow(clippy::cast_precision_loss)]
        self.stats.frontier_sizes.push(round.frontier_len as f64);
        self.stats.edges_visited += advanced.edges_visited as u64;
        self.stats.vertices_queued += next.len() as u64;
        if self.config.instrumented {
            self.stats.rounds.push(round);
        }

        self.frontier.replace(next);
        self.depth += 1;
        Ok(())
    }

    /// Copy final labels (and predecessors) into caller-owned buffers
    ///
    /// # Errors
    ///
    /// - [`EnactorError::InvalidState`] unless `Terminated`
    /// - [`EnactorError::BufferSize`] when a buffer length differs from the
    ///   node count
    /// - [`EnactorError::PredecessorsDisabled`] when `out_preds` is given but
    ///   tracking is off
    pub fn extract(
        &self,
        out_labels: &mut [u32],
        out_preds: Option<&mut [u32]>,
    ) -> Result<(), EnactorError> {
        self.require(EnactorState::Terminated, "extract")?;
        let num_nodes = self.state.num_nodes();
        check_len("labels", num_nodes, out_labels.len())?;

        if let Some(out_preds) = out_preds {
            let preds = self
                .state
                .predecessors()
                .ok_or(EnactorError::PredecessorsDisabled)?;
            check_len("predecessors", num_nodes, out_preds.len())?;
            for (node, slot) in (0_u32..).zip(out_preds.iter_mut()) {
                *slot = preds.get(node);
            }
        }

        for (node, slot) in (0_u32..).zip(out_labels.iter_mut()) {
            *slot = self.state.label(node);
        }
        Ok(())
    }

    /// Owned copy of the finished run
    ///
    /// # Errors
    ///
    /// Returns [`EnactorError::InvalidState`] unless `Terminated`.
    pub fn result(&self) -> Result<TraversalResult, EnactorError> {
        self.require(EnactorState::Terminated, "result")?;
        Ok(TraversalResult::new(
            self.source,
            self.state.labels_snapshot(),
            self.state.predecessors_snapshot(),
        ))
    }

    fn require(&self, expected: EnactorState, operation: &'static str) -> Result<(), EnactorError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EnactorError::InvalidState {
                operation,
                expected,
                actual: self.phase,
            })
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn phase(&self) -> EnactorState {
        self.phase
    }

    /// Rounds completed in the current run
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Statistics of the current run
    #[must_use]
    pub const fn stats(&self) -> &EnactorStats {
        &self.stats
    }

    /// Frontier for the next round
    #[must_use]
    pub const fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Algorithm state (labels, predecessors)
    #[must_use]
    pub const fn state(&self) -> &AlgorithmState<'g> {
        &self.state
    }

    /// Configuration passed to `init`
    #[must_use]
    pub const fn config(&self) -> &EnactorConfig {
        &self.config
    }
}

fn check_len(buffer: &'static str, expected: usize, actual: usize) -> Result<(), EnactorError> {
    if expected == actual {
        Ok(())
    } else {
        Err(EnactorError::BufferSize {
            buffer,
            expected,
            actual,
        })
    }
}
