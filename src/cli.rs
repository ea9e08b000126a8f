//! Command-line arguments for `frontier-graph`

use clap::{Parser, ValueEnum};
use frontier_graph::engine::{EnactorConfig, DEFAULT_QUEUE_SIZING};
use std::path::PathBuf;

/// Frontier-driven BFS / SSSP over a Matrix-Market graph
#[derive(Parser, Debug)]
#[command(name = "frontier-graph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input graph format
    #[arg(value_enum)]
    pub format: GraphFormat,

    /// Graph file
    pub file: PathBuf,

    /// Device index
    #[arg(long, default_value_t = 0)]
    pub device: usize,

    /// Insert every edge in both directions
    #[arg(long)]
    pub undirected: bool,

    /// Print per-run statistics
    #[arg(long)]
    pub instrumented: bool,

    /// Source vertex
    #[arg(long, default_value_t = 0)]
    pub src: u32,

    /// Skip the sequential reference and validation
    #[arg(long)]
    pub quick: bool,

    /// Number of partitions
    #[arg(long = "num_gpus", default_value_t = 1)]
    pub num_gpus: usize,

    /// Track predecessors
    #[arg(long)]
    pub mark_pred: bool,

    /// Frontier over-allocation factor
    #[arg(long, default_value_t = DEFAULT_QUEUE_SIZING)]
    pub queue_sizing: f64,

    /// Traversal to run
    #[arg(long, value_enum, default_value = "bfs")]
    pub algorithm: Algorithm,

    /// Worker threads (default: one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Supported graph file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    /// Matrix-Market coordinate file
    Market,
}

/// Traversal selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Hop-count breadth-first search
    Bfs,
    /// Weighted single-source shortest paths
    Sssp,
}

impl Algorithm {
    /// Name used in output lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Sssp => "SSSP",
        }
    }
}

impl Cli {
    /// Engine configuration for these flags
    #[must_use]
    pub fn enactor_config(&self) -> EnactorConfig {
        let mut config = EnactorConfig::default()
            .with_predecessors(self.mark_pred)
            .with_instrumentation(self.instrumented)
            .with_partitions(self.num_gpus)
            .with_device(self.device)
            .with_queue_sizing(self.queue_sizing);
        if let Some(threads) = self.threads {
            config = config.with_worker_threads(threads);
        }
        config
    }
}
