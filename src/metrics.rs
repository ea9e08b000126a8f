//! Run statistics collected by the enactor
//!
//! Search depth, edge and vertex counts, frontier-size running statistics
//! (Welford) and wall-clock time.

use std::time::Duration;

/// Running mean/variance (Welford's online algorithm)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
    max: f64,
}

impl RunningStats {
    /// Add one sample
    #[allow(clippy::cast_precision_loss)]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
        if self.count == 1 || value > self.max {
            self.max = value;
        }
    }

    /// Samples seen
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Sample mean (0 when empty)
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance (0 with fewer than two samples)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Population standard deviation
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Largest sample (0 when empty)
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }
}

/// One Advance/Filter round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStats {
    /// Zero-based round index
    pub depth: usize,
    /// Frontier size entering the round
    pub frontier_len: usize,
    /// Edges visited by Advance
    pub edges_visited: usize,
    /// Candidates emitted by Advance that won relaxation
    pub winners: usize,
    /// Frontier size after Filter
    pub next_len: usize,
}

/// Statistics of one enactor run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnactorStats {
    /// Rounds executed (including the final round producing an empty frontier)
    pub search_depth: usize,
    /// Edges visited over all rounds
    pub edges_visited: u64,
    /// Vertices admitted to a frontier, source included
    pub vertices_queued: u64,
    /// Frontier size per round
    pub frontier_sizes: RunningStats,
    /// Wall-clock time spent in rounds
    pub elapsed: Duration,
    /// Per-round history, recorded only when instrumented
    pub rounds: Vec<RoundStats>,
}

impl EnactorStats {
    /// Millions of traversed edges per second
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mteps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.edges_visited as f64 / secs / 1.0e6
        }
    }
}
