//! Text rendering of results for the CLI

use crate::algorithms::Validation;
use crate::metrics::EnactorStats;
use std::fmt::Write;
use std::time::Duration;

/// Vertices shown by [`format_solution`] in the CLI
pub const DISPLAY_LIMIT: usize = 40;

fn signed(value: u32) -> i64 {
    if value == u32::MAX {
        -1
    } else {
        i64::from(value)
    }
}

/// Render the first `limit` vertices as `[v:label,...]`
///
/// With predecessors each entry is `v:label,pred ` and the list closes with
/// `]`. Sentinels print as `-1`.
///
/// ```
/// use frontier_graph::display::format_solution;
///
/// assert_eq!(format_solution(&[0, 1, u32::MAX], None, 40), "[0:0,1:1,2:-1 ]");
/// assert_eq!(
///     format_solution(&[0, 1], Some(&[u32::MAX, 0][..]), 40),
///     "[0:0,-1 1:1,0 ]"
/// );
/// ```
#[must_use]
pub fn format_solution(labels: &[u32], preds: Option<&[u32]>, limit: usize) -> String {
    let mut out = String::from("[");
    for (node, &label) in labels.iter().enumerate().take(limit) {
        match preds {
            Some(preds) => {
                let pred = preds.get(node).copied().unwrap_or(u32::MAX);
                let _ = write!(out, "{node}:{},{} ", signed(label), signed(pred));
            }
            None => {
                if node > 0 {
                    out.push(',');
                }
                let _ = write!(out, "{node}:{}", signed(label));
            }
        }
    }
    if preds.is_none() {
        out.push(' ');
    }
    out.push(']');
    out
}

/// `"<name> validity: <verdict>"`
#[must_use]
pub fn validity_line(name: &str, validation: &Validation) -> String {
    format!("{name} validity: {validation}")
}

/// `"<what> finished in <ms> msec."`
#[must_use]
pub fn timing_line(what: &str, elapsed: Duration) -> String {
    format!("{what} finished in {:.3} msec.", elapsed.as_secs_f64() * 1e3)
}

/// Multi-line instrumentation report
#[must_use]
pub fn format_stats(stats: &EnactorStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, " Search depth: {}", stats.search_depth);
    let _ = writeln!(out, " Edges visited: {}", stats.edges_visited);
    let _ = writeln!(out, " Vertices queued: {}", stats.vertices_queued);
    let _ = writeln!(
        out,
        " Frontier size: mean {:.2}, stddev {:.2}, max {:.0}",
        stats.frontier_sizes.mean(),
        stats.frontier_sizes.std_dev(),
        stats.frontier_sizes.max()
    );
    for round in &stats.rounds {
        let _ = writeln!(
            out,
            "  round {}: frontier {} edges {} winners {} next {}",
            round.depth, round.frontier_len, round.edges_visited, round.winners, round.next_len
        );
    }
    let _ = write!(out, " MTEPS: {:.3}", stats.mteps());
    out
}
