//! Matrix-Market coordinate loader
//!
//! # Format
//!
//! ```text
//! %%MatrixMarket matrix coordinate integer general
//! % comment lines start with '%'
//! 3 3 2        <- rows cols nnz
//! 1 2 5        <- 1-based (row, col[, weight]) entries
//! 2 3 3
//! ```
//!
//! `pattern` matrices (or files without a value column) load as unweighted
//! graphs. `symmetric` matrices and [`MarketOptions::undirected`] insert every
//! non-loop entry in both directions.

use super::csr::{CsrGraph, GraphError, NodeId};
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Matrix-Market parse errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarketError {
    /// Banner names a layout this loader does not read
    #[error("unsupported Matrix-Market banner: {0}")]
    UnsupportedBanner(String),

    /// File ended before the size line
    #[error("missing size line")]
    MissingSizeLine,

    /// Size line is not `rows cols nnz`
    #[error("line {line}: malformed size line '{content}'")]
    BadSizeLine {
        /// 1-based line number
        line: usize,
        /// Offending text
        content: String,
    },

    /// Entry line is not `row col [value]`
    #[error("line {line}: malformed entry '{content}'")]
    BadEntry {
        /// 1-based line number
        line: usize,
        /// Offending text
        content: String,
    },

    /// Entry index is 0 or exceeds the declared dimensions
    #[error("line {line}: index ({row}, {col}) outside 1..={dim}")]
    IndexOutOfRange {
        /// 1-based line number
        line: usize,
        /// Row index as written
        row: u64,
        /// Column index as written
        col: u64,
        /// Declared dimension
        dim: usize,
    },

    /// Weight is negative, non-finite, or exceeds `u32`
    #[error("line {line}: invalid edge weight '{value}'")]
    BadWeight {
        /// 1-based line number
        line: usize,
        /// Offending value
        value: String,
    },

    /// Entry count differs from the size line
    #[error("expected {expected} entries, found {found}")]
    EntryCount {
        /// `nnz` from the size line
        expected: usize,
        /// Entries actually read
        found: usize,
    },

    /// Entries do not form a valid topology
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Loader options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarketOptions {
    /// Insert each edge in both directions
    pub undirected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Pattern,
    Valued,
    Unknown,
}

struct Banner {
    field: Field,
    symmetric: bool,
}

fn parse_banner(line: &str) -> Result<Banner, MarketError> {
    let tokens: Vec<String> = line
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect();
    let unsupported = || MarketError::UnsupportedBanner(line.trim().to_string());

    if tokens.len() < 5 || tokens[1] != "matrix" || tokens[2] != "coordinate" {
        return Err(unsupported());
    }
    let field = match tokens[3].as_str() {
        "pattern" => Field::Pattern,
        "integer" | "real" | "double" => Field::Valued,
        _ => return Err(unsupported()),
    };
    let symmetric = match tokens[4].as_str() {
        "general" => false,
        "symmetric" => true,
        _ => return Err(unsupported()),
    };
    Ok(Banner { field, symmetric })
}

fn parse_weight(token: &str, line: usize) -> Result<u32, MarketError> {
    let bad = || MarketError::BadWeight {
        line,
        value: token.to_string(),
    };
    let value: f64 = token.parse().map_err(|_| bad())?;
    if !value.is_finite() || value < 0.0 || value.round() > f64::from(u32::MAX) {
        return Err(bad());
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Range checked above
    Ok(value.round() as u32)
}

/// Parse Matrix-Market text into a CSR graph
///
/// # Errors
///
/// Returns [`MarketError`] for malformed banners, size lines, entries,
/// weights, or when the entry count does not match `nnz`.
///
/// # Example
///
/// ```
/// use frontier_graph::storage::market::{parse_market, MarketOptions};
/// use frontier_graph::NodeId;
///
/// let text = "%%MatrixMarket matrix coordinate pattern general\n2 2 1\n1 2\n";
/// let graph = parse_market(text, MarketOptions::default()).unwrap();
/// assert_eq!(graph.outgoing_neighbors(NodeId(0)).unwrap(), &[1]);
/// ```
pub fn parse_market(text: &str, options: MarketOptions) -> Result<CsrGraph, MarketError> {
    let mut banner = Banner {
        field: Field::Unknown,
        symmetric: false,
    };
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    // Header: banner, comments, size line
    let (num_nodes, expected) = loop {
        let (line_no, line) = lines.next().ok_or(MarketError::MissingSizeLine)?;
        let trimmed = line.trim();
        if trimmed.starts_with("%%") {
            banner = parse_banner(trimmed)?;
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        let bad = || MarketError::BadSizeLine {
            line: line_no,
            content: trimmed.to_string(),
        };
        let dims: Vec<usize> = trimmed
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| bad())?;
        match dims.as_slice() {
            [rows, cols, nnz] => break ((*rows).max(*cols), *nnz),
            _ => return Err(bad()),
        }
    };

    if u32::try_from(num_nodes).is_err() {
        return Err(GraphError::TooLarge(num_nodes).into());
    }

    let mut weighted = banner.field == Field::Valued;
    // `nnz` is untrusted; every entry takes at least four bytes of text
    let hint = expected.min(text.len() / 4).saturating_mul(2);
    let mut edges: Vec<(NodeId, NodeId, u32)> = Vec::new();
    edges
        .try_reserve(hint)
        .map_err(|_| GraphError::Allocation {
            what: "edge list",
            len: hint,
        })?;
    let mut found = 0_usize;

    for (line_no, line) in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        let bad = || MarketError::BadEntry {
            line: line_no,
            content: trimmed.to_string(),
        };

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() < 2 || tokens.len() > 3 {
            return Err(bad());
        }
        if banner.field == Field::Unknown && found == 0 {
            weighted = tokens.len() == 3;
        }

        let row: u64 = tokens[0].parse().map_err(|_| bad())?;
        let col: u64 = tokens[1].parse().map_err(|_| bad())?;
        if row == 0 || col == 0 || row > num_nodes as u64 || col > num_nodes as u64 {
            return Err(MarketError::IndexOutOfRange {
                line: line_no,
                row,
                col,
                dim: num_nodes,
            });
        }

        let weight = match (weighted, tokens.get(2)) {
            (true, Some(token)) => parse_weight(token, line_no)?,
            (true, None) => return Err(bad()),
            (false, _) => 1,
        };

        #[allow(clippy::cast_possible_truncation)] // Bounded by num_nodes, checked above
        let (src, dst) = (NodeId((row - 1) as u32), NodeId((col - 1) as u32));
        edges.push((src, dst, weight));
        if (options.undirected || banner.symmetric) && src != dst {
            edges.push((dst, src, weight));
        }
        found += 1;
    }

    if found != expected {
        return Err(MarketError::EntryCount { expected, found });
    }

    let graph = CsrGraph::from_edge_list(&edges, num_nodes)?;
    Ok(if weighted { graph } else { graph.without_weights() })
}

/// Read a Matrix-Market file into a CSR graph
///
/// # Errors
///
/// Returns error if the file cannot be read or [`parse_market`] fails
pub async fn read_market<P: AsRef<Path>>(path: P, options: MarketOptions) -> Result<CsrGraph> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read graph file {}", path.display()))?;

    let graph = parse_market(&text, options)
        .with_context(|| format!("Failed to parse Matrix-Market file {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        weighted = graph.is_weighted(),
        "loaded graph"
    );
    Ok(graph)
}
