//! Graph storage layer
//!
//! Provides the CSR (Compressed Sparse Row) topology and the Matrix-Market loader.

pub mod csr;
pub mod market;

pub use csr::{CsrGraph, GraphError, NodeId};
pub use market::{parse_market, read_market, MarketError, MarketOptions};
