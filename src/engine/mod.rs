//! Frontier-driven traversal engine
//!
//! Based on research from:
//! - **Gunrock** (Wang et al., ACM `ToPC` 2017) - Advance/Filter frontier operators
//! - **Ligra** (Shun & Blelloch, `PPoPP` 2013) - frontier-based traversal
//!
//! # Architecture
//!
//! - `state`: atomic labels and predecessor slots shared by all work items
//! - `frontier`: active vertex set and its candidate capacity
//! - `functor`: the four algorithm-supplied operations
//! - `advance` / `filter`: the two data-parallel operators
//! - `enactor`: round loop and lifecycle
//!
//! Each round is Advance then Filter, each a single `rayon` parallel
//! section. The end of a section orders every write of one step before any
//! read of the next.

pub mod advance;
pub mod config;
pub mod enactor;
pub mod error;
pub mod filter;
pub mod frontier;
pub mod functor;
pub mod result;
pub mod state;

pub use advance::{advance, AdvanceOutput};
pub use config::{EnactorConfig, DEFAULT_QUEUE_SIZING};
pub use enactor::{Enactor, EnactorState};
pub use error::{EnactorError, ErrorKind};
pub use filter::{filter, FilterBitmap};
pub use frontier::Frontier;
pub use functor::{EdgeFunctor, VertexFunctor};
pub use result::TraversalResult;
pub use state::{AlgorithmState, PredecessorSlots, INVALID_VERTEX, UNVISITED};
