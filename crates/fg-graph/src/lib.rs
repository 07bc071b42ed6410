//! fg-graph: directed-graph engine for flowgraph.
//!
//! Provides:
//! - Generic adjacency storage with insertion-order determinism (`Graph`)
//! - Incremental edge mutation and structural queries
//! - Simple-path enumeration and shortest-path selection
//!
//! # Example
//!
//! ```
//! use fg_graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("draft", "review");
//! graph.add_edge("review", "published");
//!
//! assert_eq!(graph.neighbors(&"draft"), vec!["review"]);
//! assert_eq!(
//!     graph.shortest(None, None),
//!     Some(vec!["draft", "review", "published"]),
//! );
//! ```

pub mod graph;
mod paths;

// Re-exports for ergonomics
pub use fg_core::{FgError, FgResult, NonEmpty};
pub use graph::Graph;
