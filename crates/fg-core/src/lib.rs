//! fg-core: stable foundation for flowgraph.
//!
//! Contains:
//! - error (shared error types)
//! - nonempty (ordered list guaranteed to hold at least one element)

pub mod error;
pub mod nonempty;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FgError, FgResult};
pub use nonempty::NonEmpty;
