//! Generic, mutating, pre-order rewriter for a Go syntax tree.
//!
//! - `ast` holds the arena-allocated tree; every node payload is `Copy`.
//! - `rewrite` walks any subtree, handing each node to a callback that may
//!   replace it, prune it, or expand a statement into several.
//! - `builder` and `printer` assemble and render trees by hand.

pub mod ast;
pub mod builder;
pub mod error;
pub mod node;
pub mod printer;
pub mod rewrite;
mod slot;

// Re-exports for convenience
pub use error::RewriteViolation;
pub use node::Node;
pub use rewrite::{Rewriter, rewrite, rewrite_with};
