//! # Ukkonen-Index
//!
//! **Online linear-time suffix tree for exact substring queries**
//!
//! > "Build once in O(N). Ask forever in O(M)."
//!
//! ## Architecture
//!
//! - **Node Arena**: nodes addressed by index; suffix links are plain indices
//! - **Shared Leaf End**: every leaf edge reads one global end (Rule 1 in O(1))
//! - **Pluggable Child Tables**: vectorized linear scan (default) or `BTreeMap`
//!
//! ## Performance
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Build | **O(N)** (Ukkonen) | ≤ 2N nodes |
//! | Search | **O(M)** | O(1) |
//! | Child lookup | O(k / W) (SIMD) or O(log k) | — |
//!
//! ## Example
//!
//! ```
//! use ukkonen_index::construct;
//!
//! let tree = construct(b"mississippi").unwrap();
//!
//! assert!(tree.search(b"issi"));
//! assert!(tree.search(b"sip"));
//! assert!(!tree.search(b"spp"));
//!
//! // The sentinel is part of the indexed text
//! assert!(tree.search(b"pi$"));
//! assert_eq!(tree.node_count(), 19);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod builder;
pub mod children;
pub mod config;
pub mod error;
pub mod node;
pub mod simd;
pub mod text;
pub mod tree;

pub use children::{ChildIndex, LinearChildren, OrderedChildren};
pub use config::TreeConfig;
pub use error::BuildError;
pub use node::{EdgeEnd, Node, NodeId, ROOT};
pub use text::{TextBuffer, DEFAULT_SENTINEL};
pub use tree::{Edge, Edges, SuffixTree};

/// Version
pub const VERSION: &str = "0.1.0";

/// Build a suffix tree with the default (vectorized linear scan) child tables.
///
/// Fails only if memory cannot be reserved.
pub fn construct(text: &[u8]) -> Result<SuffixTree, BuildError> {
    SuffixTree::construct(text)
}
