//! Construction errors
//!
//! Every byte sequence is a valid input, so the only way construction can
//! fail is running out of memory while reserving the text buffer, the node
//! arena, or a child table.

use alloc::collections::TryReserveError;

/// Error returned by [`SuffixTree::construct`](crate::SuffixTree::construct).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A fallible reservation was refused by the allocator.
    /// Construction is aborted and no partial tree is returned.
    #[error("suffix tree allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),
}
