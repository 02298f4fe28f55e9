//! Construction options

use crate::text::DEFAULT_SENTINEL;

/// Options for [`SuffixTree::construct_with`](crate::SuffixTree::construct_with).
///
/// # Example
/// ```
/// use ukkonen_index::{SuffixTree, TreeConfig};
///
/// let config = TreeConfig::default().with_sentinel(0);
/// let tree: SuffixTree = SuffixTree::construct_with(b"ACGT", &config).unwrap();
/// assert!(tree.search(b"CG"));
/// assert_eq!(tree.text(), b"ACGT\0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Terminator byte. Must not occur inside the payload for the tree to
    /// hold one leaf per suffix.
    pub sentinel: u8,
    /// Node arena reservation. `None` reserves the worst case (2 × text length).
    pub capacity_hint: Option<usize>,
}

impl TreeConfig {
    #[inline]
    pub const fn new() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
            capacity_hint: None,
        }
    }

    #[inline]
    pub const fn with_sentinel(mut self, sentinel: u8) -> Self {
        self.sentinel = sentinel;
        self
    }

    #[inline]
    pub const fn with_capacity_hint(mut self, nodes: usize) -> Self {
        self.capacity_hint = Some(nodes);
        self
    }

    /// Arena capacity to reserve for a buffer of `text_len` bytes (sentinel included).
    #[inline]
    pub(crate) fn arena_capacity(&self, text_len: usize) -> usize {
        // root + n leaves + at most n - 1 internal nodes
        self.capacity_hint.unwrap_or(text_len.saturating_mul(2))
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TreeConfig::default();
        assert_eq!(config.sentinel, b'$');
        assert_eq!(config.capacity_hint, None);
        assert_eq!(config.arena_capacity(7), 14);
    }

    #[test]
    fn test_builder_setters() {
        let config = TreeConfig::new().with_sentinel(b'#').with_capacity_hint(3);
        assert_eq!(config.sentinel, b'#');
        assert_eq!(config.arena_capacity(1000), 3);
    }
}
