//! Tree vertices
//!
//! Nodes live in one arena (`Vec<Node<C>>`) and refer to each other by
//! index. Suffix links are plain indices too, so they never own anything and
//! the whole tree is released by dropping the arena.

use crate::children::ChildIndex;

/// Arena index of a node. Also the node's identifier in traversals:
/// identifiers are handed out in creation order.
pub type NodeId = usize;

/// The root is always the first node allocated.
pub const ROOT: NodeId = 0;

/// Right end of an edge label (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Internal node: fixed at split time, never changes afterwards.
    Fixed(usize),
    /// Leaf: reads the tree-wide "current end". Bumping that single value
    /// extends every leaf edge at once (Rule 1).
    Leaf,
    /// Root: empty label, length 0.
    Root,
}

impl EdgeEnd {
    #[inline(always)]
    pub fn resolve(self, leaf_end: usize) -> usize {
        match self {
            EdgeEnd::Fixed(end) => end,
            EdgeEnd::Leaf => leaf_end,
            // Placeholder; root has no label to end
            EdgeEnd::Root => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node<C> {
    /// Offset of the first label byte in the text buffer
    pub(crate) start: usize,
    pub(crate) end: EdgeEnd,
    /// Defaults to root
    pub(crate) suffix_link: NodeId,
    pub(crate) children: C,
}

impl<C: ChildIndex> Node<C> {
    #[inline]
    pub(crate) fn leaf(start: usize) -> Self {
        Self {
            start,
            end: EdgeEnd::Leaf,
            suffix_link: ROOT,
            children: C::default(),
        }
    }

    #[inline]
    pub(crate) fn internal(start: usize, end: usize) -> Self {
        Self {
            start,
            end: EdgeEnd::Fixed(end),
            suffix_link: ROOT,
            children: C::default(),
        }
    }

    /// Root carries an empty label: [`edge_length`](Self::edge_length) is 0.
    #[inline]
    pub(crate) fn root() -> Self {
        Self {
            start: 0,
            end: EdgeEnd::Root,
            suffix_link: ROOT,
            children: C::default(),
        }
    }

    #[inline(always)]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline(always)]
    pub fn end(&self, leaf_end: usize) -> usize {
        self.end.resolve(leaf_end)
    }

    /// `end - start + 1`, always >= 1 for non-root nodes; 0 for the root.
    #[inline(always)]
    pub fn edge_length(&self, leaf_end: usize) -> usize {
        match self.end {
            EdgeEnd::Root => 0,
            end => end.resolve(leaf_end) + 1 - self.start,
        }
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.end == EdgeEnd::Leaf
    }

    #[inline]
    pub fn suffix_link(&self) -> NodeId {
        self.suffix_link
    }

    #[inline]
    pub fn children(&self) -> &C {
        &self.children
    }
}
