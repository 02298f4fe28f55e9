//! Suffix Tree (finished, read-only)
//!
//! **Search**: follow one edge per step, compare the pattern against the
//! edge label, never backtrack. O(M) byte compares plus one child lookup
//! per edge crossed, independent of text size.
//!
//! The tree is immutable once [`SuffixTree::construct`] returns, so a shared
//! reference (or an `Arc`) can be handed to any number of reader threads.

extern crate alloc;
use alloc::vec::Vec;

use crate::builder::Builder;
use crate::children::{ChildIndex, LinearChildren};
use crate::config::TreeConfig;
use crate::error::BuildError;
use crate::node::{Node, NodeId, ROOT};
use crate::text::TextBuffer;

/// Suffix tree over a byte string, generic over the child lookup strategy.
///
/// # Example
/// ```
/// use ukkonen_index::{OrderedChildren, SuffixTree};
///
/// let tree: SuffixTree = SuffixTree::construct(b"banana").unwrap();
/// assert!(tree.search(b"nan"));
/// assert!(!tree.search(b"xyz"));
///
/// // Same queries, BTreeMap child tables
/// let ordered: SuffixTree<OrderedChildren> = SuffixTree::construct(b"banana").unwrap();
/// assert_eq!(ordered.node_count(), tree.node_count());
/// ```
#[derive(Debug, Clone)]
pub struct SuffixTree<C = LinearChildren> {
    text: TextBuffer,
    /// Arena; `nodes[ROOT]` is the root
    nodes: Vec<Node<C>>,
    /// Final value of the shared leaf end (last buffer offset)
    leaf_end: usize,
}

impl<C: ChildIndex> SuffixTree<C> {
    /// Build the tree for `text` with the default `$` sentinel.
    ///
    /// # Complexity
    /// - Time: O(N × k) where k is the child lookup cost (tiny, vectorized)
    /// - Space: at most 2N nodes
    pub fn construct(text: &[u8]) -> Result<Self, BuildError> {
        Self::construct_with(text, &TreeConfig::default())
    }

    /// Build the tree for `text` with explicit options.
    pub fn construct_with(text: &[u8], config: &TreeConfig) -> Result<Self, BuildError> {
        let text = TextBuffer::with_sentinel(text, config.sentinel)?;
        Builder::new(text, config)?.build()
    }

    pub(crate) fn from_parts(text: TextBuffer, nodes: Vec<Node<C>>, leaf_end: usize) -> Self {
        Self {
            text,
            nodes,
            leaf_end,
        }
    }

    /// Does `pattern` occur in the text (sentinel included)?
    ///
    /// The empty pattern always matches.
    pub fn search(&self, pattern: &[u8]) -> bool {
        if pattern.is_empty() {
            return true;
        }

        let mut node = ROOT;
        let mut matched = 0;

        loop {
            let child = match self.nodes[node].children.find(pattern[matched]) {
                Some(child) => child,
                None => return false,
            };

            let label = self.label(child);
            let rest = &pattern[matched..];
            let n = label.len().min(rest.len());
            if label[..n] != rest[..n] {
                return false;
            }
            matched += n;

            // Pattern exhausted, whether mid-edge or exactly at the node
            if matched == pattern.len() {
                return true;
            }
            node = child;
        }
    }

    /// Total nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// One per suffix when the sentinel does not occur in the payload.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().skip(1).filter(|n| n.is_leaf()).count()
    }

    /// Indexed buffer, sentinel included
    #[inline]
    pub fn text(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Indexed buffer without the sentinel
    #[inline]
    pub fn payload(&self) -> &[u8] {
        self.text.payload()
    }

    #[inline]
    pub fn sentinel(&self) -> u8 {
        self.text.sentinel()
    }

    /// Read-only view of a node; `None` for an unknown id.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<C>> {
        self.nodes.get(id)
    }

    /// Suffix link of `id` (root for leaves and the root itself).
    #[inline]
    pub fn suffix_link(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).map(Node::suffix_link)
    }

    /// Label of the edge leading into `id`. Empty for the root.
    #[inline]
    pub fn label(&self, id: NodeId) -> &[u8] {
        if id == ROOT {
            return &[];
        }
        let node = &self.nodes[id];
        self.text.slice(node.start, node.end(self.leaf_end))
    }

    /// Depth-first walk over every edge, children in ascending byte order.
    ///
    /// Debug/visualization hook; the output is identical for every child
    /// lookup strategy.
    pub fn edges(&self) -> Edges<'_, C> {
        let mut stack = Vec::new();
        self.push_children(&mut stack, ROOT, 1);
        Edges { tree: self, stack }
    }

    fn push_children(&self, stack: &mut Vec<(NodeId, NodeId, usize)>, parent: NodeId, depth: usize) {
        // Reversed so the smallest byte is popped first
        for (_, child) in self.nodes[parent].children.sorted().into_iter().rev() {
            stack.push((child, parent, depth));
        }
    }
}

/// One edge of the tree, as produced by [`SuffixTree::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    /// Node the edge leads into
    pub node: NodeId,
    pub parent: NodeId,
    /// 1 for edges leaving the root
    pub depth: usize,
    /// Inclusive byte range `[start, end]` into the buffer
    pub start: usize,
    pub end: usize,
    pub label: &'a [u8],
    pub is_leaf: bool,
}

/// Depth-first edge iterator.
pub struct Edges<'a, C> {
    tree: &'a SuffixTree<C>,
    /// (node, parent, depth) still to visit
    stack: Vec<(NodeId, NodeId, usize)>,
}

impl<'a, C: ChildIndex> Iterator for Edges<'a, C> {
    type Item = Edge<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (id, parent, depth) = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[id];

        tree.push_children(&mut self.stack, id, depth + 1);

        Some(Edge {
            node: id,
            parent,
            depth,
            start: node.start,
            end: node.end(tree.leaf_end),
            label: tree.label(id),
            is_leaf: node.is_leaf(),
        })
    }
}
