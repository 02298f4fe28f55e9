//! Ukkonen Construction (Online, O(N))
//!
//! **Architecture**:
//! - Arena: nodes addressed by index, suffix links are indices
//! - Rule 1: leaf ends read one shared `leaf_end`, bumped once per phase
//! - Skip/Count: walk down whole edges by comparing lengths only
//!
//! **Phase `pos`** makes every suffix of `text[..=pos]` present in the tree,
//! either explicitly (Rule 2: new leaf, maybe an edge split) or implicitly
//! (Rule 3: already on a path, which ends the phase early).
//!
//! The early exit in Rule 3 and the bookkeeping on `remainder` are what keep
//! the total work linear. Getting an offset wrong by one still yields a tree
//! that answers most queries, so the structural checks in the tests matter.

extern crate alloc;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::children::ChildIndex;
use crate::config::TreeConfig;
use crate::error::BuildError;
use crate::node::{Node, NodeId, ROOT};
use crate::text::TextBuffer;
use crate::tree::SuffixTree;

/// Cursor carried from one phase to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActiveState {
    /// Node the active point hangs off
    pub node: NodeId,
    /// Text offset whose byte selects the outgoing edge (meaningful when `length > 0`)
    pub edge: usize,
    /// How far along that edge the active point sits
    pub length: usize,
    /// Suffixes not yet explicitly inserted
    pub remainder: usize,
}

impl ActiveState {
    const fn new() -> Self {
        Self {
            node: ROOT,
            edge: 0,
            length: 0,
            remainder: 0,
        }
    }
}

/// Single-use construction engine. Consumed by [`Builder::finish`]; a
/// half-built tree never leaves this module.
pub(crate) struct Builder<C> {
    text: TextBuffer,
    nodes: Vec<Node<C>>,
    active: ActiveState,
    /// Shared right end of every leaf edge
    leaf_end: usize,
    /// Next phase to run
    next_pos: usize,
}

impl<C: ChildIndex> Builder<C> {
    pub fn new(text: TextBuffer, config: &TreeConfig) -> Result<Self, BuildError> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(config.arena_capacity(text.len()).max(1))?;
        nodes.push(Node::root());

        Ok(Self {
            text,
            nodes,
            active: ActiveState::new(),
            leaf_end: 0,
            next_pos: 0,
        })
    }

    /// Run every phase and hand over the finished tree.
    pub fn build(mut self) -> Result<SuffixTree<C>, BuildError> {
        debug!(
            "suffix tree build: {} bytes, {} children, vector width {}",
            self.text.len(),
            C::NAME,
            crate::simd::vector_width()
        );

        for pos in 0..self.text.len() {
            self.extend(pos)?;
        }
        Ok(self.finish())
    }

    /// Phase `pos`: add `text[pos]` to every pending suffix.
    pub fn extend(&mut self, pos: usize) -> Result<(), BuildError> {
        debug_assert_eq!(pos, self.next_pos, "phases must run in order");
        self.next_pos = pos + 1;

        // Rule 1: every leaf grows by one
        self.leaf_end = pos;
        self.active.remainder += 1;

        let current = self.text[pos];
        // Internal node created earlier in this phase, awaiting its suffix link
        let mut pending: Option<NodeId> = None;

        while self.active.remainder > 0 {
            if self.active.length == 0 {
                self.active.edge = pos;
            }

            let edge_byte = self.text[self.active.edge];
            let found = self.nodes[self.active.node].children.find(edge_byte);

            match found {
                None => {
                    // Rule 2: new leaf straight off the active node
                    let leaf = self.alloc(Node::leaf(pos))?;
                    self.nodes[self.active.node].children.add(edge_byte, leaf)?;

                    if let Some(node) = pending.take() {
                        self.nodes[node].suffix_link = self.active.node;
                    }
                }
                Some(child) => {
                    // Skip/count: hop over the whole edge without comparing bytes
                    let len = self.nodes[child].edge_length(self.leaf_end);
                    if self.active.length >= len {
                        self.active.edge += len;
                        self.active.length -= len;
                        self.active.node = child;
                        continue;
                    }

                    let next = self.text[self.nodes[child].start + self.active.length];
                    if next == current {
                        // Rule 3: suffix already implicit, phase ends here
                        if let Some(node) = pending.take() {
                            self.nodes[node].suffix_link = self.active.node;
                        }
                        self.active.length += 1;
                        break;
                    }

                    // Rule 2: mismatch inside the edge
                    let split = self.split_edge(edge_byte, child, pos)?;
                    if let Some(node) = pending {
                        self.nodes[node].suffix_link = split;
                    }
                    pending = Some(split);
                }
            }

            self.active.remainder -= 1;

            if self.active.node == ROOT && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = pos + 1 - self.active.remainder;
            } else if self.active.node != ROOT {
                self.active.node = self.nodes[self.active.node].suffix_link;
            }
        }

        debug_assert!(self.active_point_valid(), "active point corrupt after phase {pos}");
        Ok(())
    }

    /// Split `child`'s edge `active.length` bytes in, hang a new leaf for
    /// `pos` off the split point, and return the new internal node.
    fn split_edge(&mut self, edge_byte: u8, child: NodeId, pos: usize) -> Result<NodeId, BuildError> {
        let length = self.active.length;
        let start = self.nodes[child].start;
        debug_assert!(length >= 1);

        // 1. Internal node owns the prefix [start, start + length - 1]
        let split = self.alloc(Node::internal(start, start + length - 1))?;
        self.nodes[self.active.node].children.replace(edge_byte, split);

        // 2. Old child keeps the rest of its label
        let shifted = start + length;
        self.nodes[child].start = shifted;
        let child_byte = self.text[shifted];
        self.nodes[split].children.add(child_byte, child)?;

        // 3. Fresh leaf for the current suffix
        let leaf = self.alloc(Node::leaf(pos))?;
        let leaf_byte = self.text[pos];
        self.nodes[split].children.add(leaf_byte, leaf)?;

        trace!(
            "phase {pos}: split node {child} at {shifted} -> internal {split}, leaf {leaf}"
        );
        Ok(split)
    }

    #[inline]
    fn alloc(&mut self, node: Node<C>) -> Result<NodeId, BuildError> {
        if self.nodes.len() == self.nodes.capacity() {
            self.nodes.try_reserve(self.nodes.len().max(16))?;
        }
        let id = self.nodes.len();
        self.nodes.push(node);
        Ok(id)
    }

    /// `length > 0` implies `edge` is in range and the active node has an
    /// outgoing edge starting with `text[edge]`.
    fn active_point_valid(&self) -> bool {
        if self.active.length == 0 {
            return true;
        }
        self.active.edge < self.text.len()
            && self.nodes[self.active.node]
                .children
                .find(self.text[self.active.edge])
                .is_some()
    }

    /// Seal the tree. Every phase must have run.
    pub fn finish(self) -> SuffixTree<C> {
        debug_assert_eq!(self.next_pos, self.text.len(), "unfinished construction");

        let tree = SuffixTree::from_parts(self.text, self.nodes, self.leaf_end);
        debug!(
            "suffix tree built: {} nodes, {} leaves",
            tree.node_count(),
            tree.leaf_count()
        );
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children::{LinearChildren, OrderedChildren};

    fn builder<C: ChildIndex>(text: &[u8]) -> Builder<C> {
        let text = TextBuffer::new(text).unwrap();
        Builder::new(text, &TreeConfig::default()).unwrap()
    }

    /// Run phases `0..=last` and return the active state.
    fn run_until<C: ChildIndex>(b: &mut Builder<C>, last: usize) -> ActiveState {
        for pos in 0..=last {
            b.extend(pos).unwrap();
        }
        b.active
    }

    #[test]
    fn test_distinct_bytes_leave_nothing_pending() {
        let mut b = builder::<LinearChildren>(b"abc");
        let state = run_until(&mut b, 2);
        assert_eq!(state.remainder, 0);
        assert_eq!(state.length, 0);
        assert_eq!(b.nodes.len(), 4); // root + 3 leaves
    }

    #[test]
    fn test_active_point_walkthrough() {
        // Classic walkthrough text
        let mut b = builder::<LinearChildren>(b"abcabxabcd");

        // After "abca": 'a' is implicit, one suffix pending
        let state = run_until(&mut b, 3);
        assert_eq!((state.node, state.edge, state.length, state.remainder), (ROOT, 3, 1, 1));

        // After "abcab": still implicit, two pending
        b.extend(4).unwrap();
        assert_eq!((b.active.node, b.active.edge, b.active.length, b.active.remainder), (ROOT, 3, 2, 2));

        // 'x' forces splits of "ab" and "b" plus a root leaf
        b.extend(5).unwrap();
        assert_eq!(b.active.remainder, 0);
        assert_eq!(b.nodes.len(), 9);

        // "abc" again: the active point walks down into the "ab" node
        b.extend(6).unwrap();
        b.extend(7).unwrap();
        b.extend(8).unwrap();
        assert_eq!((b.active.node, b.active.edge, b.active.length, b.active.remainder), (4, 8, 1, 3));
    }

    #[test]
    fn test_suffix_links_walkthrough() {
        let mut b = builder::<OrderedChildren>(b"abcabxabcd");
        run_until(&mut b, 10);

        // "ab" -> "b" -> root, "abc" -> "bc" -> "c" -> root
        assert_eq!(b.nodes[4].suffix_link, 6);
        assert_eq!(b.nodes[6].suffix_link, ROOT);
        assert_eq!(b.nodes[9].suffix_link, 11);
        assert_eq!(b.nodes[11].suffix_link, 13);
        assert_eq!(b.nodes[13].suffix_link, ROOT);
        assert_eq!(b.nodes.len(), 17);
    }

    #[test]
    fn test_repeated_byte_chain() {
        // "aaaa$": every phase before '$' is a show-stopper
        let mut b = builder::<LinearChildren>(b"aaaa");
        let state = run_until(&mut b, 3);
        assert_eq!(state.remainder, 3);
        assert_eq!(b.nodes.len(), 2); // root + the single "a..." leaf

        b.extend(4).unwrap();
        assert_eq!(b.active.remainder, 0);
        assert_eq!(b.nodes.len(), 9);
    }

    #[test]
    fn test_build_matches_phase_by_phase() {
        let whole = builder::<LinearChildren>(b"mississippi").build().unwrap();

        let mut b = builder::<LinearChildren>(b"mississippi");
        run_until(&mut b, 11);
        let stepped = b.finish();

        assert_eq!(whole.node_count(), stepped.node_count());
        assert_eq!(whole.node_count(), 19);
    }

    #[test]
    fn test_small_capacity_hint_grows() {
        let text = TextBuffer::new(b"banana").unwrap();
        let config = TreeConfig::default().with_capacity_hint(1);
        let tree = Builder::<LinearChildren>::new(text, &config)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tree.node_count(), 11);
    }
}
