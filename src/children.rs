//! Child Tables
//!
//! Per-node map from the first byte of an edge label to the child at the
//! other end. Two back ends share one trait:
//!
//! - [`LinearChildren`]: keys packed contiguously, scanned W bytes at a time
//!   by [`simd::find_byte`]. O(k) worst case, but k is the branching factor,
//!   which is tiny for realistic alphabets, and the scan never leaves one or
//!   two cache lines. This is the default.
//! - [`OrderedChildren`]: `BTreeMap`, O(log k) worst case.
//!
//! Both answer `find` identically for every key set.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::error::BuildError;
use crate::node::NodeId;
use crate::simd;

/// Child lookup strategy.
///
/// The Builder guarantees that `add` is never called with a byte that is
/// already present and that `replace` is only called with one that is.
/// Neither precondition is re-checked in release builds.
pub trait ChildIndex: Default {
    /// Short name used in logs and benchmark labels.
    const NAME: &'static str;

    /// Child whose edge starts with `byte`.
    fn find(&self, byte: u8) -> Option<NodeId>;

    /// Attach a new child.
    fn add(&mut self, byte: u8, child: NodeId) -> Result<(), BuildError>;

    /// Re-point an existing entry (edge split).
    fn replace(&mut self, byte: u8, child: NodeId);

    /// Number of children (branching factor).
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries sorted by byte.
    fn sorted(&self) -> Vec<(u8, NodeId)>;
}

// ============================================================================
//  Linear scan (default)
// ============================================================================

/// Parallel key/child arrays with a vectorized key scan.
#[derive(Debug, Clone, Default)]
pub struct LinearChildren {
    /// First bytes, in insertion order
    keys: Vec<u8>,
    /// `children[i]` is the child for `keys[i]`
    children: Vec<NodeId>,
}

impl LinearChildren {
    #[inline(always)]
    fn position(&self, byte: u8) -> Option<usize> {
        simd::find_byte(&self.keys, byte)
    }
}

impl ChildIndex for LinearChildren {
    const NAME: &'static str = "linear";

    #[inline(always)]
    fn find(&self, byte: u8) -> Option<NodeId> {
        self.position(byte).map(|i| self.children[i])
    }

    #[inline]
    fn add(&mut self, byte: u8, child: NodeId) -> Result<(), BuildError> {
        debug_assert!(self.position(byte).is_none(), "duplicate child byte {byte:#04x}");

        // Most nodes end up with a handful of children
        if self.keys.len() == self.keys.capacity() {
            let extra = self.keys.len().max(4);
            self.keys.try_reserve(extra)?;
            self.children.try_reserve(extra)?;
        }
        self.keys.push(byte);
        self.children.push(child);
        Ok(())
    }

    #[inline]
    fn replace(&mut self, byte: u8, child: NodeId) {
        match self.position(byte) {
            Some(i) => self.children[i] = child,
            None => debug_assert!(false, "replace on missing child byte {byte:#04x}"),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }

    fn sorted(&self) -> Vec<(u8, NodeId)> {
        let mut entries: Vec<_> = self
            .keys
            .iter()
            .copied()
            .zip(self.children.iter().copied())
            .collect();
        entries.sort_unstable_by_key(|&(byte, _)| byte);
        entries
    }
}

// ============================================================================
//  Ordered lookup
// ============================================================================

/// `BTreeMap`-backed child table.
#[derive(Debug, Clone, Default)]
pub struct OrderedChildren {
    map: BTreeMap<u8, NodeId>,
}

impl ChildIndex for OrderedChildren {
    const NAME: &'static str = "ordered";

    #[inline]
    fn find(&self, byte: u8) -> Option<NodeId> {
        self.map.get(&byte).copied()
    }

    #[inline]
    fn add(&mut self, byte: u8, child: NodeId) -> Result<(), BuildError> {
        let prev = self.map.insert(byte, child);
        debug_assert!(prev.is_none(), "duplicate child byte {byte:#04x}");
        Ok(())
    }

    #[inline]
    fn replace(&mut self, byte: u8, child: NodeId) {
        match self.map.get_mut(&byte) {
            Some(slot) => *slot = child,
            None => debug_assert!(false, "replace on missing child byte {byte:#04x}"),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn sorted(&self) -> Vec<(u8, NodeId)> {
        self.map.iter().map(|(&byte, &child)| (byte, child)).collect()
    }
}
