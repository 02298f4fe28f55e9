//! Text Buffer
//!
//! Immutable byte sequence terminated by a sentinel. The sentinel is what
//! turns the implicit suffix tree into an explicit one: once it is processed
//! every suffix ends in its own leaf.

extern crate alloc;
use alloc::vec::Vec;
use core::ops::Index;

use crate::error::BuildError;

/// Default terminator byte
pub const DEFAULT_SENTINEL: u8 = b'$';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    bytes: Vec<u8>,
    sentinel: u8,
}

impl TextBuffer {
    /// Wrap `text` using [`DEFAULT_SENTINEL`].
    pub fn new(text: &[u8]) -> Result<Self, BuildError> {
        Self::with_sentinel(text, DEFAULT_SENTINEL)
    }

    /// Wrap `text`, appending `sentinel` iff `text` is empty or does not
    /// already end with it.
    pub fn with_sentinel(text: &[u8], sentinel: u8) -> Result<Self, BuildError> {
        let needs_sentinel = text.last() != Some(&sentinel);

        let mut bytes = Vec::new();
        bytes.try_reserve_exact(text.len() + needs_sentinel as usize)?;
        bytes.extend_from_slice(text);
        if needs_sentinel {
            bytes.push(sentinel);
        }

        Ok(Self { bytes, sentinel })
    }

    /// Byte at `i` (sentinel included)
    #[inline(always)]
    pub fn get(&self, i: usize) -> u8 {
        self.bytes[i]
    }

    /// Length including the sentinel. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: the sentinel is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn sentinel(&self) -> u8 {
        self.sentinel
    }

    /// Full buffer, sentinel included
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Buffer without the trailing sentinel
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// Inclusive byte range `[start, end]`
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &[u8] {
        &self.bytes[start..=end]
    }
}

impl Index<usize> for TextBuffer {
    type Output = u8;

    #[inline(always)]
    fn index(&self, i: usize) -> &u8 {
        &self.bytes[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_sentinel() {
        let text = TextBuffer::new(b"abc").unwrap();
        assert_eq!(text.as_bytes(), b"abc$");
        assert_eq!(text.len(), 4);
        assert_eq!(text.payload(), b"abc");
    }

    #[test]
    fn test_existing_sentinel_kept() {
        let text = TextBuffer::new(b"abc$").unwrap();
        assert_eq!(text.as_bytes(), b"abc$");
    }

    #[test]
    fn test_empty_input() {
        // Empty input becomes just the sentinel
        let text = TextBuffer::new(b"").unwrap();
        assert_eq!(text.as_bytes(), b"$");
        assert!(!text.is_empty());
        assert!(text.payload().is_empty());
    }

    #[test]
    fn test_custom_sentinel() {
        let text = TextBuffer::with_sentinel(b"ACGT", 0).unwrap();
        assert_eq!(text.as_bytes(), b"ACGT\0");
        assert_eq!(text.sentinel(), 0);

        // '$' is ordinary payload under a different sentinel
        let text = TextBuffer::with_sentinel(b"a$", b'#').unwrap();
        assert_eq!(text.as_bytes(), b"a$#");
    }

    #[test]
    fn test_indexing() {
        let text = TextBuffer::new(b"banana").unwrap();
        assert_eq!(text[0], b'b');
        assert_eq!(text.get(5), b'a');
        assert_eq!(text[6], b'$');
        assert_eq!(text.slice(1, 3), b"ana");
    }
}
