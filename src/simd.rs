//! Vectorized byte scan
//!
//! **Block Compare**: broadcast the target byte, compare W keys at once,
//! collapse the result to a bitmask and take the lowest set bit.
//!
//! # Architecture Support
//!
//! | Target | W | Selection |
//! |--------|---|-----------|
//! | `x86_64` + AVX2 | 32 | runtime (`std`) or `target_feature` |
//! | `x86_64` | 16 | SSE2 is baseline |
//! | `aarch64` | 16 | NEON is baseline |
//! | other | 1 | scalar |
//!
//! Keys in a child table are unique, so "lowest matching index" and
//! "the matching index" are the same thing. Tails shorter than W always go
//! through the scalar loop; no load ever reads past the slice.

/// Smallest key count worth a vector compare.
pub const MIN_VECTOR_LEN: usize = 16;

/// Find the index of `target` in `keys`, or `None`.
#[inline]
#[must_use]
pub fn find_byte(keys: &[u8], target: u8) -> Option<usize> {
    if keys.len() < MIN_VECTOR_LEN {
        return find_byte_scalar(keys, target);
    }

    #[cfg(target_arch = "x86_64")]
    {
        if keys.len() >= 32 && has_avx2() {
            // SAFETY: AVX2 availability checked above
            return unsafe { x86::find_byte_avx2(keys, target) };
        }
        // SAFETY: SSE2 is part of the x86_64 baseline
        unsafe { x86::find_byte_sse2(keys, target) }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // SAFETY: NEON is part of the aarch64 baseline
        unsafe { neon::find_byte_neon(keys, target) }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        find_byte_scalar(keys, target)
    }
}

/// Widest block compare this process will use (1 = scalar only).
#[must_use]
pub fn vector_width() -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        if has_avx2() {
            32
        } else {
            16
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        16
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        1
    }
}

/// Scalar exact match search.
#[inline]
#[must_use]
pub fn find_byte_scalar(keys: &[u8], target: u8) -> Option<usize> {
    keys.iter().position(|&k| k == target)
}

#[cfg(all(target_arch = "x86_64", feature = "std"))]
#[inline]
fn has_avx2() -> bool {
    std::is_x86_feature_detected!("avx2")
}

#[cfg(all(target_arch = "x86_64", not(feature = "std")))]
#[inline]
fn has_avx2() -> bool {
    cfg!(target_feature = "avx2")
}

// ============================================================================
//  x86_64: SSE2 (16 lanes) / AVX2 (32 lanes)
// ============================================================================

#[cfg(target_arch = "x86_64")]
mod x86 {
    use super::find_byte_scalar;
    use core::arch::x86_64::{
        _mm256_cmpeq_epi8, _mm256_loadu_si256, _mm256_movemask_epi8, _mm256_set1_epi8,
        _mm_cmpeq_epi8, _mm_loadu_si128, _mm_movemask_epi8, _mm_set1_epi8,
    };

    /// # Safety
    /// Caller must ensure AVX2 is available.
    #[target_feature(enable = "avx2")]
    #[allow(clippy::cast_possible_wrap)]
    pub unsafe fn find_byte_avx2(keys: &[u8], target: u8) -> Option<usize> {
        let len = keys.len();
        let needle = _mm256_set1_epi8(target as i8);
        let mut i = 0;

        while i + 32 <= len {
            let block = _mm256_loadu_si256(keys.as_ptr().add(i).cast());
            let mask = _mm256_movemask_epi8(_mm256_cmpeq_epi8(block, needle)) as u32;
            if mask != 0 {
                return Some(i + mask.trailing_zeros() as usize);
            }
            i += 32;
        }

        find_byte_scalar(&keys[i..], target).map(|j| i + j)
    }

    /// # Safety
    /// Caller must ensure SSE2 is available (always true on x86_64).
    #[target_feature(enable = "sse2")]
    #[allow(clippy::cast_possible_wrap)]
    pub unsafe fn find_byte_sse2(keys: &[u8], target: u8) -> Option<usize> {
        let len = keys.len();
        let needle = _mm_set1_epi8(target as i8);
        let mut i = 0;

        while i + 16 <= len {
            let block = _mm_loadu_si128(keys.as_ptr().add(i).cast());
            // Only the low 16 bits are populated
            let mask = _mm_movemask_epi8(_mm_cmpeq_epi8(block, needle)) as u32;
            if mask != 0 {
                return Some(i + mask.trailing_zeros() as usize);
            }
            i += 16;
        }

        find_byte_scalar(&keys[i..], target).map(|j| i + j)
    }
}

// ============================================================================
//  aarch64: NEON (16 lanes)
// ============================================================================

#[cfg(target_arch = "aarch64")]
mod neon {
    use super::find_byte_scalar;
    use core::arch::aarch64::{
        vceqq_u8, vdupq_n_u8, vget_lane_u64, vld1q_u8, vreinterpret_u64_u8,
        vreinterpretq_u16_u8, vshrn_n_u16,
    };

    /// # Safety
    /// Caller must ensure NEON is available (always true on aarch64).
    #[target_feature(enable = "neon")]
    pub unsafe fn find_byte_neon(keys: &[u8], target: u8) -> Option<usize> {
        let len = keys.len();
        let needle = vdupq_n_u8(target);
        let mut i = 0;

        while i + 16 <= len {
            let block = vld1q_u8(keys.as_ptr().add(i));
            let eq = vceqq_u8(block, needle);
            // No movemask on NEON: shift-narrow gives 4 mask bits per lane
            let nibbles = vshrn_n_u16::<4>(vreinterpretq_u16_u8(eq));
            let mask = vget_lane_u64::<0>(vreinterpret_u64_u8(nibbles));
            if mask != 0 {
                return Some(i + (mask.trailing_zeros() / 4) as usize);
            }
            i += 16;
        }

        find_byte_scalar(&keys[i..], target).map(|j| i + j)
    }
}
