// =============================================================================
// Vertex Bit Manipulation
// =============================================================================
//
// A hypercube vertex is an `ndim`-bit string stored in an unsigned word.
// Bit 0 is the first coordinate. Index checks are hard asserts: an
// out-of-range index is a caller bug, never user input.

use alloc::string::String;
use core::fmt;
use core::ops::{BitAnd, BitOr, Not, Shl, Shr};

use super::popcount::{popcount_u32, popcount_u64};

/// Unsigned word usable as a vertex id or color set.
///
/// Implemented for `u32` and `u64`.
pub trait BitWord:
    Copy
    + Eq
    + Ord
    + Default
    + fmt::Debug
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of the word in bits.
    const BITS: u32;
    /// All bits clear.
    const ZERO: Self;
    /// Only bit 0 set.
    const ONE: Self;

    /// Number of set bits, via the build-selected popcount backend.
    fn popcount(self) -> u32;
}

impl BitWord for u32 {
    const BITS: u32 = u32::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline(always)]
    fn popcount(self) -> u32 {
        popcount_u32(self)
    }
}

impl BitWord for u64 {
    const BITS: u32 = u64::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline(always)]
    fn popcount(self) -> u32 {
        popcount_u64(self)
    }
}

/// Read bit `idx` of `value`.
///
/// # Panics
/// Panics if `idx >= W::BITS`.
#[inline(always)]
pub fn get_bit<W: BitWord>(value: W, idx: u32) -> bool {
    assert!(idx < W::BITS, "bit index {idx} out of range for {}-bit word", W::BITS);
    (value >> idx) & W::ONE == W::ONE
}

/// Return `value` with bit `idx` set to `bit`. All other bits are unchanged.
///
/// # Panics
/// Panics if `idx >= W::BITS`.
#[inline(always)]
pub fn set_bit<W: BitWord>(value: W, idx: u32, bit: bool) -> W {
    assert!(idx < W::BITS, "bit index {idx} out of range for {}-bit word", W::BITS);
    let cleared = value & !(W::ONE << idx);
    if bit {
        cleared | (W::ONE << idx)
    } else {
        cleared
    }
}

/// Parse a string of `'0'`/`'1'` characters, index 0 being the least
/// significant bit.
///
/// This is a debugging helper for hand-written vertex labels, not an input
/// parser.
///
/// # Panics
/// Panics if the string is longer than `W::BITS` or contains any other
/// character.
pub fn parse_binary<W: BitWord>(s: &str) -> W {
    assert!(
        s.len() <= W::BITS as usize,
        "binary string of length {} does not fit a {}-bit word",
        s.len(),
        W::BITS
    );
    s.bytes().enumerate().fold(W::ZERO, |acc, (i, c)| match c {
        b'0' => set_bit(acc, i as u32, false),
        b'1' => set_bit(acc, i as u32, true),
        other => panic!("invalid binary digit {:?} at position {i}", other as char),
    })
}

/// Render the low `ndim` bits of `value` as `b` followed by the bits in
/// index order (bit 0 first).
///
/// ```
/// use checkerboard_core::intrinsics::format_binary;
/// assert_eq!(format_binary(0b110u32, 3), "b011");
/// ```
///
/// # Panics
/// Panics if `ndim > W::BITS`.
pub fn format_binary<W: BitWord>(value: W, ndim: u32) -> String {
    assert!(ndim <= W::BITS, "ndim {ndim} exceeds {}-bit word", W::BITS);
    let mut out = String::with_capacity(ndim as usize + 1);
    out.push('b');
    for i in 0..ndim {
        out.push(if get_bit(value, i) { '1' } else { '0' });
    }
    out
}

/// Number of vertices of the `ndim`-cube: `2^ndim`.
///
/// # Panics
/// Panics if `ndim >= 64`.
#[inline]
pub fn state_count(ndim: u32) -> u64 {
    assert!(ndim < u64::BITS, "2^{ndim} does not fit in u64");
    1u64 << ndim
}

/// Palette size for the `ndim`-cube. Always `ndim`; the palette is never
/// rounded up.
#[inline]
pub const fn color_count(ndim: u32) -> u32 {
    ndim
}
