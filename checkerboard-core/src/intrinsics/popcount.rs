// =============================================================================
// Population Count
// =============================================================================
//
// Counts set bits in 32- and 64-bit words. The backend is fixed at build time:
// the x86_64 POPCNT instruction when the `popcnt` target feature is enabled,
// the SWAR reduction everywhere else. Both paths return identical results.

#[cfg(all(target_arch = "x86_64", target_feature = "popcnt"))]
use core::arch::x86_64::{_popcnt32, _popcnt64};

/// Name of the popcount backend compiled into this build.
#[cfg(all(target_arch = "x86_64", target_feature = "popcnt"))]
pub const POPCOUNT_BACKEND: &str = "popcnt";

/// Name of the popcount backend compiled into this build.
#[cfg(not(all(target_arch = "x86_64", target_feature = "popcnt")))]
pub const POPCOUNT_BACKEND: &str = "swar";

/// Count set bits in a 32-bit value.
///
/// Uses the POPCNT instruction on x86_64 builds with `popcnt` enabled
/// (e.g. `-C target-cpu=native`), SWAR fallback otherwise.
#[inline(always)]
pub fn popcount_u32(value: u32) -> u32 {
    #[cfg(all(target_arch = "x86_64", target_feature = "popcnt"))]
    unsafe {
        _popcnt32(value as i32) as u32
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "popcnt")))]
    {
        popcount_u32_swar(value)
    }
}

/// Count set bits in a 64-bit value.
///
/// Uses the POPCNT instruction on x86_64 builds with `popcnt` enabled,
/// SWAR fallback otherwise.
#[inline(always)]
pub fn popcount_u64(value: u64) -> u32 {
    #[cfg(all(target_arch = "x86_64", target_feature = "popcnt"))]
    unsafe {
        _popcnt64(value as i64) as u32
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "popcnt")))]
    {
        popcount_u64_swar(value)
    }
}

// =============================================================================
// SWAR Fallback
// =============================================================================

/// Portable 32-bit popcount (SIMD within a register).
///
/// Sums adjacent bit pairs, then nibbles, then folds the byte counts into
/// the top byte with a single multiply.
#[inline(always)]
pub const fn popcount_u32_swar(value: u32) -> u32 {
    let mut v = value;
    v = v - ((v >> 1) & 0x5555_5555);
    v = (v & 0x3333_3333) + ((v >> 2) & 0x3333_3333);
    (((v + (v >> 4)) & 0x0F0F_0F0F).wrapping_mul(0x0101_0101)) >> 24
}

/// Portable 64-bit popcount (SIMD within a register).
///
/// Same pair/nibble reduction as [`popcount_u32_swar`], then shift-and-add
/// folding of the byte counts. The result fits in 7 bits.
#[inline(always)]
pub const fn popcount_u64_swar(value: u64) -> u32 {
    let mut v = value;
    v = (v & 0x5555_5555_5555_5555) + ((v >> 1) & 0x5555_5555_5555_5555);
    v = (v & 0x3333_3333_3333_3333) + ((v >> 2) & 0x3333_3333_3333_3333);
    v = (v + (v >> 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    v += v >> 8;
    v += v >> 16;
    v += v >> 32;
    (v & 0x7F) as u32
}
