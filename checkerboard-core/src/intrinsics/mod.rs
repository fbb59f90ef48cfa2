// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Bit-level helpers for hypercube vertices: single-bit access, binary labels,
// and population count with a build-time hardware/portable backend.

/// Bit access, binary labels, vertex and palette counts.
pub mod bits;

/// Population count: POPCNT or SWAR, selected at build time.
pub mod popcount;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use bits::{color_count, format_binary, get_bit, parse_binary, set_bit, state_count, BitWord};

pub use popcount::{
    popcount_u32, popcount_u32_swar, popcount_u64, popcount_u64_swar, POPCOUNT_BACKEND,
};
