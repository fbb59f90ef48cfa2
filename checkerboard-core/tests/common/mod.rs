//! Shared test utilities for checkerboard-core tests.
//!
//! Reference implementations written without the library's bit helpers, so
//! tests can cross-check the optimized paths against plain arithmetic.

#![allow(dead_code)] // Not all test files use all functions

use std::collections::BTreeSet;

use checkerboard_core::Coloring;

/// Distinct colors on `vertex` and its `ndim` neighbors, counted with a set.
pub fn naive_neighborhood_size<C: Coloring + ?Sized>(coloring: &C, ndim: u32, vertex: u64) -> usize {
    let mut seen = BTreeSet::new();
    seen.insert(coloring.color(vertex));
    for i in 0..ndim {
        seen.insert(coloring.color(vertex ^ (1u64 << i)));
    }
    seen.len()
}

/// First vertex whose neighborhood does not show exactly `ndim` colors.
///
/// Returns `None` if the coloring is perfect.
pub fn naive_first_violation<C: Coloring + ?Sized>(coloring: &C, ndim: u32) -> Option<u64> {
    (0..1u64 << ndim).find(|&v| naive_neighborhood_size(coloring, ndim, v) != ndim as usize)
}

/// Popcount by shifting one bit at a time.
pub fn naive_popcount(mut x: u64) -> u32 {
    let mut n = 0;
    while x != 0 {
        n += (x & 1) as u32;
        x >>= 1;
    }
    n
}
