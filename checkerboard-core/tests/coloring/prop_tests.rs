//! Property-based tests for generators and the validator.

use proptest::prelude::*;

use checkerboard_core::validator::closed_neighborhood_colors;
use checkerboard_core::{bfs_coloring, validate, Coloring, FnColoring, Hypercube, MirrorColoring};

use crate::common::{naive_first_violation, naive_neighborhood_size};

/// A cube of dimension 1..=6 with an arbitrary table coloring over its palette.
fn random_table() -> impl Strategy<Value = (u32, Vec<u32>)> {
    (1u32..=6).prop_flat_map(|ndim| {
        let n = 1usize << ndim;
        (Just(ndim), proptest::collection::vec(0..ndim, n))
    })
}

proptest! {
    // =========================================================================
    // Validator
    // =========================================================================

    #[test]
    fn prop_validator_matches_naive((ndim, colors) in random_table()) {
        let cube = Hypercube::new(ndim).unwrap();
        let verdict = validate(&colors, &cube);
        let expected = naive_first_violation(&colors, ndim);
        prop_assert_eq!(verdict.violation().map(|v| v.vertex), expected);
    }

    #[test]
    fn prop_violation_fields_are_consistent((ndim, colors) in random_table()) {
        let cube = Hypercube::new(ndim).unwrap();
        if let Some(v) = validate(&colors, &cube).violation() {
            prop_assert_eq!(v.ndim, ndim);
            prop_assert_eq!(v.expected, ndim);
            prop_assert_eq!(v.distinct, v.colors_seen.count_ones());
            prop_assert_ne!(v.distinct, ndim);
            prop_assert_eq!(
                v.distinct as usize,
                naive_neighborhood_size(&colors, ndim, v.vertex)
            );
        }
    }

    #[test]
    fn prop_validator_does_not_mutate((ndim, colors) in random_table()) {
        let cube = Hypercube::new(ndim).unwrap();
        let before = colors.clone();
        let _ = validate(&colors, &cube);
        prop_assert_eq!(colors, before);
    }

    #[test]
    fn prop_neighborhood_set_contains_own_color(
        (ndim, colors) in random_table(),
        pick in any::<u64>()
    ) {
        let cube = Hypercube::new(ndim).unwrap();
        let v = pick % cube.vertex_count();
        let set = closed_neighborhood_colors(&colors, &cube, v);
        prop_assert!(set & (1u64 << colors.color(v)) != 0);
        prop_assert!(set >> ndim == 0, "no color outside the palette");
    }

    #[test]
    fn prop_closure_and_table_validate_alike((ndim, colors) in random_table()) {
        let cube = Hypercube::new(ndim).unwrap();
        let table = colors.clone();
        let closure = FnColoring(move |v: u64| table[v as usize]);
        prop_assert_eq!(validate(&closure, &cube), validate(&colors, &cube));
    }

    // =========================================================================
    // BFS generator
    // =========================================================================

    #[test]
    fn prop_bfs_uses_whole_palette(ndim in 1u32..=12) {
        let colors = bfs_coloring(&Hypercube::new(ndim).unwrap());
        prop_assert_eq!(colors.len(), 1usize << ndim);
        // Round-robin over 2^ndim >= ndim vertices reaches every color
        for c in 0..ndim {
            prop_assert!(colors.contains(&c));
        }
    }

    #[test]
    fn prop_bfs_round_robin_counts(ndim in 1u32..=12) {
        // Each vertex is colored exactly once, in sequence, so per-color
        // counts differ by at most one and color 0 is never behind
        let colors = bfs_coloring(&Hypercube::new(ndim).unwrap());
        let mut counts = vec![0usize; ndim as usize];
        for &c in &colors {
            counts[c as usize] += 1;
        }
        let min = *counts.iter().min().unwrap();
        let max = *counts.iter().max().unwrap();
        prop_assert!(max - min <= 1);
        prop_assert_eq!(counts[0], max);
    }

    // =========================================================================
    // Mirror generator
    // =========================================================================

    #[test]
    fn prop_mirror_in_palette_and_periodic(ndim in 1u32..=40, pick in any::<u64>()) {
        let m = MirrorColoring::new(ndim);
        let n = 1u64 << ndim;
        let v = pick % n;
        let c = m.color(v);
        prop_assert!(c < ndim);
        let period = 2 * u64::from(ndim);
        if v + period < n {
            prop_assert_eq!(m.color(v + period), c);
        }
    }

    #[test]
    fn prop_mirror_is_symmetric_within_cycle(ndim in 1u32..=20, pick in any::<u64>()) {
        let m = MirrorColoring::new(ndim);
        let period = 2 * u64::from(ndim);
        let n = 1u64 << ndim;
        let base = (pick % n) / period * period;
        let k = pick % u64::from(ndim);
        let (lo, hi) = (base + k, base + period - 1 - k);
        if hi < n {
            prop_assert_eq!(m.color(lo), m.color(hi));
        }
    }
}
