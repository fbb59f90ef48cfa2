//! Comprehensive tests for the hypercube topology.
//!
//! Checks neighbor enumeration against the definition: ids differing in
//! exactly one bit.

use std::collections::BTreeSet;

use checkerboard_core::{DimensionError, Hypercube, MAX_NDIM, MAX_TABLE_NDIM};

// ============================================================================
// Helper Functions
// ============================================================================

/// Collect all neighbors of `v`, sorted.
fn collect_neighbors(cube: &Hypercube, v: u64) -> Vec<u64> {
    let mut neighbors = Vec::new();
    cube.for_each_neighbor(v, |n| neighbors.push(n));
    neighbors.sort();
    neighbors
}

/// Brute force: every vertex at Hamming distance one.
fn brute_force_neighbors(ndim: u32, v: u64) -> Vec<u64> {
    (0..1u64 << ndim)
        .filter(|&u| (u ^ v).count_ones() == 1)
        .collect()
}

// ============================================================================
// Neighbor relation
// ============================================================================

#[test]
fn test_neighbors_match_definition() {
    for ndim in 1..=8 {
        let cube = Hypercube::new(ndim).unwrap();
        for v in cube.vertices() {
            assert_eq!(
                collect_neighbors(&cube, v),
                brute_force_neighbors(ndim, v),
                "ndim = {ndim}, v = {v}"
            );
        }
    }
}

#[test]
fn test_exactly_ndim_neighbors_no_self_loops() {
    for ndim in 1..=10 {
        let cube = Hypercube::new(ndim).unwrap();
        for v in cube.vertices() {
            let n = collect_neighbors(&cube, v);
            assert_eq!(n.len(), ndim as usize);
            assert!(!n.contains(&v));
            assert!(n.iter().all(|&u| cube.contains(u)));
            let unique: BTreeSet<_> = n.iter().collect();
            assert_eq!(unique.len(), n.len());
        }
    }
}

#[test]
fn test_neighbor_relation_is_symmetric() {
    let cube = Hypercube::new(6).unwrap();
    for v in cube.vertices() {
        for u in collect_neighbors(&cube, v) {
            assert!(collect_neighbors(&cube, u).contains(&v), "{u} <-> {v}");
        }
    }
}

#[test]
fn test_upward_neighbors_increase_weight() {
    let cube = Hypercube::new(7).unwrap();
    for v in cube.vertices() {
        let mut count = 0;
        cube.for_each_upward_neighbor(v, |u| {
            assert_eq!(u.count_ones(), v.count_ones() + 1);
            assert_eq!(u & v, v);
            count += 1;
        });
        assert_eq!(count, 7 - v.count_ones());
    }
}

#[test]
fn test_top_dimension_neighbors() {
    let cube = Hypercube::new(MAX_NDIM).unwrap();
    let top = cube.vertex_count() - 1;
    let n = collect_neighbors(&cube, top);
    assert_eq!(n.len(), 63);
    assert_eq!(n[0], top ^ (1 << 62));
    assert_eq!(n[62], top ^ 1);
}

// ============================================================================
// Dimension limits
// ============================================================================

#[test]
fn test_dimension_errors_display() {
    assert_eq!(DimensionError::Zero.to_string(), "dimension must be at least 1");
    assert_eq!(
        DimensionError::TooLarge(64).to_string(),
        "dimension 64 exceeds the maximum of 63"
    );
    assert_eq!(
        DimensionError::TooLargeForTable(30).to_string(),
        format!("dimension 30 is too large for a color table (maximum {MAX_TABLE_NDIM})")
    );
}

#[test]
fn test_tabulable_is_stricter_than_new() {
    for ndim in 0..=70 {
        if Hypercube::tabulable(ndim).is_ok() {
            assert!(Hypercube::new(ndim).is_ok());
        }
    }
}
