//! Topological round-robin coloring.
//!
//! Vertices are visited from vertex 0 in order of Hamming weight (distance
//! from vertex 0), ties broken by descending id, and each vertex takes the
//! next color of a round-robin over `ndim` colors on its first visit.
//!
//! ```text
//! ndim = 3, visit order and colors:
//!
//!   weight 0:  000 -> 0
//!   weight 1:  100 -> 1   010 -> 2   001 -> 0
//!   weight 2:  110 -> 1   101 -> 2   011 -> 0
//!   weight 3:  111 -> 1
//! ```
//!
//! (Labels above are written most significant bit first.)
//!
//! The frontier is an ordered set rather than a FIFO queue: a vertex reached
//! from a lower-weight predecessor is always finalized after every vertex of
//! smaller weight, regardless of discovery order. Only "upward" edges (setting
//! a clear bit) are followed, so no vertex is revisited through a lighter
//! neighbor.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Reverse;

use crate::intrinsics::popcount_u64;
use crate::topology::{Color, Hypercube, VertexId, MAX_TABLE_NDIM};

/// Frontier ordering key: lighter vertices first, then larger ids.
type FrontierKey = (u32, Reverse<VertexId>);

#[inline(always)]
fn frontier_key(vertex: VertexId) -> FrontierKey {
    (popcount_u64(vertex), Reverse(vertex))
}

/// Dense bitset over the vertices of a cube, one bit per vertex.
struct VertexSet {
    words: Vec<u64>,
}

impl VertexSet {
    fn new(vertex_count: usize) -> Self {
        Self {
            words: vec![0; vertex_count.div_ceil(64)],
        }
    }

    /// Inserts `vertex`, returning `true` if it was not present.
    #[inline(always)]
    fn insert(&mut self, vertex: VertexId) -> bool {
        let word = &mut self.words[(vertex / 64) as usize];
        let bit = 1u64 << (vertex % 64);
        let fresh = *word & bit == 0;
        *word |= bit;
        fresh
    }
}

/// Generate the round-robin coloring of `cube` in topological order.
///
/// Returns a table of `2^ndim` colors indexed by vertex id. The result is
/// fully determined by `ndim`.
///
/// # Panics
///
/// Panics if `cube.ndim() > MAX_TABLE_NDIM`; use
/// [`Hypercube::tabulable`] to reject such dimensions up front.
pub fn bfs_coloring(cube: &Hypercube) -> Vec<Color> {
    let ndim = cube.ndim();
    assert!(
        ndim <= MAX_TABLE_NDIM,
        "refusing to materialize a color table for dimension {ndim}"
    );

    let n_states = cube.vertex_count() as usize;
    let n_colors = cube.color_count();

    let mut colors = vec![0 as Color; n_states];
    let mut discovered = VertexSet::new(n_states);
    let mut finalized = VertexSet::new(n_states);
    let mut frontier: BTreeSet<FrontierKey> = BTreeSet::new();
    let mut next_color: Color = 0;

    discovered.insert(0);
    frontier.insert(frontier_key(0));

    while let Some((_, Reverse(current))) = frontier.pop_first() {
        if finalized.insert(current) {
            colors[current as usize] = next_color;
            next_color = (next_color + 1) % n_colors;
        }

        cube.for_each_upward_neighbor(current, |child| {
            if discovered.insert(child) {
                frontier.insert(frontier_key(child));
            }
        });
    }

    tracing::trace!(ndim, n_states, "bfs coloring generated");
    colors
}
