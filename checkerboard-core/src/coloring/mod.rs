//! Vertex colorings of the hypercube.
//!
//! A coloring maps every vertex id to a color id. Two generators produce
//! candidate colorings:
//!
//! | Generator | Representation | Memory |
//! |-----------|----------------|--------|
//! | [`bfs_coloring`] | `Vec<Color>` table | `O(2^ndim)` |
//! | [`MirrorColoring`] | closed-form function | `O(1)` |
//!
//! Both are consumed through the [`Coloring`] trait, so the validator and the
//! reporter never care how a color is obtained. Arbitrary closures can be
//! wrapped in [`FnColoring`].

use alloc::vec::Vec;

use crate::topology::{Color, VertexId};

/// Round-robin assignment over the weight/id-ordered traversal.
pub mod bfs;

/// Triangle-wave coloring computed from the vertex id.
pub mod mirror;

pub use bfs::bfs_coloring;
pub use mirror::MirrorColoring;

/// Indexable mapping from vertex id to color id.
///
/// Implementations must be total over `0..2^ndim` for the cube they are used
/// with. Lookups outside that range may panic.
pub trait Coloring {
    /// Color of `vertex`.
    fn color(&self, vertex: VertexId) -> Color;
}

impl Coloring for [Color] {
    #[inline]
    fn color(&self, vertex: VertexId) -> Color {
        self[vertex as usize]
    }
}

impl Coloring for Vec<Color> {
    #[inline]
    fn color(&self, vertex: VertexId) -> Color {
        self.as_slice().color(vertex)
    }
}

impl<C: Coloring + ?Sized> Coloring for &C {
    #[inline]
    fn color(&self, vertex: VertexId) -> Color {
        (**self).color(vertex)
    }
}

/// Coloring backed by a closure.
///
/// ```
/// use checkerboard_core::coloring::{Coloring, FnColoring};
///
/// let parity = FnColoring(|v: u64| (v.count_ones() % 2) as u32);
/// assert_eq!(parity.color(0b011), 0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnColoring<F>(pub F);

impl<F> Coloring for FnColoring<F>
where
    F: Fn(VertexId) -> Color,
{
    #[inline]
    fn color(&self, vertex: VertexId) -> Color {
        (self.0)(vertex)
    }
}
