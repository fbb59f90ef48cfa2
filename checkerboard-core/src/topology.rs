//! Hypercube topology.
//!
//! The `ndim`-cube has `2^ndim` vertices, one per `ndim`-bit string. Two
//! vertices are adjacent when their ids differ in exactly one bit, so the
//! neighbors of `v` are `v ^ (1 << i)` for `i in 0..ndim`:
//!
//! ```text
//!   ndim = 3, v = 0b010
//!
//!   bit 0 -> 0b011
//!   bit 1 -> 0b000
//!   bit 2 -> 0b110
//! ```
//!
//! Every vertex has exactly `ndim` neighbors and none is adjacent to itself.
//! The palette used by colorings of the cube has `ndim` colors, which is why
//! dimension bounds also depend on the width of the color set ([`ColorSet`]).

use thiserror::Error;

use crate::intrinsics::{color_count, state_count};

/// Vertex id: an `ndim`-bit string stored in the low bits of a `u64`.
pub type VertexId = u64;

/// Color id in `0..ndim`.
pub type Color = u32;

/// Set of colors, bit `c` set when color `c` is present.
pub type ColorSet = u64;

/// Largest supported dimension. `2^63` vertices still fit a [`VertexId`] and
/// 63 colors fit a [`ColorSet`].
pub const MAX_NDIM: u32 = 63;

/// Largest dimension for which a full color table is materialized.
///
/// A table for this dimension holds 16M entries.
pub const MAX_TABLE_NDIM: u32 = 24;

/// Rejected dimension values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// The 0-cube has a single vertex and an empty palette.
    #[error("dimension must be at least 1")]
    Zero,

    /// Vertex ids or color sets would overflow 64 bits.
    #[error("dimension {0} exceeds the maximum of {max}", max = MAX_NDIM)]
    TooLarge(u32),

    /// A materialized color table would not fit in memory.
    #[error("dimension {0} is too large for a color table (maximum {max})", max = MAX_TABLE_NDIM)]
    TooLargeForTable(u32),
}

/// The `ndim`-dimensional hypercube graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hypercube {
    ndim: u32,
}

impl Hypercube {
    /// Create the cube of dimension `ndim`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Zero`] for `ndim == 0` and
    /// [`DimensionError::TooLarge`] above [`MAX_NDIM`].
    pub const fn new(ndim: u32) -> Result<Self, DimensionError> {
        if ndim == 0 {
            Err(DimensionError::Zero)
        } else if ndim > MAX_NDIM {
            Err(DimensionError::TooLarge(ndim))
        } else {
            Ok(Self { ndim })
        }
    }

    /// Create the cube and additionally require that its color table can be
    /// materialized.
    ///
    /// # Errors
    ///
    /// Same as [`Hypercube::new`], plus [`DimensionError::TooLargeForTable`]
    /// above [`MAX_TABLE_NDIM`].
    pub const fn tabulable(ndim: u32) -> Result<Self, DimensionError> {
        if ndim > MAX_TABLE_NDIM && ndim <= MAX_NDIM {
            return Err(DimensionError::TooLargeForTable(ndim));
        }
        Self::new(ndim)
    }

    /// Dimension of the cube.
    #[inline]
    pub const fn ndim(&self) -> u32 {
        self.ndim
    }

    /// Number of vertices, `2^ndim`.
    #[inline]
    pub fn vertex_count(&self) -> u64 {
        state_count(self.ndim)
    }

    /// Palette size, equal to `ndim`.
    #[inline]
    pub const fn color_count(&self) -> u32 {
        color_count(self.ndim)
    }

    /// Whether `vertex` is a vertex of this cube.
    #[inline]
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count()
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> core::ops::Range<VertexId> {
        0..self.vertex_count()
    }

    /// Calls `f` once per neighbor of `vertex`, in bit order.
    #[inline(always)]
    pub fn for_each_neighbor<F>(&self, vertex: VertexId, mut f: F)
    where
        F: FnMut(VertexId),
    {
        for i in 0..self.ndim {
            f(vertex ^ (1 << i));
        }
    }

    /// Calls `f` once per neighbor reachable by setting a clear bit, i.e.
    /// neighbors one step further from vertex 0.
    #[inline(always)]
    pub fn for_each_upward_neighbor<F>(&self, vertex: VertexId, mut f: F)
    where
        F: FnMut(VertexId),
    {
        for i in 0..self.ndim {
            let mask = 1 << i;
            if vertex & mask == 0 {
                f(vertex | mask);
            }
        }
    }
}
