//! Closed-form triangle-wave coloring.
//!
//! Colors rise `0, 1, ..., ndim-1`, then fall back `ndim-1, ..., 0`, with
//! period `2 * ndim` over the vertex ids:
//!
//! ```text
//! ndim = 3:  id    0 1 2 3 4 5 6 7
//!            color 0 1 2 2 1 0 0 1
//! ```
//!
//! Nothing is stored, so the coloring can be queried for dimensions whose
//! vertex set could never be materialized.

use crate::coloring::Coloring;
use crate::topology::{Color, VertexId};

/// Triangle-wave coloring of the `ndim`-cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MirrorColoring {
    ndim: u32,
}

impl MirrorColoring {
    /// Coloring for the `ndim`-cube.
    ///
    /// # Panics
    /// Panics if `ndim` is 0 or above 63.
    pub fn new(ndim: u32) -> Self {
        assert!((1..64).contains(&ndim), "mirror coloring needs 1 <= ndim <= 63, got {ndim}");
        Self { ndim }
    }

    /// Dimension this coloring was built for.
    pub fn ndim(&self) -> u32 {
        self.ndim
    }
}

impl Coloring for MirrorColoring {
    /// # Panics
    /// Panics if `vertex >= 2^ndim`.
    #[inline]
    fn color(&self, vertex: VertexId) -> Color {
        assert!(
            vertex >> self.ndim == 0,
            "vertex {vertex} outside the {}-cube",
            self.ndim
        );

        let ndim = u64::from(self.ndim);
        let cycle_len = 2 * ndim;
        let offset = vertex % cycle_len;
        let color = if offset < ndim {
            offset
        } else {
            cycle_len - offset - 1
        };
        color as Color
    }
}
