//! Neighborhood-completeness check.
//!
//! A coloring of the `ndim`-cube is *perfect* when every vertex together with
//! its `ndim` neighbors shows all `ndim` colors. Since the closed neighborhood
//! has `ndim + 1` members, exactly one color appears twice.
//!
//! The check builds a [`ColorSet`] per vertex and compares its popcount with
//! `ndim`. It stops at the first vertex that falls short and reports it as a
//! [`Violation`]; a failed check is an ordinary outcome, not an error.

use core::fmt;

use crate::coloring::Coloring;
use crate::intrinsics::popcount_u64;
use crate::topology::{ColorSet, Hypercube, VertexId};

/// First vertex whose closed neighborhood misses a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Dimension of the cube, used as the binary field width.
    pub ndim: u32,
    /// Offending vertex.
    pub vertex: VertexId,
    /// Colors seen in the closed neighborhood.
    pub colors_seen: ColorSet,
    /// Number of distinct colors seen.
    pub distinct: u32,
    /// Number of distinct colors required (`ndim`).
    pub expected: u32,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.ndim as usize;
        write!(
            f,
            "For state {:0width$b}, saw {} ({:0width$b}) colors, expected {}",
            self.vertex, self.distinct, self.colors_seen, self.expected
        )
    }
}

/// Outcome of [`validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every closed neighborhood contains all colors.
    Valid,
    /// The first vertex (in id order) that fails.
    Invalid(Violation),
}

impl Verdict {
    /// `true` for [`Verdict::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The violation, if any.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(v) => Some(v),
        }
    }
}

/// Colors present on `vertex` and its neighbors.
#[inline]
pub fn closed_neighborhood_colors<C>(coloring: &C, cube: &Hypercube, vertex: VertexId) -> ColorSet
where
    C: Coloring + ?Sized,
{
    let mut seen: ColorSet = 1 << coloring.color(vertex);
    cube.for_each_neighbor(vertex, |n| seen |= 1 << coloring.color(n));
    seen
}

/// Check that every closed neighborhood of `cube` sees exactly
/// `cube.color_count()` colors under `coloring`.
///
/// Vertices are checked in ascending id order and the scan stops at the
/// first failure. The coloring is only read.
pub fn validate<C>(coloring: &C, cube: &Hypercube) -> Verdict
where
    C: Coloring + ?Sized,
{
    let expected = cube.color_count();

    for vertex in cube.vertices() {
        let colors_seen = closed_neighborhood_colors(coloring, cube, vertex);
        let distinct = popcount_u64(colors_seen);
        if distinct != expected {
            let violation = Violation {
                ndim: cube.ndim(),
                vertex,
                colors_seen,
                distinct,
                expected,
            };
            tracing::debug!(
                ndim = cube.ndim(),
                vertex,
                colors_seen,
                distinct,
                "closed neighborhood is missing colors"
            );
            return Verdict::Invalid(violation);
        }
    }

    Verdict::Valid
}
