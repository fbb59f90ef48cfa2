//! # checkerboard-core: Neighborhood Colorings of the Hypercube
//!
//! `checkerboard-core` is a `no_std` library for exploring the "Devil's
//! Checkerboard" puzzle family: color the vertices of the `n`-dimensional
//! hypercube with `n` colors so that every vertex together with its `n`
//! neighbors sees every color.
//!
//! ## Overview
//!
//! 1. **Build the cube** - [`Hypercube`] checks the dimension and enumerates
//!    vertices and neighbors (`v ^ (1 << i)`)
//! 2. **Generate a candidate** - [`bfs_coloring`] (table) or
//!    [`MirrorColoring`] (closed form)
//! 3. **Validate** - [`validate`] returns a [`Verdict`], carrying the first
//!    [`Violation`] when a closed neighborhood misses a color
//! 4. **Report** - [`report`] renders headers, square/cube diagrams and the
//!    verdict into any `core::fmt::Write`
//!
//! ## Quick Start
//!
//! ```
//! use checkerboard_core::{bfs_coloring, validate, Hypercube};
//!
//! let cube = Hypercube::new(2).unwrap();
//! let colors = bfs_coloring(&cube);
//! assert_eq!(colors, [0, 0, 1, 1]);
//! assert!(validate(&colors, &cube).is_valid());
//! ```
//!
//! ## Module Organization
//!
//! - [`intrinsics`] - Bit access, binary labels, popcount backends
//! - [`topology`] - The hypercube graph and dimension limits
//! - [`coloring`] - The [`Coloring`] trait and both generators
//! - [`validator`] - Neighborhood-completeness check
//! - [`report`] - Text rendering

#![no_std]
#![deny(missing_docs)]

extern crate alloc;

// =============================================================================
// Module Declarations
// =============================================================================

/// Vertex colorings and their generators.
pub mod coloring;

/// Bit manipulation and population count.
pub mod intrinsics;

/// Header, diagram and verdict rendering.
pub mod report;

/// Hypercube graph definition.
pub mod topology;

/// Neighborhood-completeness validation.
pub mod validator;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use coloring::{bfs_coloring, Coloring, FnColoring, MirrorColoring};

pub use topology::{
    Color, ColorSet, DimensionError, Hypercube, VertexId, MAX_NDIM, MAX_TABLE_NDIM,
};

pub use validator::{validate, Verdict, Violation};

pub use intrinsics::POPCOUNT_BACKEND;
