//! # Tutorial: Checking a Coloring of the Tesseract
//!
//! This example walks through the library on the 4-dimensional hypercube,
//! where the mirror coloring happens to be perfect.
//!
//! ## What You'll Learn
//!
//! 1. **Vertices and labels**: How a vertex id maps to a bit string
//! 2. **Neighborhoods**: Which vertices a given vertex "sees"
//! 3. **Colorings**: Table-backed versus computed colorings
//! 4. **Validation**: How a failing vertex is reported
//!
//! ## The Puzzle
//!
//! Every vertex of the `n`-cube must be given one of `n` colors so that the
//! vertex and its `n` neighbors, `n + 1` vertices in all, show every color.
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_mirror
//! ```

use checkerboard_core::intrinsics::format_binary;
use checkerboard_core::report::write_report;
use checkerboard_core::validator::closed_neighborhood_colors;
use checkerboard_core::{bfs_coloring, validate, Coloring, Hypercube, MirrorColoring};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Dimension of the cube explored in this tutorial
const NDIM: u32 = 4;

fn main() {
    let cube = Hypercube::new(NDIM).expect("4 is a valid dimension");

    // =========================================================================
    // STEP 1: Vertices and labels
    // =========================================================================
    println!("Step 1: the {NDIM}-cube has {} vertices", cube.vertex_count());
    for v in [0u64, 1, 6, 15] {
        // Labels list bit 0 first
        println!("  vertex {v:2} -> {}", format_binary(v, NDIM));
    }

    // =========================================================================
    // STEP 2: Neighborhoods
    // =========================================================================
    let v = 6;
    let mut neighbors = Vec::new();
    cube.for_each_neighbor(v, |n| neighbors.push(n));
    println!("\nStep 2: neighbors of vertex {v}: {neighbors:?}");

    // =========================================================================
    // STEP 3: Two colorings
    // =========================================================================
    let mirror = MirrorColoring::new(NDIM);
    let table = bfs_coloring(&cube);

    println!("\nStep 3: colors of vertex {v} and its neighbors");
    for u in std::iter::once(v).chain(neighbors.iter().copied()) {
        println!("  {u:2}: mirror {} / bfs {}", mirror.color(u), table.color(u));
    }

    let seen = closed_neighborhood_colors(&mirror, &cube, v);
    println!("  mirror color set: {seen:0w$b}", w = NDIM as usize);

    // =========================================================================
    // STEP 4: Validation
    // =========================================================================
    println!("\nStep 4: validation");
    for (name, verdict) in [
        ("mirror", validate(&mirror, &cube)),
        ("bfs", validate(&table, &cube)),
    ] {
        match verdict.violation() {
            None => println!("  {name}: perfect"),
            Some(violation) => println!("  {name}: {violation}"),
        }
    }

    // The same report the command-line driver prints
    let mut report = String::new();
    write_report(&mut report, &mirror, &cube, &validate(&mirror, &cube))
        .expect("writing to a String cannot fail");
    print!("{report}");
}
