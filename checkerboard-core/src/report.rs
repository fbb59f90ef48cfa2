//! Text report for one coloring.
//!
//! A report is a header, a diagram (or a placeholder), and the validation
//! verdict:
//!
//! ```text
//!
//!
//! n = 2, 4 states, 2 colors
//!   (10) o ----- o (11)   (00) : 0
//!        |       |        (01) : 0
//!        |       |        (10) : 1
//!   (00) o-------o (01)   (11) : 1
//! Validated: yes
//! ```
//!
//! Diagrams exist for the square and the cube. Each vertex is keyed by its
//! id written most significant bit first.

use core::fmt::{self, Write};

use crate::coloring::Coloring;
use crate::topology::{Hypercube, VertexId};
use crate::validator::Verdict;

/// Square diagram rows; the legend column is appended per row.
const SQUARE_ROWS: [&str; 4] = [
    "  (10) o ----- o (11)   ",
    "       |       |        ",
    "       |       |        ",
    "  (00) o-------o (01)   ",
];

/// Cube diagram rows; the legend column is appended per row.
const CUBE_ROWS: [&str; 8] = [
    "    (110) o-------o (111)   ",
    "         /|      /|         ",
    " (010)  / |     / |         ",
    "       o ----- o  o (101)   ",
    "       | /     | /          ",
    "       |/      |/           ",
    " (000) o-------o (001)      ",
    "                            ",
];

/// Write the blank-line separated header: dimension, vertex and color counts.
pub fn write_header<W: Write>(out: &mut W, cube: &Hypercube) -> fmt::Result {
    write!(
        out,
        "\n\nn = {}, {} states, {} colors\n",
        cube.ndim(),
        cube.vertex_count(),
        cube.color_count()
    )
}

/// Draw `coloring` on `cube`.
///
/// The square (`ndim == 2`) and cube (`ndim == 3`) get an ASCII drawing with
/// a legend listing every vertex and its color. The tesseract has no drawing
/// and gets an explicit note; every other dimension gets a one-line notice.
pub fn write_diagram<W, C>(out: &mut W, coloring: &C, cube: &Hypercube) -> fmt::Result
where
    W: Write,
    C: Coloring + ?Sized,
{
    match cube.ndim() {
        2 => write_rows(out, &SQUARE_ROWS, coloring, 2),
        3 => {
            out.write_char('\n')?;
            write_rows(out, &CUBE_ROWS, coloring, 3)
        }
        4 => writeln!(out, "No diagram for dimension 4 (tesseract layout not drawn)"),
        n => writeln!(out, "No visualization for dimension {n}"),
    }
}

fn write_rows<W, C>(out: &mut W, rows: &[&str], coloring: &C, ndim: usize) -> fmt::Result
where
    W: Write,
    C: Coloring + ?Sized,
{
    for (vertex, row) in rows.iter().enumerate() {
        let color = coloring.color(vertex as VertexId);
        writeln!(out, "{row}({vertex:0ndim$b}) : {color}")?;
    }
    Ok(())
}

/// Write `Validated: yes|no`, followed by the violation on failure.
pub fn write_verdict<W: Write>(out: &mut W, verdict: &Verdict) -> fmt::Result {
    match verdict {
        Verdict::Valid => writeln!(out, "Validated: yes"),
        Verdict::Invalid(violation) => {
            writeln!(out, "Validated: no")?;
            writeln!(out, "{violation}")
        }
    }
}

/// Header, diagram and verdict in one go.
pub fn write_report<W, C>(
    out: &mut W,
    coloring: &C,
    cube: &Hypercube,
    verdict: &Verdict,
) -> fmt::Result
where
    W: Write,
    C: Coloring + ?Sized,
{
    write_header(out, cube)?;
    write_diagram(out, coloring, cube)?;
    write_verdict(out, verdict)
}
