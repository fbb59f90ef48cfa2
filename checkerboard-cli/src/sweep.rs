//! Dimension sweep: generate, draw and validate one coloring per dimension.

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::{debug, info, info_span};

use checkerboard_core::report::write_report;
use checkerboard_core::{
    bfs_coloring, validate, Coloring, DimensionError, Hypercube, MirrorColoring, Verdict,
};

/// Dimensions swept by the BFS generator when none are given.
pub const BFS_DEFAULT_DIMS: &[u32] = &[2, 3, 4];

/// Dimensions swept by the mirror generator when none are given: 2 and its
/// repeated squares below 17.
pub const MIRROR_DEFAULT_DIMS: &[u32] = &[2, 4, 16];

/// Which generators to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Round-robin over the weight-ordered traversal.
    Bfs,
    /// Closed-form triangle wave.
    Mirror,
    /// BFS sweep followed by mirror sweep.
    All,
}

/// A single coloring generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generator {
    /// Table from [`bfs_coloring`].
    Bfs,
    /// [`MirrorColoring`].
    Mirror,
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Bfs => write!(f, "bfs"),
            Generator::Mirror => write!(f, "mirror"),
        }
    }
}

/// One generator applied to one cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Generator producing the coloring.
    pub generator: Generator,
    /// Cube being colored.
    pub cube: Hypercube,
}

/// Ordered list of runs, with every dimension already checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepPlan {
    runs: Vec<Run>,
}

impl SweepPlan {
    /// Build the plan for `strategy`.
    ///
    /// With `dims == None` each generator uses its default sweep. With
    /// explicit dimensions, every selected generator runs over them.
    ///
    /// # Errors
    ///
    /// Fails on the first dimension the selected generator cannot handle:
    /// zero, above 63, or (for BFS) too large for a color table.
    pub fn new(strategy: Strategy, dims: Option<&[u32]>) -> Result<Self, DimensionError> {
        let generators: &[Generator] = match strategy {
            Strategy::Bfs => &[Generator::Bfs],
            Strategy::Mirror => &[Generator::Mirror],
            Strategy::All => &[Generator::Bfs, Generator::Mirror],
        };

        let mut runs = Vec::new();
        for &generator in generators {
            let sweep = dims.unwrap_or(match generator {
                Generator::Bfs => BFS_DEFAULT_DIMS,
                Generator::Mirror => MIRROR_DEFAULT_DIMS,
            });
            for &ndim in sweep {
                let cube = match generator {
                    Generator::Bfs => Hypercube::tabulable(ndim)?,
                    Generator::Mirror => Hypercube::new(ndim)?,
                };
                runs.push(Run { generator, cube });
            }
        }

        Ok(Self { runs })
    }

    /// Runs in execution order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }
}

/// Validation tally over a sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Colorings that passed.
    pub valid: usize,
    /// Colorings that failed.
    pub invalid: usize,
}

impl SweepSummary {
    /// `true` when no coloring failed.
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Generate, render and validate a single run.
///
/// Returns the report text and the verdict.
pub fn execute(run: &Run) -> (String, Verdict) {
    let cube = &run.cube;
    let mut report = String::new();

    let verdict = match run.generator {
        Generator::Bfs => {
            let colors = bfs_coloring(cube);
            let verdict = validate(&colors, cube);
            render(&mut report, &colors, cube, &verdict);
            verdict
        }
        Generator::Mirror => {
            let coloring = MirrorColoring::new(cube.ndim());
            let verdict = validate(&coloring, cube);
            render(&mut report, &coloring, cube, &verdict);
            verdict
        }
    };

    (report, verdict)
}

fn render<C>(report: &mut String, coloring: &C, cube: &Hypercube, verdict: &Verdict)
where
    C: Coloring + ?Sized,
{
    write_report(report, coloring, cube, verdict).expect("writing to a String cannot fail");
}

/// Execute every run of `plan`, writing each report to `out` and flushing
/// after each dimension.
///
/// A coloring that fails validation is reported and counted, and the sweep
/// moves on.
///
/// # Errors
///
/// Only I/O errors on `out`.
pub fn run_sweep<W: Write>(plan: &SweepPlan, out: &mut W) -> Result<SweepSummary> {
    let mut summary = SweepSummary::default();

    for run in plan.runs() {
        let ndim = run.cube.ndim();
        let _span = info_span!("run", generator = %run.generator, ndim).entered();
        debug!(vertices = run.cube.vertex_count(), "generating coloring");

        let (report, verdict) = execute(run);
        out.write_all(report.as_bytes())
            .and_then(|()| out.flush())
            .with_context(|| format!("failed to write report for {} n={ndim}", run.generator))?;

        if verdict.is_valid() {
            summary.valid += 1;
            info!("coloring is perfect");
        } else {
            summary.invalid += 1;
            info!("coloring fails validation");
        }
    }

    Ok(summary)
}
