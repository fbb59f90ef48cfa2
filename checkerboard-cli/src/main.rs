//! Devil's Checkerboard coloring explorer.
//!
//! Generates candidate colorings of the hypercube, draws the small ones and
//! checks that every vertex together with its neighbors sees all colors.
//!
//! # Usage
//!
//! ```bash
//! # Both default sweeps: bfs over 2,3,4 then mirror over 2,4,16
//! cargo run --release -p checkerboard-cli
//!
//! # Only the mirror coloring, on chosen dimensions
//! cargo run --release -p checkerboard-cli -- --strategy mirror --dims 4,8,12
//!
//! # Non-zero exit status if any coloring fails, with debug logs on stderr
//! cargo run --release -p checkerboard-cli -- --strict -vv
//! ```

mod logging;
mod sweep;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use checkerboard_core::POPCOUNT_BACKEND;

use crate::sweep::{run_sweep, Strategy, SweepPlan, SweepSummary};

#[derive(Parser, Debug)]
#[command(name = "checkerboard")]
#[command(about = "Generate, draw and validate Devil's Checkerboard colorings")]
struct Args {
    /// Coloring generator(s) to run
    #[arg(long, value_enum, default_value_t = Strategy::All)]
    strategy: Strategy,

    /// Dimensions to sweep (comma-separated)
    /// Defaults: bfs 2,3,4 and mirror 2,4,16
    #[arg(long, value_delimiter = ',')]
    dims: Option<Vec<u32>>,

    /// Exit with status 1 if any coloring fails validation
    #[arg(long)]
    strict: bool,

    /// Log more on stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init(args.verbose)?;
    debug!(backend = POPCOUNT_BACKEND, "popcount backend");

    let plan = SweepPlan::new(args.strategy, args.dims.as_deref())
        .context("invalid --dims")?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let summary = run_sweep(&plan, &mut out)?;

    if !summary.all_valid() {
        if args.strict {
            warn!(
                valid = summary.valid,
                invalid = summary.invalid,
                "some colorings failed validation"
            );
        } else {
            info!(
                valid = summary.valid,
                invalid = summary.invalid,
                "some colorings failed validation"
            );
        }
    }

    Ok(ExitCode::from(exit_status(&summary, args.strict)))
}

/// Process exit status: 1 only under `--strict` with a failing coloring.
fn exit_status(summary: &SweepSummary, strict: bool) -> u8 {
    u8::from(strict && !summary.all_valid())
}
