// src/lib.rs

pub mod cli;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;
pub mod output;
pub mod types;

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::dag::find_course_order;
use crate::input::load_and_validate;
use crate::output::render_outcome;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - reading and validating the problem (file or stdin)
/// - computing the course order
/// - printing the order, or `IMPOSSIBLE`, to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    run_with_output(args, &mut stdout)
}

/// Same as [`run`], but writes the result line to `out`.
///
/// A cyclic problem is a successful run that writes `IMPOSSIBLE`; only
/// unreadable or invalid input is an error.
pub fn run_with_output(args: CliArgs, out: &mut impl Write) -> Result<()> {
    let problem = load_and_validate(args.input_path().map(|p| p.as_path()))?;
    debug!(
        courses = problem.course_count(),
        requirements = problem.requirements().len(),
        "loaded problem"
    );

    let line = render_outcome(find_course_order(&problem))?;

    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}
