// src/input/loader.rs

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::input::model::{Problem, RawProblem};
use crate::input::parser::parse_problem;

/// Load a problem file from a given path and return the unvalidated
/// [`RawProblem`].
///
/// This only performs parsing; use [`load_and_validate`] to also check
/// course ranges.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawProblem> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading problem file");
    let contents = fs::read_to_string(path)?;
    parse_problem(&contents)
}

/// Read a problem from any reader (typically stdin) until EOF.
pub fn load_from_reader(mut reader: impl Read) -> Result<RawProblem> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_problem(&contents)
}

/// Load a problem from `path`, or from stdin when `path` is `None`, and
/// validate it.
///
/// This is the recommended entry point for the rest of the application.
pub fn load_and_validate(path: Option<&Path>) -> Result<Problem> {
    let raw = match path {
        Some(p) => load_from_path(p)?,
        None => {
            debug!("reading problem from stdin");
            load_from_reader(std::io::stdin().lock())?
        }
    };
    Problem::try_from(raw)
}
