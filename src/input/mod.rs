// src/input/mod.rs

//! Problem input: reading, parsing and validation.
//!
//! Responsibilities:
//! - Define the raw and validated problem model (`model.rs`).
//! - Parse the `n m` / `a b` text format (`parser.rs`).
//! - Check the preconditions the scheduler relies on (`validate.rs`).
//! - Read the input from a file or stdin (`loader.rs`).

pub mod loader;
pub mod model;
pub mod parser;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_from_reader};
pub use model::{Problem, RawProblem};
pub use parser::parse_problem;
