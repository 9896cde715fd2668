// src/output.rs

//! Rendering of the scheduling result for stdout.

use crate::errors::{CourseOrderError, Result};
use crate::types::Course;

/// Printed instead of an order when the requirements are cyclic.
pub const IMPOSSIBLE: &str = "IMPOSSIBLE";

/// Courses separated by single spaces, e.g. `"3 4 1 2"`.
pub fn render_order(order: &[Course]) -> String {
    order
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the outcome of [`find_course_order`](crate::dag::find_course_order).
///
/// A cycle becomes [`IMPOSSIBLE`]; any other error is handed back so the
/// caller can report it.
pub fn render_outcome(outcome: Result<Vec<Course>>) -> Result<String> {
    match outcome {
        Ok(order) => Ok(render_order(&order)),
        Err(CourseOrderError::CycleDetected) => Ok(IMPOSSIBLE.to_string()),
        Err(e) => Err(e),
    }
}
