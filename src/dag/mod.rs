// src/dag/mod.rs

//! Course graph and ordering.
//!
//! - [`graph`] turns validated requirements into successor lists and
//!   in-degree counts.
//! - [`scheduler`] runs Kahn's algorithm over that graph, one course at a
//!   time, and detects cycles.
//! - [`state`] holds the per-course state observed during a pass.

pub mod graph;
pub mod scheduler;
pub mod state;

pub use graph::CourseGraph;
pub use scheduler::Scheduler;
pub use state::CourseState;

use tracing::info;

use crate::errors::Result;
use crate::input::Problem;
use crate::types::Course;

/// Compute an order in which all courses of `problem` can be completed.
///
/// Returns [`CourseOrderError::CycleDetected`](crate::errors::CourseOrderError::CycleDetected)
/// when the requirements contain a cycle.
pub fn find_course_order(problem: &Problem) -> Result<Vec<Course>> {
    let graph = CourseGraph::from_problem(problem);
    let result = Scheduler::new(graph).run();
    match &result {
        Ok(order) => info!(courses = order.len(), "found a valid course order"),
        Err(e) => info!(error = %e, "no valid course order"),
    }
    result
}
