// src/dag/graph.rs

use std::ops::RangeInclusive;

use tracing::debug;

use crate::input::Problem;
use crate::types::Course;

/// Directed graph of courses, edge `a -> b` for each requirement "a before b".
///
/// Courses are small dense integers, so both tables are plain vectors
/// indexed by course number. Index `0` is unused.
#[derive(Debug, Clone)]
pub struct CourseGraph {
    course_count: u32,
    /// `successors[a]` lists every `b` with a requirement `a -> b`, in input
    /// order. Duplicated requirements appear more than once.
    successors: Vec<Vec<Course>>,
    /// `in_degree[b]` counts requirements `_ -> b`, duplicates included.
    in_degree: Vec<usize>,
    edge_count: usize,
}

impl CourseGraph {
    /// Build the graph from a validated [`Problem`].
    ///
    /// Every course `1..=n` gets an entry, even with no requirements.
    pub fn from_problem(problem: &Problem) -> Self {
        let course_count = problem.course_count();
        let slots = course_count as usize + 1;

        let mut successors: Vec<Vec<Course>> = vec![Vec::new(); slots];
        let mut in_degree = vec![0usize; slots];

        for req in problem.requirements() {
            successors[req.before as usize].push(req.after);
            in_degree[req.after as usize] += 1;
        }

        let edge_count = problem.requirements().len();
        debug!(course_count, edge_count, "built course graph");

        Self {
            course_count,
            successors,
            in_degree,
            edge_count,
        }
    }

    pub fn course_count(&self) -> u32 {
        self.course_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All courses, in ascending order.
    pub fn courses(&self) -> RangeInclusive<Course> {
        1..=self.course_count
    }

    /// Courses that directly require `course`. Empty for unknown courses.
    pub fn successors_of(&self, course: Course) -> &[Course] {
        self.successors
            .get(course as usize)
            .map(|s| s.as_slice())
            .unwrap_or(&[])
    }

    /// Number of requirements pointing at `course`, or `None` if the course
    /// is not part of the graph.
    pub fn in_degree_of(&self, course: Course) -> Option<usize> {
        if course == 0 || course > self.course_count {
            return None;
        }
        self.in_degree.get(course as usize).copied()
    }

    /// Full in-degree table, index `0` unused.
    pub(crate) fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }
}
