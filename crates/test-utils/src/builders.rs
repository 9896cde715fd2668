#![allow(dead_code)]

use courseorder::input::{Problem, RawProblem};
use courseorder::types::{Course, Requirement};

/// Builder for `Problem` to simplify test setup.
///
/// The announced requirement count tracks the requirements added unless it
/// is overridden with [`ProblemBuilder::declared_requirements`].
pub struct ProblemBuilder {
    raw: RawProblem,
    declared: Option<usize>,
}

impl ProblemBuilder {
    pub fn new(course_count: u32) -> Self {
        Self {
            raw: RawProblem {
                course_count,
                ..RawProblem::default()
            },
            declared: None,
        }
    }

    /// Add "`before` has to be completed before `after`".
    pub fn require(mut self, before: Course, after: Course) -> Self {
        self.raw.requirements.push(Requirement::new(before, after));
        self
    }

    /// Add a chain `courses[0] -> courses[1] -> ...`.
    pub fn chain(mut self, courses: &[Course]) -> Self {
        for pair in courses.windows(2) {
            self = self.require(pair[0], pair[1]);
        }
        self
    }

    pub fn requirements(mut self, pairs: &[(Course, Course)]) -> Self {
        for &(a, b) in pairs {
            self = self.require(a, b);
        }
        self
    }

    pub fn declared_requirements(mut self, m: usize) -> Self {
        self.declared = Some(m);
        self
    }

    /// The unvalidated problem.
    pub fn build_raw(mut self) -> RawProblem {
        self.raw.declared_requirements = self.declared.unwrap_or(self.raw.requirements.len());
        self.raw
    }

    pub fn build(self) -> Problem {
        Problem::try_from(self.build_raw()).expect("Failed to build valid problem from builder")
    }
}
