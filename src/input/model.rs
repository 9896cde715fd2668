// src/input/model.rs

use crate::types::Requirement;

/// A problem instance exactly as read from the input.
///
/// ```text
/// 4 2
/// 1 2
/// 3 1
/// ```
///
/// Nothing is checked here; see [`Problem`] for the validated form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProblem {
    /// Number of courses `n`; courses are numbered `1..=n`.
    pub course_count: u32,
    /// Number of requirements `m` announced on the first line.
    pub declared_requirements: usize,
    /// The requirements, in input order.
    pub requirements: Vec<Requirement>,
}

/// A validated problem instance.
///
/// Every requirement refers to courses in `1..=course_count`. The only way to
/// obtain one is `Problem::try_from(raw)`, so the graph builder can index by
/// course number without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    course_count: u32,
    requirements: Vec<Requirement>,
}

impl Problem {
    /// Construct a problem without running validation.
    ///
    /// Only used by `validate.rs` after all checks have passed.
    pub(crate) fn new_unchecked(course_count: u32, requirements: Vec<Requirement>) -> Self {
        Self {
            course_count,
            requirements,
        }
    }

    pub fn course_count(&self) -> u32 {
        self.course_count
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }
}
