// src/types.rs

use std::fmt;

/// A course identifier, numbered `1..=n`.
pub type Course = u32;

/// "Course `before` has to be completed before course `after`."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Requirement {
    pub before: Course,
    pub after: Course,
}

impl Requirement {
    pub fn new(before: Course, after: Course) -> Self {
        Self { before, after }
    }

    /// A requirement of a course on itself; never satisfiable.
    pub fn is_self_loop(&self) -> bool {
        self.before == self.after
    }
}

impl From<(Course, Course)> for Requirement {
    fn from((before, after): (Course, Course)) -> Self {
        Self::new(before, after)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.before, self.after)
    }
}
