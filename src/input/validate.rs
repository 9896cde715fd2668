// src/input/validate.rs

use crate::errors::{CourseOrderError, Result};
use crate::input::model::{Problem, RawProblem};
use crate::types::Requirement;

impl TryFrom<RawProblem> for Problem {
    type Error = CourseOrderError;

    fn try_from(raw: RawProblem) -> std::result::Result<Self, Self::Error> {
        validate_raw_problem(&raw)?;
        Ok(Problem::new_unchecked(raw.course_count, raw.requirements))
    }
}

/// Check the preconditions the scheduler relies on.
///
/// This checks:
/// - the announced requirement count matches the requirements present
/// - every course referenced by a requirement lies in `1..=n`
///
/// Cycles (including self-requirements) are *not* rejected here: they are a
/// legitimate input whose answer is `IMPOSSIBLE`.
pub fn validate_raw_problem(raw: &RawProblem) -> Result<()> {
    validate_requirement_count(raw)?;
    for (idx, req) in raw.requirements.iter().enumerate() {
        validate_requirement_range(raw.course_count, idx, req)?;
    }
    Ok(())
}

fn validate_requirement_count(raw: &RawProblem) -> Result<()> {
    if raw.declared_requirements != raw.requirements.len() {
        return Err(CourseOrderError::InvalidInput(format!(
            "expected {} requirements, got {}",
            raw.declared_requirements,
            raw.requirements.len()
        )));
    }
    Ok(())
}

fn validate_requirement_range(course_count: u32, idx: usize, req: &Requirement) -> Result<()> {
    for course in [req.before, req.after] {
        if course == 0 || course > course_count {
            return Err(CourseOrderError::InvalidInput(format!(
                "requirement #{} ({}) refers to course {} outside 1..={}",
                idx + 1,
                req,
                course,
                course_count
            )));
        }
    }
    Ok(())
}
