// src/dag/scheduler.rs

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::dag::graph::CourseGraph;
use crate::dag::state::CourseState;
use crate::errors::{CourseOrderError, Result};
use crate::types::Course;

/// One ordering pass of Kahn's algorithm over a [`CourseGraph`].
///
/// It is responsible for:
/// - seeding the worklist with every course that has no requirements,
///   scanned in ascending order
/// - emitting courses in strict FIFO order
/// - releasing successors whose last requirement was just emitted
/// - reporting a cycle when some course is never emitted
///
/// With this tie-break the produced order is fully deterministic.
#[derive(Debug)]
pub struct Scheduler {
    graph: CourseGraph,
    /// Unresolved requirements per course (index `0` unused).
    remaining: Vec<usize>,
    states: Vec<CourseState>,
    worklist: VecDeque<Course>,
    emitted: Vec<Course>,
}

impl Scheduler {
    /// Prepare a pass over `graph`.
    pub fn new(graph: CourseGraph) -> Self {
        let remaining = graph.in_degrees().to_vec();
        let mut states = vec![CourseState::Unvisited; remaining.len()];
        let mut worklist = VecDeque::with_capacity(graph.course_count() as usize);

        for course in graph.courses() {
            if remaining[course as usize] == 0 {
                states[course as usize] = CourseState::Ready;
                worklist.push_back(course);
            }
        }

        debug!(
            courses = graph.course_count(),
            initially_ready = worklist.len(),
            "scheduler: seeded worklist"
        );

        Self {
            emitted: Vec::with_capacity(graph.course_count() as usize),
            graph,
            remaining,
            states,
            worklist,
        }
    }

    /// Emit the next ready course and release its successors.
    ///
    /// Returns the emitted course, or `None` once the worklist is empty.
    pub fn step(&mut self) -> Option<Course> {
        let course = self.worklist.pop_front()?;
        self.states[course as usize] = CourseState::Emitted;
        self.emitted.push(course);
        trace!(course, "scheduler: emitted course");

        for &next in self.graph.successors_of(course) {
            let slot = next as usize;
            // Each edge is released exactly once, so this never underflows.
            self.remaining[slot] -= 1;
            if self.remaining[slot] == 0 {
                self.states[slot] = CourseState::Ready;
                self.worklist.push_back(next);
                trace!(course = next, after = course, "scheduler: course became ready");
            }
        }

        Some(course)
    }

    /// Run the pass to completion.
    ///
    /// Returns the full order, or [`CourseOrderError::CycleDetected`] if any
    /// course could not be emitted.
    pub fn run(mut self) -> Result<Vec<Course>> {
        while self.step().is_some() {}

        let expected = self.graph.course_count() as usize;
        if self.emitted.len() < expected {
            debug!(
                emitted = self.emitted.len(),
                blocked = expected - self.emitted.len(),
                "scheduler: worklist drained with courses left; requirements are cyclic"
            );
            return Err(CourseOrderError::CycleDetected);
        }

        Ok(self.emitted)
    }

    /// `true` once no course is waiting in the worklist.
    pub fn is_drained(&self) -> bool {
        self.worklist.is_empty()
    }

    /// Courses emitted so far, in order.
    pub fn emitted(&self) -> &[Course] {
        &self.emitted
    }

    /// Courses currently waiting in the worklist, front first.
    pub fn ready(&self) -> impl Iterator<Item = Course> + '_ {
        self.worklist.iter().copied()
    }

    /// State of `course` in this pass, or `None` for unknown courses.
    pub fn state_of(&self, course: Course) -> Option<CourseState> {
        if course == 0 || course > self.graph.course_count() {
            return None;
        }
        self.states.get(course as usize).copied()
    }

    /// Requirements of `course` not yet resolved by an emitted course.
    pub fn remaining_of(&self, course: Course) -> Option<usize> {
        if course == 0 || course > self.graph.course_count() {
            return None;
        }
        self.remaining.get(course as usize).copied()
    }

    pub fn graph(&self) -> &CourseGraph {
        &self.graph
    }
}
