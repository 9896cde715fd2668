// src/dag/state.rs

/// Where a course stands during one ordering pass.
///
/// `Unvisited -> Ready -> Emitted`; a course on a cycle stays `Unvisited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseState {
    /// Still has unresolved predecessors.
    Unvisited,
    /// All predecessors emitted; waiting in the worklist.
    Ready,
    /// Appended to the order.
    Emitted,
}

impl CourseState {
    pub fn is_terminal(self) -> bool {
        matches!(self, CourseState::Emitted)
    }
}
