/// Tutor session flags for the selected document.
#[derive(Debug, Default, Clone)]
pub struct TutorState {
    /// The tutor reported the session as complete. Advisory only: answers
    /// are still accepted until the session is reset.
    pub finished: bool,
}
