//! Timer runtime: running flag and the active session

use super::Session;

/// Process-local runtime of the single timer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerRuntime {
    pub is_running: bool,
    pub current_session: Option<Session>,
}

impl TimerRuntime {
    /// Create an idle runtime with no session
    pub fn new() -> Self {
        Self::default()
    }

    /// A session exists, running or paused
    pub fn has_session(&self) -> bool {
        self.current_session.is_some()
    }

    /// A session exists and the timer is not running
    pub fn is_paused(&self) -> bool {
        !self.is_running && self.has_session()
    }
}
