//! Read-only projections of the timer for display

use serde::{Deserialize, Serialize};

use super::{Pomodoro, Session, SessionLabel};
use crate::utils::{minutes_to_duration, seconds_to_duration};

/// Coarse timer status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
        }
    }
}

/// Display view of the active session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub label: SessionLabel,
    /// Session length as `HH:MM`
    pub duration: String,
    pub total_seconds: u32,
    pub remaining_seconds: u32,
    /// Remaining time as `MM:SS`
    pub remaining: String,
    pub percent_complete: f64,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            label: session.label(),
            duration: minutes_to_duration(session.total_minutes()),
            total_seconds: session.total_seconds(),
            remaining_seconds: session.remaining_seconds(),
            remaining: seconds_to_duration(session.remaining_seconds()),
            percent_complete: session.percent_complete(),
        }
    }
}

/// Everything a front-end needs to render the timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomodoroSnapshot {
    pub status: TimerStatus,
    pub is_running: bool,
    pub focus_minutes: u32,
    pub break_minutes: u32,
    /// Configured focus duration as `HH:MM`
    pub focus_duration: String,
    /// Configured break duration as `HH:MM`
    pub break_duration: String,
    pub session: Option<SessionView>,
}

impl From<&Pomodoro> for PomodoroSnapshot {
    fn from(pomodoro: &Pomodoro) -> Self {
        let config = pomodoro.config();
        let runtime = pomodoro.runtime();
        let status = if runtime.is_running {
            TimerStatus::Running
        } else if runtime.is_paused() {
            TimerStatus::Paused
        } else {
            TimerStatus::Idle
        };

        Self {
            status,
            is_running: runtime.is_running,
            focus_minutes: config.focus_minutes(),
            break_minutes: config.break_minutes(),
            focus_duration: minutes_to_duration(config.focus_minutes()),
            break_duration: minutes_to_duration(config.break_minutes()),
            session: pomodoro.current_session().map(SessionView::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerConfig;

    #[test]
    fn idle_snapshot_has_no_session() {
        let snapshot = PomodoroSnapshot::from(&Pomodoro::default());
        assert_eq!(snapshot.status, TimerStatus::Idle);
        assert_eq!(snapshot.focus_duration, "00:25");
        assert_eq!(snapshot.break_duration, "00:05");
        assert!(snapshot.session.is_none());
    }

    #[test]
    fn paused_snapshot_projects_session() {
        let mut pomodoro = Pomodoro::new(TimerConfig::new(60, 10));
        pomodoro.start();
        for _ in 0..90 {
            pomodoro.tick();
        }
        pomodoro.pause();

        let snapshot = PomodoroSnapshot::from(&pomodoro);
        assert_eq!(snapshot.status, TimerStatus::Paused);
        assert!(!snapshot.is_running);

        let session = snapshot.session.unwrap();
        assert_eq!(session.label, SessionLabel::Focusing);
        assert_eq!(session.duration, "01:00");
        assert_eq!(session.remaining, "58:30");
        assert_eq!(session.remaining_seconds, 3510);
        assert_eq!(session.percent_complete, 2.5);
    }
}
