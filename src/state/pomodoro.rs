//! Focus/break session state machine

use tracing::{debug, info};

use super::{Adjustment, Session, SessionLabel, TimerConfig, TimerRuntime};

/// Result of applying one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer paused or idle, nothing changed
    Skipped,
    /// One second elapsed in the current session
    Advanced { remaining_seconds: u32 },
    /// The session had run out and was replaced by the next one
    Transitioned {
        completed: SessionLabel,
        next: SessionLabel,
    },
}

impl TickOutcome {
    /// Whether this tick finished a session and should be announced
    pub fn completed_session(&self) -> bool {
        matches!(self, TickOutcome::Transitioned { .. })
    }
}

/// The timer: configured durations plus runtime state.
///
/// All operations are synchronous and infallible. Durations are always read
/// from `config` at the moment a session is created, so adjustments made
/// mid-session apply to the next one.
#[derive(Debug, Clone, Default)]
pub struct Pomodoro {
    config: TimerConfig,
    runtime: TimerRuntime,
}

impl Pomodoro {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            runtime: TimerRuntime::new(),
        }
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn runtime(&self) -> &TimerRuntime {
        &self.runtime
    }

    pub fn is_running(&self) -> bool {
        self.runtime.is_running
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.runtime.current_session.as_ref()
    }

    /// Start or resume. Seeds a focus session only when none exists.
    pub fn start(&mut self) {
        if self.runtime.current_session.is_none() {
            let session = Session::focusing(&self.config);
            info!("Starting new focus session of {} minutes", session.total_minutes());
            self.runtime.current_session = Some(session);
        }
        self.runtime.is_running = true;
    }

    /// Pause without touching the session
    pub fn pause(&mut self) {
        self.runtime.is_running = false;
    }

    /// Flip the running flag, seeding a session when turning on from idle
    pub fn toggle_running(&mut self) {
        if self.runtime.is_running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and discard the current session
    pub fn stop(&mut self) {
        self.runtime.is_running = false;
        if let Some(session) = self.runtime.current_session.take() {
            info!(
                "Stopped {} session with {}s remaining",
                session.label(),
                session.remaining_seconds()
            );
        }
    }

    /// Advance the timer by one second.
    ///
    /// A session already at zero is replaced by the opposite session instead
    /// of being decremented, so remaining time never goes negative.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.runtime.is_running {
            return TickOutcome::Skipped;
        }
        let Some(session) = self.runtime.current_session else {
            return TickOutcome::Skipped;
        };

        if session.is_complete() {
            let next = session.next(&self.config);
            info!(
                "{} session complete, switching to {} for {} minutes",
                session.label(),
                next.label(),
                next.total_minutes()
            );
            self.runtime.current_session = Some(next);
            return TickOutcome::Transitioned {
                completed: session.label(),
                next: next.label(),
            };
        }

        let ticked = session.ticked();
        self.runtime.current_session = Some(ticked);
        TickOutcome::Advanced {
            remaining_seconds: ticked.remaining_seconds(),
        }
    }

    pub fn adjust_focus(&mut self, adjustment: Adjustment) {
        self.config.adjust_focus(adjustment);
        debug!("Focus duration now {} minutes", self.config.focus_minutes());
    }

    pub fn adjust_break(&mut self, adjustment: Adjustment) {
        self.config.adjust_break(adjustment);
        debug!("Break duration now {} minutes", self.config.break_minutes());
    }
}
