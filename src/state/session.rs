//! Session value type

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TimerConfig;

/// Which interval a session represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionLabel {
    #[serde(rename = "Focusing")]
    Focusing,
    #[serde(rename = "On Break")]
    OnBreak,
}

impl SessionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionLabel::Focusing => "Focusing",
            SessionLabel::OnBreak => "On Break",
        }
    }

    /// The label a session of this kind transitions into
    pub fn opposite(&self) -> Self {
        match self {
            SessionLabel::Focusing => SessionLabel::OnBreak,
            SessionLabel::OnBreak => SessionLabel::Focusing,
        }
    }

    /// Configured length of a session with this label, in minutes
    pub fn minutes(&self, config: &TimerConfig) -> u32 {
        match self {
            SessionLabel::Focusing => config.focus_minutes(),
            SessionLabel::OnBreak => config.break_minutes(),
        }
    }
}

impl fmt::Display for SessionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single focus or break interval.
///
/// Sessions are replaced rather than mutated: every tick produces a new
/// value. Percent complete is always derived from the remaining and total
/// seconds and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    label: SessionLabel,
    total_seconds: u32,
    remaining_seconds: u32,
}

impl Session {
    /// Fresh session of the given label using the current config
    pub fn new(label: SessionLabel, config: &TimerConfig) -> Self {
        let total_seconds = label.minutes(config) * 60;
        Self {
            label,
            total_seconds,
            remaining_seconds: total_seconds,
        }
    }

    pub fn focusing(config: &TimerConfig) -> Self {
        Self::new(SessionLabel::Focusing, config)
    }

    pub fn label(&self) -> SessionLabel {
        self.label
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Total length in whole minutes
    pub fn total_minutes(&self) -> u32 {
        self.total_seconds / 60
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Percentage of the session already elapsed, in [0, 100]
    pub fn percent_complete(&self) -> f64 {
        if self.total_seconds == 0 {
            return 100.0;
        }
        let elapsed = self.total_seconds - self.remaining_seconds;
        f64::from(elapsed) * 100.0 / f64::from(self.total_seconds)
    }

    /// The session one second later, floored at zero remaining
    pub fn ticked(self) -> Self {
        Self {
            remaining_seconds: self.remaining_seconds.saturating_sub(1),
            ..self
        }
    }

    /// The session that follows this one, built from the config as it is now
    pub fn next(&self, config: &TimerConfig) -> Self {
        Self::new(self.label.opposite(), config)
    }
}
