//! Focus and break duration configuration

use serde::{Deserialize, Serialize};

pub const FOCUS_MIN: u32 = 5;
pub const FOCUS_MAX: u32 = 60;
pub const FOCUS_STEP: u32 = 5;
pub const BREAK_MIN: u32 = 1;
pub const BREAK_MAX: u32 = 15;
pub const BREAK_STEP: u32 = 1;

/// Direction of a duration adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjustment {
    Increase,
    Decrease,
}

/// Configured durations used when a new session is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    focus_minutes: u32,
    break_minutes: u32,
}

impl TimerConfig {
    /// Create a config, clamping both values into range and snapping
    /// focus down onto its step grid.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            focus_minutes: snap(focus_minutes, FOCUS_MIN, FOCUS_MAX, FOCUS_STEP),
            break_minutes: snap(break_minutes, BREAK_MIN, BREAK_MAX, BREAK_STEP),
        }
    }

    pub fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Move the focus duration one step, staying within bounds
    pub fn adjust_focus(&mut self, adjustment: Adjustment) {
        self.focus_minutes = step(self.focus_minutes, adjustment, FOCUS_MIN, FOCUS_MAX, FOCUS_STEP);
    }

    /// Move the break duration one step, staying within bounds
    pub fn adjust_break(&mut self, adjustment: Adjustment) {
        self.break_minutes = step(self.break_minutes, adjustment, BREAK_MIN, BREAK_MAX, BREAK_STEP);
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
        }
    }
}

fn step(value: u32, adjustment: Adjustment, min: u32, max: u32, step: u32) -> u32 {
    match adjustment {
        Adjustment::Increase => value.saturating_add(step).min(max),
        Adjustment::Decrease => value.saturating_sub(step).max(min),
    }
}

fn snap(value: u32, min: u32, max: u32, step: u32) -> u32 {
    let clamped = value.clamp(min, max);
    min + (clamped - min) / step * step
}
