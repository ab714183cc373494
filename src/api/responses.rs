//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{PomodoroSnapshot, TimerStatus};

/// API response structure for control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: TimerStatus,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub pomodoro: PomodoroSnapshot,
}

impl ApiResponse {
    /// Create a new API response, taking the status from the snapshot
    pub fn new(message: impl Into<String>, pomodoro: PomodoroSnapshot) -> Self {
        Self {
            status: pomodoro.status,
            message: message.into(),
            timestamp: Utc::now(),
            pomodoro,
        }
    }
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub pomodoro: PomodoroSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
