//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::error;

use crate::state::{Adjustment, AppState, PomodoroSnapshot};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

type ActionResult = Result<Json<ApiResponse>, StatusCode>;

/// Turn the outcome of a controller action into a response
fn respond(action: &str, result: Result<PomodoroSnapshot, String>, message: &str) -> ActionResult {
    match result {
        Ok(snapshot) => Ok(Json(ApiResponse::new(message, snapshot))),
        Err(e) => {
            error!("Failed to apply {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /play-pause - Start a session if idle, otherwise toggle running
pub async fn play_pause_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    let result = state.play_pause();
    let message = match &result {
        Ok(snapshot) if snapshot.is_running => "Timer running",
        _ => "Timer paused",
    };
    respond("play-pause", result, message)
}

/// Handle POST /start - Start or resume the timer
pub async fn start_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond("start", state.start(), "Timer running")
}

/// Handle POST /pause - Pause the timer
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond("pause", state.pause(), "Timer paused")
}

/// Handle POST /stop - Stop the timer and discard the session
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond("stop", state.stop(), "Timer stopped")
}

/// Handle POST /focus/increase
pub async fn focus_increase_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(
        "focus-increase",
        state.adjust_focus(Adjustment::Increase),
        "Focus duration increased",
    )
}

/// Handle POST /focus/decrease
pub async fn focus_decrease_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(
        "focus-decrease",
        state.adjust_focus(Adjustment::Decrease),
        "Focus duration decreased",
    )
}

/// Handle POST /break/increase
pub async fn break_increase_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(
        "break-increase",
        state.adjust_break(Adjustment::Increase),
        "Break duration increased",
    )
}

/// Handle POST /break/decrease
pub async fn break_decrease_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(
        "break-decrease",
        state.adjust_break(Adjustment::Decrease),
        "Break duration decreased",
    )
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let pomodoro = match state.get_snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        pomodoro,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
