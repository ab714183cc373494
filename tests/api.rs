//! HTTP API exercised in-process

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use pomodoro_timer::{api::create_router, state::{AppState, TimerConfig}};
use serde_json::Value;
use tower::ServiceExt;

use common::app_state;

fn router(config: TimerConfig) -> (Router, Arc<AppState>) {
    let (state, _player) = app_state(config);
    (create_router(Arc::clone(&state)), state)
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = router(TimerConfig::default());
    let (status, body) = send(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn status_of_idle_timer() {
    let (app, _) = router(TimerConfig::default());
    let (status, body) = send(&app, Method::GET, "/status").await;
    assert_eq!(status, StatusCode::OK);

    let pomodoro = &body["pomodoro"];
    assert_eq!(pomodoro["status"], "idle");
    assert_eq!(pomodoro["is_running"], false);
    assert_eq!(pomodoro["focus_duration"], "00:25");
    assert_eq!(pomodoro["break_duration"], "00:05");
    assert!(pomodoro["session"].is_null());
    assert!(body["last_action"].is_null());
    assert_eq!(body["port"], 20525);
}

#[tokio::test]
async fn play_pause_stop_cycle() {
    let (app, state) = router(TimerConfig::default());

    let (status, body) = send(&app, Method::POST, "/play-pause").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["message"], "Timer running");
    let session = &body["pomodoro"]["session"];
    assert_eq!(session["label"], "Focusing");
    assert_eq!(session["duration"], "00:25");
    assert_eq!(session["remaining"], "25:00");
    assert_eq!(session["remaining_seconds"], 1500);
    assert_eq!(session["percent_complete"].as_f64(), Some(0.0));

    for _ in 0..75 {
        state.tick().unwrap();
    }

    let (_, body) = send(&app, Method::POST, "/play-pause").await;
    assert_eq!(body["status"], "paused");
    assert_eq!(body["message"], "Timer paused");
    let session = &body["pomodoro"]["session"];
    assert_eq!(session["remaining"], "23:45");
    assert_eq!(session["percent_complete"].as_f64(), Some(5.0));

    let (_, body) = send(&app, Method::POST, "/play-pause").await;
    assert_eq!(body["status"], "running");
    assert_eq!(body["pomodoro"]["session"]["remaining_seconds"], 1425);

    let (_, body) = send(&app, Method::POST, "/stop").await;
    assert_eq!(body["status"], "idle");
    assert!(body["pomodoro"]["session"].is_null());

    let (_, body) = send(&app, Method::GET, "/status").await;
    assert_eq!(body["last_action"], "stop");
    assert!(body["last_action_time"].is_string());
}

#[tokio::test]
async fn explicit_start_and_pause() {
    let (app, _) = router(TimerConfig::default());

    let (_, body) = send(&app, Method::POST, "/pause").await;
    assert_eq!(body["status"], "idle");

    let (_, body) = send(&app, Method::POST, "/start").await;
    assert_eq!(body["status"], "running");
    let (_, body) = send(&app, Method::POST, "/start").await;
    assert_eq!(body["status"], "running");

    let (_, body) = send(&app, Method::POST, "/pause").await;
    assert_eq!(body["status"], "paused");
    assert_eq!(body["pomodoro"]["session"]["remaining_seconds"], 1500);
}

#[tokio::test]
async fn duration_adjusters_clamp() {
    let (app, _) = router(TimerConfig::new(55, 14));

    send(&app, Method::POST, "/focus/increase").await;
    let (_, body) = send(&app, Method::POST, "/focus/increase").await;
    assert_eq!(body["pomodoro"]["focus_minutes"], 60);
    assert_eq!(body["pomodoro"]["focus_duration"], "01:00");

    send(&app, Method::POST, "/break/increase").await;
    let (_, body) = send(&app, Method::POST, "/break/increase").await;
    assert_eq!(body["pomodoro"]["break_minutes"], 15);

    let (_, body) = send(&app, Method::POST, "/focus/decrease").await;
    assert_eq!(body["pomodoro"]["focus_minutes"], 55);
    assert_eq!(body["message"], "Focus duration decreased");

    let (_, body) = send(&app, Method::POST, "/break/decrease").await;
    assert_eq!(body["pomodoro"]["break_minutes"], 14);
}

#[tokio::test]
async fn adjusting_focus_does_not_change_running_session() {
    let (app, _) = router(TimerConfig::default());
    send(&app, Method::POST, "/play-pause").await;

    let (_, body) = send(&app, Method::POST, "/focus/increase").await;
    assert_eq!(body["pomodoro"]["focus_minutes"], 30);
    assert_eq!(body["pomodoro"]["session"]["total_seconds"], 1500);
}

#[tokio::test]
async fn unknown_routes_and_methods() {
    let (app, _) = router(TimerConfig::default());

    let (status, _) = send(&app, Method::GET, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/play-pause").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
