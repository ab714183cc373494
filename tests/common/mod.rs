//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use pomodoro_timer::{
    services::SoundPlayer,
    state::{AppState, SessionView, TimerConfig},
};

/// Sound player that records every asset it is asked to play
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    plays: AtomicUsize,
    assets: Mutex<Vec<String>>,
}

impl RecordingPlayer {
    pub fn plays(&self) -> usize {
        self.plays.load(Ordering::SeqCst)
    }

    pub fn assets(&self) -> Vec<String> {
        self.assets.lock().unwrap().clone()
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play(&self, asset: &str) {
        self.plays.fetch_add(1, Ordering::SeqCst);
        self.assets.lock().unwrap().push(asset.to_string());
    }
}

pub fn app_state(config: TimerConfig) -> (Arc<AppState>, Arc<RecordingPlayer>) {
    let player = Arc::new(RecordingPlayer::default());
    let state = Arc::new(AppState::new(
        20525,
        "127.0.0.1".to_string(),
        config,
        player.clone(),
    ));
    (state, player)
}

pub fn session(state: &AppState) -> Option<SessionView> {
    state.get_snapshot().unwrap().session
}

pub fn remaining(state: &AppState) -> u32 {
    session(state).expect("timer has a session").remaining_seconds
}
