//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, trace};

use super::{Adjustment, Pomodoro, PomodoroSnapshot, TickOutcome, TimerConfig};
use crate::services::{SoundPlayer, NOTIFICATION_SOUND};

/// Shared controller owning the single timer.
///
/// User actions and driver ticks all go through the same mutex, so the
/// state machine only ever sees one mutation at a time.
pub struct AppState {
    /// The timer state machine
    pomodoro: Mutex<Pomodoro>,
    /// Running flag published to the tick driver
    running_tx: watch::Sender<bool>,
    /// Notification sound output
    player: Arc<dyn SoundPlayer>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Create an idle timer with the given durations
    pub fn new(port: u16, host: String, config: TimerConfig, player: Arc<dyn SoundPlayer>) -> Self {
        let (running_tx, _) = watch::channel(false);

        Self {
            pomodoro: Mutex::new(Pomodoro::new(config)),
            running_tx,
            player,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Pomodoro>, String> {
        self.pomodoro
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Apply a user action and publish the resulting running flag
    pub fn update_state<F>(&self, action: &str, updater: F) -> Result<PomodoroSnapshot, String>
    where
        F: FnOnce(&mut Pomodoro),
    {
        let mut pomodoro = self.lock()?;
        updater(&mut *pomodoro);
        let snapshot = PomodoroSnapshot::from(&*pomodoro);
        let running = pomodoro.is_running();

        // Publish while still holding the lock so the driver never observes
        // flags out of order.
        self.running_tx.send_if_modified(|current| {
            if *current != running {
                *current = running;
                true
            } else {
                false
            }
        });
        drop(pomodoro);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some((action.to_string(), Utc::now()));
        }

        info!("Action {}: timer is {}", action, snapshot.status.as_str());
        Ok(snapshot)
    }

    /// Start a session if idle, otherwise toggle running
    pub fn play_pause(&self) -> Result<PomodoroSnapshot, String> {
        self.update_state("play-pause", Pomodoro::toggle_running)
    }

    pub fn start(&self) -> Result<PomodoroSnapshot, String> {
        self.update_state("start", Pomodoro::start)
    }

    pub fn pause(&self) -> Result<PomodoroSnapshot, String> {
        self.update_state("pause", Pomodoro::pause)
    }

    pub fn stop(&self) -> Result<PomodoroSnapshot, String> {
        self.update_state("stop", Pomodoro::stop)
    }

    pub fn adjust_focus(&self, adjustment: Adjustment) -> Result<PomodoroSnapshot, String> {
        let action = match adjustment {
            Adjustment::Increase => "focus-increase",
            Adjustment::Decrease => "focus-decrease",
        };
        self.update_state(action, |pomodoro| pomodoro.adjust_focus(adjustment))
    }

    pub fn adjust_break(&self, adjustment: Adjustment) -> Result<PomodoroSnapshot, String> {
        let action = match adjustment {
            Adjustment::Increase => "break-increase",
            Adjustment::Decrease => "break-decrease",
        };
        self.update_state(action, |pomodoro| pomodoro.adjust_break(adjustment))
    }

    /// Advance the timer one second, playing the notification sound when a
    /// session completes
    pub fn tick(&self) -> Result<TickOutcome, String> {
        let outcome = self.lock()?.tick();

        match outcome {
            TickOutcome::Transitioned { completed, next } => {
                debug!("Session {} -> {}, playing notification", completed, next);
                self.player.play(NOTIFICATION_SOUND);
            }
            TickOutcome::Advanced { remaining_seconds } => {
                trace!("Tick: {}s remaining", remaining_seconds);
            }
            TickOutcome::Skipped => {
                debug!("Tick skipped, timer not running");
            }
        }

        Ok(outcome)
    }

    /// Current projections of the timer
    pub fn get_snapshot(&self) -> Result<PomodoroSnapshot, String> {
        self.lock().map(|pomodoro| PomodoroSnapshot::from(&*pomodoro))
    }

    pub fn is_running(&self) -> bool {
        *self.running_tx.borrow()
    }

    /// Watch the running flag; the tick driver follows this channel
    pub fn subscribe_running(&self) -> watch::Receiver<bool> {
        self.running_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.last_action.lock().ok().and_then(|last| last.clone()) {
            Some((action, time)) => (Some(action), Some(time)),
            None => (None, None),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("pomodoro", &self.pomodoro)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}
