//! Periodic tick driver background task

use std::{sync::Arc, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Wall-clock interval between ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Owned handle to the running tick driver.
///
/// Dropping the handle aborts the task, so no tick can fire after teardown.
#[derive(Debug)]
pub struct TickDriver {
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Spawn the driver for the given controller
    pub fn spawn(state: Arc<AppState>) -> Self {
        Self {
            handle: Some(tokio::spawn(tick_driver_task(state))),
        }
    }

    /// Cancel the driver and wait for it to finish
    pub async fn shutdown(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            match handle.await {
                Err(e) if !e.is_cancelled() => error!("Tick driver failed: {}", e),
                _ => info!("Tick driver stopped"),
            }
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Background task that ticks the timer once per second while it runs.
///
/// The schedule follows the controller's running flag: it is created with a
/// full interval wait whenever the timer starts or resumes and dropped as
/// soon as the timer pauses or stops.
pub async fn tick_driver_task(state: Arc<AppState>) {
    info!("Starting tick driver task");

    let mut running_rx = state.subscribe_running();

    loop {
        // Idle until the timer is running
        if running_rx.wait_for(|running| *running).await.is_err() {
            info!("Running flag channel closed, tick driver exiting");
            return;
        }

        debug!("Timer running, scheduling ticks every {:?}", TICK_INTERVAL);
        let mut interval = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                // Running flag changed - cancel or restart the schedule
                changed = running_rx.changed() => {
                    if changed.is_err() {
                        info!("Running flag channel closed, tick driver exiting");
                        return;
                    }
                    if *running_rx.borrow_and_update() {
                        debug!("Timer resumed, restarting tick schedule");
                        interval.reset();
                    } else {
                        debug!("Timer paused or stopped, cancelling tick schedule");
                        break;
                    }
                }

                _ = interval.tick() => {
                    if let Err(e) = state.tick() {
                        error!("Failed to tick timer: {}", e);
                    }
                }
            }
        }
    }
}
