//! Pomodoro Timer - a local timer daemon alternating focus and break sessions
//! 
//! This is the main entry point for the pomodoro-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use pomodoro_timer::{
    config::Config,
    state::AppState,
    api::create_router,
    services::{check_player_available, CommandPlayer, SilentPlayer, SoundPlayer},
    tasks::TickDriver,
    utils::shutdown_signal,
};

/// Pick the notification sound player from the configuration
async fn sound_player(config: &Config) -> Arc<dyn SoundPlayer> {
    if config.mute {
        info!("Notification sound muted");
        return Arc::new(SilentPlayer);
    }

    let Some(player) = CommandPlayer::from_command_line(&config.player) else {
        warn!("Empty sound player command, notification sound disabled");
        return Arc::new(SilentPlayer);
    };

    // A missing player only costs us the sound
    if let Err(e) = check_player_available(&player).await {
        warn!("{}", e);
    }
    Arc::new(player)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomodoro-timer v{}", env!("CARGO_PKG_VERSION"));
    let timer_config = config.timer_config();
    info!("Configuration: host={}, port={}, focus={}min, break={}min",
          config.host, config.port, timer_config.focus_minutes(), timer_config.break_minutes());

    let player = sound_player(&config).await;

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), timer_config, player));

    // Start the tick driver background task
    let driver = TickDriver::spawn(Arc::clone(&state));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /play-pause     - Start a session or toggle pause");
    info!("  POST /start, /pause  - Resume or pause explicitly");
    info!("  POST /stop           - Stop and clear the session");
    info!("  POST /focus/increase, /focus/decrease");
    info!("  POST /break/increase, /break/decrease");
    info!("  GET  /status         - Current session and durations");
    info!("  GET  /health         - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    driver.shutdown().await;
    info!("Server shutdown complete");
    Ok(())
}
