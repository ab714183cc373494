//! Pomodoro Timer - a local timer daemon alternating focus and break sessions
//! 
//! The timer state machine lives in [`state`], is driven once per second by
//! [`tasks::TickDriver`] while running, and is controlled over a small HTTP
//! API built by [`api::create_router`].

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use tasks::TickDriver;
pub use utils::signals::shutdown_signal;
