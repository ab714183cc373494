//! State management module
//! 
//! The timer state machine, its value types, and the shared controller
//! that serializes access to it.

pub mod app_state;
pub mod pomodoro;
pub mod session;
pub mod snapshot;
pub mod timer_config;
pub mod timer_runtime;

// Re-export main types
pub use app_state::AppState;
pub use pomodoro::{Pomodoro, TickOutcome};
pub use session::{Session, SessionLabel};
pub use snapshot::{PomodoroSnapshot, SessionView, TimerStatus};
pub use timer_config::{Adjustment, TimerConfig};
pub use timer_runtime::TimerRuntime;
