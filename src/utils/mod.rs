//! Utility functions module
//! 
//! Display formatting and process signal helpers.

pub mod duration;
pub mod signals;

// Re-export main functions
pub use duration::{minutes_to_duration, seconds_to_duration};
pub use signals::shutdown_signal;
