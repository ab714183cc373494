//! Background tasks module
//! 
//! This module contains background tasks that run alongside the HTTP server.

pub mod tick_driver;

// Re-export main types
pub use tick_driver::{tick_driver_task, TickDriver, TICK_INTERVAL};
