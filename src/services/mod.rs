//! External collaborators
//! 
//! Audio playback for the session-complete notification.

pub mod sound;

// Re-export main types
pub use sound::{
    check_player_available, CommandPlayer, SilentPlayer, SoundPlayer, DEFAULT_PLAYER,
    NOTIFICATION_SOUND,
};
