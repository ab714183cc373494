//! Notification sound playback

use std::process::Stdio;

use tokio::{process::Command, runtime::Handle};
use tracing::{debug, info, warn};

/// Sound played when a session completes
pub const NOTIFICATION_SOUND: &str = "https://bigsoundbank.com/UPLOAD/mp3/1482.mp3";

/// Default player command line
pub const DEFAULT_PLAYER: &str = "mpv --no-video --really-quiet";

/// Fire-and-forget audio playback.
///
/// Implementations must return immediately and must not report failures
/// to the caller.
pub trait SoundPlayer: Send + Sync {
    fn play(&self, asset: &str);
}

/// Plays sounds by spawning an external player program
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    /// Build a player from a whitespace separated command line, e.g.
    /// `"mpv --no-video"`. Returns `None` for an empty command line.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl SoundPlayer for CommandPlayer {
    fn play(&self, asset: &str) {
        // tokio::process needs a runtime to reap the child
        let Ok(handle) = Handle::try_current() else {
            warn!("No async runtime available, skipping notification sound");
            return;
        };

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(asset)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                debug!("Playing notification sound with {}", self.program);
                let program = self.program.clone();
                handle.spawn(async move {
                    match child.wait().await {
                        Ok(status) if !status.success() => {
                            debug!("{} exited with {}", program, status);
                        }
                        Ok(_) => {}
                        Err(e) => debug!("Failed to wait for {}: {}", program, e),
                    }
                });
            }
            Err(e) => warn!("Failed to start sound player {}: {}", self.program, e),
        }
    }
}

/// Player used when sound is muted
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, asset: &str) {
        debug!("Sound muted, not playing {}", asset);
    }
}

/// Check that the player program can be executed
pub async fn check_player_available(player: &CommandPlayer) -> Result<(), String> {
    Command::new(player.program())
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| format!("Sound player {} is not available: {}", player.program(), e))?;

    info!("Sound player {} is available", player.program());
    Ok(())
}
