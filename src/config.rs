//! Configuration and CLI argument handling

use clap::Parser;

use crate::{
    services::DEFAULT_PLAYER,
    state::{
        timer_config::{BREAK_MAX, BREAK_MIN, FOCUS_MAX, FOCUS_MIN},
        TimerConfig,
    },
};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "pomodoro-timer")]
#[command(about = "A local Pomodoro timer alternating focus and break sessions")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20525")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Initial focus duration in minutes (5-60, in steps of 5)
    #[arg(short, long, default_value = "25",
          value_parser = clap::value_parser!(u32).range(FOCUS_MIN as i64..=FOCUS_MAX as i64))]
    pub focus: u32,

    /// Initial break duration in minutes (1-15)
    #[arg(short = 'b', long = "break", default_value = "5",
          value_parser = clap::value_parser!(u32).range(BREAK_MIN as i64..=BREAK_MAX as i64))]
    pub break_minutes: u32,

    /// Command line used to play the notification sound
    #[arg(long, default_value = DEFAULT_PLAYER)]
    pub player: String,

    /// Disable the notification sound
    #[arg(long)]
    pub mute: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Initial timer durations; focus is snapped onto its 5-minute grid
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::new(self.focus, self.break_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_pomodoro() {
        let config = Config::try_parse_from(["pomodoro-timer"]).unwrap();
        assert_eq!(config.timer_config(), TimerConfig::default());
        assert_eq!(config.address(), "0.0.0.0:20525");
        assert_eq!(config.player, DEFAULT_PLAYER);
        assert_eq!(config.log_level(), "info");
        assert!(!config.mute);
    }

    #[test]
    fn parses_durations_and_snaps_focus() {
        let config =
            Config::try_parse_from(["pomodoro-timer", "--focus", "32", "--break", "10", "-v"]).unwrap();
        assert_eq!(config.timer_config().focus_minutes(), 30);
        assert_eq!(config.timer_config().break_minutes(), 10);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_out_of_range_durations() {
        assert!(Config::try_parse_from(["pomodoro-timer", "--focus", "90"]).is_err());
        assert!(Config::try_parse_from(["pomodoro-timer", "--break", "0"]).is_err());
    }
}
