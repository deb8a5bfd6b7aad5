//! Runtime settings.
//!
//! Everything has a built-in default; a few values can be overridden from the
//! environment. Board size is never configured here, it always follows the
//! terminal.

use std::{env, path::PathBuf, time::Duration};

use log::warn;

pub const DEFAULT_TICK_MS: u64 = 50;
pub const DEFAULT_GAME_OVER_HOLD: Duration = Duration::from_secs(3);
pub const DEFAULT_PADDLE_HEIGHT: i32 = 4;
pub const DEFAULT_BALL_VELOCITY: (i32, i32) = (1, 2);

const LOG_PATH_VAR: &str = "PONG_LOG";
const TICK_MS_VAR: &str = "PONG_TICK_MS";
const DEBUG_VAR: &str = "PONG_DEBUG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Sleep between ticks.
    pub tick: Duration,
    /// How long the game-over screen stays up before the terminal is restored.
    pub game_over_hold: Duration,
    pub paddle_height: i32,
    /// `(rows, cols)` per tick.
    pub ball_velocity: (i32, i32),
    /// Show tick and ball state in the top-left corner.
    pub debug_overlay: bool,
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            game_over_hold: DEFAULT_GAME_OVER_HOLD,
            paddle_height: DEFAULT_PADDLE_HEIGHT,
            ball_velocity: DEFAULT_BALL_VELOCITY,
            debug_overlay: false,
            log_path: env::temp_dir().join("grid-pong.log"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = var(LOG_PATH_VAR).filter(|p| !p.is_empty()) {
            config.log_path = PathBuf::from(path);
        }

        if let Some(raw) = var(TICK_MS_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.tick = Duration::from_millis(ms),
                _ => warn!(
                    "ignoring {}={:?}, keeping {} ms",
                    TICK_MS_VAR, raw, DEFAULT_TICK_MS
                ),
            }
        }

        if let Some(raw) = var(DEBUG_VAR) {
            config.debug_overlay = matches!(raw.trim(), "1" | "true" | "yes" | "on");
        }

        config
    }
}
