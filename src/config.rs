//! Startup settings.
//!
//! The whole command-line surface is one optional positional argument
//! selecting the difficulty. Two environment variables cover the rest:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `FLAPPY_TUI_LOG` | Append log records to this file |
//! | `FLAPPY_TUI_MUTE` | `1`/`true` silences the sound cues |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::Difficulty;

pub const LOG_PATH_VAR: &str = "FLAPPY_TUI_LOG";
pub const MUTE_VAR: &str = "FLAPPY_TUI_MUTE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub log_path: Option<PathBuf>,
    pub muted: bool,
    /// Seed for pipe gap placement.
    pub seed: u32,
}

impl Settings {
    /// Build settings from program arguments (without the program name) and
    /// an environment lookup.
    pub fn from_args_and_env<I, S>(args: I, env: impl Fn(&str) -> Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let first = args.into_iter().next();
        let arg: Option<&str> = first.as_ref().map(|s| s.as_ref());
        let difficulty = Difficulty::from_arg(arg);

        let log_path = env(LOG_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let muted = env(MUTE_VAR)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            difficulty,
            log_path,
            muted,
            seed: 1,
        }
    }

    /// Settings for this process: real arguments, real environment, clock seed.
    pub fn from_env() -> Self {
        let mut settings =
            Self::from_args_and_env(std::env::args().skip(1), |key| std::env::var(key).ok());
        settings.seed = clock_seed();
        settings
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
