//! Renderer configuration loaded from environment variables.
//!
//! Every setting has a default; command-line flags override them.
//!
//! | Variable                | Default     | Description                                   |
//! |-------------------------|-------------|-----------------------------------------------|
//! | `FRACTALS_LOG_LEVEL`    | `info`      | tracing filter (trace/debug/info/warn/error)  |
//! | `FRACTALS_OUTPUT_DIR`   | `.`         | directory PNG files are written to            |
//! | `FRACTALS_MAX_SEGMENTS` | `200000000` | refuse runs drawing more segments (0 = off)   |

use std::path::PathBuf;

/// Default segment budget; a dragon curve at level 27 is ~134M segments.
pub const DEFAULT_MAX_SEGMENTS: u128 = 200_000_000;

/// Runtime configuration for the `fractals` binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter string, e.g. `"fractals_lsystem=debug,info"`.
    pub log_level: String,

    /// Where rendered images land.
    pub output_dir: PathBuf,

    /// Upper bound on forward segments per run, checked with a census
    /// before drawing. `0` disables the check.
    pub max_segments: u128,
}

impl Config {
    /// Load configuration from environment variables, applying defaults where
    /// a variable is absent or unparseable.
    pub fn from_env() -> Self {
        Self {
            log_level:    env_str("FRACTALS_LOG_LEVEL", "info"),
            output_dir:   PathBuf::from(env_str("FRACTALS_OUTPUT_DIR", ".")),
            max_segments: env_parse("FRACTALS_MAX_SEGMENTS", DEFAULT_MAX_SEGMENTS),
        }
    }

    /// `true` if a run drawing `segments` fits the budget.
    pub fn allows(&self, segments: u128) -> bool {
        self.max_segments == 0 || segments <= self.max_segments
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level:    "info".into(),
            output_dir:   PathBuf::from("."),
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
