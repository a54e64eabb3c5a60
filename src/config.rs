//! Playground configuration
//!
//! [`RunConfig`] carries the few knobs the simulators read; [`PlaygroundConfig`]
//! adds the settings of the terminal front end. Both have defaults matching the
//! hosted playground and are overridden from the command line in `main.rs`.

use std::time::Duration;

/// Values substituted, in rotation, for Python `input(...)` calls
pub const DEFAULT_MOCKED_INPUTS: [&str; 4] = ["10", "10.0", "5", "2"];

/// Artificial "building/executing" delay before a run completes
pub const DEFAULT_RUN_DELAY: Duration = Duration::from_millis(1500);

/// Quiet period after the last source change before suggestions are requested
pub const DEFAULT_SUGGESTION_DEBOUNCE: Duration = Duration::from_millis(1500);

/// Code must be strictly longer than this (after trimming) to be sent for suggestions
pub const DEFAULT_MIN_SUGGESTION_CHARS: usize = 20;

/// Settings that influence a single simulated run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub mocked_inputs: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            mocked_inputs: DEFAULT_MOCKED_INPUTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Settings of the interactive playground
#[derive(Debug, Clone)]
pub struct PlaygroundConfig {
    pub run: RunConfig,
    pub run_delay: Duration,
    pub suggestion_debounce: Duration,
    pub min_suggestion_chars: usize,
    /// Shell command used as the suggestion backend; `None` disables the assistant
    pub assistant_command: Option<String>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        PlaygroundConfig {
            run: RunConfig::default(),
            run_delay: DEFAULT_RUN_DELAY,
            suggestion_debounce: DEFAULT_SUGGESTION_DEBOUNCE,
            min_suggestion_chars: DEFAULT_MIN_SUGGESTION_CHARS,
            assistant_command: None,
        }
    }
}
