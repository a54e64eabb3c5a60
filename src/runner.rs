//! Run orchestration
//!
//! [`run`] is the single entry point the playground uses: it resolves the
//! language tag, simulates the program with a fresh store and renders the
//! console text shown in the output pane. It always returns a string.
//!
//! The rendered text is the language banner, a newline, and then either the
//! printed output or a fixed "nothing printed" notice.

use crate::config::RunConfig;
use crate::language::Language;
use crate::simulator::Simulator;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Returned verbatim for a tag that names no simulated language
pub const UNSUPPORTED_LANGUAGE: &str = "Language not supported for execution.";

/// Printed after the banner when the program produced no output
pub const NO_OUTPUT: &str = "No output was printed to the console.";

/// Prefix of the message shown when the simulator itself panicked
pub const EXECUTION_FAILED: &str = "An error occurred during execution: ";

/// Simulate `source` as the language named by `tag`.
pub fn run(source: &str, tag: &str, config: &RunConfig) -> String {
    match Language::from_tag(tag) {
        Some(language) => run_language(source, language, config),
        None => {
            debug!(tag, "unsupported language tag");
            UNSUPPORTED_LANGUAGE.to_string()
        }
    }
}

/// Simulate `source` as `language`.
pub fn run_language(source: &str, language: Language, config: &RunConfig) -> String {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        format!("{}\n{}", language.banner(), simulate(source, language, config))
    }));

    result.unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        warn!(%language, %message, "simulator panicked");
        format!("{}\n{}", EXECUTION_FAILED, message)
    })
}

/// Console text printed by the program, or the no-output notice
fn simulate(source: &str, language: Language, config: &RunConfig) -> String {
    let mut simulator = Simulator::new(language, config);
    if let Err(err) = simulator.run(source) {
        debug!(line = err.line(), error = %err, "simulation stopped by fault");
        simulator
            .terminal_mut()
            .print(format!("Error: {}", err), err.line());
    }

    let terminal = simulator.terminal();
    if terminal.is_empty() {
        NO_OUTPUT.to_string()
    } else {
        terminal.render()
    }
}

/// Text of a panic payload
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
