//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, the
//!   pending-run timer and background suggestion requests
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   output, assistant, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a language, the
//! program text and a [`PlaygroundConfig`], then call [`App::run`] to start the
//! event loop.
//!
//! [`PlaygroundConfig`]: crate::config::PlaygroundConfig
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// Run `f` with panics logged through `tracing` instead of printed to stderr,
/// where they would draw over the alternate screen.
///
/// This covers panics the runner catches itself as well as one escaping `f`,
/// which comes back as `Err`. The previous hook is reinstalled afterwards.
pub fn run_with_quiet_panics<R>(f: impl FnOnce() -> R) -> std::thread::Result<R> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        error!(%info, "panic while the playground was open");
    }));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);
    result
}
