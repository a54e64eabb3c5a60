//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code display with per-language syntax highlighting
//! - [`output`]: Console text of the last simulated run
//! - [`assistant`]: AI suggestions, errors and best practices
//! - [`status`]: Status bar with keybindings and run state
//!
//! Each pane module exports a primary `render_*_pane()` function that takes
//! the frame, its area, the data to show, whether it is focused and a mutable
//! scroll offset it clamps to the content.

pub mod assistant;
pub mod output;
pub mod source;
pub mod status;

pub use assistant::{render_assistant_pane, AssistantView};
pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
