//! # Introduction
//!
//! CodeCollab is a code playground whose programs never really run. Each
//! supported language has a small simulator that scans the source line by
//! line, keeps a flat table of variables, evaluates a restricted set of
//! arithmetic and string expressions and reconstructs what the program would
//! have printed. A terminal UI built with [ratatui](https://docs.rs/ratatui)
//! shows the source, the simulated console and suggestions from an optional
//! AI assistant.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Scanner → Statement patterns → Evaluator → Store / Terminal → Output text
//! ```
//!
//! 1. [`runner`] resolves the language tag, runs the simulator and renders the
//!    console text (banner, output or a fixed notice).
//! 2. [`simulator`] holds the per-language profiles, the line scanner, the
//!    statement dispatcher and the expression evaluator.
//! 3. [`language`] lists the languages with their banners and starter programs.
//! 4. [`assistant`] asks an external model for suggestions or generated code.
//! 5. [`ui`] is the ratatui-based playground; not part of the stable library API.
//!
//! ## Supported subset
//!
//! Declarations, assignments, compound assignments, increments and print
//! calls (`printf`, `puts`, `cout`, `System.out.println`, `print`,
//! `console.log`). Expressions: literals, variables, conversion calls,
//! parentheses and `+ - * / %`. Control flow and functions are not evaluated.
//!
//! ```
//! use codecollab::config::RunConfig;
//! use codecollab::runner::run;
//!
//! let out = run("x = 10\ny = 5\nprint(x + y)", "python", &RunConfig::default());
//! assert_eq!(out, "> python script.py\n15");
//! ```

pub mod assistant;
pub mod config;
pub mod language;
pub mod runner;
pub mod simulator;
pub mod ui;
