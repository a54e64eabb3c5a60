//! Multi-language execution simulator
//!
//! This module provides the fake-execution core:
//! - [`engine`]: [`Simulator`], which folds a program's lines into a store and a terminal
//! - [`profile`]: per-language tables (boilerplate filters, literal syntax,
//!   operator semantics, statement patterns)
//! - [`expressions`]: the restricted expression evaluator
//! - [`errors`]: faults that end a run
//!
//! # Execution Model
//!
//! Nothing is parsed. Each source line is trimmed, filtered and matched
//! against an ordered list of regex statement patterns; the first match
//! decides what happens to the variable store or the output. Lines that no
//! pattern matches are skipped silently, and expressions the evaluator does
//! not understand print as their own source text.
//!
//! ```
//! use codecollab::config::RunConfig;
//! use codecollab::language::Language;
//! use codecollab::simulator::Simulator;
//!
//! let config = RunConfig::default();
//! let mut sim = Simulator::new(Language::Python, &config);
//! sim.run("x = 10\ny = 5\nprint(x + y)").unwrap();
//! assert_eq!(sim.terminal().render(), "15");
//! ```

mod builtins;
pub mod engine;
pub mod errors;
pub mod expressions;
pub mod profile;
pub mod scanner;
mod statements;
pub mod store;
pub mod syntax;
pub mod terminal;
pub mod value;

pub use engine::Simulator;
pub use errors::SimulationError;
pub use value::Value;
