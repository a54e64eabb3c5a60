//! Simulator fault types
//!
//! A [`SimulationError`] is raised only for the handful of situations the
//! simulated language itself would reject at run time. An expression the
//! simulator does not understand is *not* an error: it evaluates to
//! [`Value::Raw`](crate::simulator::value::Value::Raw).
//!
//! Faults stop the current run; the runner renders them as a single
//! `Error: <message>` output line.

/// Runtime faults raised while simulating a program
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Whole-number division or remainder by zero
    #[error("division by zero at line {line}")]
    DivisionByZero { line: usize },

    /// A conversion wrapper could not turn its argument into a number
    #[error("could not convert '{text}' to a number at line {line}")]
    InvalidConversion { text: String, line: usize },

    /// Text and a number joined with `+` in a language that forbids it
    #[error("can only concatenate str (not \"{kind}\") to str at line {line}")]
    InvalidConcatenation { kind: &'static str, line: usize },
}

impl SimulationError {
    /// Source line the fault was raised on
    pub fn line(&self) -> usize {
        match self {
            SimulationError::DivisionByZero { line }
            | SimulationError::InvalidConversion { line, .. }
            | SimulationError::InvalidConcatenation { line, .. } => *line,
        }
    }
}
