// Simulation driver: one fold over the scanned lines of a program

use super::errors::SimulationError;
use super::expressions::Evaluator;
use super::profile::LanguageProfile;
use super::scanner::scan;
use super::store::VariableStore;
use super::terminal::MockTerminal;
use crate::config::RunConfig;
use crate::language::Language;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;
use tracing::debug;

static INPUT_CALL_RE: OnceLock<Regex> = OnceLock::new();

fn input_call_re() -> &'static Regex {
    INPUT_CALL_RE.get_or_init(|| Regex::new(r"\binput\((.*?)\)").expect("input call regex"))
}

/// Simulates one program in one language.
///
/// A simulator owns a fresh [`VariableStore`] and [`MockTerminal`]; nothing
/// carries over between two simulators.
pub struct Simulator<'a> {
    /// Shared per-language tables
    profile: &'static LanguageProfile,

    /// Mocked inputs and other run settings
    config: &'a RunConfig,

    /// Flat variable table
    store: VariableStore,

    /// Everything printed so far
    terminal: MockTerminal,
}

impl<'a> Simulator<'a> {
    pub fn new(language: Language, config: &'a RunConfig) -> Self {
        Simulator {
            profile: LanguageProfile::get(language),
            config,
            store: VariableStore::new(),
            terminal: MockTerminal::new(),
        }
    }

    /// Run `source` from top to bottom.
    ///
    /// On a fault the lines printed before it stay in the terminal and the
    /// rest of the program is not executed.
    pub fn run(&mut self, source: &str) -> Result<(), SimulationError> {
        let source = self.mock_inputs(source);
        let lines = scan(&source, &self.profile.filter);
        debug!(
            language = %self.profile.language,
            lines = lines.len(),
            "simulation started"
        );

        for line in &lines {
            self.execute_line(line)?;
        }

        debug!(
            language = %self.profile.language,
            printed = self.terminal.len(),
            variables = self.store.len(),
            "simulation finished"
        );
        Ok(())
    }

    /// Replace `input(...)` calls with quoted mocked values, in rotation
    fn mock_inputs<'s>(&self, source: &'s str) -> Cow<'s, str> {
        let inputs = &self.config.mocked_inputs;
        if !self.profile.mock_input || inputs.is_empty() {
            return Cow::Borrowed(source);
        }
        let mut counter = 0;
        input_call_re().replace_all(source, |_: &Captures| {
            let value = &inputs[counter % inputs.len()];
            counter += 1;
            format!("\"{}\"", value)
        })
    }

    pub fn language(&self) -> Language {
        self.profile.language
    }

    pub fn terminal(&self) -> &MockTerminal {
        &self.terminal
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    pub(crate) fn profile(&self) -> &'static LanguageProfile {
        self.profile
    }

    pub(crate) fn store_mut(&mut self) -> &mut VariableStore {
        &mut self.store
    }

    pub(crate) fn terminal_mut(&mut self) -> &mut MockTerminal {
        &mut self.terminal
    }

    /// Expression evaluator bound to the current store
    pub(crate) fn evaluator(&self, line: usize) -> Evaluator<'_> {
        Evaluator::new(self.profile, &self.store, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::value::Value;

    #[test]
    fn test_declaration_without_initializer_is_undefined() {
        let config = RunConfig::default();
        let mut sim = Simulator::new(Language::C, &config);
        sim.run("int a, b = 2;").expect("run failed");
        assert_eq!(sim.store().get("a"), Some(&Value::Undefined));
        assert_eq!(sim.store().get("b"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn test_input_calls_cycle_through_mocked_values() {
        let config = RunConfig {
            mocked_inputs: vec!["1".into(), "2".into()],
        };
        let mut sim = Simulator::new(Language::Python, &config);
        sim.run("a = input()\nb = input('> ')\nc = input()").expect("run failed");
        assert_eq!(sim.store().get("a"), Some(&Value::Text("1".into())));
        assert_eq!(sim.store().get("b"), Some(&Value::Text("2".into())));
        assert_eq!(sim.store().get("c"), Some(&Value::Text("1".into())));
    }

    #[test]
    fn test_increment_and_compound_assignment() {
        let config = RunConfig::default();
        let mut sim = Simulator::new(Language::JavaScript, &config);
        sim.run("let i = 1;\ni++;\n++i\ni *= 2 + 1;").expect("run failed");
        assert_eq!(sim.store().get("i"), Some(&Value::Number(9.0)));
    }

    #[test]
    fn test_fault_keeps_earlier_output() {
        let config = RunConfig::default();
        let mut sim = Simulator::new(Language::C, &config);
        let err = sim
            .run("printf(\"before\");\nint z = 1 / 0;\nprintf(\"after\");")
            .unwrap_err();
        assert_eq!(err, SimulationError::DivisionByZero { line: 2 });
        assert_eq!(sim.terminal().get_output(), vec!["before".to_string()]);
    }
}
