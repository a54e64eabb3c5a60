// Statement dispatch for the simulator

use super::engine::Simulator;
use super::errors::SimulationError;
use super::profile::StatementKind;
use super::scanner::SourceLine;
use super::syntax::split_top_level;
use super::value::Value;
use regex::Captures;
use tracing::trace;

impl Simulator<'_> {
    /// Execute one scanned line. The first pattern that matches handles it;
    /// a line no pattern recognizes is skipped.
    pub(crate) fn execute_line(&mut self, line: &SourceLine) -> Result<(), SimulationError> {
        let profile = self.profile();
        let Some((kind, caps)) = profile
            .patterns
            .iter()
            .find_map(|p| p.recognizer.captures(line.text).map(|caps| (p.kind, caps)))
        else {
            trace!(line = line.number, text = line.text, "no statement pattern matched");
            return Ok(());
        };
        trace!(line = line.number, ?kind, "dispatching statement");

        match kind {
            StatementKind::Declaration => self.execute_declaration(capture(&caps, "body"), line.number),
            StatementKind::Increment => {
                self.execute_increment(capture(&caps, "name"), capture(&caps, "op"));
                Ok(())
            }
            StatementKind::CompoundAssignment => self.execute_compound(
                capture(&caps, "name"),
                capture(&caps, "op"),
                capture(&caps, "expr"),
                line.number,
            ),
            StatementKind::Assignment => {
                let value = self.evaluator(line.number).evaluate(capture(&caps, "expr"))?;
                self.store_mut().set(capture(&caps, "name"), value);
                Ok(())
            }
            StatementKind::Print(style) => {
                let args = caps
                    .name("args")
                    .or_else(|| caps.name("chain"))
                    .map_or("", |m| m.as_str());
                let text = self.render_print(style, args, line.number)?;
                self.terminal_mut().print(text, line.number);
                Ok(())
            }
        }
    }

    /// `a = 1, b, c = a + 2`: each entry is evaluated after the ones before it
    fn execute_declaration(&mut self, body: &str, line: usize) -> Result<(), SimulationError> {
        for entry in split_top_level(body, ",") {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match entry.split_once('=') {
                Some((name, expr)) => {
                    let value = self.evaluator(line).evaluate(expr)?;
                    self.store_mut().set(name.trim(), value);
                }
                None => self.store_mut().set(entry, Value::Undefined),
            }
        }
        Ok(())
    }

    /// `x++` / `--x` on a number; anything else is left untouched
    fn execute_increment(&mut self, name: &str, op: &str) {
        let delta = if op == "++" { 1.0 } else { -1.0 };
        if let Some(Value::Number(n)) = self.store().get(name) {
            let updated = Value::Number(n + delta);
            self.store_mut().set(name, updated);
        }
    }

    /// `x op= expr` is evaluated as `x op (expr)`
    fn execute_compound(
        &mut self,
        name: &str,
        op: &str,
        expr: &str,
        line: usize,
    ) -> Result<(), SimulationError> {
        let rewritten = format!("{} {} ({})", name, op, expr);
        let value = self.evaluator(line).evaluate(&rewritten)?;
        self.store_mut().set(name, value);
        Ok(())
    }
}

fn capture<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}
