//! Restricted expression evaluator
//!
//! Evaluation is total: anything the rules below do not cover comes back as
//! [`Value::Raw`] holding the trimmed source text. `Err` is reserved for
//! [`SimulationError`] faults the simulated language would raise itself.
//!
//! Rules, in order:
//!
//! 1. known variable → stored value
//! 2. string literal (template literals, f-strings and `.format()` calls are
//!    filled in)
//! 3. numeric literal, with an optional per-language suffix
//! 4. conversion wrapper call (`float(x)`, `Integer.parseInt(s)`, ...)
//! 5. `( expr )`
//! 6. first operator of `+ - * / %` present at the top level: split on it,
//!    evaluate every operand and fold left to right
//! 7. unary minus
//! 8. raw fallback
//!
//! Nesting deeper than [`MAX_DEPTH`] (parentheses, unary minus, wrapper calls)
//! is left raw.
//!
//! Step 6 is not a precedence parser. Trying `+` first and `*` before `/`
//! gets most mixed expressions right, but an operator tried later binds
//! tighter than it should: `7 * 3 / 2` is `7 * (3 / 2)` (7 in C, not 10) and
//! `10 / 2 % 3` is `10 / (2 % 3)`.

use super::errors::SimulationError;
use super::profile::{Coercion, ConcatRule, DivisionMode, LanguageProfile, StringFormatting};
use super::store::VariableStore;
use super::syntax::{
    is_identifier, parse_number, parse_quoted, resolve_escapes, split_binary_operator,
    split_leading_literal, split_top_level, strip_call, strip_parens,
};
use super::value::Value;
use regex::{Captures, Regex};
use std::cell::Cell;
use std::sync::OnceLock;
use tracing::trace;

/// Upper bound for `{x:.Nf}` precisions
const MAX_PRECISION: usize = 64;

/// Deepest recursive evaluation before an expression is left raw
pub const MAX_DEPTH: usize = 128;

static FORMAT_FIELD_RE: OnceLock<Regex> = OnceLock::new();

/// `{{x}}` (escaped braces) or `{}` / `{N}` replacement fields of `str.format`
fn format_field_re() -> &'static Regex {
    FORMAT_FIELD_RE.get_or_init(|| {
        Regex::new(r"\{(\{[^}]*\})\}|\{(\d*)\}").expect("format field regex")
    })
}

/// Evaluates expressions for one statement against the current store
pub struct Evaluator<'a> {
    profile: &'a LanguageProfile,
    store: &'a VariableStore,
    line: usize,
    depth: Cell<usize>,
}

impl<'a> Evaluator<'a> {
    pub fn new(profile: &'a LanguageProfile, store: &'a VariableStore, line: usize) -> Self {
        Evaluator {
            profile,
            store,
            line,
            depth: Cell::new(0),
        }
    }

    pub fn evaluate(&self, expr: &str) -> Result<Value, SimulationError> {
        let depth = self.depth.get();
        if depth >= MAX_DEPTH {
            trace!(line = self.line, "expression nested too deeply");
            return Ok(Value::Raw(expr.trim().to_string()));
        }
        self.depth.set(depth + 1);
        let result = self.evaluate_nested(expr);
        self.depth.set(depth);
        result
    }

    fn evaluate_nested(&self, expr: &str) -> Result<Value, SimulationError> {
        let expr = expr.trim();

        if let Some(value) = self.store.get(expr) {
            return Ok(value.clone());
        }

        if let Some(value) = self.evaluate_string(expr)? {
            return Ok(value);
        }

        if let Some(n) = parse_number(expr, self.profile.numeric_suffixes) {
            return Ok(Value::Number(n));
        }

        for wrapper in self.profile.wrappers {
            if let Some(inner) = strip_call(expr, wrapper.name) {
                let value = self.evaluate(inner)?;
                return self.coerce(expr, value, wrapper.coercion);
            }
        }

        if let Some(inner) = strip_parens(expr) {
            return self.evaluate(inner);
        }

        for &op in self.profile.operators {
            let parts = split_binary_operator(expr, op);
            if parts.len() < 2 {
                continue;
            }
            let values = parts
                .iter()
                .map(|part| self.evaluate(part))
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(value) = self.fold(op, &values)? {
                return Ok(value);
            }
        }

        if let Some(rest) = expr.strip_prefix('-') {
            if let Value::Number(n) = self.evaluate(rest)? {
                return Ok(Value::Number(-n));
            }
        }

        trace!(line = self.line, expr, "expression left unevaluated");
        Ok(Value::Raw(expr.to_string()))
    }

    /// Fold operands of one operator; `None` means the operator does not apply.
    fn fold(&self, op: char, values: &[Value]) -> Result<Option<Value>, SimulationError> {
        let numbers: Option<Vec<f64>> = values.iter().map(Value::as_number).collect();
        if let Some(numbers) = numbers {
            let mut acc = numbers[0];
            for &rhs in &numbers[1..] {
                acc = self.apply(op, acc, rhs)?;
            }
            return Ok(Some(Value::Number(acc)));
        }

        if op != '+' || !values.iter().any(Value::is_text) {
            return Ok(None);
        }

        match self.profile.concat {
            ConcatRule::Never => Ok(None),
            ConcatRule::Loose => Ok(Some(Value::Text(self.concat(values)))),
            ConcatRule::Strict => {
                if values.iter().all(Value::is_text) {
                    Ok(Some(Value::Text(self.concat(values))))
                } else if let Some(num) = values.iter().find(|v| v.is_number()) {
                    Err(SimulationError::InvalidConcatenation {
                        kind: num.kind_name(),
                        line: self.line,
                    })
                } else {
                    Ok(None)
                }
            }
        }
    }

    fn apply(&self, op: char, lhs: f64, rhs: f64) -> Result<f64, SimulationError> {
        let result = match op {
            '+' => lhs + rhs,
            '-' => lhs - rhs,
            '*' => lhs * rhs,
            '/' | '%' if self.profile.division == DivisionMode::Truncating && rhs == 0.0 => {
                return Err(SimulationError::DivisionByZero { line: self.line });
            }
            '/' => match self.profile.division {
                DivisionMode::Truncating => (lhs / rhs).trunc(),
                DivisionMode::Float => lhs / rhs,
            },
            '%' => lhs % rhs,
            _ => lhs,
        };
        Ok(result)
    }

    fn concat(&self, values: &[Value]) -> String {
        values
            .iter()
            .map(|v| v.render(self.profile.undefined))
            .collect()
    }

    fn coerce(&self, expr: &str, value: Value, coercion: Coercion) -> Result<Value, SimulationError> {
        match (coercion, value) {
            (Coercion::ToText, value) => Ok(Value::Text(value.render(self.profile.undefined))),
            (_, Value::Raw(_) | Value::Undefined) => Ok(Value::Raw(expr.to_string())),
            (Coercion::ToNumber, Value::Number(n)) => Ok(Value::Number(n)),
            (Coercion::ToInteger, Value::Number(n)) => Ok(Value::Number(n.trunc())),
            (coercion, Value::Text(text)) => {
                let n = text
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| SimulationError::InvalidConversion {
                        text: text.clone(),
                        line: self.line,
                    })?;
                Ok(Value::Number(if coercion == Coercion::ToInteger {
                    n.trunc()
                } else {
                    n
                }))
            }
        }
    }

    /// String literal forms: plain, template literal, f-string, `.format()` call
    fn evaluate_string(&self, expr: &str) -> Result<Option<Value>, SimulationError> {
        let quotes = self.profile.quotes;
        if let Some((quote, inner)) = parse_quoted(expr, quotes) {
            if quote == '`' && self.profile.formatting == StringFormatting::TemplateLiterals {
                return self.fill_template(inner).map(|s| Some(Value::Text(s)));
            }
            return Ok(Some(Value::Text(resolve_escapes(inner))));
        }

        if self.profile.formatting != StringFormatting::PythonFormat {
            return Ok(None);
        }

        if let Some(rest) = expr.strip_prefix(['f', 'F']) {
            if let Some((_, body)) = parse_quoted(rest, quotes) {
                return self.fill_fstring(body).map(|s| Some(Value::Text(s)));
            }
        }

        if let Some((_, template, rest)) = split_leading_literal(expr, quotes) {
            if let Some(args) = strip_call(rest.trim(), ".format") {
                return self.fill_format_call(template, args).map(|s| Some(Value::Text(s)));
            }
        }

        Ok(None)
    }

    /// Fill `{name}` placeholders of an f-string body.
    ///
    /// An identifier placeholder is a store lookup and renders empty when the
    /// variable is unknown; any other placeholder is evaluated. A trailing
    /// `:.Nf` spec rounds numbers to N decimals.
    fn fill_fstring(&self, body: &str) -> Result<String, SimulationError> {
        let mut out = String::new();
        let mut literal = String::new();
        let mut chars = body.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let Some(len) = body[i + 1..].find('}') else {
                        literal.push_str(&body[i..]);
                        break;
                    };
                    out.push_str(&resolve_escapes(&literal));
                    literal.clear();
                    out.push_str(&self.render_placeholder(&body[i + 1..i + 1 + len])?);
                    // skip to the closing brace
                    while let Some((j, _)) = chars.next() {
                        if j == i + 1 + len {
                            break;
                        }
                    }
                }
                _ => literal.push(c),
            }
        }
        out.push_str(&resolve_escapes(&literal));
        Ok(out)
    }

    fn render_placeholder(&self, field: &str) -> Result<String, SimulationError> {
        let mut parts = split_top_level(field, ":").into_iter();
        let expr = parts.next().unwrap_or_default().trim();
        let expr = expr.strip_suffix("!r").or(expr.strip_suffix("!s")).unwrap_or(expr).trim();
        let spec = parts.next().map(str::trim);

        let value = if is_identifier(expr) {
            match self.store.get(expr) {
                Some(value) => value.clone(),
                None => return Ok(String::new()),
            }
        } else {
            self.evaluate(expr)?
        };

        let precision = spec
            .and_then(|s| s.strip_prefix('.'))
            .and_then(|s| s.strip_suffix('f'))
            .and_then(|s| s.parse::<usize>().ok())
            .map(|p| p.min(MAX_PRECISION));
        Ok(match (precision, &value) {
            (Some(p), Value::Number(n)) => format!("{:.*}", p, n),
            _ => value.render(self.profile.undefined),
        })
    }

    /// `"{} and {1}".format(a, b)`: `{}` takes the next argument, `{N}` argument
    /// N, `{{x}}` renders `{x}`, missing arguments render empty.
    fn fill_format_call(&self, template: &str, args: &str) -> Result<String, SimulationError> {
        let rendered: Vec<String> = if args.trim().is_empty() {
            Vec::new()
        } else {
            split_top_level(args, ",")
                .into_iter()
                .map(|arg| {
                    self.evaluate(arg)
                        .map(|v| v.render(self.profile.undefined))
                })
                .collect::<Result<_, _>>()?
        };

        let mut next = 0;
        let filled = format_field_re().replace_all(template, |caps: &Captures| {
            if let Some(escaped) = caps.get(1) {
                return escaped.as_str().to_string();
            }
            let index = match caps.get(2).map(|m| m.as_str()).unwrap_or("") {
                "" => {
                    next += 1;
                    next - 1
                }
                explicit => explicit.parse::<usize>().unwrap_or(usize::MAX),
            };
            rendered.get(index).cloned().unwrap_or_default()
        });
        Ok(resolve_escapes(&filled))
    }

    /// Fill `${expr}` holes of a template literal body
    fn fill_template(&self, body: &str) -> Result<String, SimulationError> {
        let mut out = String::new();
        let mut rest = body;
        while let Some(start) = rest.find("${") {
            out.push_str(&resolve_escapes(&rest[..start]));
            let after = &rest[start + 2..];
            match after.find('}') {
                Some(end) => {
                    let value = self.evaluate(&after[..end])?;
                    out.push_str(&value.render(self.profile.undefined));
                    rest = &after[end + 1..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(&resolve_escapes(rest));
        Ok(out)
    }
}
