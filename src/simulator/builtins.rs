//! Print statement renderers
//!
//! Each recognized output call renders to exactly one string, which the
//! dispatcher appends to the [`MockTerminal`](super::terminal::MockTerminal).
//!
//! # Supported output calls
//!
//! - `printf(format, ...)`: `%d %i %u %f %e %g %s %c %x %X` with flags, width
//!   and precision, `%%`, and Java's `%n`
//! - `puts(s)`: the argument plus a newline
//! - `cout << a << b << endl`: segments concatenated, `endl` is a newline
//! - `print(a, b)` / `console.log(a, b)`: arguments joined by one space
//! - `System.out.println(expr)`: the single expression
//!
//! Unlike real `printf`, a bare `%f` renders the number as-is (`2.5`, not
//! `2.500000`); only an explicit precision pads decimals.

use super::engine::Simulator;
use super::errors::SimulationError;
use super::profile::PrintStyle;
use super::syntax::{parse_quoted, resolve_escapes, split_top_level};
use super::value::{format_number, Value};

/// Upper bound for printf field widths and precisions
const MAX_FIELD: usize = 1024;

/// Parsed `%` conversion specification
#[derive(Debug, Default)]
struct Conversion {
    left_align: bool,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
}

impl Simulator<'_> {
    /// Render the output of one print statement
    pub(crate) fn render_print(
        &self,
        style: PrintStyle,
        args: &str,
        line: usize,
    ) -> Result<String, SimulationError> {
        match style {
            PrintStyle::Printf => self.builtin_printf(args, line),
            PrintStyle::Puts => {
                let value = self.evaluator(line).evaluate(args)?;
                Ok(format!("{}\n", self.render(&value)))
            }
            PrintStyle::StreamInsertion => self.builtin_cout(args, line),
            PrintStyle::PythonPrint | PrintStyle::ConsoleLog => self.render_joined(args, line),
            PrintStyle::SingleExpression => {
                if args.trim().is_empty() {
                    return Ok(String::new());
                }
                let value = self.evaluator(line).evaluate(args)?;
                Ok(self.render(&value))
            }
        }
    }

    fn render(&self, value: &Value) -> String {
        value.render(self.profile().undefined)
    }

    /// Comma-separated arguments, each evaluated, joined with a single space
    fn render_joined(&self, args: &str, line: usize) -> Result<String, SimulationError> {
        if args.trim().is_empty() {
            return Ok(String::new());
        }
        let evaluator = self.evaluator(line);
        let parts = split_top_level(args, ",")
            .into_iter()
            .map(|arg| evaluator.evaluate(arg).map(|v| self.render(&v)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(" "))
    }

    fn builtin_cout(&self, chain: &str, line: usize) -> Result<String, SimulationError> {
        let evaluator = self.evaluator(line);
        let mut output = String::new();
        for segment in split_top_level(chain, "<<") {
            let segment = segment.trim();
            match segment {
                "" => {}
                "endl" | "std::endl" => output.push('\n'),
                _ => output.push_str(&self.render(&evaluator.evaluate(segment)?)),
            }
        }
        Ok(output)
    }

    fn builtin_printf(&self, args: &str, line: usize) -> Result<String, SimulationError> {
        let mut parts = split_top_level(args, ",").into_iter();
        let first = parts.next().unwrap_or_default().trim();
        let evaluator = self.evaluator(line);

        let Some((_, format)) = parse_quoted(first, self.profile().quotes) else {
            // printf(message) with a non-literal format
            return Ok(self.render(&evaluator.evaluate(first)?));
        };

        let arg_values = parts
            .map(|arg| evaluator.evaluate(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.format_printf(&resolve_escapes(format), &arg_values))
    }

    fn format_printf(&self, format: &str, args: &[Value]) -> String {
        let mut output = String::new();
        let mut chars = format.chars().peekable();
        let mut arg_index = 0;

        while let Some(ch) = chars.next() {
            if ch != '%' {
                output.push(ch);
                continue;
            }

            let mut spec = Conversion::default();
            let mut raw = String::from("%");
            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => spec.left_align = true,
                    '0' => spec.zero_pad = true,
                    '+' | ' ' | '#' => {}
                    _ => break,
                }
                raw.push(flag);
                chars.next();
            }
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                spec.width = (spec.width * 10 + digit as usize).min(MAX_FIELD);
                raw.push(chars.next().unwrap_or_default());
            }
            if chars.peek() == Some(&'.') {
                raw.push('.');
                chars.next();
                let mut precision = 0;
                while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                    precision = (precision * 10 + digit as usize).min(MAX_FIELD);
                    raw.push(chars.next().unwrap_or_default());
                }
                spec.precision = Some(precision);
            }
            while let Some(&modifier) = chars.peek() {
                if !matches!(modifier, 'l' | 'h' | 'z' | 'L') {
                    break;
                }
                raw.push(modifier);
                chars.next();
            }

            match chars.next() {
                Some('%') => output.push('%'),
                Some('n') => output.push('\n'),
                Some(conv @ ('d' | 'i' | 'u' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 's' | 'c' | 'x' | 'X')) => {
                    let text = self.format_conversion(conv, &spec, args.get(arg_index));
                    arg_index += 1;
                    output.push_str(&pad(text, &spec));
                }
                Some(other) => {
                    output.push_str(&raw);
                    output.push(other);
                }
                None => output.push_str(&raw),
            }
        }

        output
    }

    fn format_conversion(&self, conv: char, spec: &Conversion, value: Option<&Value>) -> String {
        let Some(value) = value else {
            return self.profile().undefined.to_string();
        };
        match (conv, value) {
            ('d' | 'i' | 'u', Value::Number(n)) => format_number(n.trunc()),
            ('f' | 'F' | 'e' | 'E' | 'g' | 'G', Value::Number(n)) => match spec.precision {
                Some(p) => format!("{:.*}", p, n),
                None => format_number(*n),
            },
            ('x', Value::Number(n)) => format!("{:x}", *n as i64),
            ('X', Value::Number(n)) => format!("{:X}", *n as i64),
            ('c', Value::Number(n)) => char::from_u32(*n as u32)
                .map(String::from)
                .unwrap_or_default(),
            ('c', Value::Text(s)) => s.chars().next().map(String::from).unwrap_or_default(),
            (_, value) => self.render(value),
        }
    }
}

fn pad(text: String, spec: &Conversion) -> String {
    let len = text.chars().count();
    if len >= spec.width {
        return text;
    }
    let fill = spec.width - len;
    if spec.left_align {
        format!("{}{}", text, " ".repeat(fill))
    } else if spec.zero_pad {
        match text.strip_prefix('-') {
            Some(digits) => format!("-{}{}", "0".repeat(fill), digits),
            None => format!("{}{}", "0".repeat(fill), text),
        }
    } else {
        format!("{}{}", " ".repeat(fill), text)
    }
}
