//! Simulated runtime values
//!
//! The simulators only distinguish numbers from text. Two extra variants keep
//! evaluation total:
//!
//! - [`Value::Raw`]: an expression nothing could evaluate. It carries the
//!   original (trimmed) text and prints verbatim.
//! - [`Value::Undefined`]: stored for declarations without an initializer.
//!   It prints as the language's sentinel (`null`, `None`, `undefined`).

/// Runtime values in the simulator
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Number(f64),
    Text(String),
    Raw(String),
    #[default]
    Undefined,
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Render for output, using `undefined` for [`Value::Undefined`]
    pub fn render(&self, undefined: &str) -> String {
        match self {
            Value::Number(n) => format_number(*n),
            Value::Text(s) | Value::Raw(s) => s.clone(),
            Value::Undefined => undefined.to_string(),
        }
    }

    /// Python-style type name used in concatenation faults
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(n) if n.fract() == 0.0 => "int",
            Value::Number(_) => "float",
            Value::Text(_) | Value::Raw(_) => "str",
            Value::Undefined => "NoneType",
        }
    }
}

/// Format a number the way the playground always has: integral values without
/// a fractional part, everything else in shortest round-trip form.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        // -0 prints as 0
        format!("{}", n as i128)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_render_undefined_uses_sentinel() {
        assert_eq!(Value::Undefined.render("null"), "null");
        assert_eq!(Value::Raw("foo(1)".into()).render("null"), "foo(1)");
    }
}
