//! Quote- and bracket-aware text helpers
//!
//! The simulators never tokenize. Everything they need is a handful of
//! string operations that respect string literals and nesting: splitting on
//! separators at the top level, recognizing a whole-string literal or call,
//! and resolving escape sequences.

const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Byte offsets of every top-level occurrence of `sep` in `s`.
///
/// Occurrences inside string literals or inside `()`, `[]`, `{}` are ignored.
fn top_level_positions(s: &str, sep: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut iter = s.char_indices();

    while let Some((i, c)) = iter.next() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ => {
                if depth == 0 && s[i..].starts_with(sep) {
                    positions.push(i);
                    // skip the rest of a multi-byte separator
                    for _ in 1..sep.chars().count() {
                        iter.next();
                    }
                }
            }
        }
    }
    positions
}

fn split_at_positions<'a>(s: &'a str, positions: &[usize], sep_len: usize) -> Vec<&'a str> {
    let mut parts = Vec::with_capacity(positions.len() + 1);
    let mut start = 0;
    for &pos in positions {
        parts.push(&s[start..pos]);
        start = pos + sep_len;
    }
    parts.push(&s[start..]);
    parts
}

/// Split on every top-level `sep`. Always returns at least one part.
pub fn split_top_level<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    let positions = top_level_positions(s, sep);
    split_at_positions(s, &positions, sep.len())
}

/// Whether the `+`/`-` at `pos` is the exponent sign of a literal like `1e-5`
fn is_exponent_sign(s: &str, pos: usize) -> bool {
    let Some(mantissa) = s[..pos].strip_suffix(['e', 'E']) else {
        return false;
    };
    let start = mantissa
        .char_indices()
        .rev()
        .find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.'))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let word = &mantissa[start..];
    word.chars().any(|c| c.is_ascii_digit()) && word.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Split on top-level occurrences of a binary operator.
///
/// An operator directly preceded (ignoring whitespace) by nothing or by
/// another operator is unary and does not split: `1 - -2` yields `["1 ", " -2"]`.
/// Neither does the sign of an exponent: `x - 1e-5` yields `["x ", " 1e-5"]`.
pub fn split_binary_operator(s: &str, op: char) -> Vec<&str> {
    let mut buf = [0u8; 4];
    let sep: &str = op.encode_utf8(&mut buf);
    let positions: Vec<usize> = top_level_positions(s, sep)
        .into_iter()
        .filter(|&pos| !(matches!(op, '+' | '-') && is_exponent_sign(s, pos)))
        .filter(|&pos| {
            match s[..pos].trim_end().chars().last() {
                None => false,
                Some(prev) => !matches!(
                    prev,
                    '+' | '-' | '*' | '/' | '%' | '(' | '=' | '<' | '>' | ',' | '!' | '&' | '|'
                ),
            }
        })
        .collect();
    split_at_positions(s, &positions, sep.len())
}

/// Length in bytes of the string literal that starts `s`, closing quote included.
fn literal_len(s: &str, quotes: &[char]) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, open) = chars.next()?;
    if !quotes.contains(&open) {
        return None;
    }
    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == open {
            return Some(i + c.len_utf8());
        }
    }
    None
}

/// If `s` starts with a string literal, return its contents and the text after it.
pub fn split_leading_literal<'a>(s: &'a str, quotes: &[char]) -> Option<(char, &'a str, &'a str)> {
    let len = literal_len(s, quotes)?;
    let open = s.chars().next()?;
    let inner = &s[open.len_utf8()..len - open.len_utf8()];
    Some((open, inner, &s[len..]))
}

/// If the whole of `s` is one string literal, return its quote and raw contents.
pub fn parse_quoted<'a>(s: &'a str, quotes: &[char]) -> Option<(char, &'a str)> {
    match split_leading_literal(s, quotes)? {
        (q, inner, "") => Some((q, inner)),
        _ => None,
    }
}

/// Whether the opening paren at byte 0 of `s` is closed by its last character.
fn parens_enclose(s: &str) -> bool {
    if !s.starts_with('(') || !s.ends_with(')') {
        return false;
    }
    let inner = &s[1..s.len() - 1];
    // an unmatched ')' inside means the first '(' closes early
    let mut depth: i32 = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in inner.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            c if QUOTES.contains(&c) => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// `(expr)` → `expr` when the outer parentheses belong together.
pub fn strip_parens(s: &str) -> Option<&str> {
    if parens_enclose(s) {
        Some(s[1..s.len() - 1].trim())
    } else {
        None
    }
}

/// `name(args)` → `args` when the call spans the whole of `s`.
pub fn strip_call<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(name)?.trim_start();
    strip_parens(rest)
}

/// Whether `s` is a plain identifier
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Parse a decimal literal, allowing one trailing suffix from `suffixes`.
pub fn parse_number(s: &str, suffixes: &[char]) -> Option<f64> {
    let body = match s.chars().last() {
        Some(c) if suffixes.contains(&c) && s.len() > 1 => &s[..s.len() - c.len_utf8()],
        _ => s,
    };
    let first = body.chars().next()?;
    // reject words f64::from_str accepts ("inf", "NaN", "infinity")
    if !(first.is_ascii_digit() || matches!(first, '-' | '+' | '.')) {
        return None;
    }
    if body.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    body.parse::<f64>().ok()
}

/// Resolve backslash escapes (`\n`, `\t`, `\r`, `\0`, `\\`, `\"`, `\'`, `` \` ``).
///
/// Unknown escapes are kept as written.
pub fn resolve_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(e @ ('\\' | '"' | '\'' | '`')) => out.push(e),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_top_level_respects_quotes_and_parens() {
        assert_eq!(
            split_top_level(r#""a, b", f(1, 2), c"#, ","),
            vec![r#""a, b""#, " f(1, 2)", " c"]
        );
        assert_eq!(split_top_level("x", ","), vec!["x"]);
    }

    #[test]
    fn test_split_stream_operator() {
        assert_eq!(
            split_top_level(r#" "a << b" << x << endl"#, "<<"),
            vec![r#" "a << b" "#, " x ", " endl"]
        );
    }

    #[test]
    fn test_split_binary_operator_skips_unary() {
        assert_eq!(split_binary_operator("1 - -2", '-'), vec!["1 ", " -2"]);
        assert_eq!(split_binary_operator("-a", '-'), vec!["-a"]);
        assert_eq!(split_binary_operator("a-b-c", '-'), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_binary_operator_keeps_exponents_whole() {
        assert_eq!(split_binary_operator("x - 1e-5", '-'), vec!["x ", " 1e-5"]);
        assert_eq!(split_binary_operator("2.5E+3+1", '+'), vec!["2.5E+3", "1"]);
        // identifiers ending in `e` still split
        assert_eq!(split_binary_operator("size-1", '-'), vec!["size", "1"]);
        assert_eq!(split_binary_operator("x1e-5", '-'), vec!["x1e", "5"]);
    }

    #[test]
    fn test_parse_quoted() {
        assert_eq!(parse_quoted(r#""hi""#, &QUOTES), Some(('"', "hi")));
        assert_eq!(parse_quoted(r#""a" + "b""#, &QUOTES), None);
        assert_eq!(parse_quoted(r#""say \"x\"""#, &QUOTES), Some(('"', r#"say \"x\""#)));
        assert_eq!(parse_quoted("'x'", &['"']), None);
    }

    #[test]
    fn test_strip_call_requires_balanced_parens() {
        assert_eq!(strip_call("float(x)", "float"), Some("x"));
        assert_eq!(strip_call("float(a) + float(b)", "float"), None);
        assert_eq!(strip_call("floaty(x)", "float"), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42", &[]), Some(42.0));
        assert_eq!(parse_number("-3.5", &[]), Some(-3.5));
        assert_eq!(parse_number("2.5f", &['f']), Some(2.5));
        assert_eq!(parse_number("2.5f", &[]), None);
        assert_eq!(parse_number("inf", &[]), None);
        assert_eq!(parse_number("1e3", &[]), Some(1000.0));
    }

    #[test]
    fn test_resolve_escapes() {
        assert_eq!(resolve_escapes(r"a\nb\t\\"), "a\nb\t\\");
        assert_eq!(resolve_escapes(r"\q"), r"\q");
    }
}
