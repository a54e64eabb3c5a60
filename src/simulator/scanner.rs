//! Line scanner
//!
//! Splits source text into trimmed statement candidates. Comments and
//! structural boilerplate (braces, `#include`, `main` signatures, `return`)
//! never reach the dispatcher; what counts as either is described per
//! language by a [`LineFilter`].

/// Which lines a language drops before dispatch
#[derive(Debug, Clone, Copy)]
pub struct LineFilter {
    /// Trimmed lines starting with any of these are comments
    pub comment_markers: &'static [&'static str],
    /// Trimmed lines starting with any of these are boilerplate
    pub skip_prefixes: &'static [&'static str],
    /// Trimmed lines containing any of these are boilerplate
    pub skip_containing: &'static [&'static str],
}

impl LineFilter {
    /// Whether a trimmed, non-empty line should be dropped
    pub fn rejects(&self, trimmed: &str) -> bool {
        self.comment_markers.iter().any(|m| trimmed.starts_with(m))
            || self.skip_prefixes.iter().any(|p| trimmed.starts_with(p))
            || self.skip_containing.iter().any(|c| trimmed.contains(c))
    }
}

/// A statement candidate with its 1-based source line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Produce the ordered, trimmed, non-empty lines that survive `filter`
pub fn scan<'a>(source: &'a str, filter: &LineFilter) -> Vec<SourceLine<'a>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let text = line.trim();
            if text.is_empty() || filter.rejects(text) {
                None
            } else {
                Some(SourceLine {
                    number: idx + 1,
                    text,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const C_LIKE: LineFilter = LineFilter {
        comment_markers: &["//"],
        skip_prefixes: &["#", "{", "}", "return", "int main"],
        skip_containing: &["using namespace"],
    };

    #[test]
    fn test_scan_drops_comments_and_boilerplate() {
        let source = "#include <stdio.h>\n\nint main() {\n    // hi\n    int a = 1;\n    return 0;\n}\n";
        let lines = scan(source, &C_LIKE);
        assert_eq!(
            lines,
            vec![SourceLine {
                number: 5,
                text: "int a = 1;"
            }]
        );
    }

    #[test]
    fn test_scan_drops_contained_markers() {
        let lines = scan("using namespace std;\nx = 1;", &C_LIKE);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "x = 1;");
        assert_eq!(lines[0].number, 2);
    }
}
