//! Source code pane rendering with syntax highlighting
//!
//! The pane shows the program in the editor with line numbers and a light,
//! per-language highlighting pass: keywords, type names, string literals,
//! numbers, function calls and line comments.
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without requiring a full lexer.

use crate::language::Language;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Keywords and type names highlighted for one language
struct Vocabulary {
    line_comment: &'static str,
    quotes: &'static [char],
    types: &'static [&'static str],
    keywords: &'static [&'static str],
    constants: &'static [&'static str],
}

const C_TYPES: &[&str] = &[
    "int", "char", "void", "bool", "float", "double", "long", "short", "unsigned", "signed",
];
const C_KEYWORDS: &[&str] = &[
    "struct", "return", "if", "else", "while", "for", "do", "switch", "case", "default", "break",
    "continue", "sizeof", "const", "static", "include",
];

fn vocabulary(language: Language) -> Vocabulary {
    match language {
        Language::C => Vocabulary {
            line_comment: "//",
            quotes: &['"', '\''],
            types: C_TYPES,
            keywords: C_KEYWORDS,
            constants: &["NULL", "true", "false"],
        },
        Language::Cpp => Vocabulary {
            line_comment: "//",
            quotes: &['"', '\''],
            types: &[
                "int", "char", "void", "bool", "float", "double", "long", "short", "unsigned",
                "signed", "string", "auto",
            ],
            keywords: &[
                "return", "if", "else", "while", "for", "using", "namespace", "std", "cout",
                "endl", "include", "const", "class", "struct",
            ],
            constants: &["nullptr", "true", "false"],
        },
        Language::Java => Vocabulary {
            line_comment: "//",
            quotes: &['"', '\''],
            types: &[
                "int", "long", "short", "byte", "double", "float", "boolean", "char", "String",
                "void", "var",
            ],
            keywords: &[
                "public", "private", "static", "final", "class", "return", "if", "else", "while",
                "for", "new", "import", "package",
            ],
            constants: &["null", "true", "false"],
        },
        Language::Python => Vocabulary {
            line_comment: "#",
            quotes: &['"', '\''],
            types: &["int", "float", "str", "bool", "list", "dict"],
            keywords: &[
                "def", "return", "if", "elif", "else", "while", "for", "in", "import", "from",
                "class", "and", "or", "not", "print",
            ],
            constants: &["None", "True", "False"],
        },
        Language::JavaScript => Vocabulary {
            line_comment: "//",
            quotes: &['"', '\'', '`'],
            types: &["Number", "String", "Boolean", "Array", "Object"],
            keywords: &[
                "let", "const", "var", "function", "return", "if", "else", "while", "for",
                "new", "class", "console",
            ],
            constants: &["null", "undefined", "true", "false", "NaN"],
        },
    }
}

/// Simple syntax highlighting for one source line
fn highlight_source_code<'a>(line: &'a str, vocab: &Vocabulary) -> Line<'a> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];

        if line[offset..].starts_with(vocab.line_comment) {
            flush_word(&mut spans, &mut current_word, vocab, false);
            spans.push(Span::styled(
                &line[offset..],
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        if vocab.quotes.contains(&c) {
            flush_word(&mut spans, &mut current_word, vocab, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != c {
                end += if chars[end].1 == '\\' { 2 } else { 1 };
            }
            end = (end + 1).min(chars.len());
            let end_offset = chars.get(end).map_or(line.len(), |(o, _)| *o);
            spans.push(Span::styled(
                &line[offset..end_offset],
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' {
            flush_word(&mut spans, &mut current_word, vocab, c == '(');
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, vocab, false);
    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'_>>, word: &mut String, vocab: &Vocabulary, is_call: bool) {
    if word.is_empty() {
        return;
    }
    let style = word_style(word, vocab, is_call);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn word_style(word: &str, vocab: &Vocabulary, is_call: bool) -> Style {
    if vocab.types.contains(&word) {
        Style::default().fg(DEFAULT_THEME.type_name)
    } else if vocab.keywords.contains(&word) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if vocab.constants.contains(&word) || word.starts_with(|c: char| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else if is_call {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    language: Language,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Source Code ({}) ", language.display_name()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let vocab = vocabulary(language);
    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:4} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_source_code(line, &vocab).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: Line<'_>) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_python_comment_runs_to_end_of_line() {
        let vocab = vocabulary(Language::Python);
        let spans = texts(highlight_source_code("x = 1  # note", &vocab));
        assert_eq!(spans.last().map(String::as_str), Some("# note"));
    }

    #[test]
    fn test_string_literal_is_one_span() {
        let vocab = vocabulary(Language::JavaScript);
        let spans = texts(highlight_source_code("console.log(`a ${b}`);", &vocab));
        assert!(spans.contains(&"`a ${b}`".to_string()));
    }
}
