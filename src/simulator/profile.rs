//! Per-language configuration tables
//!
//! There is one micro-interpreter. What differs between the simulated languages
//! is data: comment and boilerplate rules, literal syntax, conversion calls,
//! operator semantics and the ordered statement-pattern table. A
//! [`LanguageProfile`] bundles that data; [`LanguageProfile::get`] hands out the
//! shared, lazily compiled instance for a [`Language`].

use super::scanner::LineFilter;
use crate::language::Language;
use regex::Regex;
use std::sync::OnceLock;

/// How `/` and `%` behave on two numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionMode {
    /// Whole-number division, truncated toward zero; dividing by zero is a fault
    Truncating,
    /// Floating quotient; dividing by zero yields `Infinity` or `NaN`
    Float,
}

/// What `+` does when its operands are not all numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatRule {
    /// `+` is numeric only
    Never,
    /// Any text operand turns `+` into concatenation of the rendered operands
    Loose,
    /// Concatenate text with text; text with a number is a fault
    Strict,
}

/// Coercion applied by a conversion wrapper call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    ToNumber,
    ToInteger,
    ToText,
}

/// String literal forms beyond plain quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormatting {
    Plain,
    /// Backtick literals with `${expr}` holes
    TemplateLiterals,
    /// `f"..{name}.."` and `"..{}..".format(args)`
    PythonFormat,
}

/// A conversion call such as `float(x)` or `Integer.parseInt(s)`
#[derive(Debug, Clone, Copy)]
pub struct Wrapper {
    pub name: &'static str,
    pub coercion: Coercion,
}

const fn wrapper(name: &'static str, coercion: Coercion) -> Wrapper {
    Wrapper { name, coercion }
}

/// Output call flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintStyle {
    /// `printf("fmt", args...)`
    Printf,
    /// `puts(s)`: the argument followed by a newline
    Puts,
    /// `cout << a << b << endl`
    StreamInsertion,
    /// `print(a, b)`: arguments joined by a space
    PythonPrint,
    /// `console.log(a, b)`: arguments joined by a space
    ConsoleLog,
    /// `System.out.println(expr)`
    SingleExpression,
}

/// Statement shapes the dispatcher knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// `type a = 1, b;`, captures `body`
    Declaration,
    /// `x++` / `--x`, captures `name` and `op`
    Increment,
    /// `x += expr`, captures `name`, `op` and `expr`
    CompoundAssignment,
    /// `x = expr`, captures `name` and `expr`
    Assignment,
    /// An output call, captures `args` (or `chain` for stream insertion)
    Print(PrintStyle),
}

/// A recognizer/handler pair. The recognizer must match the whole trimmed line.
#[derive(Debug, Clone)]
pub struct StatementPattern {
    pub kind: StatementKind,
    pub recognizer: Regex,
}

/// Everything that makes one simulated language different from another
#[derive(Debug)]
pub struct LanguageProfile {
    pub language: Language,
    pub filter: LineFilter,
    pub quotes: &'static [char],
    pub formatting: StringFormatting,
    pub numeric_suffixes: &'static [char],
    pub wrappers: &'static [Wrapper],
    /// Binary operators in the order they are tried
    pub operators: &'static [char],
    pub division: DivisionMode,
    pub concat: ConcatRule,
    /// Rendering of a declared-but-unassigned variable
    pub undefined: &'static str,
    /// Replace `input(...)` calls with mocked values before scanning
    pub mock_input: bool,
    /// Tried top to bottom; first match wins
    pub patterns: Vec<StatementPattern>,
}

const C_SUFFIXES: &[char] = &['f', 'F', 'l', 'L', 'u', 'U'];
const JAVA_SUFFIXES: &[char] = &['f', 'F', 'l', 'L', 'd', 'D'];
const ARITHMETIC: &[char] = &['+', '-', '*', '/', '%'];

const CPP_WRAPPERS: &[Wrapper] = &[
    wrapper("std::to_string", Coercion::ToText),
    wrapper("std::stod", Coercion::ToNumber),
    wrapper("std::stof", Coercion::ToNumber),
    wrapper("std::stoi", Coercion::ToInteger),
];

const JAVA_WRAPPERS: &[Wrapper] = &[
    wrapper("Double.parseDouble", Coercion::ToNumber),
    wrapper("Float.parseFloat", Coercion::ToNumber),
    wrapper("Integer.parseInt", Coercion::ToInteger),
    wrapper("String.valueOf", Coercion::ToText),
];

const PYTHON_WRAPPERS: &[Wrapper] = &[
    wrapper("float", Coercion::ToNumber),
    wrapper("int", Coercion::ToInteger),
    wrapper("str", Coercion::ToText),
];

const JS_WRAPPERS: &[Wrapper] = &[
    wrapper("Number", Coercion::ToNumber),
    wrapper("parseFloat", Coercion::ToNumber),
    wrapper("parseInt", Coercion::ToInteger),
    wrapper("String", Coercion::ToText),
];

const INCREMENT_POSTFIX: &str = r"^(?P<name>[A-Za-z_]\w*)\s*(?P<op>\+\+|--)\s*;$";
const INCREMENT_PREFIX: &str = r"^(?P<op>\+\+|--)\s*(?P<name>[A-Za-z_]\w*)\s*;$";
const COMPOUND: &str = r"^(?P<name>[A-Za-z_]\w*)\s*(?P<op>[-+*/%])=\s*(?P<expr>.+?)\s*;$";
const ASSIGNMENT: &str = r"^(?P<name>[A-Za-z_]\w*)\s*=\s*(?P<expr>[^=].*?)\s*;$";

fn pattern(kind: StatementKind, re: &str) -> StatementPattern {
    StatementPattern {
        kind,
        recognizer: Regex::new(re).expect("statement pattern is a valid regex"),
    }
}

/// The four statement shapes shared by every semicolon-terminated language
fn c_family_core(declaration: &str) -> Vec<StatementPattern> {
    vec![
        pattern(StatementKind::Declaration, declaration),
        pattern(StatementKind::Increment, INCREMENT_POSTFIX),
        pattern(StatementKind::Increment, INCREMENT_PREFIX),
        pattern(StatementKind::CompoundAssignment, COMPOUND),
        pattern(StatementKind::Assignment, ASSIGNMENT),
    ]
}

fn c_profile() -> LanguageProfile {
    let mut patterns = c_family_core(
        r"^(?:(?:const|unsigned|signed|static)\s+)*(?:int|float|double|char|long|short|bool)\s+(?P<body>.+?)\s*;$",
    );
    patterns.push(pattern(
        StatementKind::Print(PrintStyle::Printf),
        r"^printf\s*\((?P<args>.*)\)\s*;$",
    ));
    patterns.push(pattern(
        StatementKind::Print(PrintStyle::Puts),
        r"^puts\s*\((?P<args>.*)\)\s*;$",
    ));

    LanguageProfile {
        language: Language::C,
        filter: LineFilter {
            comment_markers: &["//", "/*", "*"],
            skip_prefixes: &["#", "int main", "{", "}", "return"],
            skip_containing: &[],
        },
        quotes: &['"', '\''],
        formatting: StringFormatting::Plain,
        numeric_suffixes: C_SUFFIXES,
        wrappers: &[],
        operators: ARITHMETIC,
        division: DivisionMode::Truncating,
        concat: ConcatRule::Never,
        undefined: "null",
        mock_input: false,
        patterns,
    }
}

fn cpp_profile() -> LanguageProfile {
    let mut patterns = c_family_core(
        r"^(?:(?:const|unsigned|signed|static)\s+)*(?:int|float|double|char|long|short|bool|string|std::string|auto)\s+(?P<body>.+?)\s*;$",
    );
    patterns.push(pattern(
        StatementKind::Print(PrintStyle::StreamInsertion),
        r"^(?:std::)?cout\s*<<(?P<chain>.*?)\s*;$",
    ));
    patterns.push(pattern(
        StatementKind::Print(PrintStyle::Printf),
        r"^(?:std::)?printf\s*\((?P<args>.*)\)\s*;$",
    ));

    LanguageProfile {
        language: Language::Cpp,
        filter: LineFilter {
            comment_markers: &["//", "/*", "*"],
            skip_prefixes: &["#", "int main", "{", "}", "return"],
            skip_containing: &["using namespace"],
        },
        quotes: &['"', '\''],
        formatting: StringFormatting::Plain,
        numeric_suffixes: C_SUFFIXES,
        wrappers: CPP_WRAPPERS,
        operators: ARITHMETIC,
        division: DivisionMode::Truncating,
        concat: ConcatRule::Loose,
        undefined: "null",
        mock_input: false,
        patterns,
    }
}

fn java_profile() -> LanguageProfile {
    let mut patterns = c_family_core(
        r"^(?:final\s+)?(?:int|long|short|byte|double|float|boolean|char|String|var)\s+(?P<body>.+?)\s*;$",
    );
    patterns.push(pattern(
        StatementKind::Print(PrintStyle::SingleExpression),
        r"^System\.out\.println\s*\((?P<args>.*)\)\s*;$",
    ));
    patterns.push(pattern(
        StatementKind::Print(PrintStyle::SingleExpression),
        r"^System\.out\.print\s*\((?P<args>.*)\)\s*;$",
    ));
    patterns.push(pattern(
        StatementKind::Print(PrintStyle::Printf),
        r"^System\.out\.printf\s*\((?P<args>.*)\)\s*;$",
    ));

    LanguageProfile {
        language: Language::Java,
        filter: LineFilter {
            comment_markers: &["//", "/*", "*"],
            skip_prefixes: &[
                "public class",
                "class ",
                "public static void",
                "import ",
                "package ",
                "{",
                "}",
                "return",
            ],
            skip_containing: &[],
        },
        quotes: &['"', '\''],
        formatting: StringFormatting::Plain,
        numeric_suffixes: JAVA_SUFFIXES,
        wrappers: JAVA_WRAPPERS,
        operators: ARITHMETIC,
        division: DivisionMode::Float,
        concat: ConcatRule::Loose,
        undefined: "null",
        mock_input: false,
        patterns,
    }
}

fn python_profile() -> LanguageProfile {
    let patterns = vec![
        pattern(
            StatementKind::CompoundAssignment,
            r"^(?P<name>[A-Za-z_]\w*)\s*(?P<op>[-+*/%])=\s*(?P<expr>.+)$",
        ),
        pattern(
            StatementKind::Assignment,
            r"^(?P<name>[A-Za-z_]\w*)\s*=\s*(?P<expr>[^=].*)$",
        ),
        pattern(
            StatementKind::Print(PrintStyle::PythonPrint),
            r"^print\s*\((?P<args>.*)\)$",
        ),
    ];

    LanguageProfile {
        language: Language::Python,
        filter: LineFilter {
            comment_markers: &["#"],
            skip_prefixes: &["def ", "class ", "import ", "from ", "return"],
            skip_containing: &[],
        },
        quotes: &['"', '\''],
        formatting: StringFormatting::PythonFormat,
        numeric_suffixes: &[],
        wrappers: PYTHON_WRAPPERS,
        operators: ARITHMETIC,
        division: DivisionMode::Float,
        concat: ConcatRule::Strict,
        undefined: "None",
        mock_input: true,
        patterns,
    }
}

fn javascript_profile() -> LanguageProfile {
    let patterns = vec![
        pattern(
            StatementKind::Declaration,
            r"^(?:let|const|var)\s+(?P<body>.+?)\s*;?$",
        ),
        pattern(
            StatementKind::Increment,
            r"^(?P<name>[A-Za-z_$][\w$]*)\s*(?P<op>\+\+|--)\s*;?$",
        ),
        pattern(
            StatementKind::Increment,
            r"^(?P<op>\+\+|--)\s*(?P<name>[A-Za-z_$][\w$]*)\s*;?$",
        ),
        pattern(
            StatementKind::CompoundAssignment,
            r"^(?P<name>[A-Za-z_$][\w$]*)\s*(?P<op>[-+*/%])=\s*(?P<expr>.+?)\s*;?$",
        ),
        pattern(
            StatementKind::Assignment,
            r"^(?P<name>[A-Za-z_$][\w$]*)\s*=\s*(?P<expr>[^=].*?)\s*;?$",
        ),
        pattern(
            StatementKind::Print(PrintStyle::ConsoleLog),
            r"^console\.(?:log|info|warn|error|debug)\s*\((?P<args>.*)\)\s*;?$",
        ),
    ];

    LanguageProfile {
        language: Language::JavaScript,
        filter: LineFilter {
            comment_markers: &["//", "/*", "*"],
            skip_prefixes: &["function ", "{", "}", "return", "'use strict'", "\"use strict\""],
            skip_containing: &[],
        },
        quotes: &['"', '\'', '`'],
        formatting: StringFormatting::TemplateLiterals,
        numeric_suffixes: &[],
        wrappers: JS_WRAPPERS,
        operators: ARITHMETIC,
        division: DivisionMode::Float,
        concat: ConcatRule::Loose,
        undefined: "undefined",
        mock_input: false,
        patterns,
    }
}

static PROFILES: OnceLock<Vec<LanguageProfile>> = OnceLock::new();

impl LanguageProfile {
    /// Shared profile for `language`; patterns are compiled on first use.
    pub fn get(language: Language) -> &'static LanguageProfile {
        let profiles = PROFILES.get_or_init(|| {
            vec![
                javascript_profile(),
                python_profile(),
                cpp_profile(),
                java_profile(),
                c_profile(),
            ]
        });
        profiles
            .iter()
            .find(|p| p.language == language)
            .unwrap_or(&profiles[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_a_profile() {
        for lang in Language::ALL {
            assert_eq!(LanguageProfile::get(lang).language, lang);
        }
    }

    #[test]
    fn test_assignment_does_not_match_comparison() {
        let py = LanguageProfile::get(Language::Python);
        let assign = py
            .patterns
            .iter()
            .find(|p| p.kind == StatementKind::Assignment)
            .unwrap();
        assert!(assign.recognizer.is_match("x = 1"));
        assert!(!assign.recognizer.is_match("x == 1"));
    }

    #[test]
    fn test_wrapper_tables() {
        let names = |lang: Language| -> Vec<&'static str> {
            LanguageProfile::get(lang).wrappers.iter().map(|w| w.name).collect()
        };
        assert!(names(Language::C).is_empty());
        assert_eq!(names(Language::Cpp), ["std::to_string", "std::stod", "std::stof", "std::stoi"]);
        assert_eq!(names(Language::Python), ["float", "int", "str"]);
        assert!(names(Language::Java).contains(&"Integer.parseInt"));

        let js = LanguageProfile::get(Language::JavaScript);
        let parse_int = js.wrappers.iter().find(|w| w.name == "parseInt").unwrap();
        assert_eq!(parse_int.coercion, Coercion::ToInteger);
    }
}
