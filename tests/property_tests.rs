//! Property-based tests for the run orchestrator.
//!
//! Arbitrary text, however deeply nested, never makes `run` panic or abort and
//! always renders the same output.
//!
//! Simple integer programs print the exact result, exponent literals included.

use codecollab::config::RunConfig;
use codecollab::runner::run;
use codecollab::simulator::value::format_number;
use proptest::prelude::*;

const TAGS: &[&str] = &["javascript", "python", "cpp", "java", "c", "cobol"];

/// Prefixes that make the evaluator recurse once per repetition
const OPENERS: &[&str] = &["(", "-", "-(", "float(", "( - "];

/// Lines built from fragments the simulators react to
fn statement_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("int a = 1;".to_string()),
        Just("x = input()".to_string()),
        Just("let s = \"a\" + 1;".to_string()),
        Just("printf(\"%d %s %5.2f%%\\n\", a, s);".to_string()),
        Just("print(f\"{x} {{y}} {x / 0}\")".to_string()),
        Just("console.log(`${s}`, (1 + 2) * 3);".to_string()),
        Just("cout << a / 0 << endl;".to_string()),
        Just("System.out.println(a + \"!\");".to_string()),
        Just("print('{}{1}'.format(x))".to_string()),
        "[ -~]{0,40}",
    ]
}

proptest! {
    #[test]
    fn prop_run_never_panics_on_arbitrary_text(
        source in "\\PC{0,200}",
        tag in prop::sample::select(TAGS),
    ) {
        let config = RunConfig::default();
        let first = run(&source, tag, &config);
        let second = run(&source, tag, &config);
        prop_assert!(!first.is_empty());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_run_is_deterministic_for_statement_soup(
        lines in prop::collection::vec(statement_fragment(), 0..12),
        tag in prop::sample::select(TAGS),
    ) {
        let source = lines.join("\n");
        let config = RunConfig::default();
        prop_assert_eq!(run(&source, tag, &config), run(&source, tag, &config));
    }

    #[test]
    fn prop_c_integer_sum_prints_exact_result(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let source = format!(
            "int main() {{\n    int a = {}, b = {}, c;\n    c = a + b;\n    printf(\"%d\\n\", c);\n    return 0;\n}}\n",
            a, b
        );
        let expected = format!("> gcc main.c -o main && ./main\n{}\n", a + b);
        prop_assert_eq!(run(&source, "c", &RunConfig::default()), expected);
    }

    #[test]
    fn prop_python_product_prints_exact_result(x in -10_000i64..10_000, y in -10_000i64..10_000) {
        let source = format!("x = {}\ny = {}\nprint(x * y)", x, y);
        let expected = format!("> python script.py\n{}", x * y);
        prop_assert_eq!(run(&source, "python", &RunConfig::default()), expected);
    }

    #[test]
    fn prop_exponent_literals_evaluate(x in -1_000i64..1_000, mantissa in 1u32..100, exp in 1u32..8) {
        let literal = format!("{}e-{}", mantissa, exp);
        let value: f64 = literal.parse().expect("valid float literal");
        let source = format!("x = {}\nprint(x - {})", x, literal);
        let expected = format!("> python script.py\n{}", format_number(x as f64 - value));
        prop_assert_eq!(run(&source, "python", &RunConfig::default()), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_nesting_depth_never_aborts(
        depth in 0usize..1_500,
        open in prop::sample::select(OPENERS),
        tag in prop::sample::select(TAGS),
    ) {
        let close = ")".repeat(open.matches('(').count() * depth);
        let prefix = open.repeat(depth);
        let source = format!("print({prefix}1{close})\nconsole.log({prefix}2{close});");
        prop_assert!(!run(&source, tag, &RunConfig::default()).is_empty());
    }
}
