// Integration tests for the run orchestrator

use codecollab::config::RunConfig;
use codecollab::language::Language;
use codecollab::runner::{run, NO_OUTPUT, UNSUPPORTED_LANGUAGE};
use pretty_assertions::assert_eq;

fn run_default(source: &str, tag: &str) -> String {
    run(source, tag, &RunConfig::default())
}

#[test]
fn test_c_declarations_sum_and_printf() {
    let source = r#"
        #include <stdio.h>

        int main() {
            int a = 9, b = 4, c;
            c = a + b;
            printf("a+b = %d", c);
            return 0;
        }
    "#;

    assert_eq!(
        run_default(source, "c"),
        "> gcc main.c -o main && ./main\na+b = 13"
    );
}

#[test]
fn test_python_sum() {
    assert_eq!(
        run_default("x = 10\ny = 5\nprint(x + y)", "python"),
        "> python script.py\n15"
    );
}

#[test]
fn test_python_fstring() {
    assert_eq!(
        run_default("name = \"World\"\nprint(f\"Hello, {name}!\")", "python"),
        "> python script.py\nHello, World!"
    );
}

#[test]
fn test_runs_are_idempotent() {
    let config = RunConfig::default();
    for language in Language::ALL {
        let source = language.starter_program();
        let first = run(source, language.tag(), &config);
        let second = run(source, language.tag(), &config);
        assert_eq!(first, second, "{} output changed between runs", language);
    }
}

#[test]
fn test_starter_programs() {
    let expected = [
        (
            Language::JavaScript,
            "> node script.js\nHello, Collaborative Coder!\nThe answer is 42",
        ),
        (
            Language::Python,
            "> python script.py\nHello, Collaborative Coder!\nSum: 15",
        ),
        (
            Language::Cpp,
            "> g++ main.cpp -o main && ./main\nHello, Collaborative Coder!\na / b = 2\n",
        ),
        (
            Language::Java,
            "> javac Main.java && java Main\nHello, Collaborative Coder!\n3.4",
        ),
        (
            Language::C,
            "> gcc main.c -o main && ./main\nHello, Collaborative Coder!\na+b = 13 \n",
        ),
    ];

    for (language, output) in expected {
        assert_eq!(
            run_default(language.starter_program(), language.tag()),
            output
        );
    }
}

#[test]
fn test_unknown_expressions_print_verbatim() {
    assert_eq!(
        run_default("console.log(\"total:\", foo.bar(1) ?? 2);", "javascript"),
        "> node script.js\ntotal: foo.bar(1) ?? 2"
    );
    assert_eq!(
        run_default("printf(\"%d\\n\", mystery(3));", "c"),
        "> gcc main.c -o main && ./main\nmystery(3)\n"
    );
    assert_eq!(
        run_default("print(x y z)", "python"),
        "> python script.py\nx y z"
    );
}

#[test]
fn test_uninitialized_variables_print_undefined_sentinel() {
    assert_eq!(
        run_default("int a;\nprintf(\"%d\", a);", "c"),
        "> gcc main.c -o main && ./main\nnull"
    );
    assert_eq!(
        run_default("let v;\nconsole.log(v);", "javascript"),
        "> node script.js\nundefined"
    );
    assert_eq!(
        run_default("String s;\nSystem.out.println(s);", "java"),
        "> javac Main.java && java Main\nnull"
    );
    assert_eq!(
        run_default("int n;\ncout << n << endl;", "cpp"),
        "> g++ main.cpp -o main && ./main\nnull\n"
    );
}

#[test]
fn test_unsupported_language() {
    assert_eq!(run_default("print(1)", "rust"), UNSUPPORTED_LANGUAGE);
    assert_eq!(run_default("print(1)", ""), UNSUPPORTED_LANGUAGE);
    assert_eq!(
        run_default("print(1)", "rust"),
        "Language not supported for execution."
    );
}

#[test]
fn test_tags_are_case_insensitive() {
    assert_eq!(run_default("print(1)", "PY"), "> python script.py\n1");
    assert_eq!(run_default("console.log(1)", "JS"), "> node script.js\n1");
}

#[test]
fn test_no_output() {
    assert_eq!(
        run_default("int a = 1;", "c"),
        format!("> gcc main.c -o main && ./main\n{}", NO_OUTPUT)
    );
    assert_eq!(
        run_default("", "python"),
        "> python script.py\nNo output was printed to the console."
    );
}

#[test]
fn test_comments_and_unrecognized_lines_are_skipped() {
    let source = "# print(1)\nif x > 1:\n    print(2)\nwhile True: pass";
    assert_eq!(run_default(source, "python"), "> python script.py\n2");
}

#[test]
fn test_doubled_newlines_are_collapsed_once() {
    assert_eq!(
        run_default("printf(\"a\\n\");\nprintf(\"b\\n\");", "c"),
        "> gcc main.c -o main && ./main\na\nb\n"
    );
    // one pass, left to right: three newlines become two
    assert_eq!(
        run_default("printf(\"x\\n\\n\\n\");", "c"),
        "> gcc main.c -o main && ./main\nx\n\n"
    );
}

#[test]
fn test_faults_end_the_run() {
    assert_eq!(
        run_default(
            "printf(\"start\");\nint a = 1 / 0;\nprintf(\"never\");",
            "c"
        ),
        "> gcc main.c -o main && ./main\nstart\nError: division by zero at line 2"
    );
    assert_eq!(
        run_default("print(\"a\" + 1)", "python"),
        "> python script.py\nError: can only concatenate str (not \"int\") to str at line 1"
    );
    assert_eq!(
        run_default("x = float(\"abc\")", "python"),
        "> python script.py\nError: could not convert 'abc' to a number at line 1"
    );
}

#[test]
fn test_python_input_is_mocked() {
    let source = "a = input()\nb = input(\"b? \")\nc = input()\nd = input()\ne = input()\nprint(a, b, c, d, e)";
    assert_eq!(
        run_default(source, "python"),
        "> python script.py\n10 10.0 5 2 10"
    );

    let config = RunConfig {
        mocked_inputs: vec!["7".to_string()],
    };
    assert_eq!(
        run("n = int(input())\nprint(n * 3)", "python", &config),
        "> python script.py\n21"
    );
}

#[test]
fn test_input_is_not_mocked_outside_python() {
    assert_eq!(
        run_default("let a = input();\nconsole.log(a);", "javascript"),
        "> node script.js\ninput()"
    );
}

#[test]
fn test_deep_nesting_returns_a_string() {
    let shallow = format!("print({}1{})", "(".repeat(100), ")".repeat(100));
    assert_eq!(run_default(&shallow, "python"), "> python script.py\n1");

    let deep = format!("print({}1{})", "(".repeat(10_000), ")".repeat(10_000));
    let output = run_default(&deep, "python");
    assert!(output.starts_with("> python script.py\n((("));

    let negations = format!("console.log({}1);", "- ".repeat(20_000));
    let output = run_default(&negations, "javascript");
    assert!(output.starts_with("> node script.js\n- - -"));

    let stream = format!("cout << {}7{} << endl;", "-(".repeat(5_000), ")".repeat(5_000));
    assert!(run_default(&stream, "cpp").starts_with("> g++ main.cpp -o main && ./main\n"));
}
