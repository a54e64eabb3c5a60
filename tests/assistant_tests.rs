// Tests for the AI assistant flows with in-process backends

use codecollab::assistant::{
    Assistant, AssistantError, CommandBackend, GenerateRequest, SuggestionBackend,
    SuggestionRequest, SuggestionResponse, SUGGESTION_FAILURE,
};
use pretty_assertions::assert_eq;
use std::cell::{Cell, RefCell};

/// Replies with a fixed answer and records every prompt
struct ScriptedBackend {
    answer: Result<String, String>,
    prompts: RefCell<Vec<String>>,
    calls: Cell<usize>,
}

impl ScriptedBackend {
    fn answering(answer: &str) -> Self {
        ScriptedBackend {
            answer: Ok(answer.to_string()),
            prompts: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        }
    }

    fn failing(message: &str) -> Self {
        ScriptedBackend {
            answer: Err(message.to_string()),
            prompts: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        }
    }
}

impl SuggestionBackend for ScriptedBackend {
    fn complete(&self, prompt: &str) -> Result<String, AssistantError> {
        self.calls.set(self.calls.get() + 1);
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer.clone().map_err(AssistantError::Backend)
    }
}

fn request(code: &str) -> SuggestionRequest {
    SuggestionRequest {
        code: code.to_string(),
        language: "python".to_string(),
    }
}

const LONG_CODE: &str = "x = 10\ny = 5\nprint(x + y)\n";

#[test]
fn test_short_code_makes_no_call() {
    let backend = ScriptedBackend::answering("{}");
    let assistant = Assistant::new(&backend);

    // exactly 20 characters after trimming is still too short
    let code = format!("   {}   ", "a".repeat(20));
    assert_eq!(assistant.suggest(&request(&code)), None);
    assert_eq!(backend.calls.get(), 0);

    assert!(assistant.suggest(&request(&"a".repeat(21))).is_some());
    assert_eq!(backend.calls.get(), 1);
}

#[test]
fn test_suggestions_are_decoded() {
    let backend = ScriptedBackend::answering(
        r#"{"suggestions": ["Use a function"], "errors": [], "bestPractices": ["Name variables"]}"#,
    );
    let assistant = Assistant::new(&backend);

    let response = assistant.suggest(&request(LONG_CODE)).expect("code is long enough");
    assert_eq!(
        response,
        SuggestionResponse {
            suggestions: vec!["Use a function".to_string()],
            errors: vec![],
            best_practices: vec!["Name variables".to_string()],
        }
    );

    let prompts = backend.prompts.borrow();
    assert!(prompts[0].contains("Language: python"));
    assert!(prompts[0].contains("print(x + y)"));
}

#[test]
fn test_fenced_answer_with_missing_fields() {
    let backend = ScriptedBackend::answering("```json\n{\"errors\": [\"Missing colon\"]}\n```");
    let assistant = Assistant::new(&backend);

    let response = assistant.suggest(&request(LONG_CODE)).expect("code is long enough");
    assert_eq!(response.errors, vec!["Missing colon".to_string()]);
    assert!(response.suggestions.is_empty());
    assert!(response.best_practices.is_empty());
}

#[test]
fn test_failures_degrade_to_one_error() {
    let expected = SuggestionResponse {
        suggestions: vec![],
        errors: vec![SUGGESTION_FAILURE.to_string()],
        best_practices: vec![],
    };

    let failing = ScriptedBackend::failing("model unavailable");
    assert_eq!(
        Assistant::new(&failing).suggest(&request(LONG_CODE)),
        Some(expected.clone())
    );

    let garbled = ScriptedBackend::answering("Here are some thoughts about your code");
    assert_eq!(
        Assistant::new(&garbled).suggest(&request(LONG_CODE)),
        Some(expected)
    );
}

#[test]
fn test_min_chars_is_configurable() {
    let backend = ScriptedBackend::answering("{}");
    let assistant = Assistant::new(&backend).with_min_chars(3);
    assert_eq!(
        assistant.suggest(&request("abcd")),
        Some(SuggestionResponse::default())
    );
}

#[test]
fn test_generate() {
    let backend = ScriptedBackend::answering(r#"{"code": "print('hi')"}"#);
    let assistant = Assistant::new(&backend);
    let generated = assistant
        .generate(&GenerateRequest {
            description: "greet the user".to_string(),
            language: "python".to_string(),
        })
        .expect("Generation failed");
    assert_eq!(generated.code, "print('hi')");
    assert!(backend.prompts.borrow()[0].contains("Description: greet the user"));

    let garbled = ScriptedBackend::answering("not json");
    let err = Assistant::new(&garbled)
        .generate(&GenerateRequest {
            description: "anything".to_string(),
            language: "c".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, AssistantError::Parse(_)));
}

#[cfg(unix)]
#[test]
fn test_command_backend_pipes_prompt_through_command() {
    let backend = CommandBackend::new("cat");
    assert_eq!(backend.complete("hello").expect("cat failed"), "hello");

    let backend = CommandBackend::new("cat > /dev/null; printf '{\"code\":\"x = 1\"}'");
    let generated = Assistant::new(backend)
        .generate(&GenerateRequest {
            description: "one variable".to_string(),
            language: "python".to_string(),
        })
        .expect("Generation failed");
    assert_eq!(generated.code, "x = 1");

    let failing = CommandBackend::new("exit 3");
    assert!(matches!(
        failing.complete("ignored"),
        Err(AssistantError::Backend(_)) | Err(AssistantError::Io(_))
    ));
}

#[cfg(unix)]
#[test]
fn test_command_backend_streams_large_prompts() {
    // larger than any pipe buffer, echoed back while still being written
    let prompt = "x".repeat(300_000);
    let answer = CommandBackend::new("cat")
        .complete(&prompt)
        .expect("cat failed");
    assert_eq!(answer.len(), prompt.len());

    let code = format!("print({})\n", "1 + ".repeat(75_000) + "1");
    let response = Assistant::new(CommandBackend::new("cat"))
        .suggest(&request(&code))
        .expect("code is long enough");
    assert_eq!(response.errors, vec![SUGGESTION_FAILURE.to_string()]);
}

#[cfg(unix)]
#[test]
fn test_command_backend_that_ignores_stdin() {
    let backend = CommandBackend::new("printf '{\"code\":\"y = 2\"}'");
    let prompt = "z".repeat(300_000);
    assert_eq!(
        backend.complete(&prompt).expect("command failed"),
        "{\"code\":\"y = 2\"}"
    );
}
