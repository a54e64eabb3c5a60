// Prompt templates for the assistant flows

use super::{GenerateRequest, SuggestionRequest};

/// Prompt asking for suggestions, syntax errors and best practices as JSON
pub fn suggestion_prompt(request: &SuggestionRequest) -> String {
    format!(
        "You are an AI Code Assistant that provides real-time code suggestions, identifies \
syntax errors, and suggests best practices to improve code quality and readability.

Analyze the following code snippet and provide suggestions, identify errors, and suggest best practices.

Language: {language}
Code: {code}

Respond with a single JSON object and nothing else:
{{\"suggestions\": [\"...\"], \"errors\": [\"...\"], \"bestPractices\": [\"...\"]}}",
        language = request.language,
        code = request.code,
    )
}

/// Prompt asking for a program that fulfills a description, as JSON
pub fn generation_prompt(request: &GenerateRequest) -> String {
    format!(
        "You are an expert software engineer. Please generate a code snippet that fulfills \
the following description in the specified language.

Description: {description}
Language: {language}

Respond with a single JSON object and nothing else:
{{\"code\": \"...\"}}",
        description = request.description,
        language = request.language,
    )
}
