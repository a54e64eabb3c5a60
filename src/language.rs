//! Language tags understood by the playground
//!
//! Every [`Language`] has a simulator profile, a fixed shell banner and a
//! starter program shown when the language is selected.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The closed set of languages with a simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Python,
    Cpp,
    Java,
    C,
}

impl Language {
    /// All languages in selector order
    pub const ALL: [Language; 5] = [
        Language::JavaScript,
        Language::Python,
        Language::Cpp,
        Language::Java,
        Language::C,
    ];

    /// Canonical tag (`javascript`, `python`, `cpp`, `java`, `c`)
    pub fn tag(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::C => "c",
        }
    }

    /// Human-readable name for the language selector
    pub fn display_name(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::C => "C",
        }
    }

    /// Shell invocation printed before the simulated output
    pub fn banner(self) -> &'static str {
        match self {
            Language::JavaScript => "> node script.js",
            Language::Python => "> python script.py",
            Language::Cpp => "> g++ main.cpp -o main && ./main",
            Language::Java => "> javac Main.java && java Main",
            Language::C => "> gcc main.c -o main && ./main",
        }
    }

    /// Resolve a user-supplied tag; aliases are accepted case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" | "node" => Some(Language::JavaScript),
            "python" | "py" => Some(Language::Python),
            "cpp" | "c++" | "cxx" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            "c" => Some(Language::C),
            _ => None,
        }
    }

    /// Guess the language from a file extension
    pub fn from_path(path: &Path) -> Option<Language> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            "py" => Some(Language::Python),
            "cpp" | "cc" | "cxx" | "hpp" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            "c" | "h" => Some(Language::C),
            _ => None,
        }
    }

    /// The next language in selector order, wrapping around
    pub fn next(self) -> Language {
        let idx = Language::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Language::ALL[(idx + 1) % Language::ALL.len()]
    }

    /// Program loaded into the editor when this language is selected
    pub fn starter_program(self) -> &'static str {
        match self {
            Language::JavaScript => {
                r#"// Welcome to CodeCollab!
// Select a language and start coding.

let name = "Collaborative Coder";
let answer = 6 * 7;

console.log("Hello, " + name + "!");
console.log(`The answer is ${answer}`);
"#
            }
            Language::Python => {
                r#"# Welcome to CodeCollab!
# Select a language and start coding.

name = "Collaborative Coder"
x = 10
y = 5

print(f"Hello, {name}!")
print("Sum:", x + y)
"#
            }
            Language::Cpp => {
                r#"// Welcome to CodeCollab!
// Select a language and start coding.

#include <iostream>
#include <string>
using namespace std;

int main() {
    string name = "Collaborative Coder";
    int a = 9, b = 4;
    std::cout << "Hello, " << name << "!" << std::endl;
    cout << "a / b = " << a / b << endl;
    return 0;
}
"#
            }
            Language::Java => {
                r#"// Welcome to CodeCollab!
// Select a language and start coding.

public class Main {
    public static void main(String[] args) {
        String name = "Collaborative Coder";
        double ratio = 3.4;
        System.out.println("Hello, " + name + "!");
        System.out.println(ratio);
    }
}
"#
            }
            Language::C => {
                r#"// Welcome to CodeCollab!
// Select a language and start coding.

#include <stdio.h>

int main() {
    int a = 9, b = 4, c;
    c = a + b;
    printf("Hello, Collaborative Coder!\n");
    printf("a+b = %d \n", c);
    return 0;
}
"#
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a tag names no simulated language
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language tag '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
