// Output sink for simulated print statements

/// One printed string and the source line that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalLine {
    pub text: String,
    pub line: usize,
}

/// Mock terminal capturing everything the simulated program printed
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    pub lines: Vec<TerminalLine>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal { lines: Vec::new() }
    }

    /// Append the output of one print statement
    pub fn print(&mut self, text: String, line: usize) {
        self.lines.push(TerminalLine { text, line });
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Printed strings in source order
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|tl| tl.text.clone()).collect()
    }

    /// Output joined with newlines, doubled newlines collapsed once
    pub fn render(&self) -> String {
        self.get_output().join("\n").replace("\n\n", "\n")
    }
}
