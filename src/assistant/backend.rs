// Model backends for the assistant

use super::AssistantError;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

/// Something that turns a prompt into the model's raw answer
pub trait SuggestionBackend {
    fn complete(&self, prompt: &str) -> Result<String, AssistantError>;
}

impl<T: SuggestionBackend + ?Sized> SuggestionBackend for &T {
    fn complete(&self, prompt: &str) -> Result<String, AssistantError> {
        (**self).complete(prompt)
    }
}

impl<T: SuggestionBackend + ?Sized> SuggestionBackend for Box<T> {
    fn complete(&self, prompt: &str) -> Result<String, AssistantError> {
        (**self).complete(prompt)
    }
}

/// Runs a shell command per request: the prompt goes to its stdin and its
/// stdout is taken as the answer.
#[derive(Debug, Clone)]
pub struct CommandBackend {
    command: String,
}

impl CommandBackend {
    pub fn new(command: impl Into<String>) -> Self {
        CommandBackend {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn shell(&self) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", &self.command]);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", &self.command]);
            cmd
        }
    }
}

impl SuggestionBackend for CommandBackend {
    fn complete(&self, prompt: &str) -> Result<String, AssistantError> {
        debug!(command = %self.command, "running assistant command");
        let mut child = self
            .shell()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| AssistantError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        // fed from its own thread: a child that answers while it reads would
        // otherwise fill its stdout pipe and block on us forever
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(prompt.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            (writer.join(), output)
        });
        let output = output?;
        match written {
            Ok(Ok(())) => {}
            // the command may exit without reading everything
            Ok(Err(err)) if err.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(err)) => return Err(err.into()),
            Err(_) => {
                return Err(AssistantError::Backend(
                    "stdin writer thread panicked".to_string(),
                ))
            }
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AssistantError::Backend(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
