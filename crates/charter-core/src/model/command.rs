//! Subprocess model adapter.
//!
//! Spawns a configured command (e.g. `claude -p`), writes the prompt to its
//! stdin, and collects stdout as the generated text. This is the same shape
//! of integration an agent CLI expects: prompt in, text out, exit status as
//! the failure signal.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::{GenerateRequest, ModelClient, ModelError};

/// Placeholder in configured arguments replaced with the request's
/// `max_tokens` value (e.g. `--max-tokens {max_tokens}`).
const MAX_TOKENS_PLACEHOLDER: &str = "{max_tokens}";

/// A [`ModelClient`] backed by a local command.
#[derive(Debug, Clone)]
pub struct CommandModelAdapter {
    program: String,
    args: Vec<String>,
}

impl CommandModelAdapter {
    /// Create an adapter from a program and its arguments.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line (e.g. `"claude -p"`).
    ///
    /// Returns `None` for an empty or all-whitespace string.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_owned);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    fn resolved_args(&self, request: &GenerateRequest) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.replace(MAX_TOKENS_PLACEHOLDER, &request.max_tokens.to_string()))
            .collect()
    }
}

#[async_trait]
impl ModelClient for CommandModelAdapter {
    fn name(&self) -> &str {
        &self.program
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, ModelError> {
        let args = self.resolved_args(request);
        debug!(program = %self.program, ?args, "spawning model command");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ModelError::Spawn {
                command: self.program.clone(),
                source,
            })?;

        // Hand the prompt over on stdin and close it so the process starts.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(request.prompt.as_bytes()).await?;
            drop(stdin);
        }

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(ModelError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();

        // The subprocess cannot honor stop sequences itself; truncate at the
        // earliest occurrence instead.
        if let Some(cut) = request
            .stop_sequences
            .iter()
            .filter_map(|stop| text.find(stop.as_str()))
            .min()
        {
            text.truncate(cut);
        }

        if text.trim().is_empty() {
            return Err(ModelError::Empty);
        }

        Ok(text)
    }
}
