//! Scripting console port definition.

use crate::domain::AppError;

/// Literal substring a response must contain for a command to count as
/// successful.
pub const SUCCESS_MARKER: &str = "BatchCommand finished: OK";

/// Whether a console response signals success.
pub fn response_ok(response: &str) -> bool {
    response.contains(SUCCESS_MARKER)
}

/// Port for the external editor's command/response channel.
///
/// The contract is strictly synchronous: one command is written, then its
/// response is read, before any further command is issued. Implementations
/// never pipeline.
pub trait ScriptingConsole {
    /// Send one newline-terminated command and read its one-line response.
    fn send_command(&mut self, command: &str) -> Result<String, AppError>;
}

/// Scripted console for testing without a running editor.
///
/// Responses are served in order; once the script is exhausted every command
/// succeeds with the plain success marker. All sent commands are recorded.
#[derive(Debug, Default)]
pub struct MockConsole {
    responses: std::collections::VecDeque<String>,
    pub sent: Vec<String>,
}

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Console that answers the given responses in order.
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            sent: Vec::new(),
        }
    }
}

impl ScriptingConsole for MockConsole {
    fn send_command(&mut self, command: &str) -> Result<String, AppError> {
        self.sent.push(command.to_string());
        Ok(self.responses.pop_front().unwrap_or_else(|| SUCCESS_MARKER.to_string()))
    }
}
