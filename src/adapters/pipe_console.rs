//! Scripting console implementation over the editor's named-pipe pair.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::domain::{AppError, TempoConfig};
use crate::ports::ScriptingConsole;

/// Console speaking the mod-script-pipe line protocol.
///
/// Both endpoints are opened once at connect time and held for the whole
/// session. The pipes are owned by the editor process; if either cannot be
/// opened the run cannot proceed at all, so `connect` is the single place
/// transport availability is checked.
#[derive(Debug)]
pub struct PipeConsole {
    to_editor: File,
    from_editor: BufReader<File>,
}

impl PipeConsole {
    /// Open both pipe endpoints configured for the tempo batch.
    pub fn connect(config: &TempoConfig) -> Result<Self, AppError> {
        let to_editor = open_endpoint(&config.to_pipe, true)?;
        let from_editor = open_endpoint(&config.from_pipe, false)?;
        Ok(Self { to_editor, from_editor: BufReader::new(from_editor) })
    }
}

fn open_endpoint(path: &Path, write: bool) -> Result<File, AppError> {
    let result = if write {
        OpenOptions::new().write(true).open(path)
    } else {
        File::open(path)
    };
    result.map_err(|source| AppError::PipeUnavailable {
        path: path.display().to_string(),
        source,
    })
}

impl ScriptingConsole for PipeConsole {
    fn send_command(&mut self, command: &str) -> Result<String, AppError> {
        self.to_editor.write_all(command.as_bytes())?;
        self.to_editor.write_all(b"\n")?;
        self.to_editor.flush()?;
        println!("Sent: {}", command);

        let mut line = String::new();
        self.from_editor.read_line(&mut line)?;
        let response = line.trim_end().to_string();
        println!("Received: {}", response);
        Ok(response)
    }
}
