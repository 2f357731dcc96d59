use std::io;

use thiserror::Error;

/// Library-wide error type for tablakit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// HTTP transfer failed or the server returned a non-success status.
    #[error("{message}")]
    Http { message: String, status: Option<u16> },

    /// Loop filename does not follow the `<label>_<bpm>_<pitch>` convention.
    #[error("Invalid loop name '{0}': expected <label>_<bpm>_<pitch>.<ext> with a numeric bpm")]
    InvalidLoopName(String),

    /// Directory to scan does not exist.
    #[error("Input directory not found: {0}")]
    InputDirMissing(String),

    /// A scripting pipe endpoint could not be opened.
    #[error(
        "Scripting pipe '{path}' is unavailable: {source}. Start Audacity and enable mod-script-pipe (Preferences > Modules), then retry"
    )]
    PipeUnavailable { path: String, source: io::Error },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
