//! Error types for the command pipeline.

use rasterpad_core::CanvasError;
use thiserror::Error;

/// Errors produced while parsing or executing commands.
///
/// None of these are fatal to a session: the REPL reports them and keeps
/// accepting input.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A canvas-level failure (bad dimensions, blend mismatch, bad color).
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// The first token of the line is not a known command name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A known command with missing or unparsable arguments.
    #[error("bad arguments for {command}: {reason}")]
    BadArguments { command: String, reason: String },

    /// `undo` with nothing left to undo.
    #[error("nothing to undo")]
    EmptyHistory,

    /// A file could not be opened, read, or written.
    #[error("cannot open {path}: {message}")]
    Io { path: String, message: String },
}

impl SessionError {
    /// Builds an I/O variant from a path and the underlying error.
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> SessionError {
        SessionError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
