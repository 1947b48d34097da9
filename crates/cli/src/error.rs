//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: canvas setup error (bad --width/--height)
//! - 11: I/O error (frame dump file, stdin)

use rasterpad_core::CanvasError;
use std::fmt;

/// Errors that end the process, each mapped to a distinct exit code.
///
/// Per-command failures never become a `CliError`; they are reported to
/// stderr and the prompt continues.
pub enum CliError {
    /// The canvas could not be created from the given dimensions.
    Canvas(CanvasError),
    /// The frame dump could not be opened, or stdin failed.
    Io(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Canvas(_) => 10,
            CliError::Io(_) => 11,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Canvas(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<CanvasError> for CliError {
    fn from(e: CanvasError) -> Self {
        CliError::Canvas(e)
    }
}
