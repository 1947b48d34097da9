//! ANSI text rendering of the canvas and the append-only frame dump.
//!
//! Each frame is a separator line followed by one line per canvas row, one
//! space character per pixel with a truecolor background escape. The dump
//! file accumulates a frame per accepted prompt, so a session leaves a
//! scrollable visual trace behind.

use std::fmt::Write as _;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use rasterpad_core::PixelGrid;

use crate::error::SessionError;

/// Line separating consecutive frames in the dump.
pub const FRAME_SEPARATOR: &str = "----------";

/// Renders the canvas as truecolor ANSI text, one line per row.
///
/// Every pixel becomes `ESC[48;2;R;G;Bm` + space + `ESC[0m`. Alpha is not
/// rendered; fully transparent pixels come out as black cells.
pub fn render_ansi(canvas: &PixelGrid) -> String {
    let width = canvas.width();
    let mut out = String::with_capacity(canvas.data().len() * 20);
    for (i, p) in canvas.data().iter().enumerate() {
        let _ = write!(out, "\x1b[48;2;{};{};{}m \x1b[0m", p.r, p.g, p.b);
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

/// Append-only frame dump file.
pub struct FrameLog {
    file: File,
    path: PathBuf,
}

impl FrameLog {
    /// Opens (creating if necessary) the dump file in append mode.
    pub fn append_to(path: &Path) -> Result<FrameLog, SessionError> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| SessionError::io(path, e))?;
        Ok(FrameLog {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Appends one frame: the separator line plus the rendered canvas.
    pub fn append(&mut self, canvas: &PixelGrid) -> Result<(), SessionError> {
        let mut frame = String::with_capacity(FRAME_SEPARATOR.len() + 1);
        frame.push_str(FRAME_SEPARATOR);
        frame.push('\n');
        frame.push_str(&render_ansi(canvas));
        self.file
            .write_all(frame.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|e| SessionError::io(&self.path, e))
    }
}
