//! The drawing session: state ownership and the apply-then-commit pipeline.
//!
//! A [`Session`] owns the four pieces of mutable state (canvas, overlay,
//! draw color, history) and is the single writer for all of them. Each
//! accepted command is applied (shapes and fills through the overlay, effects
//! and clears directly on the canvas) and then committed, which blends the
//! overlay into the canvas and clears it. Between commands the overlay is
//! always all-zero.
//!
//! Undo is replay-based: instead of storing inverse operations it drops the
//! last history entry, resets the canvas, overlay, and draw color, and runs
//! every remaining entry back through the same pipeline. O(history) per undo,
//! zero per-operation bookkeeping.

use std::fs;
use std::path::{Path, PathBuf};

use rasterpad_core::{compose, effects, fill, raster, CanvasError, Pixel, PixelGrid};

use crate::bmp;
use crate::command::Command;
use crate::error::SessionError;
use crate::history::{History, DEFAULT_HISTORY_FILE};

/// What `execute` did with a command: whether it entered the replayable log,
/// was handled outside it, or ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Applied and appended to the history (replayed by undo).
    Recorded,
    /// Applied or handled, but not part of the replayable log
    /// (save, export, undo, blank input).
    Handled,
    /// The session should end.
    Quit,
}

/// A complete drawing session.
pub struct Session {
    canvas: PixelGrid,
    overlay: PixelGrid,
    draw_color: Pixel,
    history: History,
}

impl Session {
    /// Creates a session with an all-transparent canvas of the given size and
    /// the default opaque-white draw color.
    pub fn new(width: usize, height: usize) -> Result<Session, CanvasError> {
        Ok(Session {
            canvas: PixelGrid::new(width, height)?,
            overlay: PixelGrid::new(width, height)?,
            draw_color: Pixel::WHITE,
            history: History::new(),
        })
    }

    /// The committed visual state.
    pub fn canvas(&self) -> &PixelGrid {
        &self.canvas
    }

    /// The currently selected draw color.
    pub fn draw_color(&self) -> Pixel {
        self.draw_color
    }

    /// The log of accepted commands.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Parses and executes one command line.
    ///
    /// On success the command has fully executed: applied, committed, and,
    /// for recorded commands, logged. On error nothing was applied or
    /// logged and the session remains usable. Blank lines are a no-op.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, SessionError> {
        let text = line.trim_end();
        if text.trim().is_empty() {
            return Ok(Outcome::Handled);
        }
        let command = Command::parse(text)?;
        let outcome = self.apply(&command)?;
        if outcome == Outcome::Recorded {
            self.history.push(text);
        }
        Ok(outcome)
    }

    /// Applies a parsed command and commits when it mutates visible state.
    fn apply(&mut self, command: &Command) -> Result<Outcome, SessionError> {
        match *command {
            Command::Point { x, y } => {
                raster::point(&mut self.overlay, self.draw_color, x, y);
            }
            Command::Line { x0, y0, x1, y1 } => {
                raster::line(&mut self.overlay, self.draw_color, x0, y0, x1, y1);
            }
            Command::Rect { x0, y0, x1, y1 } => {
                raster::rect(&mut self.overlay, self.draw_color, x0, y0, x1, y1);
            }
            Command::Circle { cx, cy, radius } => {
                raster::circle(&mut self.overlay, self.draw_color, cx, cy, radius);
            }
            Command::Fill { x, y } => {
                fill::flood_fill(&self.canvas, &mut self.overlay, self.draw_color, x, y);
            }
            Command::Grayscale => {
                effects::grayscale(&mut self.canvas);
            }
            Command::Gradient { degree, from, to } => {
                effects::gradient(&mut self.overlay, degree, from, to);
            }
            Command::Color(color) => {
                self.draw_color = color;
            }
            Command::Clear => {
                self.canvas.clear();
            }
            Command::Load(ref path) => {
                self.load(path)?;
            }
            Command::Save(ref path) => {
                let path = path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));
                self.history.save(&path)?;
                return Ok(Outcome::Handled);
            }
            Command::Export(ref path) => {
                bmp::export(&self.canvas, path)?;
                return Ok(Outcome::Handled);
            }
            Command::Undo => {
                self.undo()?;
                return Ok(Outcome::Handled);
            }
            Command::Quit => {
                return Ok(Outcome::Quit);
            }
        }
        self.commit()?;
        Ok(Outcome::Recorded)
    }

    /// Blends the overlay into the canvas and clears the overlay.
    fn commit(&mut self) -> Result<(), SessionError> {
        compose::commit(&mut self.canvas, &mut self.overlay)?;
        Ok(())
    }

    /// Drops the last history entry and rebuilds the canvas by replaying the
    /// remaining entries through the same pipeline.
    ///
    /// Returns `SessionError::EmptyHistory`, with all state untouched, when
    /// there is nothing to undo. Entries that no longer replay cleanly (a
    /// `load` whose file has vanished) are skipped.
    fn undo(&mut self) -> Result<(), SessionError> {
        if self.history.is_empty() {
            return Err(SessionError::EmptyHistory);
        }
        self.history.pop();
        self.canvas.clear();
        self.overlay.clear();
        self.draw_color = Pixel::WHITE;
        let entries: Vec<String> = self.history.entries().to_vec();
        for entry in &entries {
            self.replay(entry);
        }
        Ok(())
    }

    /// Reads a command file and runs every line through the pipeline, one
    /// commit per line, exactly as if typed interactively. The individual
    /// lines are not recorded; the `load` command itself is.
    fn load(&mut self, path: &Path) -> Result<(), SessionError> {
        let text = fs::read_to_string(path).map_err(|e| SessionError::io(path, e))?;
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            self.replay(line);
        }
        Ok(())
    }

    /// Executes one already-accepted line, ignoring failures so that a bad
    /// entry cannot abort a replay or a file load part-way.
    fn replay(&mut self, line: &str) {
        if let Ok(command) = Command::parse(line) {
            let _ = self.apply(&command);
        }
    }
}
