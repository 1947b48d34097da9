//! The command log: the ordered record of accepted commands.
//!
//! Entries are the verbatim command text with trailing newline stripped,
//! in execution order. The log is append-only except for undo, which removes
//! exactly the last entry.

use std::fs;
use std::path::Path;

use crate::error::SessionError;

/// File name used by `save` when no path is given.
pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// Ordered log of accepted command lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> History {
        History::default()
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no commands are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded command lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Appends an accepted command line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    /// Removes and returns the most recent entry.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// Writes the log to `path`, one newline-terminated command per line,
    /// suitable for replay via `load`.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(entry);
            text.push('\n');
        }
        fs::write(path, text).map_err(|e| SessionError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn push_preserves_order() {
        let mut history = History::new();
        history.push("point 1 1");
        history.push("line 0 0 5 5");
        assert_eq!(history.entries(), ["point 1 1", "line 0 0 5 5"]);
    }

    #[test]
    fn pop_removes_only_the_last_entry() {
        let mut history = History::new();
        history.push("point 1 1");
        history.push("clear");
        assert_eq!(history.pop().as_deref(), Some("clear"));
        assert_eq!(history.entries(), ["point 1 1"]);
        assert_eq!(history.pop().as_deref(), Some("point 1 1"));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn save_writes_newline_terminated_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.txt");
        let mut history = History::new();
        history.push("color #ff0000");
        history.push("point 1 1");
        history.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "color #ff0000\npoint 1 1\n");
    }

    #[test]
    fn save_of_empty_history_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.txt");
        History::new().save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn save_to_unwritable_path_is_an_io_error() {
        let history = History::new();
        let result = history.save(Path::new("/nonexistent-dir/history.txt"));
        assert!(matches!(result, Err(SessionError::Io { .. })));
    }
}
