#![deny(unsafe_code)]
//! The rasterpad command pipeline.
//!
//! A [`Session`] owns the canvas, the overlay buffer, the current draw color,
//! and the command history. Text commands are parsed into [`Command`] values,
//! applied through the overlay, and committed; accepted commands are recorded
//! so that undo can rebuild the canvas by replaying the remaining log. The
//! serializers for the three file artifacts live here too: BMP snapshots,
//! plain-text history files, and the ANSI frame dump.

pub mod bmp;
pub mod command;
pub mod error;
pub mod frame;
pub mod history;
pub mod session;

pub use command::Command;
pub use error::SessionError;
pub use frame::FrameLog;
pub use history::History;
pub use session::{Outcome, Session};
