//! The typed command vocabulary and its text parser.
//!
//! One command per line, tokens separated by whitespace. Parsing is strict:
//! missing arguments, unparsable integers, and bad color codes are errors
//! rather than silent zeros, so a malformed command never half-applies.

use std::path::PathBuf;
use std::str::SplitWhitespace;

use rasterpad_core::Pixel;

use crate::error::SessionError;

/// A parsed command, ready for the session pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Point { x: i32, y: i32 },
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    Rect { x0: i32, y0: i32, x1: i32, y1: i32 },
    Circle { cx: i32, cy: i32, radius: i32 },
    Fill { x: i32, y: i32 },
    Grayscale,
    Gradient { degree: i32, from: Pixel, to: Pixel },
    Color(Pixel),
    Load(PathBuf),
    Save(Option<PathBuf>),
    Export(PathBuf),
    Undo,
    Clear,
    Quit,
}

impl Command {
    /// Parses one command line. Surrounding whitespace and extra trailing
    /// tokens are ignored.
    pub fn parse(line: &str) -> Result<Command, SessionError> {
        let mut tokens = line.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| SessionError::UnknownCommand(line.trim().to_string()))?;
        let mut args = Args {
            command: name,
            tokens,
        };
        match name {
            "point" => Ok(Command::Point {
                x: args.int("x")?,
                y: args.int("y")?,
            }),
            "line" => Ok(Command::Line {
                x0: args.int("x0")?,
                y0: args.int("y0")?,
                x1: args.int("x1")?,
                y1: args.int("y1")?,
            }),
            "rect" => Ok(Command::Rect {
                x0: args.int("x0")?,
                y0: args.int("y0")?,
                x1: args.int("x1")?,
                y1: args.int("y1")?,
            }),
            "circle" => Ok(Command::Circle {
                cx: args.int("cx")?,
                cy: args.int("cy")?,
                radius: args.int("radius")?,
            }),
            "fill" => Ok(Command::Fill {
                x: args.int("x")?,
                y: args.int("y")?,
            }),
            "grayscale" => Ok(Command::Grayscale),
            "gradient" => Ok(Command::Gradient {
                degree: args.int("degree")?,
                from: args.color("color1")?,
                to: args.color("color2")?,
            }),
            "color" => Ok(Command::Color(args.color("color")?)),
            "load" => Ok(Command::Load(args.path("path")?)),
            "save" => Ok(Command::Save(args.tokens.next().map(PathBuf::from))),
            "export" => Ok(Command::Export(args.path("path")?)),
            "undo" => Ok(Command::Undo),
            "clear" => Ok(Command::Clear),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(SessionError::UnknownCommand(name.to_string())),
        }
    }
}

/// Token cursor carrying the command name for error messages.
struct Args<'a> {
    command: &'a str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next(&mut self, what: &str) -> Result<&'a str, SessionError> {
        self.tokens.next().ok_or_else(|| SessionError::BadArguments {
            command: self.command.to_string(),
            reason: format!("missing {what}"),
        })
    }

    fn int(&mut self, what: &str) -> Result<i32, SessionError> {
        let token = self.next(what)?;
        token.parse().map_err(|_| SessionError::BadArguments {
            command: self.command.to_string(),
            reason: format!("{what} is not an integer: {token:?}"),
        })
    }

    fn color(&mut self, what: &str) -> Result<Pixel, SessionError> {
        let token = self.next(what)?;
        Pixel::from_hex(token).map_err(|e| SessionError::BadArguments {
            command: self.command.to_string(),
            reason: format!("{what}: {e}"),
        })
    }

    fn path(&mut self, what: &str) -> Result<PathBuf, SessionError> {
        Ok(PathBuf::from(self.next(what)?))
    }
}
