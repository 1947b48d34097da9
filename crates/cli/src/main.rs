#![deny(unsafe_code)]
//! REPL binary for the rasterpad canvas engine.
//!
//! Reads one command per line from stdin, executes it against the session,
//! and appends the resulting canvas frame to the dump file after every
//! prompt. Command failures are reported to stderr and the loop continues;
//! only a failure to open the dump file at startup is fatal.

mod error;

use clap::Parser;
use error::CliError;
use rasterpad_session::{FrameLog, Outcome, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "rasterpad", about = "Terminal raster paint REPL")]
struct Cli {
    /// Canvas width in pixels.
    #[arg(short = 'W', long, default_value_t = 70)]
    width: usize,

    /// Canvas height in pixels.
    #[arg(short = 'H', long, default_value_t = 40)]
    height: usize,

    /// Append-only ANSI frame dump, one frame per command.
    #[arg(long, default_value = "canvas.txt")]
    frames: PathBuf,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut session = Session::new(cli.width, cli.height)?;
    let mut frames = FrameLog::append_to(&cli.frames).map_err(|e| CliError::Io(e.to_string()))?;

    // The initial blank frame, before any command.
    report_frame(&mut frames, &session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} > ", session.history().len());
        let _ = io::stdout().flush();

        let Some(line) = lines.next() else {
            break; // EOF behaves like quit
        };
        let line = line.map_err(|e| CliError::Io(e.to_string()))?;

        match session.execute(&line) {
            Ok(Outcome::Quit) => break,
            Ok(_) => {}
            Err(e) => eprintln!("error: {e}"),
        }
        report_frame(&mut frames, &session);
    }

    Ok(())
}

/// Appends the current canvas to the dump; mid-session write failures are
/// reported but do not end the session.
fn report_frame(frames: &mut FrameLog, session: &Session) {
    if let Err(e) = frames.append(session.canvas()) {
        eprintln!("error: {e}");
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}
