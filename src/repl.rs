//! Interactive loop with rustyline.
//!
//! Interactive mode: prompt, history, retry on bad input.
//! Pipe mode: read lines from stdin, evaluate each.

use std::error::Error;
use std::io::{BufRead, Write};

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::Settings;
use crate::models::Network;
use crate::output::render;
use crate::report::{Report, Selection};

const FAREWELL: &str = "Bye";

/// Evaluate one input line (`A.B.C.D/N` or `A.B.C.D E.F.G.H`) into rendered facts.
pub fn evaluate_line(line: &str, settings: &Settings) -> Result<String, Box<dyn Error>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let network = Network::from_args(&tokens)?;
    log::debug!("evaluate_line: {}", network.to_string().replace('\n', ", "));
    let report = Report::build(&network, &Selection::all())?;
    render(&report, settings.format, settings.color)
}

fn is_quit(line: &str) -> bool {
    matches!(line, "quit" | "exit" | "q")
}

/// Run the interactive loop until quit, Ctrl-C or Ctrl-D.
pub fn run_repl(settings: &Settings) -> Result<(), Box<dyn Error>> {
    let mut rl = DefaultEditor::new()?;

    if let Some(ref path) = settings.history_file {
        if rl.load_history(path).is_err() {
            log::debug!("No history loaded from {}", path.display());
        }
    }

    println!("Enter an address with a CIDR prefix (10.0.0.1/24) or an address and a mask.");
    loop {
        match rl.readline(&settings.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                if is_quit(trimmed) {
                    println!("{FAREWELL}");
                    break;
                }
                match evaluate_line(trimmed, settings) {
                    Ok(out) => println!("\n{out}\n"),
                    Err(e) => {
                        log::warn!("Rejected input {trimmed}: {e}");
                        let msg = format!("(error) {e}");
                        if settings.color {
                            eprintln!("{}", msg.red());
                        } else {
                            eprintln!("{msg}");
                        }
                        eprintln!("Enter the data again...");
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{FAREWELL}");
                break;
            }
            Err(err) => {
                log::error!("readline failed: {err}");
                return Err(err.into());
            }
        }
    }

    if let Some(ref path) = settings.history_file {
        if let Err(e) = rl.save_history(path) {
            log::warn!("Error saving history to {}: {e}", path.display());
        }
    }
    Ok(())
}

/// Evaluate every line of `input`; returns 1 if any line failed, else 0.
pub fn run_pipe<R, W, E>(input: R, out: &mut W, err: &mut E, settings: &Settings) -> i32
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut exit_code = 0;
    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if is_quit(trimmed) {
            break;
        }
        let written = match evaluate_line(trimmed, settings) {
            Ok(rendered) => writeln!(out, "{rendered}"),
            Err(e) => {
                log::warn!("Rejected input {trimmed}: {e}");
                exit_code = 1;
                writeln!(err, "(error) {trimmed}: {e}")
            }
        };
        if written.is_err() {
            return 1;
        }
    }
    exit_code
}
