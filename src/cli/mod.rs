//! CLI command handlers
//!
//! This module bridges the clap argument model in `main.rs` with the
//! archive manager. Handlers write human-readable status lines to the
//! writer they are given and report how the process should exit.

pub mod archive;
pub mod lookup;
pub mod recent;

use std::process::ExitCode;

pub use archive::handle_archive;
pub use lookup::handle_lookup;
pub use recent::handle_recent;

/// What an invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Move every pending expense file into the archive
    Archive { dry_run: bool },
    /// Print the archived file for one token
    Lookup { token: String },
    /// Print the last N log records
    Recent { count: usize },
}

impl Mode {
    /// Pick the mode from the positional arguments and flags
    ///
    /// Exactly one positional argument means lookup. Zero, or two and more,
    /// mean archive.
    pub fn from_args(mut tokens: Vec<String>, dry_run: bool, recent: Option<usize>) -> Self {
        if let Some(count) = recent {
            return Mode::Recent { count };
        }

        if tokens.len() == 1 {
            if let Some(token) = tokens.pop() {
                return Mode::Lookup { token };
            }
        }

        if tokens.len() > 1 {
            log::warn!(
                "{} arguments given; lookup takes exactly one, running archive mode",
                tokens.len()
            );
        }
        Mode::Archive { dry_run }
    }
}

/// How a handled command should end the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}
