use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use expense_archive::archive::ArchiveManager;
use expense_archive::cli::{handle_archive, handle_lookup, handle_recent, Mode, Outcome};
use expense_archive::config::{ArchivePaths, Settings};

#[derive(Parser)]
#[command(
    name = "expense-archive",
    version,
    about = "Archive dated expense files and look them up again",
    long_about = "With no arguments, moves every expenses_<token>.txt in the working \
                  directory into the archive directory under a timestamped name and \
                  appends a record of each move to the archive log. With exactly one \
                  argument, prints the archived file for that token."
)]
struct Cli {
    /// Token (usually a date) to look up; exactly one switches to lookup mode
    tokens: Vec<String>,

    /// Directory containing the expense files
    #[arg(long, env = "EXPENSE_ARCHIVE_WORK_DIR", default_value = ".")]
    work_dir: PathBuf,

    /// Archive directory, relative to the working directory unless absolute
    #[arg(long, env = "EXPENSE_ARCHIVE_DIR")]
    archive_dir: Option<PathBuf>,

    /// Archive log file, relative to the working directory unless absolute
    #[arg(long, env = "EXPENSE_ARCHIVE_LOG")]
    log_file: Option<PathBuf>,

    /// Show what would be archived without moving anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Print the last N archive log records instead of archiving
    #[arg(long, value_name = "N")]
    recent: Option<usize>,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<Outcome> {
    let settings = Settings::load_or_create(&cli.work_dir).context("Failed to load settings")?;
    let paths = ArchivePaths::resolve(cli.work_dir, &settings, cli.archive_dir, cli.log_file);
    let manager = ArchiveManager::new(paths);

    let mut out = io::stdout().lock();

    let outcome = match Mode::from_args(cli.tokens, cli.dry_run, cli.recent) {
        Mode::Archive { dry_run } => {
            handle_archive(&manager, dry_run, &mut out).context("Archive run failed")?
        }
        Mode::Lookup { token } => {
            handle_lookup(&manager, &token, &mut out).context("Lookup failed")?
        }
        Mode::Recent { count } => {
            handle_recent(&manager, count, &mut out).context("Failed to read archive log")?
        }
    };

    Ok(outcome)
}
