//! Archive manager for the expense archiver
//!
//! Moves expense files into the archive directory under timestamped names,
//! records each move in the archive log, and looks archived files up again.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local};

use super::naming::{
    archived_name, expense_file_name, parse_archived_name, validate_single_line, validate_token,
};
use super::scanner::find_expense_files;
use crate::config::paths::ArchivePaths;
use crate::error::{ArchiveError, ArchiveResult};
use crate::journal::{ArchiveLog, LogRecord};

/// Source of capture timestamps
pub type Clock = fn() -> DateTime<FixedOffset>;

fn system_clock() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// A file that was moved into the archive
#[derive(Debug, Clone)]
pub struct ArchivedFile {
    /// Where the file was found
    pub original: PathBuf,
    /// Where the file lives now
    pub archived: PathBuf,
    /// Size of the archived content
    pub size_bytes: usize,
}

/// A file that could not be archived
#[derive(Debug)]
pub struct ArchiveFailure {
    /// The file that was being processed
    pub original: PathBuf,
    /// What went wrong
    pub error: ArchiveError,
}

/// Result of processing one file, handed out as soon as it is known
#[derive(Debug, Clone, Copy)]
pub enum FileOutcome<'a> {
    Archived(&'a ArchivedFile),
    Failed(&'a ArchiveFailure),
}

/// A move a dry run would perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub original: PathBuf,
    pub destination: PathBuf,
}

/// Outcome of an archive run
#[derive(Debug, Default)]
pub struct ArchiveReport {
    /// Number of expense files discovered
    pub matched: usize,
    /// Files archived successfully, in processing order
    pub archived: Vec<ArchivedFile>,
    /// Files that failed, in processing order
    pub failures: Vec<ArchiveFailure>,
}

impl ArchiveReport {
    /// True when there was nothing to archive
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    /// True when at least one file failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// An archived file found by lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupHit {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Runs archive and lookup operations against a set of paths
pub struct ArchiveManager {
    paths: ArchivePaths,
    log: ArchiveLog,
    clock: Clock,
}

impl ArchiveManager {
    /// Create a new ArchiveManager using the system clock
    pub fn new(paths: ArchivePaths) -> Self {
        let log = ArchiveLog::new(paths.log_file().to_path_buf());
        Self {
            paths,
            log,
            clock: system_clock,
        }
    }

    /// Replace the clock (useful for testing)
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Get the paths this manager operates on
    pub fn paths(&self) -> &ArchivePaths {
        &self.paths
    }

    /// Get the archive log
    pub fn log(&self) -> &ArchiveLog {
        &self.log
    }

    /// List expense files waiting in the working directory
    ///
    /// The archive log itself is never a candidate, even when its name
    /// matches the expense pattern.
    pub fn pending(&self) -> ArchiveResult<Vec<PathBuf>> {
        let files = find_expense_files(self.paths.work_dir())?;

        let log_file = match fs::canonicalize(self.paths.log_file()) {
            Ok(path) => path,
            Err(_) => return Ok(files),
        };

        Ok(files
            .into_iter()
            .filter(|path| {
                let is_log = fs::canonicalize(path).map_or(false, |p| p == log_file);
                if is_log {
                    log::debug!("Skipping archive log {}", path.display());
                }
                !is_log
            })
            .collect())
    }

    /// Work out where each pending file would go, without touching anything
    ///
    /// Files whose names cannot be archived are skipped with a warning.
    pub fn plan(&self) -> ArchiveResult<Vec<PlannedMove>> {
        let now = (self.clock)();
        let mut plan = Vec::new();

        for original in self.pending()? {
            match self.destination_for(&original, &now) {
                Ok(destination) => plan.push(PlannedMove {
                    original,
                    destination,
                }),
                Err(e) => log::warn!("Would skip {:?}: {}", original, e),
            }
        }

        Ok(plan)
    }

    /// Archive every pending expense file
    pub fn archive_all(&self) -> ArchiveResult<ArchiveReport> {
        self.archive_each(|_| Ok(()))
    }

    /// Archive every pending expense file, reporting each one as it finishes
    ///
    /// The archive directory is created first; failing to do so is fatal.
    /// After that, a file that cannot be moved or logged is recorded as a
    /// failure and the run carries on with the next one. An error returned
    /// by `on_file` stops the run.
    pub fn archive_each<F>(&self, mut on_file: F) -> ArchiveResult<ArchiveReport>
    where
        F: FnMut(FileOutcome<'_>) -> ArchiveResult<()>,
    {
        self.paths.ensure_archive_dir()?;

        let pending = self.pending()?;
        let mut report = ArchiveReport {
            matched: pending.len(),
            ..ArchiveReport::default()
        };

        for original in pending {
            match self.archive_file(&original) {
                Ok(archived) => {
                    log::info!(
                        "Archived {} -> {}",
                        archived.original.display(),
                        archived.archived.display()
                    );
                    on_file(FileOutcome::Archived(&archived))?;
                    report.archived.push(archived);
                }
                Err(error) => {
                    log::warn!("Failed to archive {:?}: {}", original, error);
                    let failure = ArchiveFailure { original, error };
                    on_file(FileOutcome::Failed(&failure))?;
                    report.failures.push(failure);
                }
            }
        }

        Ok(report)
    }

    /// Archive a single expense file
    ///
    /// Takes a fresh timestamp, renames the file into the archive directory
    /// and appends a log record carrying the moved content. An existing file
    /// at the destination is never overwritten, and names that would break
    /// the log's line structure are refused before anything moves.
    pub fn archive_file(&self, original: &Path) -> ArchiveResult<ArchivedFile> {
        let archived_at = (self.clock)();
        let destination = self.destination_for(original, &archived_at)?;

        if destination.exists() {
            return Err(ArchiveError::destination_exists(
                destination.display().to_string(),
            ));
        }

        fs::rename(original, &destination).map_err(|e| {
            ArchiveError::Io(format!(
                "Failed to move {} to {}: {}",
                original.display(),
                destination.display(),
                e
            ))
        })?;

        let content = fs::read(&destination).map_err(|e| {
            ArchiveError::Io(format!(
                "Archived {} but failed to read it back: {}",
                destination.display(),
                e
            ))
        })?;

        let record = LogRecord::new(
            archived_at,
            file_name_of(original)?,
            self.display_path(&destination),
            content,
        );
        self.log.append(&record).map_err(|e| {
            ArchiveError::Log(format!(
                "Archived {} but failed to log it: {}",
                destination.display(),
                e
            ))
        })?;

        Ok(ArchivedFile {
            original: original.to_path_buf(),
            archived: destination,
            size_bytes: record.content.len(),
        })
    }

    /// Find archived content for a token
    ///
    /// A file named exactly `expenses_<token>.txt` wins. Otherwise every
    /// `expenses_<token>-YYYYMMDD-HHMMSS.txt` is returned, oldest first.
    /// Lookup never creates the archive directory.
    pub fn lookup(&self, token: &str) -> ArchiveResult<Vec<LookupHit>> {
        validate_token(token)?;

        let archive_dir = self.paths.archive_dir();
        if !archive_dir.is_dir() {
            return Err(ArchiveError::archive_not_found(token));
        }

        let exact = archive_dir.join(expense_file_name(token));
        if exact.is_file() {
            return Ok(vec![read_hit(exact)?]);
        }

        let entries = fs::read_dir(archive_dir).map_err(|e| {
            ArchiveError::Io(format!("Failed to read archive directory: {}", e))
        })?;

        let mut stamped = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ArchiveError::Io(format!("Failed to read directory entry: {}", e))
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if let Some(parsed) = parse_archived_name(name) {
                if parsed.token == token {
                    stamped.push((parsed.archived_at, path.clone()));
                }
            }
        }

        if stamped.is_empty() {
            return Err(ArchiveError::archive_not_found(token));
        }

        stamped.sort();
        stamped
            .into_iter()
            .map(|(_, path)| read_hit(path))
            .collect()
    }

    fn destination_for(
        &self,
        original: &Path,
        at: &DateTime<FixedOffset>,
    ) -> ArchiveResult<PathBuf> {
        let file_name = file_name_of(original)?;
        let new_name = archived_name(file_name, &at.naive_local()).ok_or_else(|| {
            ArchiveError::Validation(format!("Not an expense file: {}", file_name))
        })?;
        let destination = self.paths.archive_dir().join(new_name);
        validate_single_line(&self.display_path(&destination))?;
        Ok(destination)
    }

    /// Path as written to the log, relative to the working directory when possible
    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.paths.work_dir())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn file_name_of(path: &Path) -> ArchiveResult<&str> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ArchiveError::Validation(format!("Invalid file name: {}", path.display())))?;
    validate_single_line(name)?;
    Ok(name)
}

fn read_hit(path: PathBuf) -> ArchiveResult<LookupHit> {
    let content = fs::read(&path).map_err(|e| {
        ArchiveError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(LookupHit { path, content })
}
