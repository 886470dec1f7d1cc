//! Path management for the expense archiver
//!
//! Every location the tool touches hangs off a working directory.
//!
//! ## Resolution Order
//!
//! For both the archive directory and the log file:
//!
//! 1. Explicit override (`--archive-dir` / `--log-file` or their env vars)
//! 2. The value in `.expense-archive.json` inside the working directory
//! 3. The defaults, `archives` and `archive_log.txt`
//!
//! Relative locations are joined onto the working directory.

use std::path::{Path, PathBuf};

use super::settings::Settings;
use crate::error::{ArchiveError, ArchiveResult};

/// Name of the default archive directory
pub const DEFAULT_ARCHIVE_DIR: &str = "archives";

/// Name of the default log file
pub const DEFAULT_LOG_FILE: &str = "archive_log.txt";

/// Name of the optional settings file inside the working directory
pub const SETTINGS_FILE: &str = ".expense-archive.json";

/// Manages all paths used by the archiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePaths {
    /// Directory scanned for expense files
    work_dir: PathBuf,
    /// Directory archived files are moved into
    archive_dir: PathBuf,
    /// Append-only archive log
    log_file: PathBuf,
}

impl ArchivePaths {
    /// Create paths with the default archive directory and log file
    pub fn with_work_dir(work_dir: PathBuf) -> Self {
        let archive_dir = work_dir.join(DEFAULT_ARCHIVE_DIR);
        let log_file = work_dir.join(DEFAULT_LOG_FILE);
        Self {
            work_dir,
            archive_dir,
            log_file,
        }
    }

    /// Resolve paths from the settings file and any explicit overrides
    pub fn resolve(
        work_dir: PathBuf,
        settings: &Settings,
        archive_dir: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Self {
        let archive_dir = archive_dir.unwrap_or_else(|| settings.archive_dir.clone());
        let log_file = log_file.unwrap_or_else(|| settings.log_file.clone());

        let paths = Self {
            archive_dir: work_dir.join(archive_dir),
            log_file: work_dir.join(log_file),
            work_dir,
        };
        log::debug!(
            "Resolved paths: work_dir={}, archive_dir={}, log_file={}",
            paths.work_dir.display(),
            paths.archive_dir.display(),
            paths.log_file.display()
        );
        paths
    }

    /// Get the working directory
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Get the archive directory
    pub fn archive_dir(&self) -> &Path {
        &self.archive_dir
    }

    /// Get the path to the archive log
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Ensure the archive directory exists, creating parents as needed
    pub fn ensure_archive_dir(&self) -> ArchiveResult<()> {
        std::fs::create_dir_all(&self.archive_dir).map_err(|e| {
            ArchiveError::Io(format!(
                "Failed to create archive directory {}: {}",
                self.archive_dir.display(),
                e
            ))
        })
    }
}

/// Location of the settings file for a given working directory
pub fn settings_file_in(work_dir: &Path) -> PathBuf {
    work_dir.join(SETTINGS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_work_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.work_dir(), temp_dir.path());
        assert_eq!(paths.archive_dir(), temp_dir.path().join("archives"));
        assert_eq!(paths.log_file(), temp_dir.path().join("archive_log.txt"));
        assert_eq!(
            settings_file_in(paths.work_dir()),
            temp_dir.path().join(".expense-archive.json")
        );
    }

    #[test]
    fn test_resolve_matches_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let work_dir = temp_dir.path().to_path_buf();

        let resolved = ArchivePaths::resolve(work_dir.clone(), &Settings::default(), None, None);
        assert_eq!(resolved, ArchivePaths::with_work_dir(work_dir));
    }

    #[test]
    fn test_overrides_win_over_settings() {
        let temp_dir = TempDir::new().unwrap();
        let mut settings = Settings::default();
        settings.archive_dir = PathBuf::from("from-settings");
        settings.log_file = PathBuf::from("settings.log");

        let paths = ArchivePaths::resolve(
            temp_dir.path().to_path_buf(),
            &settings,
            Some(PathBuf::from("from-cli")),
            None,
        );

        assert_eq!(paths.archive_dir(), temp_dir.path().join("from-cli"));
        assert_eq!(paths.log_file(), temp_dir.path().join("settings.log"));
    }

    #[test]
    fn test_absolute_override_is_kept() {
        let work = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();

        let paths = ArchivePaths::resolve(
            work.path().to_path_buf(),
            &Settings::default(),
            Some(elsewhere.path().to_path_buf()),
            None,
        );

        assert_eq!(paths.archive_dir(), elsewhere.path());
    }

    #[test]
    fn test_ensure_archive_dir_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::resolve(
            temp_dir.path().to_path_buf(),
            &Settings::default(),
            Some(PathBuf::from("nested/deeper/archives")),
            None,
        );

        paths.ensure_archive_dir().unwrap();
        assert!(paths.archive_dir().is_dir());

        // Reuse is fine
        paths.ensure_archive_dir().unwrap();
    }
}
