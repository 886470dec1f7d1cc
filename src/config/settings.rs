//! Per-directory settings for the expense archiver
//!
//! An optional `.expense-archive.json` in the working directory can move the
//! archive directory and the log file somewhere other than the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::{settings_file_in, DEFAULT_ARCHIVE_DIR, DEFAULT_LOG_FILE};
use crate::error::ArchiveError;

/// User settings for the archiver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Archive directory, relative to the working directory unless absolute
    #[serde(default = "default_archive_dir")]
    pub archive_dir: PathBuf,

    /// Log file, relative to the working directory unless absolute
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_schema_version() -> u32 {
    1
}

fn default_archive_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ARCHIVE_DIR)
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            archive_dir: default_archive_dir(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Load settings from the working directory, or defaults if there is no file
    pub fn load_or_create(work_dir: &Path) -> Result<Self, ArchiveError> {
        let settings_path = settings_file_in(work_dir);

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ArchiveError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ArchiveError::Config(format!(
                    "Failed to parse settings file {}: {}",
                    settings_path.display(),
                    e
                ))
            })?;

            log::debug!("Loaded settings from {}", settings_path.display());
            Ok(settings)
        } else {
            // Don't save - the tool never writes settings on its own
            Ok(Settings::default())
        }
    }

    /// Save settings into the working directory
    pub fn save(&self, work_dir: &Path) -> Result<(), ArchiveError> {
        let settings_path = settings_file_in(work_dir);
        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ArchiveError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
