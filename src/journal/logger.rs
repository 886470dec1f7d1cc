//! Append-only archive log
//!
//! The log file is opened in append mode for every record and flushed
//! immediately. No lock is taken.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ArchiveError, ArchiveResult};

use super::record::LogRecord;

/// Handles writing and reading archive log records
pub struct ArchiveLog {
    /// Path to the log file
    log_path: PathBuf,
}

impl ArchiveLog {
    /// Create a new ArchiveLog that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append a record, creating the log file if needed
    pub fn append(&self, record: &LogRecord) -> ArchiveResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                ArchiveError::Io(format!(
                    "Failed to open archive log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;

        file.write_all(&record.to_bytes())
            .map_err(|e| ArchiveError::Io(format!("Failed to write archive log record: {}", e)))?;

        file.flush()
            .map_err(|e| ArchiveError::Io(format!("Failed to flush archive log: {}", e)))?;

        Ok(())
    }

    /// Read all records from the log file
    ///
    /// Returns records in the order they were appended.
    pub fn read_all(&self) -> ArchiveResult<Vec<LogRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read(&self.log_path)
            .map_err(|e| ArchiveError::Io(format!("Failed to read archive log: {}", e)))?;

        LogRecord::parse_all(&data)
    }

    /// Read the most recent N records from the log
    pub fn read_recent(&self, count: usize) -> ArchiveResult<Vec<LogRecord>> {
        let mut records = self.read_all()?;
        let start = records.len().saturating_sub(count);
        Ok(records.split_off(start))
    }

    /// Get the number of records in the log
    pub fn record_count(&self) -> ArchiveResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Check if the log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
