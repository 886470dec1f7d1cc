//! Archive log for the expense archiver
//!
//! Every archived file gets one human-readable record appended to a flat
//! text log. The log can also be read back, which is how recent activity is
//! listed.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_archive::journal::{ArchiveLog, LogRecord};
//!
//! let log = ArchiveLog::new(paths.log_file().to_path_buf());
//! log.append(&LogRecord::new(now, "expenses_2025-01-10.txt", archived, content))?;
//! let last_five = log.read_recent(5)?;
//! ```

mod logger;
mod record;

pub use logger::ArchiveLog;
pub use record::LogRecord;
