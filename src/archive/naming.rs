//! Expense filename conventions
//!
//! Expense files are named `expenses_<token>.txt`. Once archived they become
//! `expenses_<token>-YYYYMMDD-HHMMSS.txt`.

use chrono::NaiveDateTime;

use crate::error::{ArchiveError, ArchiveResult};

/// Prefix every expense file starts with
pub const EXPENSE_PREFIX: &str = "expenses_";

/// Extension every expense file ends with
pub const EXPENSE_EXTENSION: &str = ".txt";

/// Glob used to discover expense files in the working directory
pub const EXPENSE_GLOB: &str = "expenses_*.txt";

/// strftime format of the archive suffix
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

// "-YYYYMMDD-HHMMSS"
const SUFFIX_LEN: usize = 16;

/// A parsed archived filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedName<'a> {
    /// Token of the original expense file
    pub token: &'a str,
    /// Capture time encoded in the name
    pub archived_at: NaiveDateTime,
}

/// Extract the token from an expense filename
///
/// Returns `None` if the name does not follow the convention or the token
/// would be empty.
pub fn expense_token(file_name: &str) -> Option<&str> {
    let token = file_name
        .strip_prefix(EXPENSE_PREFIX)?
        .strip_suffix(EXPENSE_EXTENSION)?;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Build the expense filename for a token
pub fn expense_file_name(token: &str) -> String {
    format!("{}{}{}", EXPENSE_PREFIX, token, EXPENSE_EXTENSION)
}

/// Format a capture time as used in archived names
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build the archived name for an expense file captured at `at`
///
/// Strips the `.txt` extension and appends `-<timestamp>.txt`.
pub fn archived_name(file_name: &str, at: &NaiveDateTime) -> Option<String> {
    expense_token(file_name)?;
    let stem = file_name.strip_suffix(EXPENSE_EXTENSION)?;
    Some(format!(
        "{}-{}{}",
        stem,
        format_timestamp(at),
        EXPENSE_EXTENSION
    ))
}

/// Parse an archived filename back into its token and capture time
pub fn parse_archived_name(file_name: &str) -> Option<ArchivedName<'_>> {
    let stem = file_name
        .strip_prefix(EXPENSE_PREFIX)?
        .strip_suffix(EXPENSE_EXTENSION)?;
    if stem.len() <= SUFFIX_LEN {
        return None;
    }

    let split = stem.len() - SUFFIX_LEN;
    let token = stem.get(..split)?;
    let timestamp = stem.get(split..)?.strip_prefix('-')?;
    let archived_at = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;

    Some(ArchivedName { token, archived_at })
}

/// Reject tokens that can never name a file in the archive directory
pub fn validate_token(token: &str) -> ArchiveResult<()> {
    if token.is_empty() {
        return Err(ArchiveError::Validation("Token cannot be empty".into()));
    }
    if token.contains('/') || token.contains('\\') {
        return Err(ArchiveError::Validation(format!(
            "Token cannot contain a path separator: {}",
            token
        )));
    }
    Ok(())
}

/// Reject values that would span more than one line of an archive log record
pub fn validate_single_line(value: &str) -> ArchiveResult<()> {
    if value.contains('\n') || value.contains('\r') {
        return Err(ArchiveError::Validation(format!(
            "Name contains a line break: {:?}",
            value
        )));
    }
    Ok(())
}
