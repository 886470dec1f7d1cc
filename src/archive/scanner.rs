//! Discovery of expense files waiting to be archived

use std::path::{Path, PathBuf};

use glob::MatchOptions;

use super::naming::{expense_token, EXPENSE_GLOB};
use crate::error::{ArchiveError, ArchiveResult};

/// Find expense files directly inside `work_dir`
///
/// Only regular files whose name carries a non-empty token are returned,
/// sorted by path so repeated runs process files in the same order.
pub fn find_expense_files(work_dir: &Path) -> ArchiveResult<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&work_dir.to_string_lossy());
    let pattern = Path::new(&escaped).join(EXPENSE_GLOB);
    let pattern = pattern.to_string_lossy();

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry.map_err(|e| {
            ArchiveError::Io(format!("Failed to read {}: {}", e.path().display(), e.error()))
        })?;

        if !path.is_file() {
            continue;
        }

        let has_token = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(expense_token)
            .is_some();
        if has_token {
            files.push(path);
        }
    }

    files.sort();
    log::debug!("Found {} expense file(s) in {}", files.len(), work_dir.display());
    Ok(files)
}
