//! Lookup mode

use std::io::Write;

use super::Outcome;
use crate::archive::ArchiveManager;
use crate::error::{ArchiveError, ArchiveResult};
use crate::ledger::ExpenseSummary;

const SEPARATOR: &str = "----------------------------------------";

/// Handle lookup mode
///
/// Prints a header, an entry count and total, a separator and the verbatim
/// content of each match.
/// A miss or an invalid token is reported on `out` and ends in failure.
pub fn handle_lookup(
    manager: &ArchiveManager,
    token: &str,
    out: &mut dyn Write,
) -> ArchiveResult<Outcome> {
    let hits = match manager.lookup(token) {
        Ok(hits) => hits,
        Err(ArchiveError::NotFound { .. }) => {
            writeln!(
                out,
                "No archived expenses found for {} in {}",
                token,
                manager.paths().archive_dir().display()
            )?;
            return Ok(Outcome::Failure);
        }
        Err(err @ ArchiveError::Validation(_)) => {
            writeln!(out, "{}", err)?;
            return Ok(Outcome::Failure);
        }
        Err(err) => return Err(err),
    };

    for (i, hit) in hits.iter().enumerate() {
        let summary = ExpenseSummary::from_content(&hit.content);

        writeln!(out, "Archived expenses for {}: {}", token, hit.path.display())?;
        write!(out, "Entries: {}, total: {}", summary.entries, summary.total)?;
        if summary.unparsed > 0 {
            write!(out, " ({} unrecognized line(s))", summary.unparsed)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", SEPARATOR)?;
        out.write_all(&hit.content)?;

        let is_last = i + 1 == hits.len();
        if !is_last && !hit.content.ends_with(b"\n") {
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArchivePaths;
    use std::fs;
    use tempfile::TempDir;

    fn run(dir: &TempDir, token: &str) -> (Outcome, Vec<u8>) {
        let manager = ArchiveManager::new(ArchivePaths::with_work_dir(dir.path().to_path_buf()));
        let mut out = Vec::new();
        let outcome = handle_lookup(&manager, token, &mut out).unwrap();
        (outcome, out)
    }

    #[test]
    fn test_found_prints_content() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("archives")).unwrap();
        fs::write(
            temp.path().join("archives").join("expenses_2025-01-10.txt"),
            "1|2025-01-10 09:00:00|bus|2.40\n",
        )
        .unwrap();

        let (outcome, out) = run(&temp, "2025-01-10");
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome, Outcome::Success);
        assert!(text.starts_with("Archived expenses for 2025-01-10: "));
        assert!(text.contains("Entries: 1, total: 2.40\n"));
        assert!(text.contains(SEPARATOR));
        assert!(text.ends_with(&format!("{}\n1|2025-01-10 09:00:00|bus|2.40\n", SEPARATOR)));
    }

    #[test]
    fn test_missing_prints_message() {
        let temp = TempDir::new().unwrap();

        let (outcome, out) = run(&temp, "2025-01-10");
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome, Outcome::Failure);
        assert!(text.starts_with("No archived expenses found for 2025-01-10 in "));
        assert!(text.contains("archives"));
    }

    #[test]
    fn test_invalid_token() {
        let temp = TempDir::new().unwrap();

        let (outcome, out) = run(&temp, "a/b");

        assert_eq!(outcome, Outcome::Failure);
        assert!(String::from_utf8(out).unwrap().contains("path separator"));
    }

    #[test]
    fn test_hits_are_kept_apart() {
        let temp = TempDir::new().unwrap();
        let archive_dir = temp.path().join("archives");
        fs::create_dir(&archive_dir).unwrap();
        fs::write(
            archive_dir.join("expenses_2025-01-10-20250110-080000.txt"),
            "1|2025-01-10 07:00:00|bus|2.40",
        )
        .unwrap();
        fs::write(
            archive_dir.join("expenses_2025-01-10-20250110-090000.txt"),
            "1|2025-01-10 08:30:00|bagel|3.10",
        )
        .unwrap();

        let (outcome, out) = run(&temp, "2025-01-10");
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome, Outcome::Success);
        assert!(text.contains("bus|2.40\nArchived expenses for 2025-01-10: "));
        assert!(text.ends_with("bagel|3.10"));
    }

    #[test]
    fn test_summary_counts_unrecognized_lines() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("archives")).unwrap();
        fs::write(
            temp.path().join("archives").join("expenses_week2.txt"),
            "1|2025-01-13 09:00:00|rent|450.00\n2|2025-01-14 10:00:00|power|61.75\nnotes\n",
        )
        .unwrap();

        let (_, out) = run(&temp, "week2");
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Entries: 2, total: 511.75 (1 unrecognized line(s))\n"));
    }
}
