//! Recent archive activity

use std::io::Write;

use chrono::SecondsFormat;

use super::Outcome;
use crate::archive::ArchiveManager;
use crate::error::ArchiveResult;

/// Print the last `count` records from the archive log
pub fn handle_recent(
    manager: &ArchiveManager,
    count: usize,
    out: &mut dyn Write,
) -> ArchiveResult<Outcome> {
    let records = manager.log().read_recent(count)?;

    if records.is_empty() {
        writeln!(
            out,
            "No archive records in {}",
            manager.log().path().display()
        )?;
        return Ok(Outcome::Success);
    }

    for record in &records {
        writeln!(
            out,
            "{}  {} -> {} ({} bytes)",
            record.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
            record.original,
            record.archived,
            record.content.len()
        )?;
    }

    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArchivePaths;
    use chrono::{DateTime, FixedOffset, TimeZone};
    use std::fs;
    use tempfile::TempDir;

    fn fixed_clock() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 2, 1, 7, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_log() {
        let temp = TempDir::new().unwrap();
        let manager = ArchiveManager::new(ArchivePaths::with_work_dir(temp.path().to_path_buf()));

        let mut out = Vec::new();
        let outcome = handle_recent(&manager, 5, &mut out).unwrap();

        assert_eq!(outcome, Outcome::Success);
        assert!(String::from_utf8(out).unwrap().starts_with("No archive records"));
    }

    #[test]
    fn test_lists_last_records() {
        let temp = TempDir::new().unwrap();
        let manager = ArchiveManager::new(ArchivePaths::with_work_dir(temp.path().to_path_buf()))
            .with_clock(fixed_clock);
        for token in ["a", "b", "c"] {
            fs::write(temp.path().join(format!("expenses_{}.txt", token)), "12345").unwrap();
        }
        manager.archive_all().unwrap();

        let mut out = Vec::new();
        handle_recent(&manager, 2, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2025-02-01T07:00:00+00:00  expenses_b.txt -> "));
        assert!(lines[1].contains("expenses_c.txt"));
        assert!(lines[1].ends_with("(5 bytes)"));
    }
}
