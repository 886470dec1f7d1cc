//! Archive mode
//!
//! Moves every pending expense file and prints one line per file plus a
//! summary.

use std::io::Write;

use super::Outcome;
use crate::archive::naming::EXPENSE_GLOB;
use crate::archive::{ArchiveManager, FileOutcome};
use crate::error::ArchiveResult;

/// Handle archive mode
///
/// Per-file failures are printed and the run continues; the outcome is a
/// failure if any file could not be archived.
pub fn handle_archive(
    manager: &ArchiveManager,
    dry_run: bool,
    out: &mut dyn Write,
) -> ArchiveResult<Outcome> {
    if dry_run {
        return handle_dry_run(manager, out);
    }

    let report = manager.archive_each(|outcome| {
        match outcome {
            FileOutcome::Archived(archived) => writeln!(
                out,
                "Archived {} -> {} ({} bytes)",
                archived.original.display(),
                archived.archived.display(),
                archived.size_bytes
            )?,
            FileOutcome::Failed(failure) => writeln!(
                out,
                "Failed to archive {:?}: {}",
                failure.original,
                failure.error
            )?,
        }
        Ok(())
    })?;

    if report.is_empty() {
        writeln!(
            out,
            "Nothing to archive: no files matching {} in {}",
            EXPENSE_GLOB,
            manager.paths().work_dir().display()
        )?;
        return Ok(Outcome::Success);
    }

    writeln!(out)?;
    writeln!(
        out,
        "Archived {} of {} file(s); log: {}",
        report.archived.len(),
        report.matched,
        manager.log().path().display()
    )?;

    if report.has_failures() {
        writeln!(out, "{} file(s) failed.", report.failures.len())?;
        Ok(Outcome::Failure)
    } else {
        Ok(Outcome::Success)
    }
}

fn handle_dry_run(manager: &ArchiveManager, out: &mut dyn Write) -> ArchiveResult<Outcome> {
    let plan = manager.plan()?;

    if plan.is_empty() {
        writeln!(
            out,
            "Nothing to archive: no files matching {} in {}",
            EXPENSE_GLOB,
            manager.paths().work_dir().display()
        )?;
        return Ok(Outcome::Success);
    }

    for planned in &plan {
        writeln!(
            out,
            "Would archive {} -> {}",
            planned.original.display(),
            planned.destination.display()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Dry run: {} file(s) would be archived.", plan.len())?;

    Ok(Outcome::Success)
}
