//! Archiving and lookup of expense files
//!
//! # Architecture
//!
//! - `naming`: the `expenses_<token>.txt` convention and timestamped names
//! - `scanner`: glob discovery in the working directory
//! - `manager`: `ArchiveManager`, which moves, logs and looks files up
//!
//! Files are processed in lexicographic order. Two instances running against
//! the same working directory are not coordinated; the one that loses the
//! race for a file reports it as a failure.

pub mod manager;
pub mod naming;
pub mod scanner;

pub use manager::{
    ArchiveFailure, ArchiveManager, ArchiveReport, ArchivedFile, FileOutcome, LookupHit,
    PlannedMove,
};
