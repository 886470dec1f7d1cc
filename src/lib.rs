//! expense-archive - move dated expense files into an archive
//!
//! This library provides the core functionality for the `expense-archive`
//! command. Files named `expenses_<token>.txt` in a working directory are
//! renamed into an archive directory with a `-YYYYMMDD-HHMMSS` suffix, and
//! every move is recorded, content included, in an append-only text log.
//! Archived files can be looked up again by token.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and the optional settings file
//! - `error`: Custom error types
//! - `archive`: Discovery, naming, archiving and lookup
//! - `journal`: The append-only archive log
//! - `ledger`: Expense lines and totals inside expense files
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_archive::archive::ArchiveManager;
//! use expense_archive::config::{ArchivePaths, Settings};
//!
//! let settings = Settings::load_or_create(&work_dir)?;
//! let paths = ArchivePaths::resolve(work_dir, &settings, None, None);
//! let report = ArchiveManager::new(paths).archive_all()?;
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod journal;
pub mod ledger;

pub use error::ArchiveError;
