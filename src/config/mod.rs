//! Configuration module for the expense archiver
//!
//! This module provides configuration management including:
//! - Resolution of the working, archive and log locations
//! - The optional per-directory settings file

pub mod paths;
pub mod settings;

pub use paths::ArchivePaths;
pub use settings::Settings;
