//! Vidcompress - batch video compression
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod error;
pub mod processor;

pub use error::{ErrorKind, RunError};
pub use processor::{DirectoryProcessor, Disposition, EntryOutcome, RunConfig, RunSummary, SkipReason};
