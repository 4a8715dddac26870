//! Marginalia CLI library.
//!
//! This library provides the caller side of the extraction pipeline:
//! reading-progress windows over a plain-text book, the knowledge payload,
//! command execution and output formatting.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod reading;
pub mod report;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
pub use reading::ReadingWindow;
pub use report::KnowledgeReport;
