//! Command implementations.

pub mod knowledge;
pub mod pages;
pub mod recap;

pub use self::knowledge::{build_knowledge, execute_knowledge};
pub use self::pages::{build_pages, execute_pages, PageCounts};
pub use self::recap::{build_recap, execute_recap};

use crate::error::{CliError, Result};
use marginalia_extractor::ExtractorConfig;
use std::path::Path;

/// Load the extractor configuration shared by every command.
pub fn load_config(path: Option<&Path>) -> Result<ExtractorConfig> {
    match path {
        Some(path) => ExtractorConfig::from_file(path).map_err(CliError::Config),
        None => Ok(ExtractorConfig::default()),
    }
}
