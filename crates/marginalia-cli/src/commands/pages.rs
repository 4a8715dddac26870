//! Pages command implementation.

use super::load_config;
use crate::cli::PagesArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::reading::ReadingWindow;
use std::fs;

/// Page counts for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCounts {
    /// Pages split on the paragraph delimiter
    pub page_count: usize,
    /// Pages estimated from the word count
    pub estimated: usize,
}

/// Execute the pages command.
pub fn execute_pages(args: PagesArgs, formatter: &Formatter) -> Result<()> {
    let counts = build_pages(&args)?;
    println!(
        "{}",
        formatter.format_pages(counts.page_count, counts.estimated, args.words_per_page)?
    );
    Ok(())
}

/// Count pages the same way the knowledge command splits them.
pub fn build_pages(args: &PagesArgs) -> Result<PageCounts> {
    if args.words_per_page == 0 {
        return Err(CliError::InvalidInput("Words per page must be at least 1".to_string()));
    }

    let config = load_config(args.config.as_deref())?;
    let text = fs::read_to_string(&args.file)?;
    let window = ReadingWindow::new(&text, config.paragraph_delimiter);

    Ok(PageCounts {
        page_count: window.page_count(),
        estimated: window.estimated_page_count(args.words_per_page),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::KnowledgeArgs;
    use crate::commands::build_knowledge;
    use tempfile::TempDir;

    const BOOK: &str = "Gandalf knocked.\n---\nGandalf knocked again.\n---\nGandalf came in.";

    #[tokio::test]
    async fn test_pages_agree_with_knowledge_under_custom_delimiter() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("hobbit.txt");
        let config = dir.path().join("marginalia.toml");
        fs::write(&file, BOOK).unwrap();
        fs::write(&config, "paragraph_delimiter = \"\\n---\\n\"\n").unwrap();

        let counts = build_pages(&PagesArgs {
            file: file.clone(),
            words_per_page: 300,
            config: Some(config.clone()),
        })
        .unwrap();
        let report = build_knowledge(KnowledgeArgs {
            file,
            author: "J.R.R. Tolkien".to_string(),
            page: None,
            title: None,
            gazetteer: None,
            config: Some(config),
            parallel: false,
        })
        .await
        .unwrap();

        assert_eq!(counts.page_count, 3);
        assert_eq!(counts.page_count, report.page_count);
        assert_eq!(counts.estimated, 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("hobbit.txt");
        let config = dir.path().join("marginalia.toml");
        fs::write(&file, BOOK).unwrap();
        fs::write(&config, "paragraph_delimiter = \"\"\n").unwrap();

        let result = build_pages(&PagesArgs {
            file,
            words_per_page: 300,
            config: Some(config),
        });
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_zero_words_per_page_is_rejected() {
        let result = build_pages(&PagesArgs {
            file: "unused.txt".into(),
            words_per_page: 0,
            config: None,
        });
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
