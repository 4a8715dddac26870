//! Knowledge command implementation.

use super::load_config;
use crate::cli::KnowledgeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::reading::ReadingWindow;
use crate::report::KnowledgeReport;
use marginalia_extractor::EntityExtractor;
use marginalia_nlp::{GazetteerRecognizer, StopwordList};
use std::fs;
use std::sync::Arc;
use tracing::debug;

/// Execute the knowledge command.
pub async fn execute_knowledge(args: KnowledgeArgs, formatter: &Formatter) -> Result<()> {
    let report = build_knowledge(args).await?;
    println!("{}", formatter.format_knowledge(&report)?);
    Ok(())
}

/// Extract the entities a reader knows at their current page.
pub async fn build_knowledge(args: KnowledgeArgs) -> Result<KnowledgeReport> {
    if args.author.trim().is_empty() {
        return Err(CliError::InvalidInput("Author name cannot be empty".to_string()));
    }

    let config = load_config(args.config.as_deref())?;

    let mut stopwords = StopwordList::english();
    stopwords.extend(config.extra_stopwords.iter().cloned());

    let recognizer = match &args.gazetteer {
        Some(path) => GazetteerRecognizer::from_file(path)?,
        None => GazetteerRecognizer::empty(),
    }
    .with_stopwords(stopwords);

    let text = fs::read_to_string(&args.file)?;
    let window = ReadingWindow::new(&text, config.paragraph_delimiter.clone());
    let page_count = window.page_count();
    let current_page = args.page.unwrap_or(page_count).min(page_count);
    let content = window.up_to(current_page);

    debug!(
        "Reading {} of {} pages from {}",
        current_page,
        page_count,
        args.file.display()
    );

    let extractor = EntityExtractor::try_new(Arc::new(recognizer), config)?;
    let result = if args.parallel {
        extractor.extract_parallel(&content, &args.author).await?
    } else {
        extractor.extract(&content, &args.author)?
    };

    let title = args.title.unwrap_or_else(|| {
        args.file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    Ok(KnowledgeReport::new(
        title,
        args.author,
        page_count,
        current_page,
        result,
    ))
}
