//! Recap command implementation.

use super::load_config;
use crate::cli::RecapArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::reading::ReadingWindow;
use std::fs;

/// Execute the recap command.
pub fn execute_recap(args: RecapArgs, formatter: &Formatter) -> Result<()> {
    let (current_page, recap) = build_recap(&args)?;
    println!("{}", formatter.format_recap(current_page, &recap)?);
    Ok(())
}

/// The clamped current page and the text of the pages leading up to it.
pub fn build_recap(args: &RecapArgs) -> Result<(usize, String)> {
    if args.span == 0 {
        return Err(CliError::InvalidInput("Recap span must be at least 1".to_string()));
    }

    let config = load_config(args.config.as_deref())?;
    let text = fs::read_to_string(&args.file)?;
    let window = ReadingWindow::new(&text, config.paragraph_delimiter);
    let current_page = args.page.min(window.page_count());

    Ok((current_page, window.recap(current_page, args.span)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const BOOK: &str = "In a hole in the ground.\n---\nThere lived a hobbit.\n---\nNot a nasty hole.";

    fn args(dir: &Path, config: Option<&str>) -> RecapArgs {
        let file = dir.join("hobbit.txt");
        fs::write(&file, BOOK).unwrap();
        let config = config.map(|contents| {
            let path = dir.join("marginalia.toml");
            fs::write(&path, contents).unwrap();
            path
        });

        RecapArgs {
            file,
            page: 3,
            span: 1,
            config,
        }
    }

    #[test]
    fn test_recap_uses_configured_delimiter() {
        let dir = TempDir::new().unwrap();
        let args = args(dir.path(), Some("paragraph_delimiter = \"\\n---\\n\"\n"));

        let (current_page, recap) = build_recap(&args).unwrap();
        assert_eq!(current_page, 3);
        assert_eq!(recap, "Not a nasty hole.");
    }

    #[test]
    fn test_recap_defaults_to_blank_lines() {
        let dir = TempDir::new().unwrap();
        let (current_page, recap) = build_recap(&args(dir.path(), None)).unwrap();

        assert_eq!(current_page, 1);
        assert_eq!(recap, BOOK);
    }

    #[test]
    fn test_zero_span_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut args = args(dir.path(), None);
        args.span = 0;

        assert!(matches!(build_recap(&args), Err(CliError::InvalidInput(_))));
    }
}
