//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Marginalia - Who, where and what so far, without spoilers.
#[derive(Debug, Parser)]
#[command(name = "marginalia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show characters, groups, locations and events up to a page
    Knowledge(KnowledgeArgs),

    /// Show the last pages read up to a page
    Recap(RecapArgs),

    /// Show page counts for a document
    Pages(PagesArgs),
}

/// Arguments for the knowledge command.
#[derive(Debug, Parser)]
pub struct KnowledgeArgs {
    /// Plain-text document
    pub file: PathBuf,

    /// Author's full name
    #[arg(short, long, env = "MARGINALIA_AUTHOR")]
    pub author: String,

    /// Current page (defaults to the whole document)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Title shown in the report (defaults to the file name)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Gazetteer TOML file of known names
    #[arg(short, long)]
    pub gazetteer: Option<PathBuf>,

    /// Extractor configuration TOML file
    #[arg(short, long, env = "MARGINALIA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Recognize paragraphs on worker threads
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the recap command.
#[derive(Debug, Parser)]
pub struct RecapArgs {
    /// Plain-text document
    pub file: PathBuf,

    /// Current page
    #[arg(short, long)]
    pub page: usize,

    /// Number of pages to recap
    #[arg(short, long, default_value = "5")]
    pub span: usize,

    /// Extractor configuration TOML file
    #[arg(short, long, env = "MARGINALIA_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for the pages command.
#[derive(Debug, Parser)]
pub struct PagesArgs {
    /// Plain-text document
    pub file: PathBuf,

    /// Words per page for the estimate
    #[arg(short, long, default_value = "300")]
    pub words_per_page: usize,

    /// Extractor configuration TOML file
    #[arg(short, long, env = "MARGINALIA_CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_command() {
        let cli = Cli::parse_from([
            "marginalia",
            "knowledge",
            "book.txt",
            "--author",
            "J.R.R. Tolkien",
            "--page",
            "12",
            "--parallel",
        ]);
        match cli.command {
            Command::Knowledge(args) => {
                assert_eq!(args.author, "J.R.R. Tolkien");
                assert_eq!(args.page, Some(12));
                assert!(args.parallel);
            }
            _ => panic!("Expected Knowledge command"),
        }
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_recap_defaults() {
        let cli = Cli::parse_from(["marginalia", "-f", "json", "recap", "book.txt", "--page", "3"]);
        match cli.command {
            Command::Recap(args) => {
                assert_eq!(args.page, 3);
                assert_eq!(args.span, 5);
            }
            _ => panic!("Expected Recap command"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_pages_accepts_config() {
        let cli = Cli::parse_from(["marginalia", "pages", "book.txt", "-c", "marginalia.toml"]);
        match cli.command {
            Command::Pages(args) => {
                assert_eq!(args.config, Some(PathBuf::from("marginalia.toml")));
                assert_eq!(args.words_per_page, 300);
            }
            _ => panic!("Expected Pages command"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["marginalia", "pages", "book.txt", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
