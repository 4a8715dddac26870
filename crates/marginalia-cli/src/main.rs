//! Marginalia CLI - contextual reading summaries from plain-text books.

use clap::Parser;
use marginalia_cli::commands;
use marginalia_cli::{Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Log to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> marginalia_cli::Result<()> {
    let formatter = Formatter::new(cli.format, !cli.no_color);

    match cli.command {
        Command::Knowledge(args) => commands::execute_knowledge(args, &formatter).await?,
        Command::Recap(args) => commands::execute_recap(args, &formatter)?,
        Command::Pages(args) => commands::execute_pages(args, &formatter)?,
    }

    Ok(())
}
