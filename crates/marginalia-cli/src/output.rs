//! Output formatting for the CLI.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::report::KnowledgeReport;
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a knowledge report.
    pub fn format_knowledge(&self, report: &KnowledgeReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_knowledge_table(report)),
        }
    }

    fn format_knowledge_table(&self, report: &KnowledgeReport) -> String {
        let heading = format!(
            "{} by {} (page {} of {})",
            report.title, report.author, report.current_page, report.page_count
        );

        let buckets = [
            ("Characters", &report.characters),
            ("Groups", &report.groups),
            ("Locations", &report.locations),
            ("Events", &report.events),
        ];

        if buckets.iter().all(|(_, entries)| entries.is_empty()) {
            return format!(
                "{}\n{}",
                self.colorize(&heading, "cyan"),
                self.colorize("Nothing known yet.", "yellow")
            );
        }

        let mut builder = Builder::default();
        builder.push_record(["Bucket", "Count", "Entities"]);
        for (name, entries) in buckets {
            builder.push_record([
                name.to_string(),
                entries.len().to_string(),
                entries.join(", "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.colorize(&heading, "cyan"), table)
    }

    /// Format a recap.
    pub fn format_recap(&self, current_page: usize, recap: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "current_page": current_page,
                "recap": recap,
            }))?),
            OutputFormat::Table => {
                if recap.is_empty() {
                    return Ok(self.colorize("Nothing to recap.", "yellow"));
                }
                let heading = format!("Recap up to page {}", current_page);
                Ok(format!("{}\n\n{}", self.colorize(&heading, "cyan"), recap))
            }
        }
    }

    /// Format page counts.
    pub fn format_pages(
        &self,
        page_count: usize,
        estimated: usize,
        words_per_page: usize,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "page_count": page_count,
                "estimated_page_count": estimated,
                "words_per_page": words_per_page,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Pages", "Estimated", "Words/page"]);
                builder.push_record([
                    page_count.to_string(),
                    estimated.to_string(),
                    words_per_page.to_string(),
                ]);
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
