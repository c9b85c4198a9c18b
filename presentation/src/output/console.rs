//! Console output formatter for aggregation results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use quorum_domain::{AggregatedResponse, OutputFormat};

const PREVIEW_CHARS: usize = 60;

/// Formats aggregation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format according to `format`
    pub fn render(response: &AggregatedResponse, format: OutputFormat) -> String {
        match format {
            OutputFormat::Summary => Self::format_summary(response),
            OutputFormat::Json => Self::format_json(response),
        }
    }

    /// Consensus, confidence, top responses and groups
    pub fn format_summary(response: &AggregatedResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Aggregated Response"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Confidence:".cyan().bold(),
            Self::confidence_label(response.confidence)
        ));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Best:".cyan().bold(),
            response.best_response.model_name,
            response.best_response.model_id.dimmed()
        ));

        output.push_str(&Self::section_header("Consensus"));
        output.push_str(&format!("\n{}\n", response.consensus));

        output.push_str(&Self::section_header("Top Responses"));
        for (rank, result) in response.top_responses.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} {}\n",
                rank + 1,
                result.model_name.yellow().bold(),
                Self::preview(result.text().unwrap_or_default()).dimmed()
            ));
        }

        output.push_str(&Self::section_header("Groups"));
        for (index, group) in response.groups.iter().enumerate() {
            let members: Vec<&str> = group
                .responses
                .iter()
                .map(|r| r.model_name.as_str())
                .collect();
            output.push_str(&format!(
                "  {} {} [{}]\n",
                format!("#{}", index + 1).yellow().bold(),
                format!("anchor: {}", group.representative.model_name).dimmed(),
                members.join(", ")
            ));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(response: &AggregatedResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    fn confidence_label(confidence: f64) -> String {
        let text = format!("{:.2}", confidence);
        if confidence >= 0.8 {
            text.green().bold().to_string()
        } else if confidence >= 0.6 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    /// First line of `text`, cut to a fixed number of characters
    pub fn preview(text: &str) -> String {
        let first_line = text.lines().next().unwrap_or_default();
        if first_line.chars().count() > PREVIEW_CHARS || text.lines().nth(1).is_some() {
            let cut: String = first_line.chars().take(PREVIEW_CHARS).collect();
            format!("{}…", cut)
        } else {
            first_line.to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_summary(&self, response: &AggregatedResponse) -> String {
        Self::format_summary(response)
    }

    fn format_json(&self, response: &AggregatedResponse) -> String {
        Self::format_json(response)
    }
}
