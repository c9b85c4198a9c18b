//! CLI entrypoint for quorum-aggregate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use quorum_application::{AggregateResponsesUseCase, AggregationLogger, NoAggregationLogger};
use quorum_domain::{ConfigIssue, OutputFormat, Severity};
use quorum_infrastructure::{
    BatchReader, ConfigLoader, FileConfig, JsonlAggregationLogger, StaticModelRegistry,
};
use quorum_presentation::{Cli, ConsoleFormatter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout carries the result, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("Failed to load configuration: {}", e),
        }
    };

    report_config_issues(&config.validate())?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let registry = StaticModelRegistry::from_config(&config.registry);
    let (policy, _) = config.aggregation.to_policy();
    let logger = audit_logger(&cli, &config);

    let use_case = AggregateResponsesUseCase::new(registry)
        .with_policy(policy)
        .with_logger(logger);

    info!("Starting quorum-aggregate");
    let batch = BatchReader::read(cli.input.as_ref())?;
    let response = use_case.execute_json(&batch)?;

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    println!("{}", ConsoleFormatter::render(&response, format));

    Ok(())
}

/// Log warnings and abort on configuration errors.
fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        warn!("{}", issue.message);
    }

    let errors: Vec<&str> = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .map(|i| i.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

fn audit_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn AggregationLogger> {
    let path = cli
        .audit_log
        .clone()
        .or_else(|| config.logging.audit_log_path());

    match path.and_then(JsonlAggregationLogger::new) {
        Some(logger) => {
            info!("Writing audit log to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoAggregationLogger),
    }
}
