//! Implementation of the `routemap organize` command.

use std::path::PathBuf;

use colored::Colorize;
use routemap::{Report, organize, write_markdown};

use super::{DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_SUMMARY, load_routes};
use crate::colors;

/// Configuration for the organize command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: PathBuf,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            summary: PathBuf::from(DEFAULT_SUMMARY),
        }
    }
}

/// Execute the `organize` command.
pub fn execute(config: OrganizeConfig) -> Result<(), String> {
    tracing::debug!(?config, "organizing route export");
    run(&config).map(|_| ())
}

/// Read, organize and write both outputs, returning the report.
fn run(config: &OrganizeConfig) -> Result<Report, String> {
    println!();
    println!(
        "{} Reading routes from: {}",
        "INFO".custom_color(colors::blue()).bold(),
        config.input.display().to_string().cyan()
    );

    let registry = load_routes(&config.input)?;
    println!(
        "{} Found {} total routes",
        "INFO".custom_color(colors::blue()).bold(),
        registry.len()
    );
    if registry.is_empty() {
        println!(
            "{} The route export is empty; the report will list no endpoints",
            "WARN".custom_color(colors::yellow()).bold()
        );
    }

    let report = organize(registry.routes());
    for (resource, count) in report.resource_counts() {
        println!(
            "  {}: {} endpoint(s)",
            resource.custom_color(colors::lavender()),
            count
        );
    }

    println!();
    println!(
        "{} {}",
        "Total API endpoints:".bold(),
        report
            .total_endpoints()
            .to_string()
            .custom_color(colors::green())
            .bold()
    );
    println!();

    report.write_json(&config.output).map_err(|e| e.to_string())?;
    println!(
        "  {} Organized endpoints saved to: {}",
        "✓".custom_color(colors::green()),
        config.output.display().to_string().cyan()
    );

    write_markdown(&report, &config.summary).map_err(|e| e.to_string())?;
    println!(
        "  {} Summary saved to: {}",
        "✓".custom_color(colors::green()),
        config.summary.display().to_string().cyan()
    );
    println!();

    Ok(report)
}
