//! Implementation of the `routemap routes` command.

use std::path::PathBuf;

use colored::Colorize;
use routemap::{EndpointInfo, Report, organize};

use super::load_routes;
use crate::colors;

/// Configuration for the routes command.
pub struct RoutesConfig {
    pub input: PathBuf,
}

/// Execute the `routes` command.
pub fn execute(config: RoutesConfig) -> Result<(), String> {
    let registry = load_routes(&config.input)?;
    let report = organize(registry.routes());

    println!();
    if report.is_empty() {
        println!(
            "{} No API routes found in {}",
            "WARN".custom_color(colors::yellow()).bold(),
            config.input.display()
        );
        println!();
        return Ok(());
    }

    for line in render_lines(&report) {
        println!("{}", line);
    }

    println!("{}", "─".repeat(50).custom_color(colors::subtext()));
    println!(
        "{} {} endpoint(s) across {} resource(s)",
        "TOTAL".custom_color(colors::green()).bold(),
        report.total_endpoints(),
        report.resources().len()
    );
    println!();

    Ok(())
}

/// Build the colored listing, one entry per printed line.
fn render_lines(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();

    for (resource, groups) in report.resources() {
        lines.push(resource.custom_color(colors::mauve()).bold().to_string());
        for (method, endpoints) in groups {
            for endpoint in endpoints {
                lines.push(format!(
                    "  {} {}",
                    method_label(method),
                    describe(endpoint)
                ));
            }
        }
        lines.push(String::new());
    }

    lines
}

fn method_label(method: &str) -> String {
    format!("{:<7}", method)
        .custom_color(colors::for_method(method))
        .to_string()
}

fn describe(endpoint: &EndpointInfo) -> String {
    let mut line = format!(
        "{} {}",
        endpoint.uri.custom_color(colors::sky()),
        endpoint.action.custom_color(colors::subtext())
    );
    if endpoint.auth_required {
        line.push_str(&format!(" {}", "[auth]".custom_color(colors::yellow())));
    }
    if !endpoint.roles.is_empty() {
        line.push_str(&format!(
            " {}",
            format!("roles: {}", endpoint.roles.join(", ")).custom_color(colors::lavender())
        ));
    }
    line
}
