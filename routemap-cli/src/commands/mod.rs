//! CLI command implementations.

pub mod organize;
pub mod routes;

/// Route export read when no input is configured.
pub const DEFAULT_INPUT: &str = "api-routes.json";

/// JSON report written when no output is configured.
pub const DEFAULT_OUTPUT: &str = "organized-endpoints.json";

/// Markdown summary written when no summary path is configured.
pub const DEFAULT_SUMMARY: &str = "organized-endpoints-summary.md";

/// Load the route export at `path`, turning library errors into CLI messages.
pub fn load_routes(path: &std::path::Path) -> Result<routemap::RouteRegistry, String> {
    routemap::RouteRegistry::load(path).map_err(|e| match e.kind {
        routemap::ErrorKind::NotFound => format!(
            "{}. Export your routes first (e.g. `php artisan route:list --json > {}`)",
            e, DEFAULT_INPUT
        ),
        _ => e.to_string(),
    })
}
