//! Grouping endpoints by resource and HTTP method.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::{Exclusion, classify};
use crate::introspection::{EndpointInfo, RouteRecord};

/// Endpoints of one resource, keyed by HTTP method.
pub type MethodGroups = BTreeMap<String, Vec<EndpointInfo>>;

/// The organized view of a route export.
///
/// Serializes as `{ "total_endpoints": n, "resources": { resource: { method: [..] } } }`.
/// Both levels iterate in lexicographic order. `total_endpoints` counts an
/// endpoint once per method it is listed under.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    total_endpoints: usize,
    resources: BTreeMap<String, MethodGroups>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `endpoint` under its resource once for every method it lists.
    pub fn insert(&mut self, endpoint: EndpointInfo) {
        let groups = self.resources.entry(endpoint.resource()).or_default();
        for method in &endpoint.methods {
            groups
                .entry(method.clone())
                .or_default()
                .push(endpoint.clone());
            self.total_endpoints += 1;
        }
    }

    pub fn total_endpoints(&self) -> usize {
        self.total_endpoints
    }

    pub fn resources(&self) -> &BTreeMap<String, MethodGroups> {
        &self.resources
    }

    /// Endpoints filed under `resource` and `method`, if any.
    pub fn endpoints(&self, resource: &str, method: &str) -> Option<&[EndpointInfo]> {
        self.resources
            .get(resource)
            .and_then(|groups| groups.get(method))
            .map(Vec::as_slice)
    }

    /// Per-resource endpoint counts, in resource order.
    pub fn resource_counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.resources.iter().map(|(resource, groups)| {
            (
                resource.as_str(),
                groups.values().map(Vec::len).sum::<usize>(),
            )
        })
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Pretty-printed JSON document of the report.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::io(format!("failed to serialize report: {}", e)))
    }

    /// Parses a report previously written with [`Report::to_json_pretty`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::parse(format!("invalid report: {}", e)))
    }

    /// Writes the JSON document to `path`, replacing any existing file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        fs::write(path, json).map_err(|e| Error::from_write(path, e))
    }
}

/// Filters `routes` down to API endpoints and groups them into a [`Report`].
pub fn organize<'a, I>(routes: I) -> Report
where
    I: IntoIterator<Item = &'a RouteRecord>,
{
    let mut report = Report::new();
    let mut excluded: BTreeMap<Exclusion, usize> = BTreeMap::new();

    for route in routes {
        if let Some(reason) = classify(route) {
            tracing::trace!(uri = %route.uri, %reason, "skipping route");
            *excluded.entry(reason).or_default() += 1;
            continue;
        }
        report.insert(EndpointInfo::from_record(route));
    }

    for (reason, count) in &excluded {
        tracing::debug!(%reason, count, "routes excluded");
    }
    tracing::debug!(
        resources = report.resources.len(),
        total_endpoints = report.total_endpoints,
        "organized routes"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_route(uri: &str, method: &str, action: &str) -> RouteRecord {
        RouteRecord::new(uri, method, action, ["api", "auth:sanctum"])
    }

    #[test]
    fn test_multi_method_endpoint_listed_under_each_method() {
        let routes = vec![api_route("api/users", "GET|POST", "UserController@handle")];
        let report = organize(&routes);

        let get = report.endpoints("users", "GET").unwrap();
        let post = report.endpoints("users", "POST").unwrap();
        assert_eq!(get.len(), 1);
        assert_eq!(post.len(), 1);
        assert_eq!(get[0], post[0]);
        assert_eq!(get[0].methods, vec!["GET", "POST"]);
        assert_eq!(report.total_endpoints(), 2);
    }

    #[test]
    fn test_excluded_routes_are_dropped() {
        let routes = vec![
            RouteRecord::new("/", "GET|HEAD", "Closure", ["web"]),
            RouteRecord::new("docs/setup", "GET", "DocsController", ["api"]),
            RouteRecord::new("sanctum/csrf-cookie", "GET", "CsrfCookieController", ["web"]),
            RouteRecord::new("api/users", "GET", "UserController@index", ["web"]),
            api_route("api/health", "GET|HEAD", "Closure"),
        ];
        let report = organize(&routes);

        assert_eq!(report.resources().len(), 1);
        assert!(report.resources().contains_key("health"));
        assert_eq!(report.total_endpoints(), 2);
    }

    #[test]
    fn test_endpoints_keep_insertion_order() {
        let routes = vec![
            api_route("api/courses", "GET", "CourseController@index"),
            api_route("api/courses/{id}", "GET", "CourseController@show"),
            api_route("api/courses/{id}/modules", "GET", "CourseModuleController@index"),
        ];
        let report = organize(&routes);

        let actions: Vec<_> = report
            .endpoints("courses", "GET")
            .unwrap()
            .iter()
            .map(|e| e.action.as_str())
            .collect();
        assert_eq!(
            actions,
            vec![
                "CourseController@index",
                "CourseController@show",
                "CourseModuleController@index"
            ]
        );
    }

    #[test]
    fn test_total_matches_group_lengths() {
        let routes = vec![
            api_route("api/users", "GET|HEAD", "a"),
            api_route("api/users/{id}", "PUT|PATCH", "b"),
            api_route("api/users/{id}", "DELETE", "c"),
            api_route("api/grades", "GET|HEAD", "d"),
            api_route("api/", "GET", "e"),
        ];
        let report = organize(&routes);

        let summed: usize = report
            .resources()
            .values()
            .flat_map(|groups| groups.values())
            .map(Vec::len)
            .sum();
        assert_eq!(report.total_endpoints(), summed);
        assert_eq!(report.total_endpoints(), 8);
        assert!(report.endpoints("root", "GET").is_some());
    }

    #[test]
    fn test_resource_counts_in_order() {
        let routes = vec![
            api_route("api/users", "GET|HEAD", "a"),
            api_route("api/announcements", "POST", "b"),
        ];
        let report = organize(&routes);

        let counts: Vec<_> = report.resource_counts().collect();
        assert_eq!(counts, vec![("announcements", 1), ("users", 2)]);
    }

    #[test]
    fn test_empty_input() {
        let routes: Vec<RouteRecord> = Vec::new();
        let report = organize(&routes);
        assert!(report.is_empty());
        assert_eq!(report.total_endpoints(), 0);
        assert_eq!(
            report.to_json_pretty().unwrap(),
            "{\n  \"total_endpoints\": 0,\n  \"resources\": {}\n}"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let routes = vec![
            RouteRecord::new(
                "api/users",
                "GET|POST",
                "UserController@handle",
                ["api", "RoleMiddleware:admin,faculty", "Authenticate:sanctum"],
            ),
            api_route("api/grades/{id}", "DELETE", "GradeController@destroy"),
        ];
        let report = organize(&routes);

        let json = report.to_json_pretty().unwrap();
        let parsed = Report::from_json_str(&json).unwrap();
        assert_eq!(parsed, report);
        assert_eq!(parsed.total_endpoints(), 3);
    }

    #[test]
    fn test_json_layout() {
        let routes = vec![api_route("api/health", "GET", "Closure")];
        let value: serde_json::Value =
            serde_json::from_str(&organize(&routes).to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["total_endpoints"], 1);
        let endpoint = &value["resources"]["health"]["GET"][0];
        assert_eq!(endpoint["uri"], "api/health");
        assert_eq!(endpoint["action"], "Closure");
        assert_eq!(endpoint["auth_required"], false);
    }
}
