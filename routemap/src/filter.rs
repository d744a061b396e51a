//! Deciding which exported routes count as API endpoints.

use std::fmt;

use crate::extract::API_PREFIX;
use crate::introspection::RouteRecord;

/// Middleware tag every API route group carries.
pub const API_MIDDLEWARE: &str = "api";

const DOCS_PREFIX: &str = "docs/";
const ROOT_PATH: &str = "/";

/// Why a route was left out of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Exclusion {
    /// The bare `/` route.
    RootPath,
    /// Documentation routes under `docs/`.
    Docs,
    /// The URI does not start with `api/`.
    NotApi,
    /// The route is not in the `api` middleware group.
    MissingApiMiddleware,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Exclusion::RootPath => "root path",
            Exclusion::NotApi => "not under api/",
            Exclusion::Docs => "docs route",
            Exclusion::MissingApiMiddleware => "no api middleware",
        };
        f.write_str(reason)
    }
}

/// Returns the first rule a route fails, or `None` if it is included.
pub fn classify(route: &RouteRecord) -> Option<Exclusion> {
    let uri = route.uri.as_str();

    if uri == ROOT_PATH {
        return Some(Exclusion::RootPath);
    }
    if uri.starts_with(DOCS_PREFIX) {
        return Some(Exclusion::Docs);
    }
    if !uri.starts_with(API_PREFIX) {
        return Some(Exclusion::NotApi);
    }
    if !route.has_middleware(API_MIDDLEWARE) {
        return Some(Exclusion::MissingApiMiddleware);
    }
    None
}

pub fn is_included(route: &RouteRecord) -> bool {
    classify(route).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(uri: &str, middleware: &[&str]) -> RouteRecord {
        RouteRecord::new(uri, "GET|HEAD", "Closure", middleware.iter().copied())
    }

    #[test]
    fn test_api_route_with_api_middleware_is_included() {
        assert!(is_included(&route("api/users", &["api", "auth:sanctum"])));
        assert_eq!(classify(&route("api/users", &["api"])), None);
    }

    #[test]
    fn test_root_path_excluded() {
        assert_eq!(
            classify(&route("/", &["api"])),
            Some(Exclusion::RootPath)
        );
    }

    #[test]
    fn test_docs_excluded_regardless_of_fields() {
        assert!(!is_included(&route("docs/setup", &["api"])));
        assert!(!is_included(&route("docs/setup", &[])));
        assert_eq!(classify(&route("docs/api", &["api"])), Some(Exclusion::Docs));
    }

    #[test]
    fn test_non_api_uri_excluded() {
        assert_eq!(
            classify(&route("login", &["api"])),
            Some(Exclusion::NotApi)
        );
        assert_eq!(
            classify(&route("/api/users", &["api"])),
            Some(Exclusion::NotApi)
        );
    }

    #[test]
    fn test_missing_api_middleware_excluded() {
        assert_eq!(
            classify(&route("api/users", &["web"])),
            Some(Exclusion::MissingApiMiddleware)
        );
        assert_eq!(
            classify(&route("api/users", &["api:60,1"])),
            Some(Exclusion::MissingApiMiddleware)
        );
    }

    #[test]
    fn test_exclusion_display() {
        assert_eq!(Exclusion::Docs.to_string(), "docs route");
        assert_eq!(
            Exclusion::MissingApiMiddleware.to_string(),
            "no api middleware"
        );
    }
}
