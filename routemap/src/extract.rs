//! Resource and method extraction from route fields.

/// Prefix every API route carries in the export.
pub const API_PREFIX: &str = "api/";

/// Resource name used when a URI has no first segment.
pub const ROOT_RESOURCE: &str = "root";

/// Returns the resource a URI belongs to.
///
/// Strips a leading `api/`, then takes the first `/`-separated segment.
/// Falls back to `root` when that segment is empty.
///
/// ```
/// use routemap::extract::extract_resource;
///
/// assert_eq!(extract_resource("api/users/{id}"), "users");
/// assert_eq!(extract_resource("api/"), "root");
/// ```
pub fn extract_resource(uri: &str) -> String {
    let path = uri.strip_prefix(API_PREFIX).unwrap_or(uri);

    match path.split('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => ROOT_RESOURCE.to_string(),
    }
}

/// Splits a combined method string such as `GET|HEAD` into its verbs.
///
/// A string without `|` is returned as a single element, unchanged.
pub fn parse_method(method: &str) -> Vec<String> {
    if method.contains('|') {
        method.split('|').map(str::to_string).collect()
    } else {
        vec![method.to_string()]
    }
}
