//! Route records as exported by the web framework.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a route export.
///
/// Contains the path pattern, the (possibly combined) HTTP method string,
/// the handler action and the middleware stack attached to the route.
///
/// Deserializing goes through [`RouteRecord::from_value`], so serde input is
/// read as leniently as a loaded export.
///
/// # Examples
///
/// ```
/// use routemap::introspection::RouteRecord;
///
/// let record = RouteRecord::new("api/users", "GET|HEAD", "UserController@index", ["api"]);
/// assert_eq!(record.uri, "api/users");
/// assert_eq!(record.middleware, vec!["api"]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Value")]
pub struct RouteRecord {
    /// The path pattern without a leading slash (e.g. "api/users/{id}").
    pub uri: String,
    /// One or more HTTP verbs joined by `|` (e.g. "GET|HEAD").
    pub method: String,
    /// The handler the route dispatches to.
    pub action: String,
    /// Middleware tags in the order they run.
    pub middleware: Vec<String>,
}

impl RouteRecord {
    /// Creates a new RouteRecord with the given metadata.
    pub fn new<I, S>(
        uri: impl Into<String>,
        method: impl Into<String>,
        action: impl Into<String>,
        middleware: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            uri: uri.into(),
            method: method.into(),
            action: action.into(),
            middleware: middleware.into_iter().map(Into::into).collect(),
        }
    }

    /// Extracts a record from an arbitrary JSON value.
    ///
    /// Never fails: absent, `null` or mistyped fields fall back to empty
    /// values, non-string middleware entries are skipped and a bare string
    /// middleware is read as a single tag.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let middleware = match value.get("middleware") {
            Some(Value::Array(tags)) => tags
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::String(tag)) => vec![tag.clone()],
            _ => Vec::new(),
        };

        Self {
            uri: text("uri"),
            method: text("method"),
            action: text("action"),
            middleware,
        }
    }

    /// Returns true if the middleware stack contains exactly `tag`.
    pub fn has_middleware(&self, tag: &str) -> bool {
        self.middleware.iter().any(|m| m == tag)
    }
}

impl From<Value> for RouteRecord {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}
