//! Endpoint metadata derived from route records, and the registry that
//! loads those records from a route export.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::extract::{extract_resource, parse_method};
use crate::introspection::RouteRecord;
use crate::middleware::{extract_roles, is_auth_required};

/// An API endpoint that survived filtering.
///
/// Built once from a [`RouteRecord`] and never mutated afterwards. The same
/// value is stored under each HTTP method listed in `methods`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointInfo {
    pub uri: String,
    pub methods: Vec<String>,
    pub action: String,
    pub auth_required: bool,
    pub roles: Vec<String>,
    pub middleware: Vec<String>,
}

impl EndpointInfo {
    /// Derives endpoint metadata from a route record.
    pub fn from_record(record: &RouteRecord) -> Self {
        Self {
            uri: record.uri.clone(),
            methods: parse_method(&record.method),
            action: record.action.clone(),
            auth_required: is_auth_required(&record.middleware),
            roles: extract_roles(&record.middleware),
            middleware: record.middleware.clone(),
        }
    }

    /// The resource this endpoint is grouped under.
    pub fn resource(&self) -> String {
        extract_resource(&self.uri)
    }
}

/// Route records loaded from a route export.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: Vec<RouteRecord>,
}

impl RouteRegistry {
    /// Parses a route export.
    ///
    /// The document must be a JSON array. Individual elements are read
    /// leniently with [`RouteRecord::from_value`], so one odd record never
    /// rejects the whole export.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| Error::parse(format!("invalid JSON: {}", e)))?;

        let Value::Array(items) = value else {
            return Err(Error::parse("expected a JSON array of routes"));
        };

        let routes = items.iter().map(RouteRecord::from_value).collect();
        Ok(Self { routes })
    }

    /// Reads and parses the route export at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;

        let registry = Self::from_json_str(&content)
            .map_err(|e| Error::parse(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), routes = registry.len(), "loaded route export");
        Ok(registry)
    }

    /// Returns the loaded routes.
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
