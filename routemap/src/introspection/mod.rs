//! Route export model.
//!
//! [`RouteRecord`] is what the framework exports, [`EndpointInfo`] is what
//! the report stores, and [`RouteRegistry`] loads records from disk.

mod endpoint;
mod route_info;

pub use endpoint::{EndpointInfo, RouteRegistry};
pub use route_info::RouteRecord;
